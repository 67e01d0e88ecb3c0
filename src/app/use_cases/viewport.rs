//! Use-Case-Funktionen für Viewport-Zustand und Optionen.

use crate::app::AppState;
use crate::shared::EngineOptions;

/// Aktualisiert die gespeicherte Oberflächen-Größe.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    state.view.surface_size = size;
}

/// Wendet geänderte Laufzeit-Optionen an.
pub fn apply_options(state: &mut AppState, options: EngineOptions) {
    state.options = options;
}
