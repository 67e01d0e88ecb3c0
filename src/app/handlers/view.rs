//! Handler für Kamera, Viewport und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EngineOptions;
use glam::DVec2;

/// Verschiebt den View um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: DVec2) {
    use_cases::camera::pan(state, delta_screen);
}

/// Zoomt mit optionalem Fokuspunkt in Screen-Koordinaten.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<DVec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

/// Setzt den View auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Aktualisiert die Oberflächen-Größe im State.
pub fn set_surface_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Wendet geänderte Laufzeit-Optionen an.
pub fn apply_options(state: &mut AppState, options: EngineOptions) {
    use_cases::viewport::apply_options(state, options);
}
