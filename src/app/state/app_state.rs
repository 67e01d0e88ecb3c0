use crate::app::CommandLog;
use crate::core::CurveSet;
use crate::shared::EngineOptions;

use super::{Gesture, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Kurven der Komposition in Z-Order
    pub curves: CurveSet,
    /// View-State (Viewport + Oberflächen-Größe)
    pub view: ViewState,
    /// Hover-State für die Handle-Anzeige
    pub selection: SelectionState,
    /// Aktuelle Geste (Idle, Pan, Handle-Drag, Pinch)
    pub gesture: Gesture,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Pick-Radius, Zoom-Schritte, Auflösung)
    pub options: EngineOptions,
}

impl AppState {
    /// Erstellt den Start-Zustand mit der Standard-Normalverteilung.
    pub fn new() -> Self {
        Self {
            curves: CurveSet::with_standard_normal(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            gesture: Gesture::Idle,
            command_log: CommandLog::new(),
            options: EngineOptions::default(),
        }
    }

    /// Erstellt einen leeren Zustand ohne Kurven (Tests, Import).
    pub fn empty() -> Self {
        Self {
            curves: CurveSet::new(),
            ..Self::new()
        }
    }

    /// Gibt die Anzahl der Kurven zurück (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.curves.curve_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
