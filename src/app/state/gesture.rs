use crate::core::HandleKind;

/// Aktuelle Geste als einzelner Zustandswert.
///
/// Genau eine Geste zur Zeit — unzulässige Kombinationen (gleichzeitig
/// pannen und einen Handle ziehen) sind strukturell nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Keine aktive Geste
    #[default]
    Idle,
    /// View wird per Drag verschoben
    Panning,
    /// Ein Handle wird gezogen; identifiziert Kurve und Kontrollpunkt
    DraggingHandle {
        /// Kurve, deren Handle gezogen wird
        curve_id: u64,
        /// Gezogener Kontrollpunkt
        handle: HandleKind,
    },
    /// Zwei-Finger-Zoom; merkt sich den Finger-Abstand des letzten Frames
    PinchZooming {
        /// Finger-Abstand (Screen-Pixel) beim letzten Frame
        last_span: f64,
    },
}

impl Gesture {
    /// Gibt zurück, ob keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Aktiver Handle-Drag als `(curve_id, handle)`, falls vorhanden.
    pub fn dragging_handle(&self) -> Option<(u64, HandleKind)> {
        match *self {
            Self::DraggingHandle { curve_id, handle } => Some((curve_id, handle)),
            _ => None,
        }
    }

    /// Mausrad-Zoom ist während eines aktiven Handle-Drags gesperrt.
    pub fn blocks_wheel_zoom(&self) -> bool {
        matches!(self, Self::DraggingHandle { .. })
    }
}
