use crate::core::Viewport;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Viewport (Pan/Zoom) der Ansicht
    pub viewport: Viewport,
    /// Aktuelle Oberflächen-Größe in Pixeln [Breite, Höhe].
    /// Externer Input der Render-Oberfläche, nur der Aspekt zählt.
    pub surface_size: [f64; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
            surface_size: [1000.0, 600.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
