/// Hover-Zustand für die Handle-Anzeige.
///
/// Die Handle-Positionen selbst werden nie gespeichert — hier steht nur,
/// welche Kurve ihre Handles zeigen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Kurve unter dem Zeiger (deren Handle-Satz exponiert wird)
    pub hovered_curve: Option<u64>,
}

impl SelectionState {
    /// Erstellt den leeren Hover-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
