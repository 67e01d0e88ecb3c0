use crate::core::{CurveKind, CurveParams};
use crate::shared::EngineOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärer Zeiger gedrückt (Maus oder Single-Touch)
    PointerPressed { screen_pos: DVec2 },
    /// Zeiger bewegt; Delta in Screen-Pixeln seit dem letzten Event
    PointerMoved {
        screen_pos: DVec2,
        screen_delta: DVec2,
    },
    /// Zeiger losgelassen
    PointerReleased,
    /// Zeiger-Geste abgebrochen (z.B. Fenster-Fokus verloren)
    PointerCancelled,
    /// Touch-Sequenz gestartet (Multi-Point für Pinch-Erkennung)
    TouchStarted { points: Vec<DVec2> },
    /// Touch-Punkte bewegt
    TouchMoved { points: Vec<DVec2> },
    /// Touch-Sequenz beendet oder abgebrochen
    TouchEnded,
    /// Mausrad gescrollt (Zoom auf die Zeigerposition)
    WheelScrolled { screen_pos: DVec2, scroll_delta: f64 },
    /// Render-Oberfläche hat ihre Größe geändert
    SurfaceResized { size: [f64; 2] },
    /// Kurve unter dem Zeiger hat gewechselt (Hover vom Host gemeldet)
    CurveHovered { curve_id: Option<u64> },

    /// Neue Kurve der gewählten Art anlegen
    AddCurveRequested { kind: CurveKind },
    /// Kurve löschen
    DeleteCurveRequested { curve_id: u64 },
    /// Alle Kurven entfernen
    ClearCurvesRequested,
    /// Kurve in der Z-Order verschieben
    ReorderCurveRequested { from: usize, to: usize },
    /// Kurve umbenennen
    RenameCurveRequested { curve_id: u64, name: String },
    /// Kurven-Farbe ändern
    RecolorCurveRequested { curve_id: u64, color: [f32; 4] },
    /// Sichtbarkeit einer Kurve umschalten
    SetCurveVisibilityRequested { curve_id: u64, visible: bool },
    /// Sperr-Zustand einer Kurve umschalten
    SetCurveLockedRequested { curve_id: u64, locked: bool },
    /// Parameter direkt setzen (numerisches Panel; auch für gesperrte Kurven)
    EditCurveParamsRequested { curve_id: u64, params: CurveParams },

    /// View auf Standard zurücksetzen (Pan 0/0, Zoom 1)
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EngineOptions },
}
