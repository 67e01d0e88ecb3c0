use crate::core::{CurveKind, CurveParams, HandleKind};
use crate::shared::EngineOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Pan-Geste beginnen (Zeiger auf leerem Hintergrund gedrückt)
    BeginPan,
    /// Handle-Drag beginnen (Zeiger auf einem Handle gedrückt)
    BeginHandleDrag { curve_id: u64, handle: HandleKind },
    /// Pinch-Zoom beginnen (zwei Finger, initialer Abstand)
    BeginPinch { span: f64 },
    /// View um ein Screen-Pixel-Delta verschieben
    PanCamera { delta_screen: DVec2 },
    /// Aktiven Handle auf die Ebenen-Position ziehen
    DragHandleTo { plane_pos: DVec2 },
    /// Pinch-Frame: neuer Finger-Abstand und Mittelpunkt
    PinchZoom { span: f64, center_screen: DVec2 },
    /// Aktive Geste beenden (Zeiger/Touch losgelassen oder abgebrochen)
    EndGesture,
    /// Hover-Kurve für die Handle-Anzeige setzen
    SetHoveredCurve { curve_id: Option<u64> },

    /// Zoomen, optional auf einen Screen-Fokuspunkt
    ZoomCamera {
        factor: f64,
        focus_screen: Option<DVec2>,
    },
    /// View auf Standard zurücksetzen
    ResetView,
    /// Oberflächen-Größe setzen
    SetSurfaceSize { size: [f64; 2] },

    /// Neue Kurve anlegen
    AddCurve { kind: CurveKind },
    /// Kurve löschen
    DeleteCurve { curve_id: u64 },
    /// Alle Kurven entfernen
    ClearCurves,
    /// Kurve in der Z-Order verschieben
    ReorderCurve { from: usize, to: usize },
    /// Kurve umbenennen
    RenameCurve { curve_id: u64, name: String },
    /// Kurven-Farbe setzen
    RecolorCurve { curve_id: u64, color: [f32; 4] },
    /// Sichtbarkeit setzen
    SetCurveVisibility { curve_id: u64, visible: bool },
    /// Sperr-Zustand setzen
    SetCurveLocked { curve_id: u64, locked: bool },
    /// Parameter direkt setzen (Kurven-Art muss unverändert bleiben)
    SetCurveParams { curve_id: u64, params: CurveParams },

    /// Optionen anwenden
    ApplyOptions { options: EngineOptions },
}
