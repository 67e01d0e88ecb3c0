//! Curve-Composer Engine Library.
//! Interaktiver Koordinaten-/Kurven-Kern: Screen↔Ebene-Transformation,
//! Kurven-Auswertung, Handle-Inverse und Gesten-Zustandsmaschine —
//! exportiert als Library für Host-UI, Export-Pipeline und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_export_scene, build_render_scene, AppCommand, AppController, AppIntent, AppState,
    Gesture, SelectionState, ViewState,
};
pub use core::{
    evaluate, sample_polyline, Curve, CurveKind, CurveParams, CurveSet, Handle, HandleKind,
    PlaneBounds, Viewport,
};
pub use shared::{CurvePlot, EngineOptions, ExportSettings, HandleMarker, RenderScene};
