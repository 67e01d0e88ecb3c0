//! Core-Domänentypen: Kurven, Kurvenmenge, Evaluator, Viewport, Handles.
//!
//! Alles in diesem Layer ist zustandsarm und frei von Seiteneffekten —
//! Evaluator und Handle-Modell dürfen jederzeit parallel aufgerufen werden
//! (Tests, Export-Vorberechnung); mutiert wird ausschließlich über den
//! Application-Layer.

pub mod curve;
pub mod curve_set;
pub mod eval;
pub mod handles;
pub mod viewport;

pub use curve::{Curve, CurveKind, CurveParams, AMPLITUDE_FLOOR, SIGMA_FLOOR};
pub use curve_set::{CurveSet, CURVE_PALETTE, MAX_CURVES};
pub use eval::{evaluate, sample_polyline, DEFAULT_RESOLUTION, RENDER_Y_CLAMP, SINGULARITY_Y};
pub use handles::{
    apply_drag, handles_for, handles_for_params, hit_test, Handle, HandleHit, HandleKind,
    EXPONENT_HANDLE_OFFSET,
};
pub use viewport::{GridLines, PlaneBounds, Viewport, BASE_MATH_WIDTH, ZOOM_MAX, ZOOM_MIN};
