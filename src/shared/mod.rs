//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem externen Renderer bzw. der
//! Export-Pipeline geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EngineOptions;
pub use options::{HANDLE_PICK_RADIUS_PX, SAMPLE_RESOLUTION};
pub use render_scene::{CurvePlot, ExportSettings, HandleMarker, RenderScene};
