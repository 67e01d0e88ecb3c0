//! Use-Case-Funktionen für die View-Steuerung (Pan/Zoom).

use crate::app::AppState;
use glam::DVec2;

/// Setzt den Viewport auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.viewport.reset();
}

/// Verschiebt den View um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: DVec2) {
    let surface = state.view.surface_size;
    state.view.viewport.pan_by_screen_delta(delta_screen, surface);
}

/// Zoomt auf einen optionalen Screen-Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_screen` angegeben ist, bleibt der Ebenen-Punkt unter
/// dem Zeiger nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<DVec2>) {
    let surface = state.view.surface_size;
    match focus_screen {
        Some(screen_point) => state.view.viewport.zoom_at(screen_point, factor, surface),
        None => state.view.viewport.zoom_by(factor),
    }
}
