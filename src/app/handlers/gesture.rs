//! Handler für den Gesten-Lebenszyklus (Pan, Handle-Drag, Pinch, Hover).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::HandleKind;
use glam::DVec2;

/// Beginnt eine Pan-Geste.
pub fn begin_pan(state: &mut AppState) {
    use_cases::drag::begin_pan(state);
}

/// Beginnt einen Handle-Drag auf der angegebenen Kurve.
pub fn begin_handle_drag(state: &mut AppState, curve_id: u64, handle: HandleKind) {
    use_cases::drag::begin_handle_drag(state, curve_id, handle);
}

/// Beginnt einen Zwei-Finger-Pinch mit initialem Finger-Abstand.
pub fn begin_pinch(state: &mut AppState, span: f64) {
    use_cases::drag::begin_pinch(state, span);
}

/// Zieht den aktiven Handle auf die Ebenen-Position.
pub fn drag_handle_to(state: &mut AppState, plane_pos: DVec2) {
    use_cases::drag::drag_handle_to(state, plane_pos);
}

/// Verarbeitet einen Pinch-Frame (neuer Abstand + Mittelpunkt).
pub fn pinch_zoom(state: &mut AppState, span: f64, center_screen: DVec2) {
    use_cases::drag::pinch_zoom(state, span, center_screen);
}

/// Beendet die aktive Geste bedingungslos.
pub fn end_gesture(state: &mut AppState) {
    use_cases::drag::end_gesture(state);
}

/// Setzt die Hover-Kurve für die Handle-Anzeige.
pub fn set_hovered(state: &mut AppState, curve_id: Option<u64>) {
    use_cases::drag::set_hovered(state, curve_id);
}
