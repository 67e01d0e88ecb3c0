//! Handler für Kurven-Mutationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveKind, CurveParams};

/// Legt eine neue Kurve an.
pub fn add(state: &mut AppState, kind: CurveKind) {
    use_cases::curves::add_curve(state, kind);
}

/// Löscht eine Kurve.
pub fn delete(state: &mut AppState, curve_id: u64) {
    use_cases::curves::delete_curve(state, curve_id);
}

/// Entfernt alle Kurven.
pub fn clear(state: &mut AppState) {
    use_cases::curves::clear_curves(state);
}

/// Verschiebt eine Kurve in der Z-Order.
pub fn reorder(state: &mut AppState, from: usize, to: usize) {
    use_cases::curves::reorder_curve(state, from, to);
}

/// Benennt eine Kurve um.
pub fn rename(state: &mut AppState, curve_id: u64, name: String) {
    use_cases::curves::rename_curve(state, curve_id, name);
}

/// Setzt die Farbe einer Kurve.
pub fn recolor(state: &mut AppState, curve_id: u64, color: [f32; 4]) {
    use_cases::curves::recolor_curve(state, curve_id, color);
}

/// Setzt die Sichtbarkeit einer Kurve.
pub fn set_visibility(state: &mut AppState, curve_id: u64, visible: bool) {
    use_cases::curves::set_visibility(state, curve_id, visible);
}

/// Setzt den Sperr-Zustand einer Kurve.
pub fn set_locked(state: &mut AppState, curve_id: u64, locked: bool) {
    use_cases::curves::set_locked(state, curve_id, locked);
}

/// Setzt Parameter direkt (numerisches Panel).
pub fn set_params(state: &mut AppState, curve_id: u64, params: CurveParams) {
    use_cases::curves::set_params(state, curve_id, params);
}
