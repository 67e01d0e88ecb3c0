//! Use-Case-Funktionen für Kurven-Mutationen.

use crate::app::{AppState, Gesture};
use crate::core::{CurveKind, CurveParams, MAX_CURVES};

/// Legt eine neue Kurve der gewählten Art nahe dem View-Zentrum an.
/// Gibt die neue ID zurück; `None` wenn das Kurven-Limit erreicht ist.
pub fn add_curve(state: &mut AppState, kind: CurveKind) -> Option<u64> {
    let pan_offset = state.view.viewport.pan_offset;
    match state.curves.add_curve(kind, pan_offset) {
        Some(id) => {
            log::info!("Kurve {id} angelegt ({kind:?})");
            Some(id)
        }
        None => {
            log::warn!("Kurven-Limit erreicht ({MAX_CURVES}), keine Kurve angelegt");
            None
        }
    }
}

/// Löscht eine Kurve. Ein Drag auf dieser Kurve und der Hover-Zustand
/// werden mit entfernt.
pub fn delete_curve(state: &mut AppState, curve_id: u64) {
    if state.curves.remove_curve(curve_id).is_none() {
        log::warn!("Löschen: Kurve {curve_id} existiert nicht");
        return;
    }
    release_if_referenced(state, curve_id);
    log::info!("Kurve {curve_id} gelöscht");
}

/// Entfernt alle Kurven und beendet jede laufende Handle-Interaktion.
pub fn clear_curves(state: &mut AppState) {
    state.curves.clear();
    state.selection.hovered_curve = None;
    if state.gesture.dragging_handle().is_some() {
        state.gesture = Gesture::Idle;
    }
}

/// Verschiebt eine Kurve in der Z-Order (reine Permutation).
pub fn reorder_curve(state: &mut AppState, from: usize, to: usize) {
    if !state.curves.reorder(from, to) {
        log::warn!("Reorder: ungültige Indizes {from} → {to}");
    }
}

/// Benennt eine Kurve um.
pub fn rename_curve(state: &mut AppState, curve_id: u64, name: String) {
    if let Some(curve) = state.curves.get_mut(curve_id) {
        curve.name = name;
    }
}

/// Setzt die Farbe einer Kurve.
pub fn recolor_curve(state: &mut AppState, curve_id: u64, color: [f32; 4]) {
    if let Some(curve) = state.curves.get_mut(curve_id) {
        curve.color = color;
    }
}

/// Setzt die Sichtbarkeit. Eine ausgeblendete Kurve verliert ihre
/// Handle-Interaktion sofort.
pub fn set_visibility(state: &mut AppState, curve_id: u64, visible: bool) {
    let Some(curve) = state.curves.get_mut(curve_id) else {
        return;
    };
    curve.visible = visible;
    if !visible {
        release_if_referenced(state, curve_id);
    }
}

/// Setzt den Sperr-Zustand. Eine gesperrte Kurve verliert ihre
/// Handle-Interaktion sofort; direkte Parameter-Edits bleiben erlaubt.
pub fn set_locked(state: &mut AppState, curve_id: u64, locked: bool) {
    let Some(curve) = state.curves.get_mut(curve_id) else {
        return;
    };
    curve.locked = locked;
    if locked {
        release_if_referenced(state, curve_id);
    }
}

/// Setzt Parameter direkt (numerisches Panel, auch für gesperrte Kurven).
/// Die Kurven-Art ist unveränderlich: ein Parametersatz anderer Art ist
/// ein geloggtes No-op.
pub fn set_params(state: &mut AppState, curve_id: u64, params: CurveParams) {
    let Some(curve) = state.curves.get_mut(curve_id) else {
        log::warn!("Parameter-Edit: Kurve {curve_id} existiert nicht");
        return;
    };
    if params.kind() != curve.kind() {
        log::warn!(
            "Parameter-Edit: Art-Wechsel {:?} → {:?} verworfen",
            curve.kind(),
            params.kind()
        );
        return;
    }
    curve.params = params;
    curve.params.sanitize();
}

/// Räumt Drag- und Hover-Zustand auf, wenn sie auf die Kurve zeigen.
fn release_if_referenced(state: &mut AppState, curve_id: u64) {
    if state.selection.hovered_curve == Some(curve_id) {
        state.selection.hovered_curve = None;
    }
    if let Some((dragged_id, _)) = state.gesture.dragging_handle() {
        if dragged_id == curve_id {
            state.gesture = Gesture::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandleKind;

    #[test]
    fn add_curve_uses_pan_offset_for_defaults() {
        let mut state = AppState::empty();
        state.view.viewport.pan_offset = glam::DVec2::new(4.0, 2.0);

        let id = add_curve(&mut state, CurveKind::Quadratic).expect("Kurve erwartet");

        match state.curves.get(id).unwrap().params {
            CurveParams::Quadratic { h, k, .. } => {
                assert_eq!(h, 4.0);
                assert_eq!(k, 2.0);
            }
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }

    #[test]
    fn add_curve_stops_at_limit() {
        let mut state = AppState::empty();
        for _ in 0..MAX_CURVES {
            assert!(add_curve(&mut state, CurveKind::Linear).is_some());
        }
        assert!(add_curve(&mut state, CurveKind::Linear).is_none());
    }

    #[test]
    fn delete_curve_clears_drag_and_hover() {
        let mut state = AppState::new();
        let id = state.curves.iter().next().unwrap().id;
        state.selection.hovered_curve = Some(id);
        state.gesture = Gesture::DraggingHandle {
            curve_id: id,
            handle: HandleKind::MeanAmplitude,
        };

        delete_curve(&mut state, id);

        assert!(state.curves.is_empty());
        assert_eq!(state.selection.hovered_curve, None);
        assert_eq!(state.gesture, Gesture::Idle);
    }

    #[test]
    fn hiding_dragged_curve_ends_the_drag() {
        let mut state = AppState::new();
        let id = state.curves.iter().next().unwrap().id;
        state.gesture = Gesture::DraggingHandle {
            curve_id: id,
            handle: HandleKind::Sigma,
        };

        set_visibility(&mut state, id, false);

        assert_eq!(state.gesture, Gesture::Idle);
        assert!(!state.curves.get(id).unwrap().visible);
    }

    #[test]
    fn set_params_rejects_kind_change() {
        let mut state = AppState::new();
        let id = state.curves.iter().next().unwrap().id;
        let before = state.curves.get(id).unwrap().params;

        set_params(
            &mut state,
            id,
            CurveParams::Linear {
                slope: 1.0,
                intercept: 0.0,
            },
        );

        assert_eq!(state.curves.get(id).unwrap().params, before);
    }

    #[test]
    fn set_params_sanitizes_floors() {
        let mut state = AppState::new();
        let id = state.curves.iter().next().unwrap().id;

        set_params(
            &mut state,
            id,
            CurveParams::Gaussian {
                mean: 1.0,
                sigma: -2.0,
                amplitude: 0.0,
            },
        );

        match state.curves.get(id).unwrap().params {
            CurveParams::Gaussian {
                sigma, amplitude, ..
            } => {
                assert_eq!(sigma, crate::core::SIGMA_FLOOR);
                assert_eq!(amplitude, crate::core::AMPLITUDE_FLOOR);
            }
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }

    #[test]
    fn locked_curve_still_accepts_direct_edits() {
        let mut state = AppState::new();
        let id = state.curves.iter().next().unwrap().id;
        set_locked(&mut state, id, true);

        set_params(
            &mut state,
            id,
            CurveParams::Gaussian {
                mean: 2.0,
                sigma: 1.0,
                amplitude: 3.0,
            },
        );

        match state.curves.get(id).unwrap().params {
            CurveParams::Gaussian { mean, .. } => assert_eq!(mean, 2.0),
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }
}
