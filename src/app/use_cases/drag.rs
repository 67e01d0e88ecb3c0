//! Use-Case-Funktionen für den Gesten-Lebenszyklus.
//!
//! Jede Zwischenposition eines Drags committet sofort in die Parameter
//! (Direct-Manipulation, kein Rollback). Das Loslassen des Zeigers führt
//! bedingungslos zurück nach `Idle`.

use crate::app::{AppState, Gesture};
use crate::core::{apply_drag, HandleKind};
use glam::DVec2;

/// Beginnt eine Pan-Geste (nur aus `Idle`).
pub fn begin_pan(state: &mut AppState) {
    if state.gesture.is_idle() {
        state.gesture = Gesture::Panning;
    }
}

/// Beginnt einen Handle-Drag (nur aus `Idle`, nur auf interaktiven Kurven).
pub fn begin_handle_drag(state: &mut AppState, curve_id: u64, handle: HandleKind) {
    if !state.gesture.is_idle() {
        return;
    }
    match state.curves.get(curve_id) {
        Some(curve) if curve.visible && !curve.locked => {
            state.gesture = Gesture::DraggingHandle { curve_id, handle };
        }
        Some(_) => log::debug!("Drag-Start auf gesperrter/unsichtbarer Kurve {curve_id} verworfen"),
        None => log::debug!("Drag-Start auf unbekannter Kurve {curve_id} verworfen"),
    }
}

/// Beginnt einen Zwei-Finger-Pinch (nur aus `Idle`, Abstand > 0).
pub fn begin_pinch(state: &mut AppState, span: f64) {
    if state.gesture.is_idle() && span > 0.0 {
        state.gesture = Gesture::PinchZooming { last_span: span };
    }
}

/// Zieht den aktiven Handle auf die Ebenen-Position.
///
/// Verschwundene Kurve (während des Drags gelöscht): Drag-Zustand wird
/// beim fehlgeschlagenen Lookup geräumt, das Update ist ein No-op.
pub fn drag_handle_to(state: &mut AppState, plane_pos: DVec2) {
    let Some((curve_id, handle)) = state.gesture.dragging_handle() else {
        return;
    };
    let Some(curve) = state.curves.get_mut(curve_id) else {
        log::debug!("Drag-Ziel {curve_id} verschwunden, Geste beendet");
        state.gesture = Gesture::Idle;
        return;
    };
    // Fehlgeschlagene Guards (log/pow) sind ein stilles No-op für diesen Frame
    apply_drag(&mut curve.params, handle, plane_pos);
}

/// Verarbeitet einen Pinch-Frame: Abstands-Verhältnis zum letzten Frame
/// zoomt auf den Finger-Mittelpunkt.
pub fn pinch_zoom(state: &mut AppState, span: f64, center_screen: DVec2) {
    let Gesture::PinchZooming { last_span } = state.gesture else {
        return;
    };
    if span <= 0.0 || last_span <= 0.0 {
        return;
    }
    let factor = span / last_span;
    let surface = state.view.surface_size;
    state.view.viewport.zoom_at(center_screen, factor, surface);
    state.gesture = Gesture::PinchZooming { last_span: span };
}

/// Beendet die aktive Geste bedingungslos (`Idle`).
pub fn end_gesture(state: &mut AppState) {
    state.gesture = Gesture::Idle;
}

/// Setzt die Hover-Kurve; unbekannte IDs werden zu `None`.
pub fn set_hovered(state: &mut AppState, curve_id: Option<u64>) {
    state.selection.hovered_curve = curve_id.filter(|id| state.curves.contains(*id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveParams;
    use approx::assert_abs_diff_eq;

    fn first_curve_id(state: &AppState) -> u64 {
        state.curves.iter().next().unwrap().id
    }

    #[test]
    fn begin_pan_only_from_idle() {
        let mut state = AppState::new();
        state.gesture = Gesture::PinchZooming { last_span: 10.0 };

        begin_pan(&mut state);

        assert_eq!(state.gesture, Gesture::PinchZooming { last_span: 10.0 });
    }

    #[test]
    fn begin_handle_drag_rejects_locked_curve() {
        let mut state = AppState::new();
        let id = first_curve_id(&state);
        state.curves.get_mut(id).unwrap().locked = true;

        begin_handle_drag(&mut state, id, HandleKind::MeanAmplitude);

        assert_eq!(state.gesture, Gesture::Idle);
    }

    #[test]
    fn drag_commits_immediately_into_params() {
        let mut state = AppState::new();
        let id = first_curve_id(&state);
        begin_handle_drag(&mut state, id, HandleKind::MeanAmplitude);

        drag_handle_to(&mut state, DVec2::new(2.0, 3.0));

        match state.curves.get(id).unwrap().params {
            CurveParams::Gaussian {
                mean,
                sigma,
                amplitude,
            } => {
                assert_eq!(mean, 2.0);
                assert_eq!(amplitude, 3.0);
                assert_eq!(sigma, 1.0, "σ bleibt vom Peak-Handle unberührt");
            }
            other => panic!("Unerwartete Variante: {other:?}"),
        }
    }

    #[test]
    fn drag_on_vanished_curve_clears_gesture() {
        let mut state = AppState::new();
        let id = first_curve_id(&state);
        begin_handle_drag(&mut state, id, HandleKind::Sigma);
        state.curves.remove_curve(id);

        drag_handle_to(&mut state, DVec2::new(1.0, 1.0));

        assert_eq!(state.gesture, Gesture::Idle);
    }

    #[test]
    fn pinch_zoom_scales_by_span_ratio() {
        let mut state = AppState::new();
        begin_pinch(&mut state, 100.0);

        pinch_zoom(&mut state, 200.0, DVec2::new(500.0, 300.0));

        assert_abs_diff_eq!(state.view.viewport.zoom, 2.0, epsilon = 1e-9);
        assert_eq!(state.gesture, Gesture::PinchZooming { last_span: 200.0 });
    }

    #[test]
    fn end_gesture_returns_to_idle_from_any_state() {
        let mut state = AppState::new();
        let id = first_curve_id(&state);
        state.gesture = Gesture::DraggingHandle {
            curve_id: id,
            handle: HandleKind::Sigma,
        };

        end_gesture(&mut state);

        assert_eq!(state.gesture, Gesture::Idle);
    }

    #[test]
    fn set_hovered_drops_unknown_ids() {
        let mut state = AppState::new();

        set_hovered(&mut state, Some(9999));

        assert_eq!(state.selection.hovered_curve, None);
    }
}
