//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier wird die aktuelle Geste gegen den Zustand aufgelöst: Zeiger-Events
//! werden abhängig vom Gesten-Zustand zu Pan-, Drag- oder Zoom-Commands,
//! inklusive Handle-Hit-Test und Screen→Ebene-Umrechnung.

use crate::core::hit_test;
use glam::DVec2;

use super::{AppCommand, AppIntent, AppState, Gesture};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { screen_pos } => {
            if !state.gesture.is_idle() {
                // Zweiter Zeiger während aktiver Geste: ignorieren
                return Vec::new();
            }
            let plane_pos = state
                .view
                .viewport
                .screen_to_plane(screen_pos, state.view.surface_size);
            match hit_test(
                state.curves.iter().rev(),
                plane_pos,
                pick_radius_plane(state),
            ) {
                Some(hit) => vec![
                    AppCommand::SetHoveredCurve {
                        curve_id: Some(hit.curve_id),
                    },
                    AppCommand::BeginHandleDrag {
                        curve_id: hit.curve_id,
                        handle: hit.kind,
                    },
                ],
                None => vec![AppCommand::BeginPan],
            }
        }

        AppIntent::PointerMoved {
            screen_pos,
            screen_delta,
        } => match state.gesture {
            Gesture::Panning => vec![AppCommand::PanCamera {
                delta_screen: screen_delta,
            }],
            Gesture::DraggingHandle { .. } => {
                let plane_pos = state
                    .view
                    .viewport
                    .screen_to_plane(screen_pos, state.view.surface_size);
                vec![AppCommand::DragHandleTo { plane_pos }]
            }
            // Pinch wird über Touch-Events getrieben
            Gesture::PinchZooming { .. } => Vec::new(),
            Gesture::Idle => {
                // Hover aktualisieren, damit der Handle-Satz der Kurve
                // unter dem Zeiger exponiert wird
                let plane_pos = state
                    .view
                    .viewport
                    .screen_to_plane(screen_pos, state.view.surface_size);
                let hovered = hit_test(
                    state.curves.iter().rev(),
                    plane_pos,
                    pick_radius_plane(state),
                )
                .map(|hit| hit.curve_id);
                if hovered != state.selection.hovered_curve {
                    vec![AppCommand::SetHoveredCurve { curve_id: hovered }]
                } else {
                    Vec::new()
                }
            }
        },

        AppIntent::PointerReleased | AppIntent::PointerCancelled => {
            vec![AppCommand::EndGesture]
        }

        AppIntent::TouchStarted { points } => {
            if state.gesture.is_idle() && points.len() == 2 {
                vec![AppCommand::BeginPinch {
                    span: points[0].distance(points[1]),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::TouchMoved { points } => {
            match (state.gesture, points.as_slice()) {
                (Gesture::PinchZooming { .. }, [a, b]) => vec![AppCommand::PinchZoom {
                    span: a.distance(*b),
                    center_screen: (*a + *b) / 2.0,
                }],
                _ => Vec::new(),
            }
        }
        AppIntent::TouchEnded => vec![AppCommand::EndGesture],

        AppIntent::WheelScrolled {
            screen_pos,
            scroll_delta,
        } => {
            if scroll_delta == 0.0 || state.gesture.blocks_wheel_zoom() {
                return Vec::new();
            }
            let step = state.options.camera_scroll_zoom_step;
            let factor = if scroll_delta > 0.0 { step } else { 1.0 / step };
            vec![AppCommand::ZoomCamera {
                factor,
                focus_screen: Some(screen_pos),
            }]
        }

        AppIntent::SurfaceResized { size } => vec![AppCommand::SetSurfaceSize { size }],
        AppIntent::CurveHovered { curve_id } => vec![AppCommand::SetHoveredCurve { curve_id }],

        AppIntent::AddCurveRequested { kind } => vec![AppCommand::AddCurve { kind }],
        AppIntent::DeleteCurveRequested { curve_id } => vec![AppCommand::DeleteCurve { curve_id }],
        AppIntent::ClearCurvesRequested => vec![AppCommand::ClearCurves],
        AppIntent::ReorderCurveRequested { from, to } => {
            vec![AppCommand::ReorderCurve { from, to }]
        }
        AppIntent::RenameCurveRequested { curve_id, name } => {
            vec![AppCommand::RenameCurve { curve_id, name }]
        }
        AppIntent::RecolorCurveRequested { curve_id, color } => {
            vec![AppCommand::RecolorCurve { curve_id, color }]
        }
        AppIntent::SetCurveVisibilityRequested { curve_id, visible } => {
            vec![AppCommand::SetCurveVisibility { curve_id, visible }]
        }
        AppIntent::SetCurveLockedRequested { curve_id, locked } => {
            vec![AppCommand::SetCurveLocked { curve_id, locked }]
        }
        AppIntent::EditCurveParamsRequested { curve_id, params } => {
            vec![AppCommand::SetCurveParams { curve_id, params }]
        }

        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.camera_zoom_step,
            focus_screen: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            factor: 1.0 / state.options.camera_zoom_step,
            focus_screen: None,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Rechnet den Pick-Radius von Screen-Pixeln in Ebenen-Einheiten um.
fn pick_radius_plane(state: &AppState) -> f64 {
    state
        .view
        .viewport
        .screen_delta_to_plane_delta(
            DVec2::new(state.options.handle_pick_radius_px, 0.0),
            state.view.surface_size,
        )
        .x
}
