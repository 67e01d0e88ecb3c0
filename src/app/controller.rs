//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Gesten ===
            AppCommand::BeginPan => handlers::gesture::begin_pan(state),
            AppCommand::BeginHandleDrag { curve_id, handle } => {
                handlers::gesture::begin_handle_drag(state, curve_id, handle)
            }
            AppCommand::BeginPinch { span } => handlers::gesture::begin_pinch(state, span),
            AppCommand::DragHandleTo { plane_pos } => {
                handlers::gesture::drag_handle_to(state, plane_pos)
            }
            AppCommand::PinchZoom {
                span,
                center_screen,
            } => handlers::gesture::pinch_zoom(state, span, center_screen),
            AppCommand::EndGesture => handlers::gesture::end_gesture(state),
            AppCommand::SetHoveredCurve { curve_id } => {
                handlers::gesture::set_hovered(state, curve_id)
            }

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta_screen } => handlers::view::pan(state, delta_screen),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options),

            // === Kurven ===
            AppCommand::AddCurve { kind } => handlers::curves::add(state, kind),
            AppCommand::DeleteCurve { curve_id } => handlers::curves::delete(state, curve_id),
            AppCommand::ClearCurves => handlers::curves::clear(state),
            AppCommand::ReorderCurve { from, to } => handlers::curves::reorder(state, from, to),
            AppCommand::RenameCurve { curve_id, name } => {
                handlers::curves::rename(state, curve_id, name)
            }
            AppCommand::RecolorCurve { curve_id, color } => {
                handlers::curves::recolor(state, curve_id, color)
            }
            AppCommand::SetCurveVisibility { curve_id, visible } => {
                handlers::curves::set_visibility(state, curve_id, visible)
            }
            AppCommand::SetCurveLocked { curve_id, locked } => {
                handlers::curves::set_locked(state, curve_id, locked)
            }
            AppCommand::SetCurveParams { curve_id, params } => {
                handlers::curves::set_params(state, curve_id, params)
            }
        }

        Ok(())
    }
}
