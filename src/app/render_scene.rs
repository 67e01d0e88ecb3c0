//! Builder für Render- und Export-Szenen aus dem AppState.

use crate::app::{AppState, Gesture};
use crate::core::{handles_for, sample_polyline, Curve};
use crate::shared::{CurvePlot, ExportSettings, HandleMarker, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Sichtbare Kurven in Z-Order mit fertigen Polylines; der Handle-Satz nur
/// für die aktive Kurve (Drag hat Vorrang vor Hover), frisch aus den
/// aktuellen Parametern berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let surface = state.view.surface_size;
    let viewport = state.view.viewport;
    let bounds = viewport.bounds(surface);

    let curves: Vec<CurvePlot> = state
        .curves
        .iter()
        .filter(|curve| curve.visible)
        .map(|curve| plot_curve(curve, bounds.x_min, bounds.x_max, state.options.sample_resolution))
        .collect();

    let dragged = state.gesture.dragging_handle();
    let active_curve = match state.gesture {
        Gesture::DraggingHandle { curve_id, .. } => Some(curve_id),
        _ => state.selection.hovered_curve,
    };
    let handles = active_curve
        .and_then(|id| state.curves.get(id))
        .map(|curve| {
            handles_for(curve)
                .into_iter()
                .map(|handle| HandleMarker {
                    curve_id: curve.id,
                    kind: handle.kind,
                    position: handle.position,
                    active: dragged == Some((curve.id, handle.kind)),
                })
                .collect()
        })
        .unwrap_or_default();

    RenderScene {
        curves,
        bounds,
        grid: viewport.grid_lines(surface),
        viewport,
        surface_size: surface,
        handles,
        handle_size_plane: state.options.handle_size_plane,
        curve_fill_opacity: state.options.curve_fill_opacity,
    }
}

/// Baut die eingefrorene Export-Szene: nur die ausgewählten sichtbaren
/// Kurven, keine Handles. Die Export-Pipeline tastet über dieselben
/// Evaluator-Funktionen neu ab — die mitgelieferten Parameter machen das
/// bei beliebiger Auflösung reproduzierbar.
pub fn build_export_scene(state: &AppState, settings: &ExportSettings) -> RenderScene {
    let mut scene = build(state);
    scene
        .curves
        .retain(|plot| settings.selected_curve_ids.contains(&plot.id));
    scene.handles.clear();
    scene
}

fn plot_curve(curve: &Curve, x_min: f64, x_max: f64, resolution: usize) -> CurvePlot {
    CurvePlot {
        id: curve.id,
        kind: curve.kind(),
        params: curve.params,
        name: curve.name.clone(),
        color: curve.color,
        locked: curve.locked,
        polyline: sample_polyline(&curve.params, x_min, x_max, resolution),
    }
}
