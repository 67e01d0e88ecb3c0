//! Editing-Tests: Kurven-CRUD, Z-Order und Export-Auswahl über Intents.

use curve_composer::core::{CURVE_PALETTE, MAX_CURVES};
use curve_composer::{
    build_export_scene, AppController, AppIntent, AppState, CurveKind, CurveParams, ExportSettings,
};
use glam::DVec2;

fn add(controller: &mut AppController, state: &mut AppState, kind: CurveKind) {
    controller
        .handle_intent(state, AppIntent::AddCurveRequested { kind })
        .expect("AddCurveRequested sollte funktionieren");
}

#[test]
fn test_add_curve_assigns_name_color_and_position() {
    let mut controller = AppController::new();
    let mut state = AppState::empty();
    state.view.viewport.pan_offset = DVec2::new(3.0, 1.0);

    add(&mut controller, &mut state, CurveKind::Gaussian);

    assert_eq!(state.curve_count(), 1);
    let curve = state.curves.iter().next().unwrap();
    assert_eq!(curve.name, "Curve 1");
    assert_eq!(curve.color, CURVE_PALETTE[0]);
    assert!(curve.visible);
    assert!(!curve.locked);
    match curve.params {
        CurveParams::Gaussian { mean, .. } => {
            assert_eq!(mean, 3.0, "Neue Kurve erscheint nahe dem View-Zentrum");
        }
        other => panic!("Unerwartete Variante: {other:?}"),
    }
}

#[test]
fn test_palette_cycles_round_robin() {
    let mut controller = AppController::new();
    let mut state = AppState::empty();

    for _ in 0..CURVE_PALETTE.len() + 1 {
        add(&mut controller, &mut state, CurveKind::Linear);
    }

    let colors: Vec<[f32; 4]> = state.curves.iter().map(|curve| curve.color).collect();
    assert_eq!(colors[0], CURVE_PALETTE[0]);
    assert_eq!(colors[CURVE_PALETTE.len()], CURVE_PALETTE[0]);
}

#[test]
fn test_add_beyond_limit_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::empty();

    for _ in 0..MAX_CURVES + 3 {
        add(&mut controller, &mut state, CurveKind::Exponential);
    }

    assert_eq!(state.curve_count(), MAX_CURVES);
}

#[test]
fn test_delete_unknown_curve_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DeleteCurveRequested { curve_id: 777 })
        .expect("DeleteCurveRequested sollte bei unbekannter ID robust sein");

    assert_eq!(state.curve_count(), 1);
}

#[test]
fn test_clear_removes_all_curves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add(&mut controller, &mut state, CurveKind::PowerLaw);

    controller
        .handle_intent(&mut state, AppIntent::ClearCurvesRequested)
        .expect("ClearCurvesRequested sollte funktionieren");

    assert_eq!(state.curve_count(), 0);
}

#[test]
fn test_reorder_via_intent_permutes_z_order() {
    let mut controller = AppController::new();
    let mut state = AppState::empty();
    add(&mut controller, &mut state, CurveKind::Gaussian);
    add(&mut controller, &mut state, CurveKind::Linear);
    add(&mut controller, &mut state, CurveKind::Quadratic);
    let before: Vec<u64> = state.curves.iter().map(|curve| curve.id).collect();

    controller
        .handle_intent(&mut state, AppIntent::ReorderCurveRequested { from: 2, to: 0 })
        .expect("ReorderCurveRequested sollte funktionieren");

    let after: Vec<u64> = state.curves.iter().map(|curve| curve.id).collect();
    assert_eq!(after, vec![before[2], before[0], before[1]]);

    // Ungültige Indizes lassen die Ordnung unverändert
    controller
        .handle_intent(&mut state, AppIntent::ReorderCurveRequested { from: 0, to: 9 })
        .expect("Ungültiger Reorder sollte robust sein");
    let unchanged: Vec<u64> = state.curves.iter().map(|curve| curve.id).collect();
    assert_eq!(unchanged, after);
}

#[test]
fn test_rename_and_recolor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state.curves.iter().next().unwrap().id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::RenameCurveRequested {
                curve_id: id,
                name: "Messung A".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RecolorCurveRequested {
                curve_id: id,
                color: [1.0, 0.0, 0.0, 1.0],
            },
        )
        .unwrap();

    let curve = state.curves.get(id).unwrap();
    assert_eq!(curve.name, "Messung A");
    assert_eq!(curve.color, [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_edit_params_via_intent_keeps_kind_immutable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state.curves.iter().next().unwrap().id;

    // Gültiger Edit derselben Art
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditCurveParamsRequested {
                curve_id: id,
                params: CurveParams::Gaussian {
                    mean: -1.0,
                    sigma: 2.0,
                    amplitude: 0.5,
                },
            },
        )
        .unwrap();
    match state.curves.get(id).unwrap().params {
        CurveParams::Gaussian { mean, .. } => assert_eq!(mean, -1.0),
        other => panic!("Unerwartete Variante: {other:?}"),
    }

    // Art-Wechsel wird verworfen
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditCurveParamsRequested {
                curve_id: id,
                params: CurveParams::Linear {
                    slope: 1.0,
                    intercept: 0.0,
                },
            },
        )
        .unwrap();
    assert_eq!(state.curves.get(id).unwrap().kind(), CurveKind::Gaussian);
}

#[test]
fn test_hidden_curve_is_excluded_from_render_and_export() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state.curves.iter().next().unwrap().id;
    add(&mut controller, &mut state, CurveKind::Linear);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetCurveVisibilityRequested {
                curve_id: id,
                visible: false,
            },
        )
        .unwrap();

    let scene = curve_composer::build_render_scene(&state);
    assert_eq!(scene.curves.len(), 1);
    assert!(scene.curves.iter().all(|plot| plot.id != id));

    let settings = ExportSettings {
        selected_curve_ids: vec![id],
        ..ExportSettings::default()
    };
    let export = build_export_scene(&state, &settings);
    assert!(
        export.curves.is_empty(),
        "Unsichtbare Kurven dürfen nicht in den Export"
    );
}

#[test]
fn test_export_selection_preserves_z_order() {
    let mut controller = AppController::new();
    let mut state = AppState::empty();
    add(&mut controller, &mut state, CurveKind::Gaussian);
    add(&mut controller, &mut state, CurveKind::Quadratic);
    add(&mut controller, &mut state, CurveKind::Exponential);
    let ids: Vec<u64> = state.curves.iter().map(|curve| curve.id).collect();

    let settings = ExportSettings {
        // Auswahl absichtlich verdreht — die Szene bleibt in Z-Order
        selected_curve_ids: vec![ids[2], ids[0]],
        ..ExportSettings::default()
    };
    let export = build_export_scene(&state, &settings);

    let exported: Vec<u64> = export.curves.iter().map(|plot| plot.id).collect();
    assert_eq!(exported, vec![ids[0], ids[2]]);
}
