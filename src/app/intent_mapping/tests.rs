use crate::app::tools::MeasureToolKind;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{LinearUnit, Ray, TerrainScene, TerrainSurface};
use crate::shared::MeasureOptions;
use glam::{DVec3, Vec3};

use super::map_intent_to_commands;

fn state() -> AppState {
    AppState::new(
        TerrainScene::new(8.5, 47.3, TerrainSurface::flat(0.0)),
        MeasureOptions::default(),
    )
}

fn ray() -> Ray {
    Ray::down(Vec3::new(0.0, 100.0, 0.0))
}

#[test]
fn click_without_shift_maps_to_nothing() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SceneClicked {
            ray: ray(),
            shift_held: false,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn click_with_shift_places_measure_point() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SceneClicked {
            ray: ray(),
            shift_held: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::PlaceMeasurePoint { .. }));
}

#[test]
fn viewer_moved_maps_to_move_and_follow_in_order() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewerMoved {
            position: DVec3::new(10.0, 0.0, 0.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::MoveViewer { .. }));
    assert!(matches!(commands[1], AppCommand::FollowOrigin));
}

#[test]
fn selecting_active_tool_maps_to_nothing() {
    let state = state();

    let same = map_intent_to_commands(
        &state,
        AppIntent::ToolSelected {
            kind: MeasureToolKind::Geodesic,
        },
    );
    let other = map_intent_to_commands(
        &state,
        AppIntent::ToolSelected {
            kind: MeasureToolKind::Midpoint,
        },
    );

    assert!(same.is_empty());
    assert!(matches!(
        other[0],
        AppCommand::SelectTool {
            kind: MeasureToolKind::Midpoint
        }
    ));
}

#[test]
fn unit_selected_keeps_label_for_handler() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::UnitSelected {
            label: "Kilometers".into(),
        },
    );

    assert!(matches!(
        &commands[0],
        AppCommand::SetUnitByLabel { label } if label == "Kilometers"
    ));
    assert_eq!(LinearUnit::from_label("Kilometers").ok(), Some(LinearUnit::Kilometers));
}
