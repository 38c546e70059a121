//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SceneClicked { ray, shift_held } => {
            if !shift_held {
                log::trace!("Klick ohne Shift ignoriert");
                return Vec::new();
            }
            vec![AppCommand::PlaceMeasurePoint { ray }]
        }
        AppIntent::UnitSelected { label } => vec![AppCommand::SetUnitByLabel { label }],
        AppIntent::UnitIdSelected { unit_id } => vec![AppCommand::SetUnitById { unit_id }],
        AppIntent::ClearRequested => vec![AppCommand::ClearMeasurement],
        AppIntent::ToolSelected { kind } => {
            let already_active = state.tools.active_tool().is_some_and(|t| t.kind() == kind);
            if already_active {
                Vec::new()
            } else {
                vec![AppCommand::SelectTool { kind }]
            }
        }
        AppIntent::ViewerMoved { position } => vec![
            AppCommand::MoveViewer { position },
            AppCommand::FollowOrigin,
        ],
        AppIntent::PropSpawnRequested { spawn } => vec![AppCommand::SpawnProp { spawn }],
        AppIntent::TimeAdvanced { seconds } => vec![AppCommand::AdvanceTime { seconds }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
