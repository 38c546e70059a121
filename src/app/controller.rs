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
            // === Messen ===
            AppCommand::PlaceMeasurePoint { ray } => handlers::measure::place_point(state, &ray),
            AppCommand::SetUnit { unit } => handlers::measure::set_unit(state, unit),
            AppCommand::SetUnitByLabel { label } => {
                handlers::measure::set_unit_by_label(state, &label)?
            }
            AppCommand::SetUnitById { unit_id } => {
                handlers::measure::set_unit_by_id(state, unit_id)?
            }
            AppCommand::ClearMeasurement => handlers::measure::clear(state),
            AppCommand::SelectTool { kind } => handlers::measure::select_tool(state, kind)?,
            AppCommand::FollowOrigin => handlers::measure::follow_origin(state),
            AppCommand::ApplyOptions { options } => handlers::measure::apply_options(state, *options),

            // === Betrachter ===
            AppCommand::MoveViewer { position } => handlers::view::move_viewer(state, position),

            // === Objekte ===
            AppCommand::SpawnProp { spawn } => handlers::props::spawn(state, spawn),
            AppCommand::AdvanceTime { seconds } => handlers::props::advance_time(state, seconds),
        }

        Ok(())
    }
}
