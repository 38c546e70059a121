//! Handler für die Mess-Werkzeuge (Klick, Einheit, Löschen, Werkzeugwechsel).

use anyhow::Context;

use crate::app::tools::MeasureToolKind;
use crate::app::AppState;
use crate::core::{HostContext, LinearUnit, Ray, SceneHost};
use crate::shared::MeasureOptions;

/// Setzt einen Messpunkt im aktiven Werkzeug.
pub fn place_point(state: &mut AppState, ray: &Ray) {
    let host = HostContext::new(&state.scene, &state.geometry);
    let Some(tool) = state.tools.active_tool_mut() else {
        return;
    };
    let outcome = tool.on_click(ray, &host);
    state.last_outcome = Some(outcome);
}

/// Setzt die Einheit aller Werkzeuge.
pub fn set_unit(state: &mut AppState, unit: LinearUnit) {
    for tool in state.tools.tools_mut() {
        tool.set_unit(unit);
    }
}

/// Setzt die Einheit per Dropdown-Label.
pub fn set_unit_by_label(state: &mut AppState, label: &str) -> anyhow::Result<()> {
    let unit = LinearUnit::from_label(label).context("Einheit konnte nicht gesetzt werden")?;
    set_unit(state, unit);
    Ok(())
}

/// Setzt die Einheit per Linear-Unit-ID.
pub fn set_unit_by_id(state: &mut AppState, unit_id: u32) -> anyhow::Result<()> {
    let unit = LinearUnit::from_unit_id(unit_id).context("Einheit konnte nicht gesetzt werden")?;
    set_unit(state, unit);
    Ok(())
}

/// Löscht die Messung des aktiven Werkzeugs.
pub fn clear(state: &mut AppState) {
    if let Some(tool) = state.tools.active_tool_mut() {
        tool.clear();
    }
    state.last_outcome = None;
}

/// Wechselt das aktive Werkzeug; Messungen bleiben erhalten.
pub fn select_tool(state: &mut AppState, kind: MeasureToolKind) -> anyhow::Result<()> {
    if !state.tools.activate(kind) {
        anyhow::bail!("Werkzeug {:?} ist nicht registriert", kind);
    }
    log::info!("Werkzeug gewechselt: {:?}", kind);
    Ok(())
}

/// Führt alle Linien dem aktuellen Floating-Origin nach.
pub fn follow_origin(state: &mut AppState) {
    let root = state.scene.root_position();
    let moved = state
        .tools
        .tools_mut()
        .map(|tool| tool.follow_origin(root))
        .filter(|moved| *moved)
        .count();
    if moved > 0 {
        log::debug!("{} Linien dem Floating-Origin nachgeführt", moved);
    }
}

/// Übernimmt neue Optionen in State und Werkzeuge.
pub fn apply_options(state: &mut AppState, options: MeasureOptions) {
    let options = options.sanitized();
    for tool in state.tools.tools_mut() {
        tool.apply_options(&options);
    }
    state.options = options;
    log::info!("Optionen übernommen");
}
