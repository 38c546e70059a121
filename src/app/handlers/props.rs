//! Handler für platzierte Objekte und deren Boden-Snapping.

use crate::app::events::PropSpawn;
use crate::app::props::PlacedProp;
use crate::app::AppState;

/// Platziert ein Objekt auf Spawnhöhe; das Snapping startet beim nächsten Takt.
pub fn spawn(state: &mut AppState, spawn: PropSpawn) {
    let mut options = state.options.ground_snap.clone();
    if let Some(height) = spawn.spawn_height {
        options.spawn_height = height;
    }
    let mut prop = PlacedProp::new(spawn.name, spawn.longitude, spawn.latitude, &options);
    for info in spawn.info {
        prop.set_info(info);
    }
    state.props.add(prop);
}

/// Rückt die Zeit vor und taktet das Boden-Snapping aller Objekte.
pub fn advance_time(state: &mut AppState, seconds: f64) {
    if !seconds.is_finite() || seconds < 0.0 {
        log::warn!("Ungültiger Zeitschritt {} ignoriert", seconds);
        return;
    }
    state.elapsed += seconds;
    let waiting = state.props.tick(seconds, &state.scene);
    log::trace!("{} Objekte warten auf Boden-Snapping", waiting);
}
