//! Handler für Betrachter und Floating-Origin.

use glam::DVec3;

use crate::app::AppState;

/// Versetzt den Betrachter; der Floating-Origin der Szene folgt ihm.
pub fn move_viewer(state: &mut AppState, position: DVec3) {
    state.scene.move_viewer(position);
}
