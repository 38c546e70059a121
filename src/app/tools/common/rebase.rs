//! Floating-Origin-Nachführung für gerenderte Linien.

use glam::{DVec3, Vec3};

/// Merkt sich den zuletzt gesehenen High-Precision-Root und meldet Drift.
#[derive(Debug, Clone)]
pub struct OriginTracker {
    last_root: Option<DVec3>,
    threshold: f32,
}

impl OriginTracker {
    /// Erstellt einen Tracker ohne Referenz; die erste Beobachtung setzt sie.
    pub fn new(threshold: f32) -> Self {
        Self {
            last_root: None,
            threshold,
        }
    }

    /// Setzt die Referenz ohne Verschiebung.
    pub fn reset(&mut self, root: DVec3) {
        self.last_root = Some(root);
    }

    /// Zuletzt gespeicherte Referenz.
    pub fn last_root(&self) -> Option<DVec3> {
        self.last_root
    }

    /// Vergleicht den aktuellen Root mit der Referenz.
    ///
    /// Liegt die Drift über der Schwelle, wird die Referenz aktualisiert und
    /// das Delta `(alt − neu)` zurückgegeben, um das die Render-Punkte verschoben werden müssen.
    pub fn observe(&mut self, root: DVec3) -> Option<Vec3> {
        let Some(last) = self.last_root else {
            self.last_root = Some(root);
            return None;
        };
        let delta = (last - root).as_vec3();
        if delta.length() > self.threshold {
            self.last_root = Some(root);
            Some(delta)
        } else {
            None
        }
    }
}
