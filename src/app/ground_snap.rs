//! Boden-Snapping platzierter Objekte als tick-getriebene Zustandsmaschine.
//!
//! Objekte werden ohne Höhe aus einem Feature-Layer erzeugt und hoch über dem
//! Gelände gespawnt. Gelände ist nur nahe am Betrachter geladen, deshalb wird
//! erst ab der Aktivierungsdistanz senkrecht nach unten gecastet.

use serde::Serialize;

use crate::core::{GeoPoint, Ray, SceneHost};
use crate::shared::GroundSnapOptions;

/// Zustand des Boden-Snappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SnapState {
    /// Weitere Versuche ausstehend
    Waiting,
    /// Objekt liegt auf dem Boden (endgültig)
    Snapped,
    /// Versuchsbudget aufgebraucht, Objekt bleibt auf Spawnhöhe
    Exhausted,
}

/// Wiederholt Snap-Versuche im festen Takt bis zum Treffer oder Budget-Ende.
#[derive(Debug, Clone)]
pub struct GroundSnapper {
    state: SnapState,
    attempts: u32,
    /// Sekunden bis zum nächsten Versuch (≤ 0 = fällig)
    until_next: f64,
    options: GroundSnapOptions,
}

impl GroundSnapper {
    /// Erstellt einen Snapper; der erste Versuch ist sofort fällig.
    pub fn new(options: &GroundSnapOptions) -> Self {
        Self {
            state: SnapState::Waiting,
            attempts: 0,
            until_next: 0.0,
            options: options.clone(),
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> SnapState {
        self.state
    }

    /// Anzahl bisheriger Versuche.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Rückt die Zeit um `elapsed` Sekunden vor und führt fällige Versuche aus.
    ///
    /// `location` ist die Lage des Objekts; bei Treffer wird nur die Höhe neu gesetzt.
    pub fn tick(
        &mut self,
        elapsed: f64,
        location: &mut GeoPoint,
        spawn_height: f64,
        scene: &dyn SceneHost,
    ) -> SnapState {
        if self.state != SnapState::Waiting {
            return self.state;
        }
        self.until_next -= elapsed.max(0.0);
        while self.state == SnapState::Waiting && self.until_next <= 0.0 {
            self.attempt(location, spawn_height, scene);
            if self.options.poll_interval_secs > 0.0 {
                self.until_next += self.options.poll_interval_secs;
            } else {
                self.until_next = 0.0;
                break;
            }
        }
        self.state
    }

    fn attempt(&mut self, location: &mut GeoPoint, spawn_height: f64, scene: &dyn SceneHost) {
        self.attempts += 1;

        let render = scene.geo_to_render(location);
        let distance = scene
            .viewer_position()
            .distance(scene.universe_position(render));

        if distance < self.options.activation_distance {
            let ray = Ray::down(render);
            if let Some(hit) = scene.raycast(&ray, Some(spawn_height as f32)) {
                location.z = location.z - f64::from(hit.distance) + self.options.height_offset;
                self.state = SnapState::Snapped;
                log::info!(
                    "Objekt nach {} Versuchen auf Höhe {:.2} gesetzt",
                    self.attempts,
                    location.z
                );
                return;
            }
        }

        if self.attempts >= self.options.max_attempts {
            self.state = SnapState::Exhausted;
            log::info!(
                "Boden-Snapping nach {} Versuchen aufgegeben (Distanz {:.0})",
                self.attempts,
                distance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TerrainScene, TerrainSurface};
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn scene() -> TerrainScene {
        TerrainScene::new(8.5, 47.3, TerrainSurface::flat(400.0))
    }

    #[test]
    fn test_snaps_on_first_tick_when_close() {
        let scene = scene();
        let mut location = GeoPoint::wgs84(8.501, 47.301, 10_000.0);
        let mut snapper = GroundSnapper::new(&GroundSnapOptions::default());

        let state = snapper.tick(0.0, &mut location, 10_000.0, &scene);
        assert_eq!(state, SnapState::Snapped);
        assert_eq!(snapper.attempts(), 1);
        assert_relative_eq!(location.z, 400.5, epsilon = 1e-3);
        assert_relative_eq!(location.x, 8.501);
    }

    #[test]
    fn test_waits_until_viewer_in_range() {
        let mut scene = scene();
        scene.move_viewer(DVec3::new(0.0, 1000.0, -400_000.0));
        let mut location = GeoPoint::wgs84(8.5, 47.3, 10_000.0);
        let mut snapper = GroundSnapper::new(&GroundSnapOptions::default());

        assert_eq!(
            snapper.tick(0.0, &mut location, 10_000.0, &scene),
            SnapState::Waiting
        );
        assert_eq!(
            snapper.tick(0.1, &mut location, 10_000.0, &scene),
            SnapState::Waiting
        );
        // Zwischen zwei Takten kein weiterer Versuch
        assert_eq!(snapper.attempts(), 1);

        scene.move_viewer(DVec3::new(0.0, 1000.0, 0.0));
        assert_eq!(
            snapper.tick(0.25, &mut location, 10_000.0, &scene),
            SnapState::Snapped
        );
        assert_eq!(snapper.attempts(), 2);
        assert_relative_eq!(location.z, 400.5, epsilon = 1e-3);

        // Nie erneut snappen
        location.z = 9999.0;
        snapper.tick(10.0, &mut location, 10_000.0, &scene);
        assert_eq!(location.z, 9999.0);
    }

    #[test]
    fn test_exhausts_budget_without_hit() {
        let scene = scene().with_stream_radius(Some(100.0));
        let mut location = GeoPoint::wgs84(8.52, 47.3, 10_000.0);
        let mut snapper = GroundSnapper::new(&GroundSnapOptions::default());

        // Im Aktivierungsradius, aber Gelände nicht geladen
        let state = snapper.tick(1000.0, &mut location, 10_000.0, &scene);
        assert_eq!(state, SnapState::Exhausted);
        assert_eq!(snapper.attempts(), 300);
        assert_eq!(location.z, 10_000.0);
    }

    #[test]
    fn test_spawn_height_limits_ray() {
        let scene = scene();
        let mut location = GeoPoint::wgs84(8.5, 47.3, 10_000.0);
        let options = GroundSnapOptions {
            max_attempts: 3,
            ..GroundSnapOptions::default()
        };
        let mut snapper = GroundSnapper::new(&options);

        // Strahl endet 500 m unter dem Objekt, Gelände liegt 9600 m tiefer
        let state = snapper.tick(5.0, &mut location, 500.0, &scene);
        assert_eq!(state, SnapState::Exhausted);
        assert_eq!(snapper.attempts(), 3);
    }
}
