//! Referenz-Szene: prozedurales Höhenfeld mit Streaming-Radius und Floating-Origin.
//!
//! Universe-Space ist eine lokale Tangentialebene am Anker-Punkt
//! (+X = Ost, +Y = oben, +Z = Nord, Meter). Render-Space = Universe − Root.
//! Senkrechte Strahlen ändern Länge/Breite nicht, nur die Höhe.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::host::{Ray, RayHit, SceneHost};
use super::{GeoPoint, SpatialReference, WGS84_SEMI_MAJOR_AXIS};

/// Minimale Schrittweite beim Abtasten schräger Strahlen (Meter).
const MARCH_MIN_STEP: f64 = 0.5;
/// Maximale Schrittweite beim Abtasten schräger Strahlen (Meter).
const MARCH_MAX_STEP: f64 = 25.0;
/// Reichweite eines Raycasts ohne explizite Begrenzung (Meter).
const UNBOUNDED_RAY_LENGTH: f64 = 250_000.0;
/// Bisektions-Schritte zur Verfeinerung eines Treffers.
const REFINE_ITERATIONS: usize = 40;

/// Prozedurale Geländeoberfläche: Grundhöhe + sinusförmige Hügel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSurface {
    /// Grundhöhe in Metern
    pub base_height: f64,
    /// Hügel-Amplitude in Metern (0 = flach)
    pub amplitude: f64,
    /// Hügel-Wellenlänge in Metern
    pub wavelength: f64,
}

impl Default for TerrainSurface {
    fn default() -> Self {
        Self {
            base_height: 0.0,
            amplitude: 0.0,
            wavelength: 1000.0,
        }
    }
}

impl TerrainSurface {
    /// Flache Oberfläche auf fester Höhe.
    pub fn flat(height: f64) -> Self {
        Self {
            base_height: height,
            amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Geländehöhe an Universe-Position (X/Z).
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        if self.amplitude == 0.0 || self.wavelength <= 0.0 {
            return self.base_height;
        }
        let k = std::f64::consts::TAU / self.wavelength;
        self.base_height + self.amplitude * (k * x).sin() * (k * z).cos()
    }
}

/// Referenz-Host über einem prozeduralen Höhenfeld.
#[derive(Debug, Clone)]
pub struct TerrainScene {
    /// Anker der Tangentialebene (WGS84, Grad)
    anchor: GeoPoint,
    surface: TerrainSurface,
    /// Nur innerhalb dieses Radius um den Betrachter ist Gelände geladen
    stream_radius: Option<f64>,
    root: DVec3,
    viewer: DVec3,
}

impl TerrainScene {
    /// Erstellt eine Szene am Anker (Länge/Breite in Grad).
    pub fn new(anchor_longitude: f64, anchor_latitude: f64, surface: TerrainSurface) -> Self {
        Self {
            anchor: GeoPoint::wgs84(anchor_longitude, anchor_latitude, 0.0),
            surface,
            stream_radius: None,
            root: DVec3::ZERO,
            viewer: DVec3::ZERO,
        }
    }

    /// Begrenzt geladenes Gelände auf einen Radius um den Betrachter.
    pub fn with_stream_radius(mut self, radius: Option<f64>) -> Self {
        self.stream_radius = radius;
        self
    }

    /// Oberfläche der Szene.
    pub fn surface(&self) -> &TerrainSurface {
        &self.surface
    }

    /// Setzt den Betrachter; der Floating-Origin folgt ihm.
    pub fn move_viewer(&mut self, position: DVec3) {
        self.viewer = position;
        self.root = position;
        log::debug!(
            "Betrachter bewegt: ({:.1}, {:.1}, {:.1})",
            position.x,
            position.y,
            position.z
        );
    }

    /// Setzt nur den Betrachter, der Floating-Origin bleibt stehen.
    pub fn set_viewer(&mut self, position: DVec3) {
        self.viewer = position;
    }

    /// Setzt nur den Floating-Origin.
    pub fn set_root(&mut self, root: DVec3) {
        self.root = root;
    }

    fn meters_per_degree_latitude() -> f64 {
        WGS84_SEMI_MAJOR_AXIS * std::f64::consts::PI / 180.0
    }

    fn meters_per_degree_longitude(&self) -> f64 {
        Self::meters_per_degree_latitude() * self.anchor.y.to_radians().cos()
    }

    /// Universe-Position → WGS84 (Höhe = Universe-Y).
    pub fn universe_to_wgs84(&self, universe: DVec3) -> GeoPoint {
        GeoPoint::wgs84(
            self.anchor.x + universe.x / self.meters_per_degree_longitude(),
            self.anchor.y + universe.z / Self::meters_per_degree_latitude(),
            universe.y,
        )
    }

    fn is_streamed(&self, universe: DVec3) -> bool {
        match self.stream_radius {
            Some(radius) => {
                let dx = universe.x - self.viewer.x;
                let dz = universe.z - self.viewer.z;
                dx.hypot(dz) <= radius
            }
            None => true,
        }
    }

    /// Höhe über Grund (positiv = oberhalb der Oberfläche).
    fn clearance(&self, p: DVec3) -> f64 {
        p.y - self.surface.height_at(p.x, p.z)
    }

    fn make_hit(&self, origin: DVec3, dir: DVec3, t: f64) -> Option<RayHit> {
        let universe = origin + dir * t;
        if !self.is_streamed(universe) {
            log::trace!("Treffer außerhalb des Streaming-Radius verworfen");
            return None;
        }
        let mut point = universe - self.root;
        // Trefferhöhe exakt auf die Oberfläche legen
        point.y = self.surface.height_at(universe.x, universe.z) - self.root.y;
        Some(RayHit {
            point: point.as_vec3(),
            distance: t as f32,
        })
    }
}

impl SceneHost for TerrainScene {
    fn raycast(&self, ray: &Ray, max_distance: Option<f32>) -> Option<RayHit> {
        let dir = ray.direction.as_dvec3().try_normalize()?;
        let origin = self.root + ray.origin.as_dvec3();
        let max_t = max_distance.map_or(UNBOUNDED_RAY_LENGTH, f64::from);

        let start_clearance = self.clearance(origin);
        if start_clearance <= 0.0 {
            // Start unter der Oberfläche: keine Rückseiten-Treffer
            return None;
        }

        // Senkrecht nach unten: Länge/Breite bleiben gleich
        if dir.x == 0.0 && dir.z == 0.0 {
            if dir.y >= 0.0 || start_clearance > max_t {
                return None;
            }
            return self.make_hit(origin, dir, start_clearance);
        }

        let mut t_prev = 0.0;
        let mut t = 0.0;
        let mut clearance = start_clearance;
        while clearance > 0.0 {
            if t >= max_t {
                return None;
            }
            t_prev = t;
            t = (t + (clearance * 0.5).clamp(MARCH_MIN_STEP, MARCH_MAX_STEP)).min(max_t);
            clearance = self.clearance(origin + dir * t);
        }

        let (mut lo, mut hi) = (t_prev, t);
        for _ in 0..REFINE_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            if self.clearance(origin + dir * mid) > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.make_hit(origin, dir, hi)
    }

    fn hit_to_geo(&self, point: Vec3, height_offset: f64) -> GeoPoint {
        let universe = self.root + point.as_dvec3();
        let wgs = self.universe_to_wgs84(universe);
        wgs.with_height(wgs.z + height_offset)
            .project_to(SpatialReference::WEB_MERCATOR)
    }

    fn geo_to_render(&self, geo: &GeoPoint) -> Vec3 {
        let wgs = geo.project_to(SpatialReference::WGS84);
        let universe = DVec3::new(
            (wgs.x - self.anchor.x) * self.meters_per_degree_longitude(),
            wgs.z,
            (wgs.y - self.anchor.y) * Self::meters_per_degree_latitude(),
        );
        (universe - self.root).as_vec3()
    }

    fn root_position(&self) -> DVec3 {
        self.root
    }

    fn viewer_position(&self) -> DVec3 {
        self.viewer
    }
}
