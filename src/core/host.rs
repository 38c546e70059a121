//! Schnittstellen zum Host (Engine + Karten-SDK).
//!
//! Raycasting, Welt→Geo-Projektion, Floating-Origin und Distanzberechnung
//! gehören dem Host. Die Werkzeuge sprechen ausschließlich über diese Traits
//! mit ihm und sind dadurch ohne Engine testbar.

use glam::{DVec3, Vec3};

use super::{GeoPoint, LinearUnit};

/// Strahl im Render-Space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt
    pub origin: Vec3,
    /// Richtung (muss nicht normalisiert sein)
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Senkrecht nach unten gerichteter Strahl.
    pub fn down(origin: Vec3) -> Self {
        Self::new(origin, Vec3::NEG_Y)
    }
}

/// Treffer eines Raycasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Trefferpunkt im Render-Space
    pub point: Vec3,
    /// Distanz vom Strahl-Ursprung entlang der (normalisierten) Richtung
    pub distance: f32,
}

/// Szenen-Seite des Hosts: Physik-Raycast, Koordinaten-Transformationen, Floating-Origin.
pub trait SceneHost {
    /// Schneidet einen Strahl mit der geladenen Szenen-Geometrie.
    ///
    /// `max_distance = None` bedeutet unbegrenzte Reichweite.
    fn raycast(&self, ray: &Ray, max_distance: Option<f32>) -> Option<RayHit>;

    /// Projiziert einen Render-Space-Punkt in den Mess-Raumbezug (Web-Mercator)
    /// und addiert `height_offset` auf die Höhe.
    fn hit_to_geo(&self, point: Vec3, height_offset: f64) -> GeoPoint;

    /// Render-Position eines geographischen Punkts (Location-Komponente der Engine).
    fn geo_to_render(&self, location: &GeoPoint) -> Vec3;

    /// Aktuelle Universe-Position des Floating-Origins (High-Precision-Root).
    fn root_position(&self) -> DVec3;

    /// Aktuelle Universe-Position des Betrachters (Kamera).
    fn viewer_position(&self) -> DVec3;

    /// Universe-Position eines Render-Space-Punkts.
    fn universe_position(&self, render: Vec3) -> DVec3 {
        self.root_position() + render.as_dvec3()
    }
}

/// Geometrie-Seite des Hosts: Distanzen zwischen geographischen Punkten.
pub trait GeometryEngine {
    /// Geodätische Distanz (Ellipsoid, Kurventyp Geodesic) in der Zieleinheit.
    fn geodesic_distance(&self, a: &GeoPoint, b: &GeoPoint, unit: LinearUnit) -> f64;

    /// Planare Distanz im Raumbezug des ersten Punkts (Einheiten des Raumbezugs).
    fn planar_distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        a.planar_distance(b)
    }
}

/// Bündelt die beiden Host-Seiten für einen Werkzeug-Aufruf.
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    /// Szenen-Seite
    pub scene: &'a dyn SceneHost,
    /// Geometrie-Seite
    pub geometry: &'a dyn GeometryEngine,
}

impl<'a> HostContext<'a> {
    /// Erstellt einen Kontext aus Szene und Geometrie-Engine.
    pub fn new(scene: &'a dyn SceneHost, geometry: &'a dyn GeometryEngine) -> Self {
        Self { scene, geometry }
    }
}
