//! Geographische Punkte und Projektion zwischen WGS84 und Web-Mercator.

use serde::{Deserialize, Serialize};

/// Große Halbachse des WGS84-Ellipsoids (Web-Mercator-Kugelradius).
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// Raumbezug (Well-Known-ID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpatialReference(pub u32);

impl SpatialReference {
    /// Geographisch WGS84 (Längen-/Breitengrad in Grad).
    pub const WGS84: SpatialReference = SpatialReference(4326);
    /// Web-Mercator (Meter), Raumbezug der Mess-Werkzeuge.
    pub const WEB_MERCATOR: SpatialReference = SpatialReference(3857);

    /// Well-Known-ID.
    pub fn wkid(self) -> u32 {
        self.0
    }
}

/// Punkt im geographischen Raum: (X/Länge, Y/Breite, Z/Höhe, Raumbezug).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Länge (Grad) bzw. Mercator-X (Meter)
    pub x: f64,
    /// Breite (Grad) bzw. Mercator-Y (Meter)
    pub y: f64,
    /// Höhe über dem Ellipsoid in Metern
    pub z: f64,
    /// Raumbezug der Koordinaten
    pub spatial_reference: SpatialReference,
}

impl GeoPoint {
    /// Erstellt einen Punkt in beliebigem Raumbezug.
    pub fn new(x: f64, y: f64, z: f64, spatial_reference: SpatialReference) -> Self {
        Self {
            x,
            y,
            z,
            spatial_reference,
        }
    }

    /// Erstellt einen WGS84-Punkt aus Länge/Breite (Grad) und Höhe.
    pub fn wgs84(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude, latitude, height, SpatialReference::WGS84)
    }

    /// Gibt eine Kopie mit geänderter Höhe zurück.
    pub fn with_height(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Projiziert den Punkt in den Ziel-Raumbezug.
    ///
    /// Unterstützt WGS84 ↔ Web-Mercator (sphärische Mercator-Formeln).
    /// Unbekannte Raumbezüge werden unverändert durchgereicht.
    pub fn project_to(self, target: SpatialReference) -> Self {
        if self.spatial_reference == target {
            return self;
        }
        match (self.spatial_reference, target) {
            (SpatialReference::WGS84, SpatialReference::WEB_MERCATOR) => {
                let x = WGS84_SEMI_MAJOR_AXIS * self.x.to_radians();
                let lat = self.y.to_radians();
                let y = WGS84_SEMI_MAJOR_AXIS
                    * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
                Self::new(x, y, self.z, target)
            }
            (SpatialReference::WEB_MERCATOR, SpatialReference::WGS84) => {
                let lon = (self.x / WGS84_SEMI_MAJOR_AXIS).to_degrees();
                let lat = (2.0 * (self.y / WGS84_SEMI_MAJOR_AXIS).exp().atan()
                    - std::f64::consts::FRAC_PI_2)
                    .to_degrees();
                Self::new(lon, lat, self.z, target)
            }
            (from, to) => {
                log::warn!(
                    "Keine Projektion von wkid {} nach wkid {} verfügbar",
                    from.wkid(),
                    to.wkid()
                );
                self
            }
        }
    }

    /// Planare 2D-Distanz (X/Y) im gemeinsamen Raumbezug.
    ///
    /// Der zweite Punkt wird vorher in den Raumbezug des ersten projiziert.
    pub fn planar_distance(&self, other: &GeoPoint) -> f64 {
        let other = other.project_to(self.spatial_reference);
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Arithmetisches Mittel der X/Y-Koordinaten, Höhe 0.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        let other = other.project_to(self.spatial_reference);
        GeoPoint::new(
            self.x + (other.x - self.x) / 2.0,
            self.y + (other.y - self.y) / 2.0,
            0.0,
            self.spatial_reference,
        )
    }
}
