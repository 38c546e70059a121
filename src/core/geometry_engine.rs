//! Referenz-Geometrie-Engine auf dem WGS84-Ellipsoid.

use geodesy::prelude::*;

use super::host::GeometryEngine;
use super::units::{convert_units, LinearUnit};
use super::{GeoPoint, SpatialReference, WGS84_SEMI_MAJOR_AXIS};

/// Inverse Abplattung von WGS84.
const WGS84_INVERSE_FLATTENING: f64 = 298.257_223_563;

/// Geodätische Distanzen über das inverse geodätische Problem auf WGS84.
pub struct EllipsoidGeometry {
    ellipsoid: Ellipsoid,
}

impl EllipsoidGeometry {
    /// Geometrie-Engine auf dem WGS84-Ellipsoid.
    pub fn wgs84() -> Self {
        Self {
            ellipsoid: Ellipsoid::new(WGS84_SEMI_MAJOR_AXIS, 1.0 / WGS84_INVERSE_FLATTENING),
        }
    }

    /// Geodätische Distanz in Metern.
    pub fn geodesic_meters(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let a = a.project_to(SpatialReference::WGS84);
        let b = b.project_to(SpatialReference::WGS84);
        if a.x == b.x && a.y == b.y {
            return 0.0;
        }
        let from = Coor2D::geo(a.y, a.x);
        let to = Coor2D::geo(b.y, b.x);
        let result = self.ellipsoid.geodesic_inv(&from, &to);
        let distance = result[2];
        if distance.is_finite() {
            distance
        } else {
            log::warn!(
                "Geodätische Distanz nicht konvergiert: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
                a.x,
                a.y,
                b.x,
                b.y
            );
            0.0
        }
    }
}

impl Default for EllipsoidGeometry {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl GeometryEngine for EllipsoidGeometry {
    fn geodesic_distance(&self, a: &GeoPoint, b: &GeoPoint, unit: LinearUnit) -> f64 {
        convert_units(self.geodesic_meters(a, b), LinearUnit::Meters, unit)
    }
}
