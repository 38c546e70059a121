//! Rekursive Halbierung eines Segments (reine Geometrie).

use glam::Vec3;

use crate::core::GeoPoint;

/// Maximale Rekursionstiefe der Halbierung.
pub const MAX_BISECTION_DEPTH: usize = 20;

/// Punkt mit Render-Position und geographischer Lage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Position im Render-Space
    pub render: Vec3,
    /// Geographische Lage
    pub location: GeoPoint,
}

impl Waypoint {
    /// Mittelpunkt: Render-Mittel, Geo-Mittel mit Höhe 0.
    pub fn midpoint(&self, other: &Waypoint) -> Waypoint {
        Waypoint {
            render: self.render + (other.render - self.render) / 2.0,
            location: self.location.midpoint(&other.location),
        }
    }
}

/// Halbiert `start → end` rekursiv, solange die Distanz ≥ `threshold` ist.
///
/// Liefert die erzeugten Mittelpunkte in Pfad-Reihenfolge (ohne Endpunkte).
/// Nicht-endliche Distanzen und die Tiefe `MAX_BISECTION_DEPTH` beenden die Rekursion.
pub fn bisect_segment<F>(start: &Waypoint, end: &Waypoint, threshold: f64, distance: F) -> Vec<Waypoint>
where
    F: Fn(&GeoPoint, &GeoPoint) -> f64,
{
    let mut midpoints = Vec::new();
    bisect_into(start, end, threshold, &distance, 0, &mut midpoints);
    midpoints
}

fn bisect_into<F>(
    start: &Waypoint,
    end: &Waypoint,
    threshold: f64,
    distance: &F,
    depth: usize,
    out: &mut Vec<Waypoint>,
) where
    F: Fn(&GeoPoint, &GeoPoint) -> f64,
{
    let d = distance(&start.location, &end.location);
    if !d.is_finite() || d < threshold {
        return;
    }
    if depth >= MAX_BISECTION_DEPTH {
        log::warn!("Halbierung bei Tiefe {} abgebrochen (Distanz {:.1})", depth, d);
        return;
    }
    let mid = start.midpoint(end);
    bisect_into(start, &mid, threshold, distance, depth + 1, out);
    out.push(mid);
    bisect_into(&mid, end, threshold, distance, depth + 1, out);
}
