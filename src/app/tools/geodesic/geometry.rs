//! Reine Geometrie des geodätischen Werkzeugs (ohne Seiteneffekte).

use glam::Vec3;

use crate::core::{GeoPoint, GeometryEngine, LinearUnit};

/// Obergrenze der Teilstrecken pro Segment (1000 km bei 100 m Abstand).
pub const MAX_INTERPOLATION_SEGMENTS: usize = 10_000;

/// Anzahl der Teilstrecken für eine Distanz: `floor(distance / interval)`.
///
/// Ungültige Eingaben (NaN, negativ, Intervall ≤ 0) ergeben 0.
/// Das Ergebnis ist auf `MAX_INTERPOLATION_SEGMENTS` begrenzt.
pub fn interpolation_segment_count(distance_m: f64, interval: f64) -> usize {
    if !distance_m.is_finite() || distance_m <= 0.0 || !interval.is_finite() || interval <= 0.0 {
        return 0;
    }
    let segments = (distance_m / interval).floor();
    if segments > MAX_INTERPOLATION_SEGMENTS as f64 {
        log::warn!(
            "Interpolation auf {} Teilstrecken begrenzt (Distanz {:.1} m, Abstand {})",
            MAX_INTERPOLATION_SEGMENTS,
            distance_m,
            interval
        );
        return MAX_INTERPOLATION_SEGMENTS;
    }
    segments as usize
}

/// Zwischenpunkte einer geraden Strecke im Render-Space.
///
/// Liefert `segments − 1` Punkte bei `k / segments` (k = 1 … segments − 1).
/// Nur X/Z werden interpoliert, Y ist 0 und wird erst beim Snapping gesetzt.
pub fn interpolate_render_positions(start: Vec3, end: Vec3, segments: usize) -> Vec<Vec3> {
    if segments < 2 {
        return Vec::new();
    }
    let dx = end.x - start.x;
    let dz = end.z - start.z;
    (1..segments)
        .map(|k| {
            let t = k as f32 / segments as f32;
            Vec3::new(start.x + dx * t, 0.0, start.z + dz * t)
        })
        .collect()
}

/// Summe der geodätischen Distanzen entlang einer Punktkette.
pub fn chain_distance(points: &[GeoPoint], unit: LinearUnit, geometry: &dyn GeometryEngine) -> f64 {
    points
        .windows(2)
        .map(|pair| geometry.geodesic_distance(&pair[0], &pair[1], unit))
        .sum()
}
