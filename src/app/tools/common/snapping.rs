//! Boden-Snapping von Messpunkten per senkrechtem Raycast.

use glam::Vec3;

use super::session::FeaturePoint;
use crate::core::{HostContext, Ray};

/// Parameter für das Boden-Snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationProbe {
    /// Starthöhe des Strahls über dem Punkt
    pub probe_height: f32,
    /// Höhen-Offset für die abgeleitete Geo-Position
    pub elevation_offset: f64,
}

/// Setzt einen Punkt auf den Boden.
///
/// Der Strahl startet `probe_height` über dem Punkt und zeigt senkrecht nach unten.
/// Bei Treffer liegt die Render-Position auf dem Trefferpunkt und die Geo-Position
/// wird mit `elevation_offset` neu abgeleitet. Ohne Treffer bleibt der Punkt unverändert.
pub fn snap_to_ground(point: &mut FeaturePoint, host: &HostContext, probe: ElevationProbe) -> bool {
    let p = point.render_position;
    let ray = Ray::down(Vec3::new(p.x, p.y + probe.probe_height, p.z));
    match host.scene.raycast(&ray, None) {
        Some(hit) => {
            point.location = host.scene.hit_to_geo(hit.point, probe.elevation_offset);
            // Kein Y-Versatz im Render-Space: der Offset wirkt nur auf die Geo-Höhe.
            point.render_position = hit.point;
            true
        }
        None => {
            log::trace!(
                "Kein Boden unter ({:.1}, {:.1}, {:.1}) gefunden",
                p.x,
                p.y,
                p.z
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::session::PointKind;
    use super::*;
    use crate::app::tools::test_support::{flat_scene, geometry};
    use crate::core::GeoPoint;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_only_raises_geo_height() {
        let scene = flat_scene();
        let geo = geometry();
        let host = HostContext::new(&scene, &geo);
        let mut point = FeaturePoint {
            kind: PointKind::Interpolated,
            render_position: Vec3::new(50.0, 0.0, -30.0),
            location: GeoPoint::wgs84(0.0, 0.0, 0.0),
        };
        let probe = ElevationProbe {
            probe_height: 5000.0,
            elevation_offset: 20.0,
        };

        assert!(snap_to_ground(&mut point, &host, probe));
        assert_eq!(point.render_position.x, 50.0);
        assert_eq!(point.render_position.z, -30.0);
        assert_relative_eq!(point.render_position.y, 400.0, epsilon = 1e-3);
        assert_relative_eq!(point.location.z, 420.0, epsilon = 1e-3);
    }
}
