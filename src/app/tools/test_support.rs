//! Gemeinsame Test-Fixtures der Mess-Werkzeuge.

use glam::Vec3;

use crate::core::{EllipsoidGeometry, Ray, TerrainScene, TerrainSurface};

/// Flaches Gelände auf 400 m bei Zürich.
pub(crate) fn flat_scene() -> TerrainScene {
    TerrainScene::new(8.5, 47.3, TerrainSurface::flat(400.0))
}

/// Hügeliges Gelände (±150 m, 800 m Wellenlänge).
pub(crate) fn hilly_scene() -> TerrainScene {
    TerrainScene::new(
        8.5,
        47.3,
        TerrainSurface {
            base_height: 400.0,
            amplitude: 150.0,
            wavelength: 800.0,
        },
    )
}

/// WGS84-Geometrie-Engine.
pub(crate) fn geometry() -> EllipsoidGeometry {
    EllipsoidGeometry::wgs84()
}

/// Senkrechter Klick-Strahl über Render-Position (x, z).
pub(crate) fn click_ray(x: f32, z: f32) -> Ray {
    Ray::down(Vec3::new(x, 3000.0, z))
}
