//! Core-Domänentypen: Geo-Punkte, Einheiten, Host-Schnittstellen, Referenz-Szene.

pub mod geo_point;
pub mod geometry_engine;
/// Host-Schnittstellen (Raycast, Projektion, Floating-Origin, Distanzen)
///
/// Die Werkzeuge hängen nur von diesen Traits ab:
/// - SceneHost: Physik-Raycast und Koordinaten-Transformationen
/// - GeometryEngine: geodätische und planare Distanzen
pub mod host;
pub mod terrain;
pub mod units;

pub use geo_point::{GeoPoint, SpatialReference, WGS84_SEMI_MAJOR_AXIS};
pub use geometry_engine::EllipsoidGeometry;
pub use host::{GeometryEngine, HostContext, Ray, RayHit, SceneHost};
pub use terrain::{TerrainScene, TerrainSurface};
pub use units::{convert_units, format_distance, LinearUnit, UnknownUnitError};
