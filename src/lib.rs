//! Terrain Measure Library.
//! Mess-Werkzeuge (geodätisch, Mittelpunkt), Boden-Snapping und Referenz-Host
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod scenario;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ClickOutcome, MeasureTool, MeasureToolKind,
    ToolManager,
};
pub use core::{
    convert_units, EllipsoidGeometry, GeoPoint, GeometryEngine, HostContext, LinearUnit, Ray,
    SceneHost, SpatialReference, TerrainScene, TerrainSurface,
};
pub use scenario::{Scenario, ScenarioReport, ScenarioStep};
pub use shared::{GroundSnapOptions, MeasureOptions};
