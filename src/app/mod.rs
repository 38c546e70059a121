//! Application-Layer: Controller, State, Events, Werkzeuge und Objekte.

pub mod command_log;
pub mod controller;
pub mod events;
/// Boden-Snapping platzierter Objekte (tick-getriebene Zustandsmaschine)
pub mod ground_snap;
pub mod handlers;
mod intent_mapping;
pub mod props;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, Werkzeuge, Objekte).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PropSpawn};
pub use ground_snap::{GroundSnapper, SnapState};
pub use props::{PlacedProp, PropLayer, PropSnapshot};
pub use state::{AppState, StateSnapshot, ToolSnapshot};
pub use tools::{
    ClickOutcome, DistanceReadout, MeasureTool, MeasureToolKind, SegmentReport, ToolManager,
};
