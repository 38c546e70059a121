//! Geodätisches Mess-Werkzeug: Stops per Klick, geodätische und
//! geländefolgende Distanz, Zwischenpunkte im festen Abstand.

mod geometry;
mod lifecycle;
mod state;

pub use geometry::{
    chain_distance, interpolate_render_positions, interpolation_segment_count,
    MAX_INTERPOLATION_SEGMENTS,
};
pub use state::GeodesicMeasureTool;
