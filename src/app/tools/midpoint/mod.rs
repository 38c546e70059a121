//! Mittelpunkt-Mess-Werkzeug: halbiert jedes neue Segment rekursiv und
//! summiert die planare Distanz zwischen den Stops.

mod geometry;
mod lifecycle;
mod state;

pub use geometry::{bisect_segment, Waypoint, MAX_BISECTION_DEPTH};
pub use state::MidpointMeasureTool;

#[cfg(test)]
mod tests;
