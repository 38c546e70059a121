//! Gemeinsame Bausteine der Mess-Werkzeuge: Sitzung, Linie, Rebase, Boden-Snapping.

pub mod rebase;
pub mod render_line;
pub mod session;
pub mod snapping;

pub use rebase::OriginTracker;
pub use render_line::RenderLine;
pub use session::{FeaturePoint, MeasureSession, PointId, PointKind};
pub use snapping::{snap_to_ground, ElevationProbe};
