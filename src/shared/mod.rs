//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und Binary gemeinsam nutzen.

pub mod options;

pub use options::{GroundSnapOptions, MeasureOptions};
pub use options::{INTERPOLATION_INTERVAL, MIDPOINT_THRESHOLD, REBASE_THRESHOLD};
