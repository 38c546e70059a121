//! State-Definitionen und Konstruktor für das Mittelpunkt-Mess-Werkzeug.

use super::super::common::{ElevationProbe, MeasureSession};
use crate::core::LinearUnit;
use crate::shared::MeasureOptions;

/// Anzeige-Label der planaren Summe.
pub(crate) const DISTANCE_LABEL: &str = "Distance";

/// Mittelpunkt-Mess-Werkzeug
pub struct MidpointMeasureTool {
    /// Marker, Render-Reihenfolge, Stops, Linie
    pub(crate) session: MeasureSession,
    /// Aktive Anzeigeeinheit
    pub(crate) unit: LinearUnit,
    /// Planare Summe zwischen aufeinanderfolgenden Stops
    pub(crate) total: f64,
    /// Segmente unterhalb dieser planaren Länge werden nicht halbiert
    pub(crate) threshold: f64,
    /// Boden-Snapping-Parameter
    pub(crate) probe: ElevationProbe,
}

impl MidpointMeasureTool {
    /// Erstellt das Werkzeug aus den Laufzeit-Optionen.
    pub fn new(options: &MeasureOptions) -> Self {
        Self {
            session: MeasureSession::new(options.line_width_multiplier, options.rebase_threshold),
            unit: options.default_unit,
            total: 0.0,
            threshold: options.midpoint_threshold,
            probe: ElevationProbe {
                probe_height: options.probe_height,
                elevation_offset: options.elevation_offset,
            },
        }
    }

    /// Planare Summe in der aktiven Einheit.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Halbierungs-Schwelle (planare Einheiten).
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for MidpointMeasureTool {
    fn default() -> Self {
        Self::new(&MeasureOptions::default())
    }
}
