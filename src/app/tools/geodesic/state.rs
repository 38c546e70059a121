//! State-Definitionen und Konstruktor für das geodätische Mess-Werkzeug.

use super::super::common::{ElevationProbe, MeasureSession};
use crate::core::LinearUnit;
use crate::shared::MeasureOptions;

/// Anzeige-Label der geodätischen Summe.
pub(crate) const GEODESIC_LABEL: &str = "Geodesic distance";
/// Anzeige-Label der geländefolgenden Summe.
pub(crate) const TERRAIN_LABEL: &str = "Terrain distance";

/// Geodätisches Mess-Werkzeug
pub struct GeodesicMeasureTool {
    /// Marker, Render-Reihenfolge, Stops, Linie
    pub(crate) session: MeasureSession,
    /// Aktive Anzeigeeinheit beider Summen
    pub(crate) unit: LinearUnit,
    /// Summe der geodätischen Distanzen zwischen Stops
    pub(crate) geodesic_total: f64,
    /// Summe der Distanzen entlang der gesnappten Zwischenpunkte
    pub(crate) terrain_total: f64,
    /// Abstand der Zwischenpunkte in Metern
    pub(crate) interval: f64,
    /// Boden-Snapping-Parameter
    pub(crate) probe: ElevationProbe,
}

impl GeodesicMeasureTool {
    /// Erstellt das Werkzeug aus den Laufzeit-Optionen.
    pub fn new(options: &MeasureOptions) -> Self {
        Self {
            session: MeasureSession::new(options.line_width_multiplier, options.rebase_threshold),
            unit: options.default_unit,
            geodesic_total: 0.0,
            terrain_total: 0.0,
            interval: options.interpolation_interval,
            probe: ElevationProbe {
                probe_height: options.probe_height,
                elevation_offset: options.elevation_offset,
            },
        }
    }

    /// Geodätische Summe in der aktiven Einheit.
    pub fn geodesic_total(&self) -> f64 {
        self.geodesic_total
    }

    /// Geländefolgende Summe in der aktiven Einheit.
    pub fn terrain_total(&self) -> f64 {
        self.terrain_total
    }

    /// Interpolationsabstand in Metern.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl Default for GeodesicMeasureTool {
    fn default() -> Self {
        Self::new(&MeasureOptions::default())
    }
}
