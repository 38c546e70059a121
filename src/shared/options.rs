//! Zentrale Konfiguration der Mess- und Platzierungs-Werkzeuge.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::LinearUnit;

// ── Geodätisches Messen ─────────────────────────────────────────────

/// Abstand der Interpolationspunkte entlang einer Messstrecke (Meter).
pub const INTERPOLATION_INTERVAL: f64 = 100.0;
/// Höhen-Offset beim Boden-Snapping von Messpunkten (Meter).
pub const ELEVATION_OFFSET: f64 = 20.0;
/// Starthöhe des Boden-Raycasts über dem Punkt (beliebig, muss über dem Gelände liegen).
pub const PROBE_HEIGHT: f32 = 5000.0;
/// Linienbreiten-Multiplikator der gerenderten Messlinie.
pub const LINE_WIDTH_MULTIPLIER: f32 = 5.0;

// ── Mittelpunkt-Messen ──────────────────────────────────────────────

/// Segmente unterhalb dieser planaren Länge werden nicht weiter halbiert.
pub const MIDPOINT_THRESHOLD: f64 = 200.0;

// ── Floating-Origin ─────────────────────────────────────────────────

/// Drift des Floating-Origins, ab der die Linie verschoben wird.
pub const REBASE_THRESHOLD: f32 = 1.0;

// ── Boden-Snapping von Objekten ─────────────────────────────────────

/// Standard-Spawnhöhe platzierter Objekte (begrenzt die Raycast-Länge).
pub const SNAP_SPAWN_HEIGHT: f64 = 10_000.0;
/// Aktivierungsdistanz Betrachter ↔ Objekt, ab der gesnappt wird.
pub const SNAP_ACTIVATION_DISTANCE: f64 = 300_000.0;
/// Wartezeit zwischen zwei Snap-Versuchen in Sekunden.
pub const SNAP_POLL_INTERVAL_SECS: f64 = 0.3;
/// Maximale Anzahl Snap-Versuche.
pub const SNAP_MAX_ATTEMPTS: u32 = 300;
/// Höhenzugabe nach erfolgreichem Snap (Meter).
pub const SNAP_HEIGHT_OFFSET: f64 = 0.5;

// ── Boden-Snapping-Optionen ─────────────────────────────────────────

/// Konfiguration des Boden-Snappings platzierter Objekte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroundSnapOptions {
    /// Spawnhöhe neuer Objekte (Meter)
    pub spawn_height: f64,
    /// Aktivierungsdistanz Betrachter ↔ Objekt (Meter)
    pub activation_distance: f64,
    /// Wartezeit zwischen zwei Versuchen (Sekunden)
    pub poll_interval_secs: f64,
    /// Maximale Versuche bis zum Aufgeben
    pub max_attempts: u32,
    /// Höhenzugabe nach erfolgreichem Snap (Meter)
    pub height_offset: f64,
}

impl Default for GroundSnapOptions {
    fn default() -> Self {
        Self {
            spawn_height: SNAP_SPAWN_HEIGHT,
            activation_distance: SNAP_ACTIVATION_DISTANCE,
            poll_interval_secs: SNAP_POLL_INTERVAL_SECS,
            max_attempts: SNAP_MAX_ATTEMPTS,
            height_offset: SNAP_HEIGHT_OFFSET,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Werkzeuge.
/// Wird als `terrain_measure.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasureOptions {
    // ── Messen ──────────────────────────────────────────────────
    /// Einheit beim Start
    #[serde(default)]
    pub default_unit: LinearUnit,
    /// Interpolationsabstand des geodätischen Messwerkzeugs (Meter)
    pub interpolation_interval: f64,
    /// Halbierungs-Schwelle des Mittelpunkt-Werkzeugs (planare Einheiten)
    pub midpoint_threshold: f64,
    /// Höhen-Offset für gesnappte Messpunkte (Meter)
    pub elevation_offset: f64,
    /// Starthöhe des Boden-Raycasts über dem Punkt
    pub probe_height: f32,
    /// Linienbreiten-Multiplikator
    #[serde(default = "default_line_width_multiplier")]
    pub line_width_multiplier: f32,

    // ── Floating-Origin ─────────────────────────────────────────
    /// Drift-Schwelle für das Verschieben der Linie
    pub rebase_threshold: f32,

    // ── Objekte ─────────────────────────────────────────────────
    /// Boden-Snapping platzierter Objekte
    #[serde(default)]
    pub ground_snap: GroundSnapOptions,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            default_unit: LinearUnit::Meters,
            interpolation_interval: INTERPOLATION_INTERVAL,
            midpoint_threshold: MIDPOINT_THRESHOLD,
            elevation_offset: ELEVATION_OFFSET,
            probe_height: PROBE_HEIGHT,
            line_width_multiplier: LINE_WIDTH_MULTIPLIER,

            rebase_threshold: REBASE_THRESHOLD,

            ground_snap: GroundSnapOptions::default(),
        }
    }
}

/// Serde-Default für `line_width_multiplier` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_line_width_multiplier() -> f32 {
    LINE_WIDTH_MULTIPLIER
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<MeasureOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("terrain_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("terrain_measure.toml")
    }

    /// Ersetzt unbrauchbare Werte (≤ 0, NaN) durch Standardwerte.
    pub fn sanitized(mut self) -> Self {
        if !is_positive(self.interpolation_interval) {
            log::warn!(
                "Ungültiger Interpolationsabstand {}, verwende {}",
                self.interpolation_interval,
                INTERPOLATION_INTERVAL
            );
            self.interpolation_interval = INTERPOLATION_INTERVAL;
        }
        if !is_positive(self.midpoint_threshold) {
            log::warn!(
                "Ungültige Halbierungs-Schwelle {}, verwende {}",
                self.midpoint_threshold,
                MIDPOINT_THRESHOLD
            );
            self.midpoint_threshold = MIDPOINT_THRESHOLD;
        }
        if self.ground_snap.poll_interval_secs.is_nan() || self.ground_snap.poll_interval_secs < 0.0 {
            self.ground_snap.poll_interval_secs = SNAP_POLL_INTERVAL_SECS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = MeasureOptions::default();
        assert_eq!(opts.interpolation_interval, 100.0);
        assert_eq!(opts.midpoint_threshold, 200.0);
        assert_eq!(opts.elevation_offset, 20.0);
        assert_eq!(opts.probe_height, 5000.0);
        assert_eq!(opts.rebase_threshold, 1.0);
        assert_eq!(opts.ground_snap.max_attempts, 300);
        assert_eq!(opts.ground_snap.poll_interval_secs, 0.3);
        assert_eq!(opts.default_unit, LinearUnit::Meters);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut opts = MeasureOptions::default();
        opts.default_unit = LinearUnit::Miles;
        opts.ground_snap.activation_distance = 1234.0;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: MeasureOptions = toml::from_str(&text).expect("Parse erwartet");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
            interpolation_interval = 50.0
            midpoint_threshold = 120.0
            elevation_offset = 10.0
            probe_height = 3000.0
            rebase_threshold = 2.0
        "#;
        let parsed: MeasureOptions = toml::from_str(text).expect("Parse erwartet");
        assert_eq!(parsed.interpolation_interval, 50.0);
        assert_eq!(parsed.line_width_multiplier, LINE_WIDTH_MULTIPLIER);
        assert_eq!(parsed.ground_snap, GroundSnapOptions::default());
        assert_eq!(parsed.default_unit, LinearUnit::Meters);
    }

    #[test]
    fn test_sanitized_replaces_invalid_values() {
        let mut opts = MeasureOptions::default();
        opts.interpolation_interval = 0.0;
        opts.midpoint_threshold = f64::NAN;
        let opts = opts.sanitized();
        assert_eq!(opts.interpolation_interval, INTERPOLATION_INTERVAL);
        assert_eq!(opts.midpoint_threshold, MIDPOINT_THRESHOLD);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let opts = MeasureOptions::load_from_file(std::path::Path::new(
            "/definitely/not/existing/terrain_measure.toml",
        ));
        assert_eq!(opts, MeasureOptions::default());
    }
}
