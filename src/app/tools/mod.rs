//! Trait-basiertes Mess-Werkzeug-System.
//!
//! Jedes Werkzeug implementiert den `MeasureTool`-Trait und wird beim
//! `ToolManager` registriert. Reine Geometrie (Interpolation, Halbierung)
//! liegt jeweils in `geometry.rs`, Seiteneffekte (Marker, Snapping) in `lifecycle.rs`.

/// Gemeinsame Bausteine (Sitzung, Linie, Rebase, Boden-Snapping).
pub mod common;
/// Geodätisches Messen mit festem Interpolationsabstand und Terrain-Distanz.
pub mod geodesic;
/// MeasureTool-Trait — Schnittstelle für alle Mess-Werkzeuge.
mod measure_tool;
/// Mittelpunkt-Messen mit rekursiver Halbierung.
pub mod midpoint;

pub use measure_tool::MeasureTool;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{format_distance, LinearUnit};
use crate::shared::MeasureOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Auswählbare Mess-Werkzeuge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureToolKind {
    /// Geodätische + Terrain-Distanz mit festem Interpolationsabstand
    Geodesic,
    /// Planare Distanz mit rekursiver Mittelpunkt-Halbierung
    Midpoint,
}

/// Ergebnis eines Segments zwischen zwei Stops.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SegmentReport {
    /// Zuwachs der Haupt-Distanz in der aktiven Einheit
    pub distance_increment: f64,
    /// Zuwachs der Terrain-Distanz (nur geodätisches Werkzeug)
    pub terrain_increment: Option<f64>,
    /// Anzahl neu erzeugter Zwischenpunkte
    pub inserted_points: usize,
    /// Anzahl verworfener Marker (Render-Ursprung)
    pub discarded_points: usize,
    /// Angewendete Floating-Origin-Verschiebung
    pub rebase_delta: Option<Vec3>,
}

/// Rückgabe von `on_click` — was der Klick bewirkt hat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ClickOutcome {
    /// Raycast ohne Treffer, Klick verworfen
    Missed,
    /// Erster Stop einer Messung gesetzt
    FirstStop,
    /// Weiterer Stop gesetzt, Segment berechnet
    Segment(SegmentReport),
}

/// Eine Distanz-Anzeige (Label, Wert, Einheit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceReadout {
    /// Anzeige-Label
    pub label: &'static str,
    /// Wert in `unit`
    pub value: f64,
    /// Einheit des Werts
    pub unit: LinearUnit,
}

impl DistanceReadout {
    /// Formatierter Anzeigetext, z.B. "Geodesic distance: 12.5 km".
    pub fn text(&self) -> String {
        format_distance(self.label, self.value, self.unit)
    }
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Mess-Werkzeuge und den aktiven Werkzeug-Index.
pub struct ToolManager {
    tools: Vec<Box<dyn MeasureTool>>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new(&MeasureOptions::default())
    }
}

impl ToolManager {
    /// Erstellt einen ToolManager mit vorregistrierten Standard-Werkzeugen.
    ///
    /// Das geodätische Werkzeug ist anfangs aktiv.
    pub fn new(options: &MeasureOptions) -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(geodesic::GeodesicMeasureTool::new(options)));
        manager.register(Box::new(midpoint::MidpointMeasureTool::new(options)));
        manager.active_index = Some(0);
        manager
    }

    /// Registriert ein neues Werkzeug.
    pub fn register(&mut self, tool: Box<dyn MeasureTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Werkzeuge zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Werkzeuge zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Aktiviert das erste Werkzeug der angegebenen Art.
    ///
    /// Messungen des bisherigen Werkzeugs bleiben erhalten.
    pub fn activate(&mut self, kind: MeasureToolKind) -> bool {
        match self.tools.iter().position(|t| t.kind() == kind) {
            Some(index) => {
                self.active_index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Gibt den Index des aktiven Werkzeugs zurück.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Gibt eine Referenz auf das aktive Werkzeug zurück.
    pub fn active_tool(&self) -> Option<&dyn MeasureTool> {
        self.active_index.map(|i| self.tools[i].as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Werkzeug zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut dyn MeasureTool> {
        let i = self.active_index?;
        Some(self.tools[i].as_mut())
    }

    /// Werkzeug einer bestimmten Art.
    pub fn tool(&self, kind: MeasureToolKind) -> Option<&dyn MeasureTool> {
        self.tools
            .iter()
            .find(|t| t.kind() == kind)
            .map(|t| t.as_ref())
    }

    /// Alle Werkzeuge (mutabel), z.B. für Options-Übernahme.
    pub fn tools_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn MeasureTool>> + '_ {
        self.tools.iter_mut()
    }

    /// Alle Werkzeuge.
    pub fn tools(&self) -> impl Iterator<Item = &dyn MeasureTool> + '_ {
        self.tools.iter().map(|t| t.as_ref())
    }
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_registers_both_tools() {
        let manager = ToolManager::default();
        assert_eq!(manager.tool_count(), 2);
        assert_eq!(
            manager.active_tool().map(|t| t.kind()),
            Some(MeasureToolKind::Geodesic)
        );
    }

    #[test]
    fn test_activate_switches_tool() {
        let mut manager = ToolManager::default();
        assert!(manager.activate(MeasureToolKind::Midpoint));
        assert_eq!(manager.active_index(), Some(1));
        assert_eq!(
            manager.active_tool().map(|t| t.kind()),
            Some(MeasureToolKind::Midpoint)
        );
    }

    #[test]
    fn test_readout_text() {
        let readout = DistanceReadout {
            label: "Geodesic distance",
            value: 1.23456,
            unit: LinearUnit::Kilometers,
        };
        assert_eq!(readout.text(), "Geodesic distance: 1.235 km");
    }
}
