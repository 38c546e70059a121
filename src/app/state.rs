//! Hauptzustand der Anwendung: Referenz-Host, Werkzeuge, Objekte, Optionen.

use serde::Serialize;

use super::props::{PropLayer, PropSnapshot};
use super::tools::{ClickOutcome, MeasureTool, MeasureToolKind, ToolManager};
use super::CommandLog;
use crate::core::{EllipsoidGeometry, HostContext, LinearUnit, TerrainScene};
use crate::shared::MeasureOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Szene des Referenz-Hosts (Gelände, Betrachter, Floating-Origin)
    pub scene: TerrainScene,
    /// Geometrie-Engine für Distanzen
    pub geometry: EllipsoidGeometry,
    /// Registrierte Mess-Werkzeuge
    pub tools: ToolManager,
    /// Platzierte Objekte mit Boden-Snapping
    pub props: PropLayer,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: MeasureOptions,
    /// Ergebnis des letzten Messklicks
    pub last_outcome: Option<ClickOutcome>,
    /// Vergangene Zeit in Sekunden
    pub elapsed: f64,
}

impl AppState {
    /// Erstellt einen App-State über einer Szene.
    pub fn new(scene: TerrainScene, options: MeasureOptions) -> Self {
        Self {
            scene,
            geometry: EllipsoidGeometry::wgs84(),
            tools: ToolManager::new(&options),
            props: PropLayer::new(),
            command_log: CommandLog::new(),
            options,
            last_outcome: None,
            elapsed: 0.0,
        }
    }

    /// Host-Kontext für Werkzeug-Aufrufe.
    pub fn host(&self) -> HostContext<'_> {
        HostContext::new(&self.scene, &self.geometry)
    }

    /// Statustext des aktiven Werkzeugs.
    pub fn status_text(&self) -> String {
        match self.tools.active_tool() {
            Some(tool) => format!("{}: {}", tool.name(), tool.status_text()),
            None => "Kein Werkzeug aktiv".to_string(),
        }
    }

    /// Anzeigetexte des aktiven Werkzeugs.
    pub fn display_texts(&self) -> Vec<String> {
        self.tools
            .active_tool()
            .map(|tool| tool.display_texts())
            .unwrap_or_default()
    }

    /// Serialisierbare Momentaufnahme aller Werkzeuge und Objekte.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            active_tool: self.tools.active_tool().map(|t| t.kind()),
            tools: self.tools.tools().map(ToolSnapshot::from_tool).collect(),
            props: self.props.iter().map(PropSnapshot::from).collect(),
            commands_executed: self.command_log.total(),
            elapsed: self.elapsed,
        }
    }
}

/// Momentaufnahme eines Werkzeugs.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSnapshot {
    /// Werkzeug-Art
    pub kind: MeasureToolKind,
    /// Anzeigeeinheit
    pub unit: LinearUnit,
    /// Anzeigetexte
    pub texts: Vec<String>,
    /// Anzahl Stops
    pub stops: usize,
    /// Linienpunkte im Render-Space
    pub line: Vec<[f32; 3]>,
    /// Linienbreiten-Multiplikator
    pub line_width: f32,
}

impl ToolSnapshot {
    fn from_tool(tool: &dyn MeasureTool) -> Self {
        Self {
            kind: tool.kind(),
            unit: tool.unit(),
            texts: tool.display_texts(),
            stops: tool.session().stop_count(),
            line: tool.line().positions().iter().map(|p| p.to_array()).collect(),
            line_width: tool.line().width_multiplier(),
        }
    }
}

/// Momentaufnahme des gesamten Zustands (z.B. für JSON-Reports).
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    /// Aktives Werkzeug
    pub active_tool: Option<MeasureToolKind>,
    /// Alle Werkzeuge
    pub tools: Vec<ToolSnapshot>,
    /// Alle Objekte
    pub props: Vec<PropSnapshot>,
    /// Anzahl ausgeführter Commands
    pub commands_executed: usize,
    /// Vergangene Zeit in Sekunden
    pub elapsed: f64,
}
