//! Szenario-Replay: TOML-Skript mit Klicks, Einheitenwechseln und Zeitschritten
//! gegen den Referenz-Host abspielen und als JSON-Report ausgeben.

use std::path::Path;

use anyhow::Context;
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::app::{
    AppController, AppIntent, AppState, ClickOutcome, MeasureToolKind, PropSpawn, StateSnapshot,
};
use crate::core::{Ray, TerrainScene, TerrainSurface};
use crate::shared::MeasureOptions;

/// Starthöhe vertikaler Klick-Strahlen über dem Render-Ursprung.
const DEFAULT_CLICK_HEIGHT: f32 = 10_000.0;

fn default_click_height() -> f32 {
    DEFAULT_CLICK_HEIGHT
}

fn default_shift() -> bool {
    true
}

/// Gelände-Definition eines Szenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSpec {
    /// Länge des Ankers (Grad)
    pub anchor_longitude: f64,
    /// Breite des Ankers (Grad)
    pub anchor_latitude: f64,
    /// Geländeoberfläche
    #[serde(default)]
    pub surface: TerrainSurface,
    /// Streaming-Radius um den Betrachter (None = alles geladen)
    #[serde(default)]
    pub stream_radius: Option<f64>,
}

impl TerrainSpec {
    /// Baut die Referenz-Szene.
    pub fn build(&self) -> TerrainScene {
        TerrainScene::new(self.anchor_longitude, self.anchor_latitude, self.surface)
            .with_stream_radius(self.stream_radius)
    }
}

/// Ein Schritt des Szenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Klick mit beliebigem Strahl (Render-Space)
    Click {
        origin: [f32; 3],
        direction: [f32; 3],
        #[serde(default = "default_shift")]
        shift: bool,
    },
    /// Senkrechter Klick über Render-Position (x, z)
    ClickAt {
        x: f32,
        z: f32,
        #[serde(default = "default_click_height")]
        height: f32,
        #[serde(default = "default_shift")]
        shift: bool,
    },
    /// Einheit per Label ("Meters", "Kilometers", "Miles", "Feet")
    SetUnit { unit: String },
    /// Einheit per Linear-Unit-ID
    SetUnitId { unit_id: u32 },
    /// Messung löschen
    Clear,
    /// Werkzeug wechseln
    SelectTool { tool: MeasureToolKind },
    /// Betrachter versetzen (Universe-Space)
    MoveViewer { position: [f64; 3] },
    /// Objekt platzieren
    SpawnProp {
        name: String,
        longitude: f64,
        latitude: f64,
        #[serde(default)]
        info: Vec<String>,
        #[serde(default)]
        spawn_height: Option<f64>,
    },
    /// Zeit vorrücken
    AdvanceTime { seconds: f64 },
}

impl ScenarioStep {
    /// Kurzname für den Report.
    pub fn action_name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::ClickAt { .. } => "click_at",
            Self::SetUnit { .. } => "set_unit",
            Self::SetUnitId { .. } => "set_unit_id",
            Self::Clear => "clear",
            Self::SelectTool { .. } => "select_tool",
            Self::MoveViewer { .. } => "move_viewer",
            Self::SpawnProp { .. } => "spawn_prop",
            Self::AdvanceTime { .. } => "advance_time",
        }
    }

    /// Übersetzt den Schritt in einen App-Intent.
    pub fn to_intent(&self) -> AppIntent {
        match self {
            Self::Click {
                origin,
                direction,
                shift,
            } => AppIntent::SceneClicked {
                ray: Ray::new(Vec3::from_array(*origin), Vec3::from_array(*direction)),
                shift_held: *shift,
            },
            Self::ClickAt {
                x,
                z,
                height,
                shift,
            } => AppIntent::SceneClicked {
                ray: Ray::down(Vec3::new(*x, *height, *z)),
                shift_held: *shift,
            },
            Self::SetUnit { unit } => AppIntent::UnitSelected {
                label: unit.clone(),
            },
            Self::SetUnitId { unit_id } => AppIntent::UnitIdSelected { unit_id: *unit_id },
            Self::Clear => AppIntent::ClearRequested,
            Self::SelectTool { tool } => AppIntent::ToolSelected { kind: *tool },
            Self::MoveViewer { position } => AppIntent::ViewerMoved {
                position: DVec3::from_array(*position),
            },
            Self::SpawnProp {
                name,
                longitude,
                latitude,
                info,
                spawn_height,
            } => AppIntent::PropSpawnRequested {
                spawn: PropSpawn {
                    name: name.clone(),
                    longitude: *longitude,
                    latitude: *latitude,
                    info: info.clone(),
                    spawn_height: *spawn_height,
                },
            },
            Self::AdvanceTime { seconds } => AppIntent::TimeAdvanced { seconds: *seconds },
        }
    }
}

/// Vollständiges Szenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Gelände
    pub terrain: TerrainSpec,
    /// Startposition des Betrachters (Universe-Space)
    #[serde(default)]
    pub viewer: Option<[f64; 3]>,
    /// Abzuspielende Schritte
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// Ergebnis eines einzelnen Schritts.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// Index im Szenario
    pub index: usize,
    /// Aktion
    pub action: &'static str,
    /// Klick-Ergebnis (nur bei wirksamen Klicks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ClickOutcome>,
    /// Anzeigetexte des aktiven Werkzeugs nach dem Schritt
    pub texts: Vec<String>,
    /// Fehlermeldung, falls der Schritt scheiterte
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report eines Szenario-Laufs.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Ergebnisse pro Schritt
    pub steps: Vec<StepRecord>,
    /// Endzustand
    pub final_state: StateSnapshot,
}

impl ScenarioReport {
    /// Anzahl fehlgeschlagener Schritte.
    pub fn failed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.error.is_some()).count()
    }

    /// Report als formatiertes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Report konnte nicht serialisiert werden")
    }
}

impl Scenario {
    /// Parst ein Szenario aus TOML-Text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Szenario ist kein gültiges TOML")
    }

    /// Lädt ein Szenario aus einer Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
        let scenario = Self::parse(&content)
            .with_context(|| format!("Szenario fehlerhaft: {}", path.display()))?;
        log::info!(
            "Szenario geladen: {} ({} Schritte)",
            path.display(),
            scenario.steps.len()
        );
        Ok(scenario)
    }

    /// Spielt alle Schritte ab. Fehlgeschlagene Schritte werden protokolliert,
    /// der Lauf geht weiter.
    pub fn run(&self, options: MeasureOptions) -> ScenarioReport {
        let mut scene = self.terrain.build();
        if let Some(viewer) = self.viewer {
            scene.move_viewer(DVec3::from_array(viewer));
        }
        let mut state = AppState::new(scene, options);
        let mut controller = AppController::new();

        let mut records = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            state.last_outcome = None;
            let error = match controller.handle_intent(&mut state, step.to_intent()) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("Schritt {} ({}) fehlgeschlagen: {:#}", index, step.action_name(), e);
                    Some(format!("{:#}", e))
                }
            };
            records.push(StepRecord {
                index,
                action: step.action_name(),
                outcome: state.last_outcome,
                texts: state.display_texts(),
                error,
            });
        }

        log::info!("Szenario abgespielt: {}", state.status_text());
        ScenarioReport {
            steps: records,
            final_state: state.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SnapState;

    const SCENARIO: &str = r#"
        [terrain]
        anchor_longitude = 8.5
        anchor_latitude = 47.3

        [terrain.surface]
        base_height = 400.0

        [[steps]]
        action = "click_at"
        x = 0.0
        z = 0.0

        [[steps]]
        action = "click_at"
        x = 0.0
        z = 500.0
        shift = false

        [[steps]]
        action = "click_at"
        x = 0.0
        z = 1000.0

        [[steps]]
        action = "set_unit"
        unit = "Kilometers"

        [[steps]]
        action = "set_unit"
        unit = "Parsecs"

        [[steps]]
        action = "spawn_prop"
        name = "Stadion"
        longitude = 8.501
        latitude = 47.301
        info = ["Letzigrund"]

        [[steps]]
        action = "advance_time"
        seconds = 0.0
    "#;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::parse(SCENARIO).expect("Szenario erwartet");
        assert_eq!(scenario.steps.len(), 7);
        assert_eq!(scenario.terrain.surface.base_height, 400.0);
        assert_eq!(scenario.terrain.surface.amplitude, 0.0);
        assert!(matches!(
            scenario.steps[1],
            ScenarioStep::ClickAt { shift: false, height, .. } if height == DEFAULT_CLICK_HEIGHT
        ));
    }

    #[test]
    fn test_run_reports_outcomes_and_errors() {
        let scenario = Scenario::parse(SCENARIO).expect("Szenario erwartet");
        let report = scenario.run(MeasureOptions::default());

        assert_eq!(report.steps.len(), 7);
        assert!(matches!(report.steps[0].outcome, Some(ClickOutcome::FirstStop)));
        // Klick ohne Shift wird ignoriert
        assert!(report.steps[1].outcome.is_none());
        assert!(matches!(report.steps[2].outcome, Some(ClickOutcome::Segment(_))));
        assert!(report.steps[3].texts[0].ends_with(" km"));
        assert!(report.steps[4].error.is_some());
        assert_eq!(report.failed_steps(), 1);

        let tool = &report.final_state.tools[0];
        assert_eq!(tool.stops, 2);
        let prop = &report.final_state.props[0];
        assert_eq!(prop.state, SnapState::Snapped);
        assert!((prop.height - 400.5).abs() < 1e-3);

        let json = report.to_json().expect("JSON erwartet");
        assert!(json.contains("\"final_state\""));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Scenario::parse("[terrain]\nanchor_longitude = \"x\"").is_err());
    }
}
