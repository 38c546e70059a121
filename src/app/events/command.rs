use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::app::tools::MeasureToolKind;
use crate::core::{LinearUnit, Ray};
use crate::shared::MeasureOptions;

/// Beschreibung eines zu platzierenden Objekts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpawn {
    /// Name des Objekts
    pub name: String,
    /// Länge in Grad (WGS84)
    pub longitude: f64,
    /// Breite in Grad (WGS84)
    pub latitude: f64,
    /// Info-Texte aus dem Feature
    #[serde(default)]
    pub info: Vec<String>,
    /// Abweichende Spawnhöhe (sonst aus den Optionen)
    #[serde(default)]
    pub spawn_height: Option<f64>,
}

/// Mutierende Commands, die der Controller zentral ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Messpunkt im aktiven Werkzeug setzen
    PlaceMeasurePoint { ray: Ray },
    /// Einheit aller Werkzeuge setzen
    SetUnit { unit: LinearUnit },
    /// Einheit per Anzeige-Label setzen
    SetUnitByLabel { label: String },
    /// Einheit per Linear-Unit-ID setzen
    SetUnitById { unit_id: u32 },
    /// Messung des aktiven Werkzeugs löschen
    ClearMeasurement,
    /// Aktives Werkzeug wechseln
    SelectTool { kind: MeasureToolKind },
    /// Betrachter (und Floating-Origin) versetzen
    MoveViewer { position: DVec3 },
    /// Linien aller Werkzeuge dem Floating-Origin nachführen
    FollowOrigin,
    /// Objekt platzieren
    SpawnProp { spawn: PropSpawn },
    /// Boden-Snapping aller Objekte takten
    AdvanceTime { seconds: f64 },
    /// Optionen übernehmen
    ApplyOptions { options: Box<MeasureOptions> },
}
