//! Platzierte Objekte (Bäume, Stadien) mit Info-Texten und Boden-Snapping.

use serde::Serialize;

use super::ground_snap::{GroundSnapper, SnapState};
use crate::core::{GeoPoint, SceneHost};
use crate::shared::GroundSnapOptions;

/// Ein platziertes Objekt eines Feature-Layers.
#[derive(Debug, Clone)]
pub struct PlacedProp {
    name: String,
    info: Vec<String>,
    location: GeoPoint,
    spawn_height: f64,
    snapper: GroundSnapper,
}

impl PlacedProp {
    /// Erzeugt ein Objekt auf Spawnhöhe über (Länge, Breite).
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64, options: &GroundSnapOptions) -> Self {
        Self {
            name: name.into(),
            info: Vec::new(),
            location: GeoPoint::wgs84(longitude, latitude, options.spawn_height),
            spawn_height: options.spawn_height,
            snapper: GroundSnapper::new(options),
        }
    }

    /// Hängt einen Info-Text an.
    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info.push(info.into());
    }

    /// Legt die Spawnhöhe fest (begrenzt die Raycast-Länge).
    pub fn set_spawn_height(&mut self, spawn_height: f64) {
        self.spawn_height = spawn_height;
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Info-Texte
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Aktuelle Lage (WGS84)
    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Spawnhöhe
    pub fn spawn_height(&self) -> f64 {
        self.spawn_height
    }

    /// Snap-Zustand
    pub fn snap_state(&self) -> SnapState {
        self.snapper.state()
    }

    /// Bisherige Snap-Versuche
    pub fn snap_attempts(&self) -> u32 {
        self.snapper.attempts()
    }

    /// Rückt das Boden-Snapping um `elapsed` Sekunden vor.
    pub fn tick(&mut self, elapsed: f64, scene: &dyn SceneHost) -> SnapState {
        self.snapper
            .tick(elapsed, &mut self.location, self.spawn_height, scene)
    }
}

/// Serialisierbare Momentaufnahme eines Objekts.
#[derive(Debug, Clone, Serialize)]
pub struct PropSnapshot {
    /// Name
    pub name: String,
    /// Info-Texte
    pub info: Vec<String>,
    /// Länge in Grad
    pub longitude: f64,
    /// Breite in Grad
    pub latitude: f64,
    /// Höhe in Metern
    pub height: f64,
    /// Snap-Zustand
    pub state: SnapState,
    /// Snap-Versuche
    pub attempts: u32,
}

impl From<&PlacedProp> for PropSnapshot {
    fn from(prop: &PlacedProp) -> Self {
        Self {
            name: prop.name.clone(),
            info: prop.info.clone(),
            longitude: prop.location.x,
            latitude: prop.location.y,
            height: prop.location.z,
            state: prop.snap_state(),
            attempts: prop.snap_attempts(),
        }
    }
}

/// Sammlung platzierter Objekte, gemeinsam getaktet.
#[derive(Debug, Clone, Default)]
pub struct PropLayer {
    props: Vec<PlacedProp>,
}

impl PropLayer {
    /// Leerer Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Objekt hinzu und gibt seinen Index zurück.
    pub fn add(&mut self, prop: PlacedProp) -> usize {
        log::debug!(
            "Objekt '{}' platziert bei ({:.5}, {:.5})",
            prop.name,
            prop.location.x,
            prop.location.y
        );
        self.props.push(prop);
        self.props.len() - 1
    }

    /// Objekt per Index.
    pub fn get(&self, index: usize) -> Option<&PlacedProp> {
        self.props.get(index)
    }

    /// Alle Objekte.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedProp> + '_ {
        self.props.iter()
    }

    /// Anzahl Objekte.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte platziert sind.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Taktet alle Objekte; gibt die Anzahl noch wartender Objekte zurück.
    pub fn tick(&mut self, elapsed: f64, scene: &dyn SceneHost) -> usize {
        self.props
            .iter_mut()
            .map(|prop| prop.tick(elapsed, scene))
            .filter(|state| *state == SnapState::Waiting)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TerrainScene, TerrainSurface};

    #[test]
    fn test_prop_info_and_spawn_height() {
        let mut prop = PlacedProp::new("Eiche", 8.5, 47.3, &GroundSnapOptions::default());
        prop.set_info("Quercus robur");
        prop.set_info("Alter: 120");
        prop.set_spawn_height(2000.0);
        assert_eq!(prop.info(), &["Quercus robur".to_string(), "Alter: 120".to_string()]);
        assert_eq!(prop.spawn_height(), 2000.0);
        assert_eq!(prop.location().z, 10_000.0);
        assert_eq!(prop.snap_state(), SnapState::Waiting);
    }

    #[test]
    fn test_layer_tick_counts_waiting_props() {
        let scene = TerrainScene::new(8.5, 47.3, TerrainSurface::flat(300.0))
            .with_stream_radius(Some(5_000.0));
        let options = GroundSnapOptions::default();
        let mut layer = PropLayer::new();
        layer.add(PlacedProp::new("nah", 8.501, 47.3, &options));
        layer.add(PlacedProp::new("fern", 9.5, 47.3, &options));

        assert_eq!(layer.tick(0.0, &scene), 1);
        let near = layer.get(0).expect("Objekt erwartet");
        assert_eq!(near.snap_state(), SnapState::Snapped);
        assert!((near.location().z - 300.5).abs() < 1e-3);
        assert_eq!(layer.get(1).map(|p| p.snap_state()), Some(SnapState::Waiting));

        let snapshot = PropSnapshot::from(near);
        assert_eq!(snapshot.name, "nah");
        assert_eq!(snapshot.attempts, 1);
    }
}
