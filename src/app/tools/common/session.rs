//! Mess-Sitzung: Marker, Render-Reihenfolge, Stop-Stapel, Linie und Floating-Origin.
//!
//! Jedes Mess-Werkzeug besitzt genau eine Sitzung. Marker werden in einer
//! Arena gehalten (`PointId` = Index); zerstörte Marker hinterlassen `None`.

use glam::{DVec3, Vec3};

use super::rebase::OriginTracker;
use super::render_line::RenderLine;
use super::snapping::{snap_to_ground, ElevationProbe};
use crate::core::{GeoPoint, HostContext};

/// Index eines Markers in der Sitzungs-Arena.
pub type PointId = usize;

/// Art eines Linienpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PointKind {
    /// Vom Benutzer gesetzter Messpunkt
    Stop,
    /// Synthetischer Zwischenpunkt
    Interpolated,
}

/// Gerenderter Marker mit Render-Position und geographischer Lage.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FeaturePoint {
    /// Stop oder Zwischenpunkt
    pub kind: PointKind,
    /// Position im Render-Space
    pub render_position: Vec3,
    /// Geographische Lage (Mess-Raumbezug)
    pub location: GeoPoint,
}

/// Zustand einer laufenden Messung.
#[derive(Debug, Clone)]
pub struct MeasureSession {
    markers: Vec<Option<FeaturePoint>>,
    sequence: Vec<PointId>,
    stops: Vec<PointId>,
    line: RenderLine,
    origin: OriginTracker,
}

impl MeasureSession {
    /// Erstellt eine leere Sitzung.
    pub fn new(line_width_multiplier: f32, rebase_threshold: f32) -> Self {
        Self {
            markers: Vec::new(),
            sequence: Vec::new(),
            stops: Vec::new(),
            line: RenderLine::new(line_width_multiplier),
            origin: OriginTracker::new(rebase_threshold),
        }
    }

    /// Erzeugt einen neuen Marker und gibt seine ID zurück.
    pub fn spawn(&mut self, kind: PointKind, render_position: Vec3, location: GeoPoint) -> PointId {
        self.markers.push(Some(FeaturePoint {
            kind,
            render_position,
            location,
        }));
        self.markers.len() - 1
    }

    /// Marker per ID (None wenn zerstört oder unbekannt).
    pub fn point(&self, id: PointId) -> Option<&FeaturePoint> {
        self.markers.get(id).and_then(Option::as_ref)
    }

    /// Mutabler Marker per ID.
    pub fn point_mut(&mut self, id: PointId) -> Option<&mut FeaturePoint> {
        self.markers.get_mut(id).and_then(Option::as_mut)
    }

    /// Setzt einen Marker per senkrechtem Raycast auf den Boden.
    pub fn snap_point(&mut self, id: PointId, host: &HostContext, probe: ElevationProbe) -> bool {
        self.point_mut(id)
            .is_some_and(|point| snap_to_ground(point, host, probe))
    }

    /// Legt einen Stop auf den Stapel.
    pub fn push_stop(&mut self, id: PointId) {
        self.stops.push(id);
    }

    /// Zuletzt gesetzter, noch existierender Stop.
    pub fn previous_stop(&self) -> Option<PointId> {
        let last = *self.stops.last()?;
        if self.point(last).is_none() {
            log::warn!("Letzter Stop {} wurde zerstört, Messung beginnt neu", last);
            return None;
        }
        Some(last)
    }

    /// Anzahl gesetzter Stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Hängt einen Marker an die Render-Reihenfolge an.
    pub fn append(&mut self, id: PointId) {
        self.sequence.push(id);
    }

    /// Hängt einen Marker an, sofern er nicht bereits das letzte Element ist.
    pub fn append_unless_tail(&mut self, id: PointId) {
        if self.sequence.last() != Some(&id) {
            self.sequence.push(id);
        }
    }

    /// IDs in Render-Reihenfolge.
    pub fn sequence(&self) -> &[PointId] {
        &self.sequence
    }

    /// Marker in Render-Reihenfolge.
    pub fn feature_points(&self) -> impl Iterator<Item = &FeaturePoint> + '_ {
        self.sequence.iter().filter_map(|&id| self.point(id))
    }

    /// Aktuelle Linie.
    pub fn line(&self) -> &RenderLine {
        &self.line
    }

    /// Baut die Linie aus der Render-Reihenfolge neu auf.
    ///
    /// Marker exakt im Render-Ursprung gelten als ungültig: sie werden
    /// zerstört und aus der Reihenfolge entfernt. Gibt deren Anzahl zurück.
    pub fn rebuild_line(&mut self) -> usize {
        let mut kept = Vec::with_capacity(self.sequence.len());
        let mut discarded = 0;
        for &id in &self.sequence {
            let Some(point) = self.markers.get(id).copied().flatten() else {
                continue;
            };
            if point.render_position == Vec3::ZERO {
                self.markers[id] = None;
                discarded += 1;
                continue;
            }
            kept.push(id);
        }
        self.sequence = kept;

        let positions = self.feature_points().map(|p| p.render_position).collect();
        self.line.set_positions(positions);
        if discarded > 0 {
            log::debug!("{} Marker im Render-Ursprung verworfen", discarded);
        }
        discarded
    }

    /// Verschiebt Linie und Marker, wenn der Floating-Origin zu weit gewandert ist.
    ///
    /// Gibt das angewendete Delta zurück.
    pub fn rebase(&mut self, root: DVec3) -> Option<Vec3> {
        let delta = self.origin.observe(root)?;
        self.line.translate(delta);
        for point in self.markers.iter_mut().flatten() {
            point.render_position += delta;
        }
        log::info!(
            "Linie verschoben um ({:.2}, {:.2}, {:.2})",
            delta.x,
            delta.y,
            delta.z
        );
        Some(delta)
    }

    /// Zuletzt gespeicherter Floating-Origin.
    pub fn last_root(&self) -> Option<DVec3> {
        self.origin.last_root()
    }

    /// Setzt den Referenz-Origin ohne zu verschieben.
    pub fn anchor_origin(&mut self, root: DVec3) {
        self.origin.reset(root);
    }

    /// Zerstört alle Marker und leert Reihenfolge, Stops und Linie.
    ///
    /// Gibt die Anzahl zerstörter Marker zurück.
    pub fn clear(&mut self) -> usize {
        let destroyed = self.markers.iter().flatten().count();
        self.markers.clear();
        self.sequence.clear();
        self.stops.clear();
        self.line.clear();
        destroyed
    }

    /// Anzahl existierender Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.iter().flatten().count()
    }
}
