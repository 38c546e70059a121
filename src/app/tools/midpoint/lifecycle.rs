//! Lifecycle-Methoden des MidpointMeasureTool (MeasureTool-Implementierung).

use super::super::common::{MeasureSession, PointId, PointKind};
use super::super::{ClickOutcome, DistanceReadout, MeasureTool, MeasureToolKind, SegmentReport};
use super::geometry::{bisect_segment, Waypoint};
use super::state::{MidpointMeasureTool, DISTANCE_LABEL};
use crate::core::{convert_units, HostContext, LinearUnit, Ray};
use crate::shared::MeasureOptions;

impl MidpointMeasureTool {
    fn waypoint(&self, id: PointId) -> Option<Waypoint> {
        self.session.point(id).map(|p| Waypoint {
            render: p.render_position,
            location: p.location,
        })
    }

    /// Verarbeitet das Segment vom vorherigen zum neuen Stop.
    fn measure_segment(&mut self, prev: PointId, stop: PointId, host: &HostContext) -> SegmentReport {
        let (Some(start), Some(end)) = (self.waypoint(prev), self.waypoint(stop)) else {
            return SegmentReport::default();
        };

        // Planare Web-Mercator-Einheiten werden als Meter gewertet
        let planar = host
            .geometry
            .planar_distance(&start.location, &end.location);
        let increment = convert_units(planar, LinearUnit::Meters, self.unit);
        self.total += increment;

        let geometry = host.geometry;
        let midpoints = bisect_segment(&start, &end, self.threshold, |a, b| {
            geometry.planar_distance(a, b)
        });

        self.session.append_unless_tail(prev);
        for waypoint in &midpoints {
            let id = self
                .session
                .spawn(PointKind::Interpolated, waypoint.render, waypoint.location);
            self.session.append(id);
        }
        self.session.append(stop);

        // Alle Punkte der Linie erneut auf den Boden setzen
        let sequence = self.session.sequence().to_vec();
        let snapped = sequence
            .iter()
            .filter(|&&id| self.session.snap_point(id, host, self.probe))
            .count();
        log::trace!("{} von {} Punkten gesnappt", snapped, sequence.len());

        let discarded = self.session.rebuild_line();

        log::debug!(
            "Segment: {:.3} planar, {} Mittelpunkte",
            increment,
            midpoints.len()
        );

        SegmentReport {
            distance_increment: increment,
            terrain_increment: None,
            inserted_points: midpoints.len(),
            discarded_points: discarded,
            rebase_delta: None,
        }
    }
}

impl MeasureTool for MidpointMeasureTool {
    fn kind(&self) -> MeasureToolKind {
        MeasureToolKind::Midpoint
    }

    fn name(&self) -> &str {
        "✂ Mittelpunkt messen"
    }

    fn description(&self) -> &str {
        "Misst planare Distanz und halbiert Segmente rekursiv bis unter die Schwelle"
    }

    fn on_click(&mut self, ray: &Ray, host: &HostContext) -> ClickOutcome {
        let rebase_delta = self.session.rebase(host.scene.root_position());

        let Some(hit) = host.scene.raycast(ray, None) else {
            log::debug!("Klick ohne Treffer verworfen");
            return ClickOutcome::Missed;
        };

        let location = host.scene.hit_to_geo(hit.point, 0.0);
        let stop = self.session.spawn(PointKind::Stop, hit.point, location);

        let outcome = match self.session.previous_stop() {
            Some(prev) => {
                let mut report = self.measure_segment(prev, stop, host);
                report.rebase_delta = rebase_delta;
                ClickOutcome::Segment(report)
            }
            None => {
                self.session.append(stop);
                ClickOutcome::FirstStop
            }
        };
        self.session.push_stop(stop);
        log::debug!("Stop {} gesetzt ({} Stops)", stop, self.session.stop_count());
        outcome
    }

    fn unit(&self) -> LinearUnit {
        self.unit
    }

    fn set_unit(&mut self, unit: LinearUnit) {
        if unit == self.unit {
            return;
        }
        self.total = convert_units(self.total, self.unit, unit);
        log::info!("Einheit gewechselt: {} → {}", self.unit, unit);
        self.unit = unit;
    }

    fn clear(&mut self) {
        let destroyed = self.session.clear();
        self.total = 0.0;
        log::info!("Messung gelöscht ({} Marker entfernt)", destroyed);
    }

    fn readouts(&self) -> Vec<DistanceReadout> {
        vec![DistanceReadout {
            label: DISTANCE_LABEL,
            value: self.total,
            unit: self.unit,
        }]
    }

    fn apply_options(&mut self, options: &MeasureOptions) {
        self.threshold = options.midpoint_threshold;
        self.probe.probe_height = options.probe_height;
        self.probe.elevation_offset = options.elevation_offset;
    }

    fn session(&self) -> &MeasureSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut MeasureSession {
        &mut self.session
    }
}
