//! Lifecycle-Methoden des GeodesicMeasureTool (MeasureTool-Implementierung).

use super::super::common::{MeasureSession, PointId, PointKind};
use super::super::{ClickOutcome, DistanceReadout, MeasureTool, MeasureToolKind, SegmentReport};
use super::geometry::{chain_distance, interpolate_render_positions, interpolation_segment_count};
use super::state::{GeodesicMeasureTool, GEODESIC_LABEL, TERRAIN_LABEL};
use crate::core::{convert_units, GeoPoint, HostContext, LinearUnit, Ray};
use crate::shared::MeasureOptions;

impl GeodesicMeasureTool {
    /// Verarbeitet das Segment vom vorherigen zum neuen Stop.
    fn measure_segment(&mut self, prev: PointId, stop: PointId, host: &HostContext) -> SegmentReport {
        let (Some(start), Some(end)) = (
            self.session.point(prev).copied(),
            self.session.point(stop).copied(),
        ) else {
            return SegmentReport::default();
        };

        // Zuwachs vor dem Snapping, auf den projizierten Klickpunkten
        let increment =
            host.geometry
                .geodesic_distance(&start.location, &end.location, self.unit);
        self.geodesic_total += increment;

        self.session.snap_point(prev, host, self.probe);
        self.session.snap_point(stop, host, self.probe);

        let distance_m =
            host.geometry
                .geodesic_distance(&start.location, &end.location, LinearUnit::Meters);
        let segments = interpolation_segment_count(distance_m, self.interval);

        let (Some(start), Some(end)) = (
            self.session.point(prev).copied(),
            self.session.point(stop).copied(),
        ) else {
            return SegmentReport::default();
        };

        let positions =
            interpolate_render_positions(start.render_position, end.render_position, segments);
        let mut inserted = Vec::with_capacity(positions.len());
        for position in positions {
            let location = host.scene.hit_to_geo(position, 0.0);
            let id = self
                .session
                .spawn(PointKind::Interpolated, position, location);
            if !self.session.snap_point(id, host, self.probe) {
                log::trace!("Zwischenpunkt {} ohne Bodenkontakt", id);
            }
            inserted.push(id);
        }

        let chain: Vec<GeoPoint> = std::iter::once(prev)
            .chain(inserted.iter().copied())
            .chain(std::iter::once(stop))
            .filter_map(|id| self.session.point(id).map(|p| p.location))
            .collect();
        let terrain_increment = chain_distance(&chain, self.unit, host.geometry);
        self.terrain_total += terrain_increment;

        self.session.append_unless_tail(prev);
        for &id in &inserted {
            self.session.append(id);
        }
        self.session.append(stop);
        let discarded = self.session.rebuild_line();

        log::debug!(
            "Segment: {:.3} geodätisch, {:.3} Gelände, {} Zwischenpunkte ({} m)",
            increment,
            terrain_increment,
            inserted.len(),
            distance_m
        );

        SegmentReport {
            distance_increment: increment,
            terrain_increment: Some(terrain_increment),
            inserted_points: inserted.len(),
            discarded_points: discarded,
            rebase_delta: None,
        }
    }
}

impl MeasureTool for GeodesicMeasureTool {
    fn kind(&self) -> MeasureToolKind {
        MeasureToolKind::Geodesic
    }

    fn name(&self) -> &str {
        "🌐 Geodätisch messen"
    }

    fn description(&self) -> &str {
        "Misst geodätische und geländefolgende Distanz zwischen gesetzten Punkten"
    }

    fn on_click(&mut self, ray: &Ray, host: &HostContext) -> ClickOutcome {
        // Bestehende Marker zuerst in den aktuellen Render-Space holen
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
            None => ClickOutcome::FirstStop,
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
        self.geodesic_total = convert_units(self.geodesic_total, self.unit, unit);
        self.terrain_total = convert_units(self.terrain_total, self.unit, unit);
        log::info!("Einheit gewechselt: {} → {}", self.unit, unit);
        self.unit = unit;
    }

    fn clear(&mut self) {
        let destroyed = self.session.clear();
        self.geodesic_total = 0.0;
        self.terrain_total = 0.0;
        log::info!("Messung gelöscht ({} Marker entfernt)", destroyed);
    }

    fn readouts(&self) -> Vec<DistanceReadout> {
        vec![
            DistanceReadout {
                label: GEODESIC_LABEL,
                value: self.geodesic_total,
                unit: self.unit,
            },
            DistanceReadout {
                label: TERRAIN_LABEL,
                value: self.terrain_total,
                unit: self.unit,
            },
        ]
    }

    fn apply_options(&mut self, options: &MeasureOptions) {
        self.interval = options.interpolation_interval;
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
