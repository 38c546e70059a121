//! MeasureTool-Trait — Schnittstelle für alle Mess-Werkzeuge.

use glam::DVec3;

use super::common::{MeasureSession, RenderLine};
use super::{ClickOutcome, DistanceReadout, MeasureToolKind};
use crate::core::{HostContext, LinearUnit, Ray};
use crate::shared::MeasureOptions;

/// Schnittstelle für alle Mess-Werkzeuge (geodätisch, Mittelpunkt, …).
///
/// Werkzeuge sind zustandsbehaftet (Messpunkte, Summen) und sprechen
/// ausschließlich über den `HostContext` mit Engine und Geometrie-Engine.
pub trait MeasureTool {
    /// Art des Werkzeugs (für Auswahl per Intent)
    fn kind(&self) -> MeasureToolKind;

    /// Anzeigename
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Statustext (z.B. "Ersten Messpunkt setzen")
    fn status_text(&self) -> &str {
        if self.session().stop_count() == 0 {
            "Shift + Klick setzt den ersten Messpunkt"
        } else {
            "Shift + Klick setzt den nächsten Messpunkt"
        }
    }

    /// Klick in die Szene verarbeiten (Modifier bereits geprüft).
    fn on_click(&mut self, ray: &Ray, host: &HostContext) -> ClickOutcome;

    /// Aktive Anzeigeeinheit.
    fn unit(&self) -> LinearUnit;

    /// Wechselt die Anzeigeeinheit und rechnet die Summen um.
    fn set_unit(&mut self, unit: LinearUnit);

    /// Löscht alle Messpunkte und setzt die Summen auf 0.
    fn clear(&mut self);

    /// Aktuelle Distanz-Anzeigen.
    fn readouts(&self) -> Vec<DistanceReadout>;

    /// Übernimmt geänderte Optionen (Abstände, Schwellen, Offsets).
    fn apply_options(&mut self, options: &MeasureOptions);

    /// Sitzung mit Markern und Linie.
    fn session(&self) -> &MeasureSession;

    /// Mutable Sitzung.
    fn session_mut(&mut self) -> &mut MeasureSession;

    /// Gerenderte Linie.
    fn line(&self) -> &RenderLine {
        self.session().line()
    }

    /// Anzeigetexte aller Distanzen.
    fn display_texts(&self) -> Vec<String> {
        self.readouts().iter().map(DistanceReadout::text).collect()
    }

    /// Führt die Linie dem aktuellen Floating-Origin nach.
    fn follow_origin(&mut self, root: DVec3) -> bool {
        self.session_mut().rebase(root).is_some()
    }
}
