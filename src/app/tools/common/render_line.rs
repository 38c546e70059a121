//! Gerenderte Polylinie einer Messung.

use glam::Vec3;

/// Positionen und Breite der Messlinie (Render-Space).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RenderLine {
    positions: Vec<Vec3>,
    width_multiplier: f32,
}

impl RenderLine {
    /// Leere Linie mit Breiten-Multiplikator.
    pub fn new(width_multiplier: f32) -> Self {
        Self {
            positions: Vec::new(),
            width_multiplier,
        }
    }

    /// Ersetzt alle Positionen.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) {
        self.positions = positions;
    }

    /// Positionen in Zeichenreihenfolge.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Breiten-Multiplikator.
    pub fn width_multiplier(&self) -> f32 {
        self.width_multiplier
    }

    /// Verschiebt alle Positionen um `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        for p in &mut self.positions {
            *p += delta;
        }
    }

    /// Entfernt alle Positionen.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Summe der Segmentlängen im Render-Space.
    pub fn render_length(&self) -> f32 {
        self.positions
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}
