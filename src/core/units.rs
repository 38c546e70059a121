//! Längeneinheiten der Mess-Werkzeuge und die feste Umrechnungstabelle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Auswählbare Längeneinheit für die Distanz-Anzeige.
///
/// Die Reihenfolge entspricht Zeilen/Spalten von [`CONVERSION_FACTORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinearUnit {
    /// Meter (EPSG-Einheit 9001)
    #[default]
    Meters,
    /// Kilometer (EPSG-Einheit 9036)
    Kilometers,
    /// Internationale Meile (EPSG-Einheit 9093)
    Miles,
    /// Internationaler Fuß (EPSG-Einheit 9002)
    Feet,
}

/// Umrechnungsfaktoren `[von][nach]` in der Reihenfolge m, km, mi, ft.
///
/// Aus den exakten Definitionen abgeleitet (1 mi = 1609.344 m, 1 ft = 0.3048 m),
/// damit Hin- und Rückumrechnung bis auf Rundung zusammenpassen.
pub const CONVERSION_FACTORS: [[f64; 4]; 4] = [
    [1.0, 0.001, 0.000_621_371_192_237_334, 3.280_839_895_013_123],
    [1000.0, 1.0, 0.621_371_192_237_334, 3280.839_895_013_123],
    [1609.344, 1.609_344, 1.0, 5280.0],
    [0.3048, 0.000_304_8, 0.000_189_393_939_393_939_4, 1.0],
];

/// Unbekannte Einheitsbezeichnung oder Einheiten-ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unbekannte Längeneinheit: {0}")]
pub struct UnknownUnitError(pub String);

impl LinearUnit {
    /// Alle Einheiten in Tabellen-Reihenfolge.
    pub const ALL: [LinearUnit; 4] = [
        LinearUnit::Meters,
        LinearUnit::Kilometers,
        LinearUnit::Miles,
        LinearUnit::Feet,
    ];

    fn index(self) -> usize {
        match self {
            LinearUnit::Meters => 0,
            LinearUnit::Kilometers => 1,
            LinearUnit::Miles => 2,
            LinearUnit::Feet => 3,
        }
    }

    /// EPSG-ID der Längeneinheit, wie sie die Geometrie-Engine erwartet.
    pub fn unit_id(self) -> u32 {
        match self {
            LinearUnit::Meters => 9001,
            LinearUnit::Kilometers => 9036,
            LinearUnit::Miles => 9093,
            LinearUnit::Feet => 9002,
        }
    }

    /// Einheit aus EPSG-ID.
    pub fn from_unit_id(id: u32) -> Result<Self, UnknownUnitError> {
        Self::ALL
            .into_iter()
            .find(|u| u.unit_id() == id)
            .ok_or_else(|| UnknownUnitError(id.to_string()))
    }

    /// Anzeigename im Einheiten-Dropdown.
    pub fn label(self) -> &'static str {
        match self {
            LinearUnit::Meters => "Meters",
            LinearUnit::Kilometers => "Kilometers",
            LinearUnit::Miles => "Miles",
            LinearUnit::Feet => "Feet",
        }
    }

    /// Einheit aus dem Dropdown-Anzeigenamen.
    pub fn from_label(label: &str) -> Result<Self, UnknownUnitError> {
        Self::ALL
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| UnknownUnitError(label.to_string()))
    }

    /// Kurzes Suffix für Distanz-Texte (inkl. führendem Leerzeichen).
    pub fn suffix(self) -> &'static str {
        match self {
            LinearUnit::Meters => " m",
            LinearUnit::Kilometers => " km",
            LinearUnit::Miles => " mi",
            LinearUnit::Feet => " ft",
        }
    }

    /// Wert einer Einheit in Metern.
    pub fn meters_per_unit(self) -> f64 {
        CONVERSION_FACTORS[self.index()][LinearUnit::Meters.index()]
    }
}

impl std::fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rechnet einen Wert per Tabellen-Lookup zwischen zwei Einheiten um.
///
/// Die Diagonale der Tabelle ist exakt 1.0, gleiche Einheiten liefern den Wert unverändert.
pub fn convert_units(value: f64, from: LinearUnit, to: LinearUnit) -> f64 {
    value * CONVERSION_FACTORS[from.index()][to.index()]
}

/// Formatiert eine Distanz wie die Text-Anzeige: 3 Nachkommastellen + Einheit.
pub fn format_distance(label: &str, value: f64, unit: LinearUnit) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{label}: {rounded}{}", unit.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_conversion_is_exact() {
        for unit in LinearUnit::ALL {
            for value in [0.0, 1.0, 123.456, 9.99e7, 1e-9] {
                assert_eq!(convert_units(value, unit, unit), value);
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for a in LinearUnit::ALL {
            for b in LinearUnit::ALL {
                for value in [0.5, 250.0, 12_345.678] {
                    let there = convert_units(value, a, b);
                    let back = convert_units(there, b, a);
                    assert_relative_eq!(back, value, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_known_factors() {
        assert_relative_eq!(
            convert_units(1.0, LinearUnit::Miles, LinearUnit::Meters),
            1609.344
        );
        assert_relative_eq!(
            convert_units(1.0, LinearUnit::Miles, LinearUnit::Feet),
            5280.0
        );
        assert_relative_eq!(
            convert_units(1500.0, LinearUnit::Meters, LinearUnit::Kilometers),
            1.5
        );
        assert_relative_eq!(
            convert_units(1.0, LinearUnit::Feet, LinearUnit::Meters),
            0.3048
        );
    }

    #[test]
    fn test_table_is_consistent_with_meters_per_unit() {
        for a in LinearUnit::ALL {
            for b in LinearUnit::ALL {
                let via_meters = a.meters_per_unit() / b.meters_per_unit();
                assert_relative_eq!(
                    CONVERSION_FACTORS[a.index()][b.index()],
                    via_meters,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_label_and_id_lookup() {
        assert_eq!(LinearUnit::from_label("Miles"), Ok(LinearUnit::Miles));
        assert_eq!(LinearUnit::from_label(" feet "), Ok(LinearUnit::Feet));
        assert!(LinearUnit::from_label("Parsec").is_err());
        assert_eq!(LinearUnit::from_unit_id(9036), Ok(LinearUnit::Kilometers));
        assert_eq!(
            LinearUnit::from_unit_id(1234),
            Err(UnknownUnitError("1234".to_string()))
        );
    }

    #[test]
    fn test_format_distance_rounds_to_three_digits() {
        assert_eq!(
            format_distance("Distance", 1234.56789, LinearUnit::Meters),
            "Distance: 1234.568 m"
        );
        assert_eq!(
            format_distance("Terrain distance", 0.0, LinearUnit::Miles),
            "Terrain distance: 0 mi"
        );
    }
}
