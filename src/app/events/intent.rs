use glam::DVec3;

use super::command::PropSpawn;
use crate::app::tools::MeasureToolKind;
use crate::core::Ray;
use crate::shared::MeasureOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Mausklick in die Szene (Strahl aus der Kamera)
    SceneClicked {
        ray: Ray,
        /// Shift gehalten? Nur dann wird ein Messpunkt gesetzt.
        shift_held: bool,
    },
    /// Einheit im Dropdown gewählt ("Meters", "Kilometers", …)
    UnitSelected { label: String },
    /// Einheit per Linear-Unit-ID gewählt (9001, 9036, …)
    UnitIdSelected { unit_id: u32 },
    /// "Clear"-Button gedrückt
    ClearRequested,
    /// Mess-Werkzeug gewechselt
    ToolSelected { kind: MeasureToolKind },
    /// Betrachter bewegt (Floating-Origin folgt)
    ViewerMoved { position: DVec3 },
    /// Objekt aus einem Feature-Layer platzieren
    PropSpawnRequested { spawn: PropSpawn },
    /// Zeit ist vergangen (Frame-Takt in Sekunden)
    TimeAdvanced { seconds: f64 },
    /// Optionen wurden geändert
    OptionsChanged { options: Box<MeasureOptions> },
}
