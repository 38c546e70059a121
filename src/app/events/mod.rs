//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{AppCommand, PropSpawn};
pub use intent::AppIntent;
