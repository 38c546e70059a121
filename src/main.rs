//! Terrain Measure.
//!
//! Spielt Mess-Szenarien (Klicks, Einheitenwechsel, Objekte) gegen die
//! Referenz-Szene ab und gibt das Ergebnis als JSON aus.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use terrain_measure::{MeasureOptions, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about = "Geodätische Mess-Werkzeuge über Gelände")]
struct Args {
    /// Optionen-Datei (Standard: terrain_measure.toml neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Szenario abspielen und JSON-Report ausgeben
    Run {
        /// Szenario-Datei (TOML)
        scenario: PathBuf,

        /// Report in Datei schreiben statt auf stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Standard-Optionen in die Optionen-Datei schreiben
    WriteConfig,
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Terrain Measure v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(Args::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config_path = args.config.unwrap_or_else(MeasureOptions::config_path);

    match args.command {
        Command::WriteConfig => MeasureOptions::default().save_to_file(&config_path),
        Command::Run { scenario, output } => {
            let options = MeasureOptions::load_from_file(&config_path);
            let scenario = Scenario::load(&scenario)?;
            let report = scenario.run(options);
            if report.failed_steps() > 0 {
                log::warn!("{} Schritte fehlgeschlagen", report.failed_steps());
            }

            let json = report.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Report nicht schreibbar: {}", path.display()))?;
                    log::info!("Report geschrieben nach: {}", path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
    }
}
