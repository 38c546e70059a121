use std::path::Path;

use terrain_measure::app::SnapState;
use terrain_measure::{ClickOutcome, LinearUnit, MeasureOptions, MeasureToolKind, Scenario};

fn fixture() -> Scenario {
    Scenario::load(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/hills_scenario.toml"
    )))
    .expect("Fixture sollte ladbar sein")
}

#[test]
fn test_fixture_replays_without_errors() {
    let report = fixture().run(MeasureOptions::default());

    assert_eq!(report.failed_steps(), 0);
    assert_eq!(report.steps.len(), 10);
    assert!(matches!(report.steps[0].outcome, Some(ClickOutcome::FirstStop)));
    assert!(matches!(report.steps[2].outcome, Some(ClickOutcome::Segment(_))));
    assert!(matches!(report.steps[6].outcome, Some(ClickOutcome::Segment(_))));
}

#[test]
fn test_fixture_final_state() {
    let report = fixture().run(MeasureOptions::default());
    let state = &report.final_state;

    assert_eq!(state.active_tool, Some(MeasureToolKind::Midpoint));
    for tool in &state.tools {
        assert_eq!(tool.unit, LinearUnit::Miles);
        assert!(tool.texts.iter().all(|t| t.ends_with(" mi")));
        assert_eq!(tool.line_width, 5.0);
    }
    assert_eq!(state.tools[0].stops, 3);
    assert_eq!(state.tools[1].stops, 2);

    let stadium = &state.props[0];
    assert_eq!(stadium.state, SnapState::Snapped);
    assert_eq!(stadium.info, vec!["Stadion".to_string(), "FC Zürich".to_string()]);
    assert!(stadium.height > 300.0 && stadium.height < 520.0);

    // Außerhalb des Streaming-Radius: wartet weiter
    let mountain = &state.props[1];
    assert_eq!(mountain.state, SnapState::Waiting);
    assert_eq!(mountain.height, 8000.0);
    assert_eq!(mountain.attempts, 4);
}

#[test]
fn test_missing_scenario_file_reports_path() {
    let err = Scenario::load(Path::new("/nicht/vorhanden.toml")).expect_err("Fehler erwartet");
    assert!(format!("{err:#}").contains("/nicht/vorhanden.toml"));
}
