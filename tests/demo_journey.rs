use std::sync::{Arc, Mutex};

use journeyflow::config::AppConfig;
use journeyflow::demo::{calibration_journey, run_calibration, DemoState};
use journeyflow::journey_core::{JourneyConfig, JourneyEngine, JourneySession};

#[test]
fn overview_of_the_calibration_journey() {
    let engine = JourneyEngine::new(calibration_journey(Arc::new(Mutex::new(None)))).expect("engine");
    let slugs: Vec<&str> = engine.computed_steps().slugs().collect();
    assert_eq!(slugs, vec!["start", "is-new", "full-name", "finish"]);

    // Sin respuesta, full-name queda fuera de la secuencia.
    let view = engine.view(&DemoState::at("is-new")).expect("view");
    assert_eq!(view.next_slug.as_deref(), Some("finish"));
    assert_eq!(view.metadata.get("title").and_then(|t| t.as_str()), Some("¿Eres nuevo?"));

    let finish = engine.view(&DemoState::at("finish")).expect("view");
    assert!(finish.is_journey_end);
    assert!(finish.show_submit_button);
    assert!(!finish.show_next_button);
}

#[test]
fn both_branches_end_at_finish() {
    let yes = run_calibration(true, JourneyConfig::default()).expect("yes branch");
    let no = run_calibration(false, JourneyConfig::default()).expect("no branch");
    assert_eq!(yes.visited.last().map(String::as_str), Some("finish"));
    assert_eq!(no.visited.last().map(String::as_str), Some("finish"));
    assert!(yes.visited.iter().any(|s| s == "full-name"));
    assert!(!no.visited.iter().any(|s| s == "full-name"));
}

#[test]
fn back_from_finish_follows_the_answer() {
    let answers = Arc::new(Mutex::new(None));
    let state = DemoState { current_step: "finish".into(),
                            is_new: Some(true),
                            full_name: Some("Ada".into()) };
    let mut session = JourneySession::new(calibration_journey(Arc::clone(&answers)), state).expect("session");
    session.request_previous();
    assert_eq!(session.settle().expect("settle").slug, "full-name");

    let back_to_finish = DemoState { current_step: "finish".into(),
                                     is_new: Some(false),
                                     ..DemoState::default() };
    session.replace_state(back_to_finish);
    session.request_previous();
    assert_eq!(session.settle().expect("settle").slug, "is-new");
}

#[test]
fn strict_config_from_environment_still_runs_the_demo() {
    let cfg = AppConfig::from_lookup(|name| (name == "JOURNEY_STRICT_TARGETS").then(|| "true".to_string())).expect("config");
    assert!(cfg.journey.strict_targets);
    let outcome = run_calibration(true, cfg.journey).expect("strict demo");
    assert_eq!(outcome.commits, 3);
}
