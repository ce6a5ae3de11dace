use journeyflow::config::CONFIG;
use journeyflow::demo::{calibration_journey, run_calibration, DemoState};
use journeyflow::errors::AppError;
use journey_core::JourneyEngine;
use std::sync::{Arc, Mutex};

/// Imprime la vista de cada step del journey sin navegar.
fn print_overview() -> Result<(), AppError> {
    let engine = JourneyEngine::with_config(calibration_journey(Arc::new(Mutex::new(None))), CONFIG.journey.clone())?;
    println!("Journey {} (hash {})", engine.journey_id(), engine.definition_hash());
    for slug in engine.computed_steps().slugs() {
        let view = engine.view(&DemoState::at(slug))?;
        println!("  {:<10} prev={:<10} next={:<10} show_prev={} show_next={} submit={}",
                 view.slug,
                 view.previous_slug.as_deref().unwrap_or("-"),
                 view.next_slug.as_deref().unwrap_or("-"),
                 view.show_previous_button,
                 view.show_next_button,
                 view.show_submit_button);
    }
    Ok(())
}

fn run() -> Result<(), AppError> {
    print_overview()?;
    for answer in [true, false] {
        let outcome = run_calibration(answer, CONFIG.journey.clone())?;
        println!("is_new={answer}: {} ({} commits)", outcome.visited.join(" -> "), outcome.commits);
        println!("  estado final: {:?}", outcome.final_state);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::try_new(&CONFIG.log_filter).unwrap_or_else(|_| "info".into()))
                             .init();

    if let Err(err) = run() {
        eprintln!("journeyflow-demo: {err}");
        std::process::exit(1);
    }
}
