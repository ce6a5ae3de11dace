//! journey-core: motor de navegación de journeys paso a paso
//!
//! Un journey es una secuencia ordenada de steps con predicados declarativos
//! (completo, saltado, fin de journey, visibilidad de botones) y overrides de
//! vecino. El engine proyecta la vista del step actual para un estado dado y
//! aplica a lo sumo una navegación por pase.
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod repo;
pub mod step;

pub use config::JourneyConfig;
pub use engine::{project, IntentPhase, IntentSlot, JourneyBuilder, JourneyEngine, JourneySession, NavigationIntent};
pub use errors::JourneyError;
pub use event::{EventStore, InMemoryEventStore, NavigationEvent, NavigationEventKind};
pub use model::{CurrentStepView, JourneyState, JourneyView, Metadata, StepProps};
pub use repo::{build_journey_definition, build_registry, JourneyDefinition, StepRegistry};
pub use step::{ComputedStep, ComputedSteps, Direction, Headless, StepComponent, StepDefinition};

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{json, Value};

	// Journey con salto condicional y override hacia atrás.
	fn journey() -> JourneyDefinition<Value> {
		build_journey_definition(vec![
			StepDefinition::headless("intro"),
			StepDefinition::headless("details").skipped_when(|s: &Value, _| s["short"] == json!(true)),
			StepDefinition::headless("review").previous_step_with(|_, _, _| Some("intro".to_string())),
			StepDefinition::headless("done").journey_end(),
		])
	}

	#[test]
	fn skipped_step_is_jumped_over_and_override_wins() {
		let mut session = JourneySession::new(journey(), json!({"current_step": "intro", "short": true})).expect("session");
		session.request_next();
		assert_eq!(session.settle().expect("settle").slug, "review");

		let view = session.current_view().expect("view");
		assert_eq!(view.previous_slug.as_deref(), Some("intro"));
		assert_eq!(view.next_slug.as_deref(), Some("done"));
	}

	#[test]
	fn reload_only_rebuilds_on_hash_change() {
		let mut engine = JourneyEngine::new(journey()).expect("engine");
		let hash = engine.definition_hash().to_string();
		assert!(!engine.reload(journey()).expect("reload"));
		assert_eq!(engine.definition_hash(), hash);

		assert!(engine.reload(journey().with_version("2")).expect("reload"));
		assert_ne!(engine.definition_hash(), hash);
		let reloaded = engine.events()
		                     .iter()
		                     .filter(|e| matches!(e.kind, NavigationEventKind::DefinitionReloaded { .. }))
		                     .count();
		assert_eq!(reloaded, 1);
	}

	#[test]
	fn invalid_reload_keeps_previous_definition() {
		let mut engine = JourneyEngine::new(journey()).expect("engine");
		let hash = engine.definition_hash().to_string();
		let broken = build_journey_definition(vec![StepDefinition::headless("x"), StepDefinition::headless("x")]);
		assert_eq!(engine.reload(broken), Err(JourneyError::DuplicateSlug { slug: "x".into() }));
		assert_eq!(engine.definition_hash(), hash);
		assert_eq!(engine.computed_steps().len(), 4);
	}
}
