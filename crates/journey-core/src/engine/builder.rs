//! Builder para `JourneyEngine`.
//!
//! Acumula los steps en el orden en que se añaden (ese orden es la secuencia
//! del journey), junto con configuración, token de versión y store de
//! eventos. `build` valida el registro (slugs únicos, journey no vacío) y
//! devuelve el engine listo para evaluar.
//!
//! ```
//! use journey_core::{JourneyEngine, StepDefinition};
//! use serde_json::{json, Value};
//!
//! let engine = JourneyEngine::<Value>::builder().step(StepDefinition::headless("start"))
//!                                               .step(StepDefinition::headless("finish").journey_end())
//!                                               .build()
//!                                               .expect("valid journey");
//! let state = json!({"current_step": "start"});
//! assert_eq!(engine.view(&state).expect("view").next_slug.as_deref(), Some("finish"));
//! ```

use serde::Serialize;

use crate::config::JourneyConfig;
use crate::engine::JourneyEngine;
use crate::errors::JourneyError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::model::{JourneyState, Metadata};
use crate::repo::build_journey_definition;
use crate::step::StepDefinition;

pub struct JourneyBuilder<S, M = Metadata, E = InMemoryEventStore> {
    steps: Vec<StepDefinition<S, M>>,
    version: Option<String>,
    config: JourneyConfig,
    event_store: E,
}

impl<S, M> JourneyBuilder<S, M, InMemoryEventStore> {
    pub fn new() -> Self {
        Self { steps: Vec::new(),
               version: None,
               config: JourneyConfig::default(),
               event_store: InMemoryEventStore::default() }
    }
}

impl<S, M> Default for JourneyBuilder<S, M, InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M, E> JourneyBuilder<S, M, E> {
    /// Añade un step al final de la secuencia.
    #[inline]
    pub fn step(mut self, step: StepDefinition<S, M>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = StepDefinition<S, M>>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Token de versión que entra al `definition_hash`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn config(mut self, config: JourneyConfig) -> Self {
        self.config = config;
        self
    }

    /// Cambia la store de eventos (por ejemplo, una persistente del caller).
    pub fn event_store<E2: EventStore>(self, event_store: E2) -> JourneyBuilder<S, M, E2> {
        JourneyBuilder { steps: self.steps,
                         version: self.version,
                         config: self.config,
                         event_store }
    }
}

impl<S, M, E> JourneyBuilder<S, M, E>
    where S: JourneyState,
          M: Clone + Default + Serialize,
          E: EventStore
{
    pub fn build(self) -> Result<JourneyEngine<S, M, E>, JourneyError> {
        let mut definition = build_journey_definition(self.steps);
        if let Some(version) = self.version {
            definition = definition.with_version(version);
        }
        JourneyEngine::with_store(definition, self.config, self.event_store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn build_keeps_insertion_order() {
        let engine = JourneyBuilder::<Value>::new().step(StepDefinition::headless("a"))
                                                   .steps(vec![StepDefinition::headless("b"),
                                                               StepDefinition::headless("c")])
                                                   .build()
                                                   .expect("engine");
        let slugs: Vec<&str> = engine.computed_steps().slugs().collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn build_rejects_duplicates_and_empty() {
        let dup = JourneyBuilder::<Value>::new().step(StepDefinition::headless("a"))
                                                .step(StepDefinition::headless("a"))
                                                .build();
        assert_eq!(dup.err(), Some(JourneyError::DuplicateSlug { slug: "a".into() }));

        let empty = JourneyBuilder::<Value>::new().build();
        assert_eq!(empty.err(), Some(JourneyError::EmptyJourney));
    }

    #[test]
    fn version_changes_the_hash() {
        let plain = JourneyBuilder::<Value>::new().step(StepDefinition::headless("a")).build().expect("engine");
        let versioned = JourneyBuilder::<Value>::new().step(StepDefinition::headless("a"))
                                                      .version("2")
                                                      .build()
                                                      .expect("engine");
        assert_ne!(plain.definition_hash(), versioned.definition_hash());
        let state = json!({"current_step": "a"});
        assert!(!versioned.view(&state).expect("view").has_next_step);
    }
}
