//! Definición inmutable de un journey y su identidad (`definition_hash`).
//!
//! El engine reconstruye el registro y los steps computados sólo cuando cambia
//! el hash. El hash cubre: versión del motor, slugs en orden, metadata
//! serializada, qué predicados/overrides declara cada step y un token de
//! versión opcional del caller. El cuerpo de las closures no es hasheable; si
//! cambia, el caller debe cambiar el token (`with_version`).

use serde::Serialize;
use serde_json::{json, Value};

use crate::constants::ENGINE_VERSION;
use crate::hashing::hash_value;
use crate::model::Metadata;
use crate::step::StepDefinition;

pub struct JourneyDefinition<S, M = Metadata> {
    steps: Vec<StepDefinition<S, M>>,
    version: Option<String>,
    definition_hash: String,
}

impl<S, M: Serialize> JourneyDefinition<S, M> {
    pub fn new(steps: Vec<StepDefinition<S, M>>) -> Self {
        let definition_hash = compute_definition_hash(&steps, None);
        Self { steps,
               version: None,
               definition_hash }
    }

    /// Fija el token de versión del caller y recalcula el hash.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.definition_hash = compute_definition_hash(&self.steps, Some(&version));
        self.version = Some(version);
        self
    }
}

impl<S, M> JourneyDefinition<S, M> {
    pub fn steps(&self) -> &[StepDefinition<S, M>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepDefinition<S, M>> {
        self.steps
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S, M: Clone> Clone for JourneyDefinition<S, M> {
    fn clone(&self) -> Self {
        Self { steps: self.steps.clone(),
               version: self.version.clone(),
               definition_hash: self.definition_hash.clone() }
    }
}

fn compute_definition_hash<S, M: Serialize>(steps: &[StepDefinition<S, M>], version: Option<&str>) -> String {
    let steps_json: Vec<Value> = steps.iter()
                                      .map(|s| {
                                          // Metadata no serializable cuenta como ausente.
                                          let metadata = s.metadata().and_then(|m| serde_json::to_value(m).ok());
                                          json!({ "slug": s.slug(), "metadata": metadata, "declared": s.declared() })
                                      })
                                      .collect();
    hash_value(&json!({
        "engine_version": ENGINE_VERSION,
        "steps": steps_json,
        "version": version,
    }))
}

/// Builder: recibe los steps en orden y calcula su hash.
pub fn build_journey_definition<S, M: Serialize>(steps: Vec<StepDefinition<S, M>>) -> JourneyDefinition<S, M> {
    JourneyDefinition::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(slugs: &[&str]) -> Vec<StepDefinition<Value>> {
        slugs.iter().copied().map(StepDefinition::headless).collect()
    }

    #[test]
    fn same_slugs_same_hash() {
        let a = build_journey_definition(steps(&["start", "finish"]));
        let b = build_journey_definition(steps(&["start", "finish"]));
        assert_eq!(a.definition_hash(), b.definition_hash());
        assert_eq!(a.definition_hash().len(), 64);
    }

    #[test]
    fn order_declared_predicates_and_version_change_the_hash() {
        let base = build_journey_definition(steps(&["start", "finish"]));
        let reordered = build_journey_definition(steps(&["finish", "start"]));
        assert_ne!(base.definition_hash(), reordered.definition_hash());

        let mut with_skip = steps(&["start", "finish"]);
        with_skip[1] = StepDefinition::headless("finish").skipped_when(|_, _| false);
        let with_skip = build_journey_definition(with_skip);
        assert_ne!(base.definition_hash(), with_skip.definition_hash());

        let versioned = build_journey_definition(steps(&["start", "finish"])).with_version("v2");
        assert_ne!(base.definition_hash(), versioned.definition_hash());
        assert_eq!(versioned.version(), Some("v2"));
    }

    #[test]
    fn metadata_is_part_of_the_identity() {
        let titled = |title: &str| {
            let mut m = Metadata::new();
            m.insert("title".into(), json!(title));
            build_journey_definition(vec![StepDefinition::<Value>::headless("start").with_metadata(m)])
        };
        assert_eq!(titled("old").definition_hash(), titled("old").definition_hash());
        assert_ne!(titled("old").definition_hash(), titled("new").definition_hash());
        assert_ne!(titled("old").definition_hash(),
                   build_journey_definition(steps(&["start"])).definition_hash());
    }
}
