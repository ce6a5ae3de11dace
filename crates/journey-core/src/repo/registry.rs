//! Registro de steps: mapa ordenado slug -> definición.
//!
//! El orden de inserción ES el orden canónico que usan todos los recorridos.

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

use crate::errors::JourneyError;
use crate::model::Metadata;
use crate::step::StepDefinition;

pub struct StepRegistry<S, M = Metadata> {
    steps: IndexMap<String, StepDefinition<S, M>>,
}

/// Construye el registro conservando el orden de entrada.
///
/// Rechaza slugs repetidos (`DuplicateSlug`) y listas vacías (`EmptyJourney`).
pub fn build_registry<S, M>(steps: impl IntoIterator<Item = StepDefinition<S, M>>)
                            -> Result<StepRegistry<S, M>, JourneyError> {
    let mut map: IndexMap<String, StepDefinition<S, M>> = IndexMap::new();
    for step in steps {
        match map.entry(step.slug.clone()) {
            Entry::Occupied(entry) => {
                return Err(JourneyError::DuplicateSlug { slug: entry.key().clone() });
            }
            Entry::Vacant(entry) => {
                entry.insert(step);
            }
        }
    }
    if map.is_empty() {
        return Err(JourneyError::EmptyJourney);
    }
    debug!("step registry built: {} steps", map.len());
    Ok(StepRegistry { steps: map })
}

impl<S, M> StepRegistry<S, M> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&StepDefinition<S, M>> {
        self.steps.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.steps.contains_key(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition<S, M>> {
        self.steps.values()
    }
}

impl<S, M> IntoIterator for StepRegistry<S, M> {
    type Item = StepDefinition<S, M>;
    type IntoIter = indexmap::map::IntoValues<String, StepDefinition<S, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn rejects_duplicate_slugs() {
        let steps: Vec<StepDefinition<Value>> = vec![StepDefinition::headless("a"),
                                                     StepDefinition::headless("b"),
                                                     StepDefinition::headless("a")];
        let err = build_registry(steps).err().expect("duplicate must fail");
        assert_eq!(err, JourneyError::DuplicateSlug { slug: "a".into() });
    }

    #[test]
    fn rejects_empty_list() {
        let err = build_registry(Vec::<StepDefinition<Value>>::new()).err().expect("empty must fail");
        assert_eq!(err, JourneyError::EmptyJourney);
    }

    #[test]
    fn keeps_insertion_order() {
        let steps: Vec<StepDefinition<Value>> = ["z", "a", "m"].into_iter().map(StepDefinition::headless).collect();
        let registry = build_registry(steps).expect("registry");
        assert_eq!(registry.slugs().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert!(registry.contains("m"));
        assert_eq!(registry.get("a").map(StepDefinition::slug), Some("a"));
    }
}
