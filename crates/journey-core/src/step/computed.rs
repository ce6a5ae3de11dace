//! Steps computados: defaults materializados y resolución de vecinos.
//!
//! Cada `ComputedStep` guarda únicamente su propia definición. La lógica que
//! cruza steps (vecinos, predicados que consultan a otros steps) recibe el
//! mapa completo `ComputedSteps` como parámetro en el momento de la llamada,
//! nunca al normalizar; así las referencias hacia delante se resuelven de
//! forma perezosa y no hay ciclos de ownership entre steps.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{trace, warn};

use super::component::StepComponent;
use super::definition::{Predicate, StepDefinition};
use super::direction::Direction;
use crate::errors::JourneyError;
use crate::model::Metadata;
use crate::repo::StepRegistry;

/// Step normalizado: todo campo opcional es ahora una función total.
pub struct ComputedStep<S, M = Metadata> {
    definition: StepDefinition<S, M>,
    metadata: M,
}

impl<S, M: Default> ComputedStep<S, M> {
    /// Normaliza una definición. No mira a otros steps.
    pub fn normalize(mut definition: StepDefinition<S, M>) -> Self {
        let metadata = definition.metadata.take().unwrap_or_default();
        Self { definition, metadata }
    }
}

impl<S, M> ComputedStep<S, M> {
    pub fn slug(&self) -> &str {
        &self.definition.slug
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn component(&self) -> &Arc<dyn StepComponent<S, M>> {
        &self.definition.component
    }

    fn eval(predicate: Option<&Predicate<S, M>>, state: &S, computed: &ComputedSteps<S, M>, default: bool) -> bool {
        predicate.map_or(default, |p| p(state, computed))
    }

    pub fn is_complete(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        Self::eval(self.definition.is_complete.as_ref(), state, computed, true)
    }

    pub fn is_enabled(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        Self::eval(self.definition.is_enabled.as_ref(), state, computed, true)
    }

    pub fn is_submittable(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        Self::eval(self.definition.is_submittable.as_ref(), state, computed, true)
    }

    pub fn is_skipped(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        Self::eval(self.definition.is_skipped.as_ref(), state, computed, false)
    }

    pub fn is_journey_end(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        Self::eval(self.definition.is_journey_end.as_ref(), state, computed, false)
    }

    pub fn show_previous_button(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        match &self.definition.show_previous_button {
            Some(p) => p(state, computed),
            None => self.previous_step(state, computed).is_some() && !self.is_journey_end(state, computed),
        }
    }

    pub fn show_next_button(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        match &self.definition.show_next_button {
            Some(p) => p(state, computed),
            None => self.next_step(state, computed).is_some() && !self.is_journey_end(state, computed),
        }
    }

    pub fn show_submit_button(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        match &self.definition.show_submit_button {
            Some(p) => p(state, computed),
            None => self.is_journey_end(state, computed),
        }
    }

    pub fn enable_next_button(&self, state: &S, computed: &ComputedSteps<S, M>) -> bool {
        match &self.definition.enable_next_button {
            Some(p) => p(state, computed),
            None => self.is_complete(state, computed),
        }
    }

    /// Vecino lógico: el step no saltado más cercano en `direction`, sin
    /// aplicar overrides. `None` al llegar al borde.
    pub fn logical_neighbor<'c>(&self,
                                direction: Direction,
                                state: &S,
                                computed: &'c ComputedSteps<S, M>)
                                -> Option<&'c ComputedStep<S, M>> {
        let index = computed.position(self.slug())?;
        let not_skipped = |candidate: &&'c ComputedStep<S, M>| !candidate.is_skipped(state, computed);
        let found = match direction {
            Direction::Previous => computed.steps.values().take(index).rev().find(not_skipped),
            Direction::Next => computed.steps.values().skip(index + 1).find(not_skipped),
        };
        trace!("logical {direction} of '{}': {:?}", self.slug(), found.map(ComputedStep::slug));
        found
    }

    /// Vecino final: lógico, luego override (si el step declara uno).
    ///
    /// Un override que devuelve un slug ausente de `computed` produce
    /// `JourneyError::UnknownSlug`; `neighbor` lo degrada a `None`.
    pub fn resolve_neighbor<'c>(&self,
                                direction: Direction,
                                state: &S,
                                computed: &'c ComputedSteps<S, M>)
                                -> Result<Option<&'c ComputedStep<S, M>>, JourneyError> {
        let logical = self.logical_neighbor(direction, state, computed);
        let rewrite = match direction {
            Direction::Previous => self.definition.previous_step.as_ref(),
            Direction::Next => self.definition.next_step.as_ref(),
        };
        let Some(rewrite) = rewrite else {
            return Ok(logical);
        };
        match rewrite(state, logical.map(ComputedStep::slug), computed) {
            None => Ok(None),
            Some(slug) => match computed.get(&slug) {
                Some(step) => Ok(Some(step)),
                None => Err(JourneyError::UnknownSlug { from: self.slug().to_string(),
                                                        slug }),
            },
        }
    }

    /// Igual que `resolve_neighbor` pero un destino desconocido es "sin vecino".
    pub fn neighbor<'c>(&self,
                        direction: Direction,
                        state: &S,
                        computed: &'c ComputedSteps<S, M>)
                        -> Option<&'c ComputedStep<S, M>> {
        match self.resolve_neighbor(direction, state, computed) {
            Ok(step) => step,
            Err(err) => {
                warn!("{err}; no {direction} step");
                None
            }
        }
    }

    pub fn previous_step<'c>(&self, state: &S, computed: &'c ComputedSteps<S, M>) -> Option<&'c ComputedStep<S, M>> {
        self.neighbor(Direction::Previous, state, computed)
    }

    pub fn next_step<'c>(&self, state: &S, computed: &'c ComputedSteps<S, M>) -> Option<&'c ComputedStep<S, M>> {
        self.neighbor(Direction::Next, state, computed)
    }
}

impl<S, M: fmt::Debug> fmt::Debug for ComputedStep<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedStep")
         .field("slug", &self.slug())
         .field("metadata", &self.metadata)
         .finish()
    }
}

/// Mapa ordenado slug -> step computado. El orden de iteración es el orden
/// canónico del journey.
pub struct ComputedSteps<S, M = Metadata> {
    steps: IndexMap<String, ComputedStep<S, M>>,
}

impl<S, M: Default> ComputedSteps<S, M> {
    /// Normaliza cada step del registro, conservando su orden.
    pub fn normalize(registry: StepRegistry<S, M>) -> Self {
        let steps = registry.into_iter()
                            .map(|def| (def.slug.clone(), ComputedStep::normalize(def)))
                            .collect();
        Self { steps }
    }
}

impl<S, M> ComputedSteps<S, M> {
    pub fn get(&self, slug: &str) -> Option<&ComputedStep<S, M>> {
        self.steps.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.steps.contains_key(slug)
    }

    /// Posición en el orden canónico.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.steps.get_index_of(slug)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComputedStep<S, M>> {
        self.steps.values()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }
}

impl<S, M> fmt::Debug for ComputedSteps<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slugs()).finish()
    }
}
