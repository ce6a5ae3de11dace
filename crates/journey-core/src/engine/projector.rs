//! Proyección del step actual.

use std::sync::Arc;

use crate::config::JourneyConfig;
use crate::errors::JourneyError;
use crate::model::{CurrentStepView, JourneyView};
use crate::step::{ComputedSteps, Direction};

/// Evalúa todos los booleanos y ambos vecinos del step `slug` contra un único
/// par `(state, computed)`.
///
/// Falla con `InvalidCurrentStep` si `slug` no está registrado. Con
/// `strict_targets`, un override que apunta a un slug desconocido falla con
/// `UnknownSlug` en lugar de resolverse a "sin vecino".
pub fn project<'c, S, M>(slug: &str,
                         state: &S,
                         computed: &'c ComputedSteps<S, M>,
                         config: &JourneyConfig)
                         -> Result<JourneyView<'c, S, M>, JourneyError>
    where M: Clone
{
    let step = computed.get(slug)
                       .ok_or_else(|| JourneyError::InvalidCurrentStep { slug: slug.to_string() })?;

    let (previous, next) = if config.strict_targets {
        (step.resolve_neighbor(Direction::Previous, state, computed)?,
         step.resolve_neighbor(Direction::Next, state, computed)?)
    } else {
        (step.previous_step(state, computed), step.next_step(state, computed))
    };

    let current = CurrentStepView { slug: step.slug().to_string(),
                                    component: Arc::clone(step.component()),
                                    metadata: step.metadata().clone(),
                                    is_complete: step.is_complete(state, computed),
                                    is_enabled: step.is_enabled(state, computed),
                                    is_submittable: step.is_submittable(state, computed),
                                    is_skipped: step.is_skipped(state, computed),
                                    is_journey_end: step.is_journey_end(state, computed),
                                    show_previous_button: step.show_previous_button(state, computed),
                                    show_next_button: step.show_next_button(state, computed),
                                    show_submit_button: step.show_submit_button(state, computed),
                                    enable_next_button: step.enable_next_button(state, computed),
                                    previous_slug: previous.map(|s| s.slug().to_string()),
                                    next_slug: next.map(|s| s.slug().to_string()),
                                    has_previous_step: previous.is_some(),
                                    has_next_step: next.is_some() };

    Ok(JourneyView { current,
                     previous,
                     next })
}

/// Slug destino de una intención según la vista ya proyectada.
pub(crate) fn intent_target<'v, S, M>(intent: Direction,
                                      view: &'v CurrentStepView<S, M>,
                                      computed: &ComputedSteps<S, M>)
                                      -> Option<&'v str> {
    let target = match intent {
        Direction::Previous => view.previous_slug.as_deref(),
        Direction::Next => view.next_slug.as_deref(),
    };
    target.filter(|slug| computed.contains(slug))
}
