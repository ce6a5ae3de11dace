//! Vista del step actual.
//!
//! `CurrentStepView` es una foto consistente de un único par
//! `(state, computed)`: se recalcula completa en cada pase de evaluación y
//! nunca queda parcialmente obsoleta.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::step::{ComputedStep, StepComponent};

pub struct CurrentStepView<S, M> {
    pub slug: String,
    pub component: Arc<dyn StepComponent<S, M>>,
    pub metadata: M,
    pub is_complete: bool,
    pub is_enabled: bool,
    pub is_submittable: bool,
    pub is_skipped: bool,
    pub is_journey_end: bool,
    pub show_previous_button: bool,
    pub show_next_button: bool,
    pub show_submit_button: bool,
    pub enable_next_button: bool,
    /// Slug del vecino anterior final (tras overrides).
    pub previous_slug: Option<String>,
    /// Slug del vecino siguiente final (tras overrides).
    pub next_slug: Option<String>,
    pub has_previous_step: bool,
    pub has_next_step: bool,
}

impl<S, M: fmt::Debug> fmt::Debug for CurrentStepView<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentStepView")
         .field("slug", &self.slug)
         .field("metadata", &self.metadata)
         .field("is_complete", &self.is_complete)
         .field("is_enabled", &self.is_enabled)
         .field("is_submittable", &self.is_submittable)
         .field("is_skipped", &self.is_skipped)
         .field("is_journey_end", &self.is_journey_end)
         .field("show_previous_button", &self.show_previous_button)
         .field("show_next_button", &self.show_next_button)
         .field("show_submit_button", &self.show_submit_button)
         .field("enable_next_button", &self.enable_next_button)
         .field("previous_slug", &self.previous_slug)
         .field("next_slug", &self.next_slug)
         .finish()
    }
}

/// Resultado de un pase: la vista del step actual más los steps vecinos
/// resueltos, para mirar hacia delante/atrás sin navegar.
pub struct JourneyView<'c, S, M> {
    pub current: CurrentStepView<S, M>,
    pub(crate) previous: Option<&'c ComputedStep<S, M>>,
    pub(crate) next: Option<&'c ComputedStep<S, M>>,
}

impl<'c, S, M> JourneyView<'c, S, M> {
    pub fn previous_step(&self) -> Option<&'c ComputedStep<S, M>> {
        self.previous
    }

    pub fn next_step(&self) -> Option<&'c ComputedStep<S, M>> {
        self.next
    }

    pub fn into_current(self) -> CurrentStepView<S, M> {
        self.current
    }
}

impl<S, M> Deref for JourneyView<'_, S, M> {
    type Target = CurrentStepView<S, M>;

    fn deref(&self) -> &Self::Target {
        &self.current
    }
}

impl<S, M: fmt::Debug> fmt::Debug for JourneyView<'_, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.current, f)
    }
}
