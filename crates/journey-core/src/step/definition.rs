use std::fmt;
use std::sync::Arc;

use super::component::{Headless, StepComponent};
use super::computed::ComputedSteps;
use crate::model::Metadata;

/// Predicado sobre `(state, computed)`. Debe ser puro respecto a esos dos
/// argumentos.
pub type Predicate<S, M> = Arc<dyn Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync>;

/// Reescritura del vecino: recibe el slug del vecino lógico (o `None`) y
/// devuelve el slug final (o `None` = sin vecino en esa dirección).
pub type NeighborOverride<S, M> = Arc<dyn Fn(&S, Option<&str>, &ComputedSteps<S, M>) -> Option<String> + Send + Sync>;

/// Step tal como lo declara el autor del journey.
///
/// Todos los predicados son opcionales; `ComputedStep` aplica los defaults:
///
/// | predicado              | default                                        |
/// |------------------------|------------------------------------------------|
/// | `complete_when`        | `true`                                         |
/// | `enabled_when`         | `true`                                         |
/// | `submittable_when`     | `true`                                         |
/// | `skipped_when`         | `false`                                        |
/// | `journey_end_when`     | `false`                                        |
/// | `show_previous_when`   | hay vecino anterior y no es fin de journey     |
/// | `show_next_when`       | hay vecino siguiente y no es fin de journey    |
/// | `show_submit_when`     | es fin de journey                              |
/// | `enable_next_when`     | el propio `is_complete`                        |
///
/// ```
/// use journey_core::{Metadata, StepDefinition};
/// use serde_json::{json, Value};
///
/// let step: StepDefinition<Value, Metadata> =
///     StepDefinition::headless("full-name").skipped_when(|state: &Value, _| state["is_new"] != json!(true));
/// assert_eq!(step.slug(), "full-name");
/// ```
pub struct StepDefinition<S, M = Metadata> {
    pub(crate) slug: String,
    pub(crate) component: Arc<dyn StepComponent<S, M>>,
    pub(crate) metadata: Option<M>,
    pub(crate) is_complete: Option<Predicate<S, M>>,
    pub(crate) is_enabled: Option<Predicate<S, M>>,
    pub(crate) is_submittable: Option<Predicate<S, M>>,
    pub(crate) is_skipped: Option<Predicate<S, M>>,
    pub(crate) is_journey_end: Option<Predicate<S, M>>,
    pub(crate) show_previous_button: Option<Predicate<S, M>>,
    pub(crate) show_next_button: Option<Predicate<S, M>>,
    pub(crate) show_submit_button: Option<Predicate<S, M>>,
    pub(crate) enable_next_button: Option<Predicate<S, M>>,
    pub(crate) previous_step: Option<NeighborOverride<S, M>>,
    pub(crate) next_step: Option<NeighborOverride<S, M>>,
}

impl<S, M> StepDefinition<S, M> {
    pub fn new<C>(slug: impl Into<String>, component: C) -> Self
        where C: StepComponent<S, M> + 'static
    {
        Self { slug: slug.into(),
               component: Arc::new(component),
               metadata: None,
               is_complete: None,
               is_enabled: None,
               is_submittable: None,
               is_skipped: None,
               is_journey_end: None,
               show_previous_button: None,
               show_next_button: None,
               show_submit_button: None,
               enable_next_button: None,
               previous_step: None,
               next_step: None }
    }

    /// Step sin componente renderizable.
    pub fn headless(slug: impl Into<String>) -> Self {
        Self::new(slug, Headless)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }

    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn complete_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.is_complete = Some(Arc::new(f));
        self
    }

    pub fn enabled_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.is_enabled = Some(Arc::new(f));
        self
    }

    pub fn submittable_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.is_submittable = Some(Arc::new(f));
        self
    }

    /// Un step saltado no cuenta como vecino lógico de nadie.
    pub fn skipped_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.is_skipped = Some(Arc::new(f));
        self
    }

    /// El fin de journey nunca se detecta automáticamente: el autor lo declara.
    pub fn journey_end_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.is_journey_end = Some(Arc::new(f));
        self
    }

    /// Atajo para `journey_end_when(|_, _| true)`.
    pub fn journey_end(self) -> Self {
        self.journey_end_when(|_, _| true)
    }

    pub fn show_previous_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.show_previous_button = Some(Arc::new(f));
        self
    }

    pub fn show_next_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.show_next_button = Some(Arc::new(f));
        self
    }

    pub fn show_submit_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.show_submit_button = Some(Arc::new(f));
        self
    }

    pub fn enable_next_when<F>(mut self, f: F) -> Self
        where F: Fn(&S, &ComputedSteps<S, M>) -> bool + Send + Sync + 'static
    {
        self.enable_next_button = Some(Arc::new(f));
        self
    }

    /// Reemplaza el vecino anterior. El slug devuelto puede ser cualquiera
    /// (no necesariamente adyacente).
    pub fn previous_step_with<F>(mut self, f: F) -> Self
        where F: Fn(&S, Option<&str>, &ComputedSteps<S, M>) -> Option<String> + Send + Sync + 'static
    {
        self.previous_step = Some(Arc::new(f));
        self
    }

    /// Reemplaza el vecino siguiente.
    pub fn next_step_with<F>(mut self, f: F) -> Self
        where F: Fn(&S, Option<&str>, &ComputedSteps<S, M>) -> Option<String> + Send + Sync + 'static
    {
        self.next_step = Some(Arc::new(f));
        self
    }

    /// Nombres de los predicados/overrides declarados explícitamente.
    ///
    /// Entra en el `definition_hash`: añadir o quitar un override cambia la
    /// identidad de la definición. El cuerpo de las closures no es hasheable;
    /// para eso existe `JourneyDefinition::with_version`.
    pub fn declared(&self) -> Vec<&'static str> {
        let fields: [(&'static str, bool); 11] = [("is_complete", self.is_complete.is_some()),
                                                  ("is_enabled", self.is_enabled.is_some()),
                                                  ("is_submittable", self.is_submittable.is_some()),
                                                  ("is_skipped", self.is_skipped.is_some()),
                                                  ("is_journey_end", self.is_journey_end.is_some()),
                                                  ("show_previous_button", self.show_previous_button.is_some()),
                                                  ("show_next_button", self.show_next_button.is_some()),
                                                  ("show_submit_button", self.show_submit_button.is_some()),
                                                  ("enable_next_button", self.enable_next_button.is_some()),
                                                  ("previous_step", self.previous_step.is_some()),
                                                  ("next_step", self.next_step.is_some())];
        fields.into_iter().filter(|(_, present)| *present).map(|(name, _)| name).collect()
    }
}

impl<S, M: Clone> Clone for StepDefinition<S, M> {
    fn clone(&self) -> Self {
        Self { slug: self.slug.clone(),
               component: Arc::clone(&self.component),
               metadata: self.metadata.clone(),
               is_complete: self.is_complete.clone(),
               is_enabled: self.is_enabled.clone(),
               is_submittable: self.is_submittable.clone(),
               is_skipped: self.is_skipped.clone(),
               is_journey_end: self.is_journey_end.clone(),
               show_previous_button: self.show_previous_button.clone(),
               show_next_button: self.show_next_button.clone(),
               show_submit_button: self.show_submit_button.clone(),
               enable_next_button: self.enable_next_button.clone(),
               previous_step: self.previous_step.clone(),
               next_step: self.next_step.clone() }
    }
}

impl<S, M: fmt::Debug> fmt::Debug for StepDefinition<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
         .field("slug", &self.slug)
         .field("metadata", &self.metadata)
         .field("declared", &self.declared())
         .finish()
    }
}
