//! Journey de calibración usado por el binario demo y los tests de raíz.
//!
//! `start → is-new → full-name → finish`, donde `full-name` sólo aparece si el
//! usuario responde "sí" en `is-new`.
use std::sync::{Arc, Mutex};

use journey_core::{
    build_journey_definition, JourneyConfig, JourneyDefinition, JourneySession, JourneyState, Metadata,
    NavigationEventKind, StepComponent, StepDefinition, StepProps,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoState {
    pub current_step: String,
    pub is_new: Option<bool>,
    pub full_name: Option<String>,
}

impl DemoState {
    pub fn at(slug: &str) -> Self {
        Self { current_step: slug.to_string(),
               ..Self::default() }
    }
}

impl JourneyState for DemoState {
    fn current_step(&self) -> &str {
        &self.current_step
    }

    fn with_current_step(&self, slug: &str) -> Self {
        Self { current_step: slug.to_string(),
               ..self.clone() }
    }
}

/// Canal de clicks de los botones sí/no.
pub type AnswerChannel = Arc<Mutex<Option<bool>>>;

/// Pregunta "¿eres nuevo?". Al renderizar consume el click pendiente, guarda la
/// respuesta en el estado y pide avanzar.
pub struct IsNewQuestion {
    answers: AnswerChannel,
}

impl StepComponent<DemoState, Metadata> for IsNewQuestion {
    fn render(&self, props: &mut StepProps<'_, DemoState, Metadata>) {
        let answer = match self.answers.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(is_new) = answer {
            props.replace_state(DemoState { is_new: Some(is_new),
                                            ..props.state.clone() });
            props.request_next();
        }
    }
}

fn titled(title: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("title".to_string(), json!(title));
    metadata
}

pub fn calibration_journey(answers: AnswerChannel) -> JourneyDefinition<DemoState> {
    build_journey_definition(vec![
        StepDefinition::headless("start").with_metadata(titled("Calibración")),
        StepDefinition::new("is-new", IsNewQuestion { answers }).with_metadata(titled("¿Eres nuevo?"))
                                                                .complete_when(|s: &DemoState, _| s.is_new.is_some()),
        StepDefinition::headless("full-name").with_metadata(titled("Nombre completo"))
                                             .skipped_when(|s: &DemoState, _| s.is_new != Some(true))
                                             .complete_when(|s: &DemoState, _| {
                                                 s.full_name.as_deref().is_some_and(|n| !n.trim().is_empty())
                                             }),
        StepDefinition::headless("finish").with_metadata(titled("Listo")).journey_end(),
    ])
}

/// Resultado de recorrer el journey de punta a punta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// Slugs visitados en orden, incluido el inicial.
    pub visited: Vec<String>,
    pub final_state: DemoState,
    pub commits: usize,
}

/// Recorre el journey respondiendo `is_new` en la pregunta y, si corresponde,
/// rellenando el nombre. Termina al llegar a un fin de journey.
pub fn run_calibration(is_new: bool, config: JourneyConfig) -> Result<DemoOutcome, AppError> {
    let answers: AnswerChannel = Arc::new(Mutex::new(None));
    let mut session = JourneySession::with_config(calibration_journey(Arc::clone(&answers)),
                                                  config,
                                                  DemoState::at("start"))?;
    let mut visited = vec![session.settle()?.slug.clone()];

    loop {
        let view = session.current_view()?;
        if view.is_journey_end {
            break;
        }
        let slug = view.slug.clone();
        info!("step {slug}: complete={} next={:?}", view.is_complete, view.next_slug);

        match slug.as_str() {
            "is-new" => {
                if let Ok(mut slot) = answers.lock() {
                    *slot = Some(is_new);
                }
                session.render_current()?;
            }
            "full-name" => {
                let named = DemoState { full_name: Some("Ada Lovelace".to_string()),
                                        ..session.state().clone() };
                session.replace_state(named);
                session.request_next();
            }
            _ => session.request_next(),
        }

        let next = session.settle()?.slug.clone();
        if next == slug {
            return Err(AppError::Config(format!("journey stuck at step '{slug}'")));
        }
        visited.push(next);
    }

    let commits = session.engine()
                         .events()
                         .iter()
                         .filter(|e| matches!(e.kind, NavigationEventKind::NavigationCommitted { .. }))
                         .count();
    Ok(DemoOutcome { visited,
                     final_state: session.into_state(),
                     commits })
}
