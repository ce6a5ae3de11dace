//! Host de un journey: dueño del estado y del engine.
//!
//! Implementa la regla "un commit dispara otro pase": `settle` evalúa, aplica
//! el estado nuevo si hubo commit y devuelve la vista del step resultante.

use crate::config::JourneyConfig;
use crate::engine::JourneyEngine;
use crate::errors::JourneyError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::model::{JourneyState, JourneyView, Metadata, StepProps};
use crate::repo::JourneyDefinition;

pub struct JourneySession<S, M = Metadata, E = InMemoryEventStore>
    where E: EventStore
{
    engine: JourneyEngine<S, M, E>,
    state: S,
}

impl<S, M> JourneySession<S, M, InMemoryEventStore>
    where S: JourneyState,
          M: Clone + Default
{
    pub fn new(definition: JourneyDefinition<S, M>, initial_state: S) -> Result<Self, JourneyError> {
        Ok(Self::from_engine(JourneyEngine::new(definition)?, initial_state))
    }

    pub fn with_config(definition: JourneyDefinition<S, M>,
                       config: JourneyConfig,
                       initial_state: S)
                       -> Result<Self, JourneyError> {
        Ok(Self::from_engine(JourneyEngine::with_config(definition, config)?, initial_state))
    }
}

impl<S, M, E> JourneySession<S, M, E>
    where S: JourneyState,
          M: Clone + Default,
          E: EventStore
{
    pub fn from_engine(engine: JourneyEngine<S, M, E>, initial_state: S) -> Self {
        Self { engine,
               state: initial_state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn engine(&self) -> &JourneyEngine<S, M, E> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut JourneyEngine<S, M, E> {
        &mut self.engine
    }

    /// Sustituye el estado completo. No navega: eso sólo ocurre en `settle`.
    pub fn replace_state(&mut self, state: S) {
        self.state = state;
    }

    pub fn request_next(&mut self) {
        self.engine.request_next();
    }

    pub fn request_previous(&mut self) {
        self.engine.request_previous();
    }

    /// Vista del estado actual sin consumir la intención pendiente.
    pub fn current_view(&self) -> Result<JourneyView<'_, S, M>, JourneyError> {
        self.engine.view(&self.state)
    }

    /// Pase de evaluación más, si hubo commit, la proyección del step nuevo.
    ///
    /// La proyección no encola intenciones, así que la vista devuelta ya es
    /// estable: otro `settle` sin peticiones nuevas no cambia nada.
    pub fn settle(&mut self) -> Result<JourneyView<'_, S, M>, JourneyError> {
        let mut committed = None;
        self.engine.evaluate(&self.state, |next| committed = Some(next))?;
        if let Some(next) = committed {
            self.state = next;
        }
        self.engine.view(&self.state)
    }

    /// Renderiza el componente del step actual.
    ///
    /// Lo que el componente pida mediante `StepProps` se aplica al terminar:
    /// primero el estado reemplazado y después la intención de navegación,
    /// que queda pendiente hasta el próximo `settle`.
    pub fn render_current(&mut self) -> Result<(), JourneyError> {
        let (replaced, intent) = {
            let slug = self.state.current_step();
            let step = self.engine
                           .computed_steps()
                           .get(slug)
                           .ok_or_else(|| JourneyError::InvalidCurrentStep { slug: slug.to_string() })?;
            let mut props = StepProps::new(step.metadata(), &self.state);
            step.component().render(&mut props);
            props.into_effects()
        };

        if let Some(state) = replaced {
            self.state = state;
        }
        if let Some(intent) = intent {
            self.engine.request(intent);
        }
        Ok(())
    }
}
