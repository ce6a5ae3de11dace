//! Core JourneyEngine implementation

use log::{debug, warn};
use uuid::Uuid;

use super::builder::JourneyBuilder;
use super::intent::{IntentPhase, IntentSlot, NavigationIntent};
use super::projector::{intent_target, project};
use crate::config::JourneyConfig;
use crate::errors::JourneyError;
use crate::event::{EventStore, InMemoryEventStore, NavigationEvent, NavigationEventKind};
use crate::model::{JourneyState, JourneyView, Metadata};
use crate::repo::{build_registry, JourneyDefinition};
use crate::step::{ComputedSteps, Direction};

/// Motor de evaluación de un journey.
///
/// Guarda los steps computados (recalculados sólo cuando cambia el
/// `definition_hash`) y la intención de navegación pendiente. No guarda el
/// estado del caller: cada pase recibe `&S` y los cambios salen únicamente por
/// la función `replace`.
pub struct JourneyEngine<S, M = Metadata, E = InMemoryEventStore>
    where E: EventStore
{
    journey_id: Uuid,
    config: JourneyConfig,
    definition_hash: String,
    computed: ComputedSteps<S, M>,
    intent: IntentSlot,
    event_store: E,
}

impl<S, M> JourneyEngine<S, M, InMemoryEventStore>
    where S: JourneyState,
          M: Clone + Default
{
    /// Crea un engine con configuración por defecto y store en memoria.
    pub fn new(definition: JourneyDefinition<S, M>) -> Result<Self, JourneyError> {
        Self::with_config(definition, JourneyConfig::default())
    }

    pub fn with_config(definition: JourneyDefinition<S, M>, config: JourneyConfig) -> Result<Self, JourneyError> {
        Self::with_store(definition, config, InMemoryEventStore::default())
    }

    /// Builder ergonómico: `JourneyEngine::builder().step(..).step(..).build()`.
    pub fn builder() -> JourneyBuilder<S, M, InMemoryEventStore> {
        JourneyBuilder::new()
    }
}

impl<S, M, E> JourneyEngine<S, M, E>
    where S: JourneyState,
          M: Clone + Default,
          E: EventStore
{
    pub fn with_store(definition: JourneyDefinition<S, M>,
                      config: JourneyConfig,
                      event_store: E)
                      -> Result<Self, JourneyError> {
        let definition_hash = definition.definition_hash().to_string();
        let computed = compute_steps(definition)?;
        let mut engine = Self { journey_id: Uuid::new_v4(),
                                config,
                                definition_hash,
                                computed,
                                intent: IntentSlot::default(),
                                event_store };
        let kind = NavigationEventKind::JourneyInitialized { definition_hash: engine.definition_hash.clone(),
                                                             step_count: engine.computed.len() };
        record(&mut engine.event_store, &engine.config, engine.journey_id, kind);
        Ok(engine)
    }

    pub fn journey_id(&self) -> Uuid {
        self.journey_id
    }

    pub fn config(&self) -> &JourneyConfig {
        &self.config
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn computed_steps(&self) -> &ComputedSteps<S, M> {
        &self.computed
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Eventos de este journey en orden de emisión.
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.event_store.list(self.journey_id)
    }

    /// Registra una intención. Sobrescribe cualquier otra aún pendiente.
    pub fn request(&mut self, intent: NavigationIntent) {
        if let Some(previous) = self.intent.request(intent) {
            debug!("pending {previous} navigation replaced by {intent}");
        }
        record(&mut self.event_store,
               &self.config,
               self.journey_id,
               NavigationEventKind::NavigationRequested { intent });
    }

    pub fn request_next(&mut self) {
        self.request(Direction::Next)
    }

    pub fn request_previous(&mut self) {
        self.request(Direction::Previous)
    }

    pub fn pending_intent(&self) -> Option<NavigationIntent> {
        self.intent.pending()
    }

    pub fn intent_phase(&self) -> IntentPhase {
        self.intent.phase()
    }

    /// Proyección pura: no consume la intención pendiente.
    pub fn view(&self, state: &S) -> Result<JourneyView<'_, S, M>, JourneyError> {
        project(state.current_step(), state, &self.computed, &self.config)
    }

    /// Un pase de evaluación.
    ///
    /// Proyecta el step actual de `state` y, si hay una intención pendiente,
    /// la consume: con vecino válido en esa dirección llama a `replace` con
    /// `state.with_current_step(vecino)` (una sola vez); sin vecino la
    /// descarta. En ambos casos la intención queda limpia, también si la
    /// proyección falla. La vista devuelta corresponde al step de `state`, no
    /// al destino del commit: el caller debe volver a evaluar con el estado
    /// nuevo.
    pub fn evaluate<F>(&mut self, state: &S, mut replace: F) -> Result<JourneyView<'_, S, M>, JourneyError>
        where F: FnMut(S)
    {
        let pending = self.intent.take();
        let view = match project(state.current_step(), state, &self.computed, &self.config) {
            Ok(view) => view,
            Err(err) => {
                if let Some(intent) = pending {
                    warn!("{intent} navigation discarded: {err}");
                }
                return Err(err);
            }
        };

        if let Some(intent) = pending {
            let from = view.slug.clone();
            match intent_target(intent, &view.current, &self.computed) {
                Some(to) => {
                    debug!("{intent} navigation committed: {from} -> {to}");
                    let kind = NavigationEventKind::NavigationCommitted { intent,
                                                                          from,
                                                                          to: to.to_string() };
                    record(&mut self.event_store, &self.config, self.journey_id, kind);
                    replace(state.with_current_step(to));
                }
                None => {
                    debug!("{intent} navigation dropped: no {intent} step from {from}");
                    record(&mut self.event_store,
                           &self.config,
                           self.journey_id,
                           NavigationEventKind::NavigationDropped { intent, from });
                }
            }
        }

        Ok(view)
    }

    /// Sustituye la definición. Sólo recalcula registro y steps computados si
    /// el `definition_hash` cambió; devuelve si hubo recálculo. Si la nueva
    /// definición es inválida el engine conserva la anterior.
    pub fn reload(&mut self, definition: JourneyDefinition<S, M>) -> Result<bool, JourneyError> {
        if definition.definition_hash() == self.definition_hash {
            debug!("definition {} unchanged, keeping computed steps", self.definition_hash);
            return Ok(false);
        }
        let definition_hash = definition.definition_hash().to_string();
        self.computed = compute_steps(definition)?;
        self.definition_hash = definition_hash;
        debug!("definition reloaded: {} ({} steps)", self.definition_hash, self.computed.len());
        let kind = NavigationEventKind::DefinitionReloaded { definition_hash: self.definition_hash.clone(),
                                                             step_count: self.computed.len() };
        record(&mut self.event_store, &self.config, self.journey_id, kind);
        Ok(true)
    }
}

fn compute_steps<S, M>(definition: JourneyDefinition<S, M>) -> Result<ComputedSteps<S, M>, JourneyError>
    where M: Default
{
    let registry = build_registry(definition.into_steps())?;
    Ok(ComputedSteps::normalize(registry))
}

fn record<E: EventStore>(store: &mut E, config: &JourneyConfig, journey_id: Uuid, kind: NavigationEventKind) {
    if config.record_events {
        store.append_kind(journey_id, kind);
    }
}
