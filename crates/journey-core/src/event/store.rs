use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{NavigationEvent, NavigationEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, journey_id: Uuid, kind: NavigationEventKind) -> NavigationEvent;
    /// Lista eventos de un journey (orden ascendente por seq).
    fn list(&self, journey_id: Uuid) -> Vec<NavigationEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<NavigationEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, journey_id: Uuid, kind: NavigationEventKind) -> NavigationEvent {
        let events = self.inner.entry(journey_id).or_default();
        let ev = NavigationEvent { seq: events.len() as u64,
                                   journey_id,
                                   kind,
                                   ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, journey_id: Uuid) -> Vec<NavigationEvent> {
        self.inner.get(&journey_id).cloned().unwrap_or_default()
    }
}
