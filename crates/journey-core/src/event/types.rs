//! Tipos de evento de un journey y estructura `NavigationEvent`.
//!
//! Rol:
//! - Cada `JourneyEngine` emite eventos a un `EventStore` append-only cuando
//!   `JourneyConfig::record_events` está activo.
//! - Permiten auditar qué se pidió y qué se confirmó sin depender del estado
//!   del caller, que el engine nunca guarda.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEventKind {
    /// Primer evento de un `journey_id`: fija la definición inicial.
    JourneyInitialized { definition_hash: String, step_count: usize },
    /// Se registró una intención. Puede sobrescribir otra aún pendiente.
    NavigationRequested { intent: Direction },
    /// La intención se consumió y se entregó un estado nuevo al caller.
    NavigationCommitted { intent: Direction, from: String, to: String },
    /// La intención se consumió sin vecino válido en esa dirección.
    NavigationDropped { intent: Direction, from: String },
    /// `reload` detectó una definición distinta y recalculó los steps.
    DefinitionReloaded { definition_hash: String, step_count: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub journey_id: Uuid,
    pub kind: NavigationEventKind,
    pub ts: DateTime<Utc>,
}
