//! Engine de navegación de journeys.
//!
//! `JourneyEngine` proyecta la vista del step actual y consume la intención
//! pendiente; `JourneySession` es el host que posee el estado y aplica los
//! commits; `JourneyBuilder` arma la definición en orden.

pub mod builder;
pub mod core;
pub mod intent;
pub mod projector;
pub mod session;

pub use builder::JourneyBuilder;
pub use core::JourneyEngine;
pub use intent::{IntentPhase, IntentSlot, NavigationIntent};
pub use projector::project;
pub use session::JourneySession;
