//! Definiciones relacionadas a Steps.
//!
//! Un step de journey es una pantalla/etapa identificada por su `slug`. Este
//! módulo define:
//! - `StepDefinition`: lo que escribe el autor del journey (predicados
//!   opcionales, overrides de vecino, metadata opaca).
//! - `ComputedStep` / `ComputedSteps`: la versión normalizada, con todos los
//!   defaults materializados y la resolución de vecinos.
//! - `StepComponent`: la unidad renderizable opaca de cada step.

pub mod component;
pub mod computed;
pub mod definition;
mod direction;

pub use component::{Headless, StepComponent};
pub use computed::{ComputedStep, ComputedSteps};
pub use definition::{NeighborOverride, Predicate, StepDefinition};
pub use direction::Direction;
