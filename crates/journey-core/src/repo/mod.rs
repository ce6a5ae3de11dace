pub mod registry;
pub mod types;

pub use registry::{build_registry, StepRegistry};
pub use types::{build_journey_definition, JourneyDefinition};
