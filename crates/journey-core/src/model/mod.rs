//! Modelos neutrales: estado del caller, vista del step actual y props del
//! componente renderizable.

mod props;
mod state;
mod view;

pub use props::StepProps;
pub use state::{JourneyState, CURRENT_STEP_KEY};
pub use view::{CurrentStepView, JourneyView};

/// Metadata por defecto de un step: objeto JSON (vacío si el autor no la
/// declara). El core no la interpreta.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
