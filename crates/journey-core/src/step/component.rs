//! Unidad renderizable de un step.
//!
//! El core nunca inspecciona ni construye UI: sólo guarda el componente y lo
//! invoca con `StepProps` cuando el host lo pide
//! (`JourneySession::render_current`).

use crate::model::StepProps;

/// Componente renderizable asociado a un step.
pub trait StepComponent<S, M>: Send + Sync {
    fn render(&self, props: &mut StepProps<'_, S, M>);
}

impl<S, M, F> StepComponent<S, M> for F where F: Fn(&mut StepProps<'_, S, M>) + Send + Sync
{
    fn render(&self, props: &mut StepProps<'_, S, M>) {
        self(props)
    }
}

/// Componente vacío, para journeys sin UI (tests, validaciones de flujo).
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl<S, M> StepComponent<S, M> for Headless {
    fn render(&self, _props: &mut StepProps<'_, S, M>) {}
}
