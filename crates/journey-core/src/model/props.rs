use crate::step::Direction;

/// Props entregadas al componente del step actual.
///
/// `replace_state`, `request_next` y `request_previous` no actúan de
/// inmediato: `JourneySession::render_current` los aplica al terminar el
/// render, primero el estado y luego la intención de navegación.
pub struct StepProps<'a, S, M> {
    pub metadata: &'a M,
    pub state: &'a S,
    replaced: Option<S>,
    intent: Option<Direction>,
}

impl<'a, S, M> StepProps<'a, S, M> {
    pub fn new(metadata: &'a M, state: &'a S) -> Self {
        Self { metadata,
               state,
               replaced: None,
               intent: None }
    }

    pub fn replace_state(&mut self, state: S) {
        self.replaced = Some(state);
    }

    pub fn request_next(&mut self) {
        self.intent = Some(Direction::Next);
    }

    pub fn request_previous(&mut self) {
        self.intent = Some(Direction::Previous);
    }

    /// Estado reemplazado e intención pedidos durante el render.
    pub fn into_effects(self) -> (Option<S>, Option<Direction>) {
        (self.replaced, self.intent)
    }
}
