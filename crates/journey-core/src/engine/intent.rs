//! Máquina de intención de navegación.
//!
//! Estados: `Idle`, `PendingPrevious`, `PendingNext`. Una petición fija el
//! estado pendiente (la última gana, sin cola); el siguiente pase de
//! evaluación lo consume y vuelve a `Idle` incondicionalmente, haya o no
//! commit.

use crate::step::Direction;

/// Intención de navegación pendiente.
pub type NavigationIntent = Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentPhase {
    Idle,
    PendingPrevious,
    PendingNext,
}

#[derive(Debug, Default, Clone)]
pub struct IntentSlot {
    pending: Option<NavigationIntent>,
}

impl IntentSlot {
    /// Registra una intención y devuelve la que sobrescribió, si había.
    pub fn request(&mut self, intent: NavigationIntent) -> Option<NavigationIntent> {
        self.pending.replace(intent)
    }

    pub fn pending(&self) -> Option<NavigationIntent> {
        self.pending
    }

    pub fn phase(&self) -> IntentPhase {
        match self.pending {
            None => IntentPhase::Idle,
            Some(Direction::Previous) => IntentPhase::PendingPrevious,
            Some(Direction::Next) => IntentPhase::PendingNext,
        }
    }

    /// Consume la intención: el slot queda vacío.
    pub fn take(&mut self) -> Option<NavigationIntent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_request_wins() {
        let mut slot = IntentSlot::default();
        assert_eq!(slot.phase(), IntentPhase::Idle);
        assert_eq!(slot.request(Direction::Next), None);
        assert_eq!(slot.request(Direction::Previous), Some(Direction::Next));
        assert_eq!(slot.phase(), IntentPhase::PendingPrevious);
    }

    #[test]
    fn take_always_returns_to_idle() {
        let mut slot = IntentSlot::default();
        slot.request(Direction::Next);
        assert_eq!(slot.take(), Some(Direction::Next));
        assert_eq!(slot.phase(), IntentPhase::Idle);
        assert_eq!(slot.take(), None);
    }
}
