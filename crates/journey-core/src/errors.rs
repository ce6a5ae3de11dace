//! Errores específicos del core.
//!
//! Todos son errores de configuración del caller (fail-fast); "no hay vecino"
//! en una dirección no es un error sino un resultado normal (`None`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum JourneyError {
    /// `state.current_step()` no nombra ningún step registrado.
    #[error("invalid current step slug: {slug}")]
    InvalidCurrentStep { slug: String },
    /// Un override `previous_step`/`next_step` devolvió un slug desconocido.
    /// Sólo se reporta en modo estricto (`JourneyConfig::strict_targets`).
    #[error("step '{from}' points to unknown step '{slug}'")]
    UnknownSlug { from: String, slug: String },
    #[error("duplicate step slug: {slug}")]
    DuplicateSlug { slug: String },
    #[error("journey has no steps")]
    EmptyJourney,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_slug() {
        let err = JourneyError::InvalidCurrentStep { slug: "nope".into() };
        assert_eq!(err.to_string(), "invalid current step slug: nope");

        let err = JourneyError::UnknownSlug { from: "a".into(),
                                              slug: "zzz".into() };
        assert_eq!(err.to_string(), "step 'a' points to unknown step 'zzz'");
    }

    #[test]
    fn error_roundtrips_through_json() {
        let err = JourneyError::DuplicateSlug { slug: "start".into() };
        let json = serde_json::to_string(&err).expect("serialize");
        let back: JourneyError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, err);
    }
}
