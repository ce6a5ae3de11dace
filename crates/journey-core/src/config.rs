//! Configuración del motor.
//!
//! El core no lee variables de entorno; el crate raíz (`journeyflow::config`)
//! construye esta estructura a partir del entorno y la entrega al engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyConfig {
    /// Si es `true`, un override de vecino que devuelve un slug desconocido
    /// hace fallar la proyección con `JourneyError::UnknownSlug`. Si es
    /// `false` el vecino se resuelve a `None` y sólo se emite un `warn!`.
    pub strict_targets: bool,
    /// Registra eventos de navegación en el `EventStore` del engine.
    pub record_events: bool,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self { strict_targets: false,
               record_events: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: JourneyConfig = serde_json::from_str(r#"{"strict_targets": true}"#).expect("config");
        assert!(cfg.strict_targets);
        assert!(cfg.record_events);
    }
}
