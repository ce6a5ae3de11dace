//! Constantes del motor core.
//!
//! `ENGINE_VERSION` forma parte del input del `definition_hash`: un cambio de
//! versión invalida las cachés de steps computados aunque la lista de steps
//! no cambie.

/// Versión lógica del motor. Mantener estable mientras no haya cambios
/// incompatibles en las reglas de defaults o de resolución de vecinos.
pub const ENGINE_VERSION: &str = "J1.0";
