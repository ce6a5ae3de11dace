//! Módulo de hashing y canonicalización JSON.
//!
//! Se usa para la identidad de una `JourneyDefinition`: dos listas de steps con
//! el mismo JSON canónico producen el mismo hash y reutilizan los steps
//! computados.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
