use std::fmt;

use serde::{Deserialize, Serialize};

/// Dirección de recorrido sobre el orden canónico de steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => f.write_str("previous"),
            Direction::Next => f.write_str("next"),
        }
    }
}
