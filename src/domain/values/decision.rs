use serde::{Deserialize, Serialize};
use std::fmt;

/// Ternary outcome of evaluating a strategy against a score context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Enter,
    Exit,
    Hold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Enter => write!(f, "ENTER"),
            Decision::Exit => write!(f, "EXIT"),
            Decision::Hold => write!(f, "HOLD"),
        }
    }
}
