use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a body in a simulation.
///
/// Ids are handed out densely in insertion order when bodies are added to a
/// simulator and never change afterwards, so a UI can bind controls to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Position of the body in its simulator's body list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
