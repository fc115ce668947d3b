use serde::{Deserialize, Serialize};

/// How much checking `add_edge` performs beyond the required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Only the required fields are checked; endpoints may name unknown
    /// nodes, repeat an existing connection, or loop back to the start.
    #[default]
    Permissive,
    /// Both endpoints must exist, differ, and not already be connected.
    Strict,
}

impl EdgePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }
}
