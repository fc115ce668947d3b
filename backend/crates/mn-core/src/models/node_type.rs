use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of location a map node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    #[default]
    Room,
    Hallway,
    Entrance,
    Elevator,
    Stairway,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        Self::Room,
        Self::Hallway,
        Self::Entrance,
        Self::Elevator,
        Self::Stairway,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Hallway => "hallway",
            Self::Entrance => "entrance",
            Self::Elevator => "elevator",
            Self::Stairway => "stairway",
        }
    }
}

impl FromStr for NodeType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "room" => Ok(Self::Room),
            "hallway" => Ok(Self::Hallway),
            "entrance" => Ok(Self::Entrance),
            "elevator" => Ok(Self::Elevator),
            "stairway" => Ok(Self::Stairway),
            _ => Err(CoreError::InvalidNodeType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
