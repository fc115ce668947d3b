use serde::{Deserialize, Serialize};

/// Partially filled "Add New Path" form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeDraft {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub accessible: Option<bool>,
}

impl EdgeDraft {
    pub fn new(start: impl Into<String>, end: impl Into<String>, distance: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            distance,
            accessible: None,
        }
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = Some(accessible);
        self
    }
}
