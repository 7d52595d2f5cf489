use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse topic of an item, used to pick the justification keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTag {
    Safety,
    Tooling,
    /// Default bucket for items matching neither safety nor tooling vocabulary.
    Procedure,
}

impl TopicTag {
    pub const ALL: [TopicTag; 3] = [TopicTag::Safety, TopicTag::Tooling, TopicTag::Procedure];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicTag::Safety => "safety",
            TopicTag::Tooling => "tooling",
            TopicTag::Procedure => "procedure",
        }
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagError {
    #[error("unknown topic tag: {0}")]
    Unknown(String),
}
