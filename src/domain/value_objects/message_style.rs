use serde::{Deserialize, Serialize};

/// Layout of the update message posted to the chat channel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// One plain-text line per metric
    #[default]
    Text,
    /// One titled attachment field per metric
    Fields,
}

impl std::fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Fields => write!(f, "fields"),
        }
    }
}
