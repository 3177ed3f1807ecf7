use crate::ids::{SightingId, StoryId};
use crate::time::EpochMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAuthor {
    pub name: String,
    pub role: String,
}

/// A user-uploaded media post. Media travels inline as a data-URI string,
/// never as an external path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPost {
    pub id: StoryId,
    pub title: String,
    pub media_data: String,
    pub media_kind: MediaKind,
    pub author: StoryAuthor,
    pub location: String,
    pub duration: String,
    pub category: String,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at_ms: EpochMillis,
    pub liked: bool,
}

/// Fields a publisher supplies; the store fills in id, counters and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub media_data: String,
    pub media_kind: MediaKind,
    pub location: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    pub category: String,
    pub description: String,
}

fn default_duration() -> String {
    "1:00".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearPriority {
    Essential,
    Recommended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GearStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl GearStatus {
    /// Advances the preparation cycle; Complete wraps back to NotStarted.
    pub fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Complete,
            Self::Complete => Self::NotStarted,
        }
    }
}

impl Default for GearStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub priority: GearPriority,
    pub status: GearStatus,
    pub tip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    Penguin,
    Whale,
    Seal,
    Bird,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WildlifeSighting {
    pub id: SightingId,
    pub species: String,
    pub kind: AnimalKind,
    pub count: u32,
    pub location: String,
    pub logged_at_ms: EpochMillis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_status_cycles_through_all_states() {
        let start = GearStatus::NotStarted;
        assert_eq!(start.next(), GearStatus::InProgress);
        assert_eq!(start.next().next(), GearStatus::Complete);
        assert_eq!(start.next().next().next(), GearStatus::NotStarted);
    }
}
