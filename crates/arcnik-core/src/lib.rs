pub mod domain;
pub mod error;
pub mod ids;
pub mod time;

pub use domain::{
    AnimalKind, GearItem, GearPriority, GearStatus, MediaKind, StoryAuthor, StoryDraft,
    StoryPost, WildlifeSighting,
};
pub use error::{ArcError, ArcResult, ErrorCode};
pub use ids::{SightingId, StoryId};
pub use time::{now_epoch_millis, EpochMillis};
