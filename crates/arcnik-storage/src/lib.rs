use arcnik_config::StoryStoreConfig;
use arcnik_core::{now_epoch_millis, StoryAuthor, StoryDraft, StoryId, StoryPost};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub enum StoreError {
    InvalidStory(String),
    CapacityExceeded {
        attempted_bytes: u64,
        ceiling_bytes: u64,
    },
    NotFound(StoryId),
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStory(message) => write!(f, "invalid story: {message}"),
            Self::CapacityExceeded {
                attempted_bytes,
                ceiling_bytes,
            } => write!(
                f,
                "story storage full: {attempted_bytes} bytes would exceed the {ceiling_bytes} byte ceiling"
            ),
            Self::NotFound(id) => write!(f, "no story with id {id}"),
            Self::Io(err) => write!(f, "story storage write failed: {err}"),
            Self::Encode(err) => write!(f, "story encoding failed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }
}

/// Snapshot of how full the store is; `warn` trips at the soft threshold
/// below the hard ceiling.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StorageStatus {
    pub bytes_used: u64,
    pub ceiling_bytes: u64,
    pub warn: bool,
}

const STORE_FILE: &str = "stories.json";

/// The story collection behind one JSON document. Constructed once at
/// startup and shared by reference; all mutations serialize the full
/// collection and persist it atomically (temp file + rename), so a failed
/// write never leaves a half-updated document behind.
#[derive(Debug)]
pub struct StoryStore {
    path: PathBuf,
    config: StoryStoreConfig,
    posts: Mutex<Vec<StoryPost>>,
}

impl StoryStore {
    /// Loads the collection from `<data_dir>/stories.json`. A missing file is
    /// an empty collection; an unreadable one is logged and treated as empty
    /// rather than refusing to start.
    pub fn open(data_dir: &Path, config: StoryStoreConfig) -> Self {
        let path = data_dir.join(STORE_FILE);
        let posts = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<StoryPost>>(&bytes) {
                Ok(posts) => posts,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "story document unreadable, starting empty");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "story document unreadable, starting empty");
                Vec::new()
            }
        };
        tracing::info!(path = %path.display(), count = posts.len(), "story store loaded");
        Self {
            path,
            config,
            posts: Mutex::new(posts),
        }
    }

    pub fn list(&self) -> Vec<StoryPost> {
        self.posts.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    pub fn status(&self) -> StorageStatus {
        let posts = self.posts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let bytes_used = serde_json::to_vec(&*posts)
            .map(|encoded| encoded.len() as u64)
            .unwrap_or(0);
        StorageStatus {
            bytes_used,
            ceiling_bytes: self.config.ceiling_bytes,
            warn: bytes_used > self.config.warn_bytes,
        }
    }

    /// Validates the draft, measures the candidate document against the
    /// ceiling, then prepends and persists. Rejected publishes leave both the
    /// collection and the document untouched; a failed write rolls the new
    /// post back out of memory.
    pub fn publish(&self, draft: StoryDraft) -> Result<StoryPost, StoreError> {
        validate(&draft)?;

        let post = StoryPost {
            id: StoryId::new(),
            title: draft.title,
            media_data: draft.media_data,
            media_kind: draft.media_kind,
            author: StoryAuthor {
                name: "You".to_string(),
                role: "Expedition Member - R/V NIK 421".to_string(),
            },
            location: draft.location,
            duration: draft.duration,
            category: draft.category,
            description: draft.description,
            likes: 0,
            comments: 0,
            created_at_ms: now_epoch_millis(),
            liked: false,
        };

        let mut posts = self.posts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut candidate = Vec::with_capacity(posts.len() + 1);
        candidate.push(post.clone());
        candidate.extend(posts.iter().cloned());

        let encoded = serde_json::to_vec(&candidate)?;
        let attempted_bytes = encoded.len() as u64;
        if attempted_bytes > self.config.ceiling_bytes {
            metrics::counter!("arcnik_stories_rejected_total").increment(1);
            return Err(StoreError::CapacityExceeded {
                attempted_bytes,
                ceiling_bytes: self.config.ceiling_bytes,
            });
        }
        if attempted_bytes > self.config.warn_bytes {
            tracing::warn!(
                bytes = attempted_bytes,
                warn_bytes = self.config.warn_bytes,
                "story storage is nearly full, older posts should be deleted"
            );
        }

        posts.insert(0, post.clone());
        if let Err(err) = self.write_document(&encoded) {
            posts.remove(0);
            return Err(err);
        }

        metrics::counter!("arcnik_stories_published_total").increment(1);
        metrics::gauge!("arcnik_story_store_bytes").set(attempted_bytes as f64);
        Ok(post)
    }

    /// Flips the liked flag and moves the counter with it. Applying it twice
    /// restores the original state.
    pub fn toggle_like(&self, id: StoryId) -> Result<StoryPost, StoreError> {
        let mut posts = self.posts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let previous = posts[index].clone();
        {
            let post = &mut posts[index];
            post.liked = !post.liked;
            post.likes = if post.liked {
                post.likes + 1
            } else {
                post.likes.saturating_sub(1)
            };
        }

        match self.persist(&posts) {
            Ok(_) => Ok(posts[index].clone()),
            Err(err) => {
                posts[index] = previous;
                Err(err)
            }
        }
    }

    /// Removes exactly one post. Every other post keeps its fields and order.
    pub fn delete(&self, id: StoryId) -> Result<(), StoreError> {
        let mut posts = self.posts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = posts.remove(index);
        match self.persist(&posts) {
            Ok(bytes) => {
                tracing::info!(id = %id, bytes = bytes, "story deleted");
                metrics::gauge!("arcnik_story_store_bytes").set(bytes as f64);
                Ok(())
            }
            Err(err) => {
                posts.insert(index, removed);
                Err(err)
            }
        }
    }

    fn persist(&self, posts: &[StoryPost]) -> Result<u64, StoreError> {
        let encoded = serde_json::to_vec(posts)?;
        self.write_document(&encoded)?;
        Ok(encoded.len() as u64)
    }

    fn write_document(&self, encoded: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn validate(draft: &StoryDraft) -> Result<(), StoreError> {
    if draft.title.trim().is_empty() {
        return Err(StoreError::InvalidStory("title is required".to_string()));
    }
    if draft.location.trim().is_empty() {
        return Err(StoreError::InvalidStory("location is required".to_string()));
    }
    if draft.description.trim().is_empty() {
        return Err(StoreError::InvalidStory(
            "description is required".to_string(),
        ));
    }
    if draft.media_data.trim().is_empty() {
        return Err(StoreError::InvalidStory(
            "a photo or video is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcnik_core::MediaKind;
    use tempfile::TempDir;

    fn draft(title: &str) -> StoryDraft {
        StoryDraft {
            title: title.to_string(),
            media_data: "data:image/jpeg;base64,aGVsbG8=".to_string(),
            media_kind: MediaKind::Image,
            location: "Gerlache Strait".to_string(),
            duration: "1:00".to_string(),
            category: "Wildlife".to_string(),
            description: "Gentoo colony at dusk".to_string(),
        }
    }

    fn open_store(dir: &TempDir, ceiling_bytes: u64) -> StoryStore {
        StoryStore::open(
            dir.path(),
            StoryStoreConfig {
                ceiling_bytes,
                warn_bytes: ceiling_bytes.saturating_sub(1024),
            },
        )
    }

    #[test]
    fn publish_prepends_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, 1024 * 1024);

        store.publish(draft("First")).unwrap();
        let second = store.publish(draft("Second")).unwrap();

        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[0].title, "Second");

        // Same document visible through a fresh store over the same directory
        let reopened = open_store(&dir, 1024 * 1024);
        let posts = reopened.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Second");
    }

    #[test]
    fn publish_over_ceiling_is_rejected_without_side_effects() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, 1024 * 1024);
        store.publish(draft("Keeper")).unwrap();
        let before = store.list();

        let tight = open_store(&dir, 64);
        let err = tight.publish(draft("Too big")).unwrap_err();
        match err {
            StoreError::CapacityExceeded {
                attempted_bytes,
                ceiling_bytes,
            } => {
                assert!(attempted_bytes > ceiling_bytes);
                assert_eq!(ceiling_bytes, 64);
            }
            other => panic!("expected capacity error, got {other}"),
        }
        assert_eq!(tight.list().len(), before.len());

        // document on disk untouched
        let reopened = open_store(&dir, 1024 * 1024);
        assert_eq!(reopened.list().len(), before.len());
        assert_eq!(reopened.list()[0].title, "Keeper");
    }

    #[test]
    fn failed_write_rolls_back_the_published_post() {
        let dir = TempDir::new().unwrap();
        // a regular file where the data dir should be makes every write fail
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"not a directory").unwrap();
        let store = StoryStore::open(&blocker, StoryStoreConfig::default());

        let err = store.publish(draft("Doomed")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.list().is_empty());
    }

    #[test]
    fn failed_write_reverts_like_and_delete() {
        let dir = TempDir::new().unwrap();
        let good = open_store(&dir, 1024 * 1024);
        let post = good.publish(draft("Kept")).unwrap();

        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"not a directory").unwrap();
        let broken = StoryStore {
            path: blocker.join(STORE_FILE),
            config: StoryStoreConfig::default(),
            posts: Mutex::new(vec![post.clone()]),
        };

        assert!(matches!(broken.toggle_like(post.id), Err(StoreError::Io(_))));
        let after_like = broken.list();
        assert!(!after_like[0].liked);
        assert_eq!(after_like[0].likes, 0);

        assert!(matches!(broken.delete(post.id), Err(StoreError::Io(_))));
        assert_eq!(broken.list().len(), 1);
        assert_eq!(broken.list()[0].title, "Kept");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, 1024 * 1024);

        let mut empty_title = draft("x");
        empty_title.title = "  ".to_string();
        assert!(matches!(
            store.publish(empty_title),
            Err(StoreError::InvalidStory(_))
        ));

        let mut no_media = draft("x");
        no_media.media_data = String::new();
        assert!(matches!(
            store.publish(no_media),
            Err(StoreError::InvalidStory(_))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, 1024 * 1024);
        let a = store.publish(draft("A")).unwrap();
        let b = store.publish(draft("B")).unwrap();
        let c = store.publish(draft("C")).unwrap();

        store.delete(b.id).unwrap();

        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, c.id);
        assert_eq!(posts[1].id, a.id);
        assert_eq!(posts[1].title, "A");

        assert!(matches!(
            store.delete(b.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn toggle_like_round_trips_over_two_applications() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, 1024 * 1024);
        let post = store.publish(draft("Liked")).unwrap();
        assert_eq!(post.likes, 0);
        assert!(!post.liked);

        let liked = store.toggle_like(post.id).unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, 1);

        let unliked = store.toggle_like(post.id).unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, 0);
    }

    #[test]
    fn corrupt_document_starts_empty_instead_of_failing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILE), b"not json").unwrap();
        let store = open_store(&dir, 1024 * 1024);
        assert!(store.list().is_empty());
    }
}
