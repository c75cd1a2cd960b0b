use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::encoding::EncodedImage;

/// Identifier of a stored post. The surrounding system reserves the
/// literal zero id as its "no post" sentinel, so the store never
/// assigns it to a real post.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct PostId(pub u64);

impl PostId {
    pub const NONE: PostId = PostId(0);
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The normalized payload the form hands to an action creator: tags are
/// already split, the image is whatever the encoder delivered.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub creator: String,
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    pub image: Option<EncodedImage>,
}

/// A post as the store keeps it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub creator: String,
    pub title: String,
    pub message: String,
    pub tags: Vec<String>,
    pub image: Option<EncodedImage>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn from_record(id: PostId, record: PostRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            creator: record.creator,
            title: record.title,
            message: record.message,
            tags: record.tags,
            image: record.image,
            created_at,
        }
    }
}

/// Actions understood by the posts slice. Opaque to the form, which
/// only ever obtains them through the action creators on [`Model`] and
/// forwards them unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PostsAction {
    Create(PostRecord),
    Update(PostId, PostRecord),
}

/// The action-creator pair of the surrounding system.
#[derive(Clone, Debug, Default)]
pub struct Model;

impl Model {
    pub fn create_post(&self, record: PostRecord) -> PostsAction {
        PostsAction::Create(record)
    }

    pub fn update_post(&self, id: PostId, record: PostRecord) -> PostsAction {
        PostsAction::Update(id, record)
    }
}
