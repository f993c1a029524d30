//! BSON document shape of a stored post.

use chrono::{DateTime, Utc};
use mongodb::bson::{DateTime as BsonDateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Author, BlogPost, NewPost, PostId};

/// A post as stored in the `posts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: BsonDateTime,
}

impl PostDocument {
    /// Build the document for a post about to be inserted under `id`.
    pub fn from_new(id: ObjectId, post: NewPost) -> Self {
        Self {
            id,
            author: post.author,
            title: post.title,
            content: post.content,
            created: BsonDateTime::from_system_time(post.created.into()),
        }
    }
}

/// Conversion from stored document to Domain BlogPost.
impl From<PostDocument> for BlogPost {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: PostId::new(doc.id.to_hex()),
            author: doc.author,
            title: doc.title,
            content: doc.content,
            created: DateTime::<Utc>::from(doc.created.to_system_time()),
        }
    }
}
