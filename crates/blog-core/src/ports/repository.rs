use async_trait::async_trait;

use crate::domain::{BlogPost, NewPost, PostId, PostUpdate};
use crate::error::RepoError;

/// Document-store operations over the blog post collection.
///
/// Every method is a single store round-trip. An id the store cannot parse
/// behaves like an id that matches nothing.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every stored post.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, RepoError>;

    /// Insert one post, returning it with its store-assigned id.
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError>;

    /// Insert a batch of posts, preserving input order in the result.
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply a field-level update. Fails with `RepoError::NotFound` if no post matches.
    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<(), RepoError>;

    /// Delete a post by id. Returns whether a post was actually removed.
    async fn delete(&self, id: &PostId) -> Result<bool, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Drop every stored post.
    async fn clear(&self) -> Result<(), RepoError>;
}
