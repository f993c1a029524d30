//! In-memory post repository - used as fallback when MongoDB is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostId, PostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store kept in insertion order behind an async RwLock.
///
/// Ids are random UUIDs. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    fn assign_id(post: NewPost) -> BlogPost {
        post.into_post(PostId::new(Uuid::new_v4().to_string()))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| &p.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let post = Self::assign_id(post);
        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        let posts: Vec<BlogPost> = posts.into_iter().map(Self::assign_id).collect();
        self.store.write().await.extend(posts.iter().cloned());
        Ok(posts)
    }

    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(update);
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| &p.id != id);
        Ok(store.len() < before)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}
