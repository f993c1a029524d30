//! MongoDB post repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};

use blog_core::domain::{BlogPost, NewPost, PostId, PostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::document::PostDocument;

/// Collection holding blog post documents.
const POSTS_COLLECTION: &str = "posts";

/// MongoDB-backed post repository.
#[derive(Clone)]
pub struct MongoPostRepository {
    db: Database,
    posts: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: Database) -> Self {
        let posts = db.collection(POSTS_COLLECTION);
        Self { db, posts }
    }

    /// Ids that are not valid ObjectIds match nothing.
    fn object_id(id: &PostId) -> Option<ObjectId> {
        ObjectId::parse_str(id.as_str()).ok()
    }
}

fn store_error(e: MongoError) -> RepoError {
    if matches!(*e.kind, ErrorKind::ServerSelection { .. }) {
        RepoError::Connection(e.to_string())
    } else {
        RepoError::Query(e.to_string())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let cursor = self.posts.find(doc! {}).await.map_err(store_error)?;
        let docs: Vec<PostDocument> = cursor.try_collect().await.map_err(store_error)?;

        tracing::debug!(count = docs.len(), "Fetched all posts");
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, RepoError> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(None);
        };

        let result = self
            .posts
            .find_one(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let document = PostDocument::from_new(ObjectId::new(), post);
        self.posts
            .insert_one(&document)
            .await
            .map_err(store_error)?;

        tracing::debug!(post_id = %document.id, "Inserted post");
        Ok(document.into())
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let documents: Vec<PostDocument> = posts
            .into_iter()
            .map(|post| PostDocument::from_new(ObjectId::new(), post))
            .collect();
        self.posts
            .insert_many(&documents)
            .await
            .map_err(store_error)?;

        tracing::debug!(count = documents.len(), "Inserted post batch");
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &PostId, update: &PostUpdate) -> Result<(), RepoError> {
        let oid = Self::object_id(id).ok_or(RepoError::NotFound)?;
        let filter = doc! { "_id": oid };

        let mut fields = Document::new();
        if let Some(title) = &update.title {
            fields.insert("title", title.as_str());
        }
        if let Some(content) = &update.content {
            fields.insert("content", content.as_str());
        }

        // `$set` rejects an empty document; an empty update only checks existence.
        if fields.is_empty() {
            return match self.posts.find_one(filter).await.map_err(store_error)? {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            };
        }

        let result = self
            .posts
            .update_one(filter, doc! { "$set": fields })
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Updated post");
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepoError> {
        let Some(oid) = Self::object_id(id) else {
            return Ok(false);
        };

        let result = self
            .posts
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.posts
            .count_documents(doc! {})
            .await
            .map_err(store_error)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        tracing::warn!(database = %self.db.name(), "Dropping database");
        self.db.drop().await.map_err(store_error)
    }
}
