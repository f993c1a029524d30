use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque post identifier, assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post author. Both names are always present together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Blog post entity - a stored post with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Apply a field-level update in place. `id`, `author` and `created` never change.
    pub fn apply(&mut self, update: &PostUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post, stamping `created` with the current time.
    ///
    /// The timestamp is truncated to milliseconds, the resolution of BSON dates,
    /// so a stored post reads back exactly as it was written.
    pub fn new(author: Author, title: String, content: String) -> Result<Self, DomainError> {
        if author.first_name.trim().is_empty() || author.last_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "author.firstName and author.lastName are required".to_string(),
            ));
        }
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }

        Ok(Self {
            author,
            title,
            content,
            created: Utc::now().trunc_subsecs(3),
        })
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: PostId) -> BlogPost {
        BlogPost {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            created: self.created,
        }
    }
}

/// Field-level update of a post. Only `title` and `content` are mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        if title.is_none() && content.is_none() {
            return Err(DomainError::Validation(
                "at least one of title or content is required".to_string(),
            ));
        }
        if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }

        Ok(Self { title, content })
    }
}
