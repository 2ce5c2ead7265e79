//! The join entity between [`Author`] and [`Magazine`].
//!
//! An article is validated and registered in one step. Once [`Article::new`] returns
//! `Ok`, its author, magazine and title are fixed for good: the type exposes getters
//! only. If it returns `Err`, nothing was registered.

use crate::framework::CatalogEntity;
use crate::model::{Author, Magazine};
use crate::validation::{rules, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Type-safe identifier for Articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub u32);

impl From<u32> for ArticleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "article_{}", self.0)
    }
}

/// An article written by one author for one magazine.
#[derive(Clone)]
pub struct Article {
    inner: Arc<ArticleInner>,
}

struct ArticleInner {
    id: ArticleId,
    author: Author,
    magazine: Magazine,
    title: String,
}

impl Article {
    /// Validates the fields and registers the article in its author's catalog.
    ///
    /// # Errors
    /// - [`ValidationError::TitleLength`] if `title` is not 5-50 characters
    /// - [`ValidationError::CatalogMismatch`] if `author` and `magazine` come from different catalogs
    /// - [`ValidationError::CatalogClosed`] if that catalog has been dropped
    /// - [`ValidationError::StaleMagazine`] if `magazine` was cleared by [`Catalog::reset`](crate::lifecycle::Catalog::reset)
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        debug!(author_id = %author.id(), magazine_id = %magazine.id(), %title, "Article::new called");

        rules::title(&title)
            .inspect_err(|e| warn!(author_id = %author.id(), error = %e, "Article rejected"))?;

        if !Weak::ptr_eq(author.catalog_handle(), magazine.catalog_handle()) {
            let error = ValidationError::CatalogMismatch {
                author: author.id(),
                magazine: magazine.id(),
            };
            warn!(error = %error, "Article rejected");
            return Err(error);
        }

        let catalog = author
            .catalog()
            .ok_or(ValidationError::CatalogClosed)
            .inspect_err(|e| warn!(author_id = %author.id(), error = %e, "Article rejected"))?;

        if magazine.generation() != catalog.magazine_generation() {
            let error = ValidationError::StaleMagazine {
                magazine: magazine.id(),
            };
            warn!(error = %error, "Article rejected");
            return Err(error);
        }

        let registry = catalog.article_registry();

        let article = Self {
            inner: Arc::new(ArticleInner {
                id: registry.next_id(),
                author: author.clone(),
                magazine: magazine.clone(),
                title,
            }),
        };
        let size = registry.register(article.clone());
        info!(
            article_id = %article.id(),
            author = %author,
            magazine = %magazine.name(),
            size,
            "Article published"
        );
        Ok(article)
    }

    pub fn id(&self) -> ArticleId {
        self.inner.id
    }

    pub fn author(&self) -> &Author {
        &self.inner.author
    }

    pub fn magazine(&self) -> &Magazine {
        &self.inner.magazine
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }
}

impl CatalogEntity for Article {
    type Id = ArticleId;

    fn id(&self) -> ArticleId {
        self.inner.id
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.inner.id)
            .field("author", &self.inner.author.id())
            .field("magazine", &self.inner.magazine.id())
            .field("title", &self.inner.title)
            .finish()
    }
}
