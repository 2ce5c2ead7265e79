use crate::lifecycle::{Catalog, CatalogState};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// Type-safe identifier for Authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuthorId(pub u32);

impl From<u32> for AuthorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "author_{}", self.0)
    }
}

/// Represents a writer who contributes articles to magazines.
///
/// An `Author` is a cheap, cloneable handle. Clones share identity: two handles
/// compare equal only if they were produced by the same construction, even if a
/// second author happens to carry the same name.
///
/// The name is fixed at construction. There is no setter, so a renamed author is
/// simply a different author.
///
/// Relationship queries ([`Author::articles`], [`Author::magazines`],
/// [`Author::topic_areas`]) live in [`crate::relations`].
#[derive(Clone)]
pub struct Author {
    inner: Arc<AuthorInner>,
}

struct AuthorInner {
    id: AuthorId,
    name: String,
    catalog: Weak<CatalogState>,
}

impl Author {
    /// Creates a new Author in the process-wide catalog.
    ///
    /// # Errors
    /// [`ValidationError::EmptyAuthorName`] if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Catalog::global().author(name)
    }

    /// Wraps already validated fields. Only the catalog calls this.
    pub(crate) fn attach(id: AuthorId, name: String, catalog: Weak<CatalogState>) -> Self {
        Self {
            inner: Arc::new(AuthorInner { id, name, catalog }),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn catalog_handle(&self) -> &Weak<CatalogState> {
        &self.inner.catalog
    }

    pub(crate) fn catalog(&self) -> Option<Catalog> {
        Catalog::upgrade(&self.inner.catalog)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl fmt::Debug for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}
