use crate::framework::CatalogEntity;
use crate::lifecycle::{Catalog, CatalogState};
use crate::validation::{rules, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::{debug, warn};

/// Type-safe identifier for Magazines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MagazineId(pub u32);

impl From<u32> for MagazineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "magazine_{}", self.0)
    }
}

/// Represents a magazine that publishes articles.
///
/// Unlike [`Author`](crate::model::Author) and [`Article`](crate::model::Article),
/// a magazine can be renamed or re-categorised after construction. Every change goes
/// through the same rules as the constructor, and a rejected change keeps the old value.
///
/// Equality and hashing follow identity, not the current field values, so a magazine
/// stays in the same `HashSet` slot across a rename.
#[derive(Clone)]
pub struct Magazine {
    inner: Arc<MagazineInner>,
}

struct MagazineInner {
    id: MagazineId,
    fields: RwLock<MagazineFields>,
    catalog: Weak<CatalogState>,
    generation: u64,
}

#[derive(Debug, Clone)]
struct MagazineFields {
    name: String,
    category: String,
}

/// Payload for updating an existing magazine.
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MagazineUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl Magazine {
    /// Creates a new Magazine in the process-wide catalog and registers it there.
    ///
    /// # Errors
    /// - [`ValidationError::MagazineNameLength`] if `name` is not 2-16 characters
    /// - [`ValidationError::EmptyCategory`] if `category` is blank
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Catalog::global().magazine(name, category)
    }

    /// Wraps already validated fields. Only the catalog calls this.
    pub(crate) fn attach(
        id: MagazineId,
        name: String,
        category: String,
        catalog: Weak<CatalogState>,
        generation: u64,
    ) -> Self {
        Self {
            inner: Arc::new(MagazineInner {
                id,
                fields: RwLock::new(MagazineFields { name, category }),
                catalog,
                generation,
            }),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.inner.id
    }

    /// Returns the current name.
    pub fn name(&self) -> String {
        self.read().name.clone()
    }

    /// Returns the current category.
    pub fn category(&self) -> String {
        self.read().category.clone()
    }

    /// Renames the magazine.
    ///
    /// # Errors
    /// [`ValidationError::MagazineNameLength`]; the old name is kept.
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.update(MagazineUpdate {
            name: Some(name.into()),
            category: None,
        })
    }

    /// Moves the magazine to another category.
    ///
    /// # Errors
    /// [`ValidationError::EmptyCategory`]; the old category is kept.
    pub fn set_category(&self, category: impl Into<String>) -> Result<(), ValidationError> {
        self.update(MagazineUpdate {
            name: None,
            category: Some(category.into()),
        })
    }

    /// Applies a partial update.
    ///
    /// Every supplied field is validated before any of them is written, so a
    /// rejected update leaves the magazine exactly as it was.
    pub fn update(&self, update: MagazineUpdate) -> Result<(), ValidationError> {
        if let Some(name) = &update.name {
            rules::magazine_name(name)
                .inspect_err(|e| warn!(magazine_id = %self.inner.id, error = %e, "Update rejected"))?;
        }
        if let Some(category) = &update.category {
            rules::category(category)
                .inspect_err(|e| warn!(magazine_id = %self.inner.id, error = %e, "Update rejected"))?;
        }

        let mut fields = self
            .inner
            .fields
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(name) = update.name {
            fields.name = name;
        }
        if let Some(category) = update.category {
            fields.category = category;
        }
        debug!(magazine_id = %self.inner.id, name = %fields.name, category = %fields.category, "Updated");
        Ok(())
    }

    pub(crate) fn catalog_handle(&self) -> &Weak<CatalogState> {
        &self.inner.catalog
    }

    pub(crate) fn catalog(&self) -> Option<Catalog> {
        Catalog::upgrade(&self.inner.catalog)
    }

    /// The magazine registry generation this magazine was registered in.
    pub(crate) fn generation(&self) -> u64 {
        self.inner.generation
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MagazineFields> {
        self.inner
            .fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogEntity for Magazine {
    type Id = MagazineId;

    fn id(&self) -> MagazineId {
        self.inner.id
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.read();
        write!(f, "{} ({})", fields.name, fields.category)
    }
}

impl fmt::Debug for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.read();
        f.debug_struct("Magazine")
            .field("id", &self.inner.id)
            .field("name", &fields.name)
            .field("category", &fields.category)
            .finish()
    }
}
