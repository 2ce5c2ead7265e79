use crate::framework::Registry;
use crate::model::{Article, ArticleId, Author, AuthorId, Magazine, MagazineId};
use crate::validation::{rules, ValidationError};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use tracing::{info, warn};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// The owner of every registry in the system.
///
/// `Catalog` is responsible for:
/// - **Registration**: Holding the ordered article and magazine registries
/// - **Identity**: Handing out catalog-unique IDs for authors, magazines and articles
/// - **Isolation**: Keeping entities of different catalogs apart
///
/// # Architecture
///
/// A catalog is a cheap handle around shared state; clones refer to the same registries.
/// Entities keep a *weak* reference back to the catalog they were created in, so the
/// article registry (which holds authors and magazines) never keeps its own catalog alive.
///
/// Most code uses the process-wide [`Catalog::global`], which the plain constructors
/// ([`Author::new`], [`Magazine::new`]) register into. Tests and embedders that need
/// isolation create their own with [`Catalog::new`].
///
/// # Example
///
/// ```
/// use magazine_catalog::lifecycle::Catalog;
///
/// let catalog = Catalog::new();
/// let sam = catalog.author("Sam").unwrap();
/// let vogue = catalog.magazine("Vogue", "Fashion").unwrap();
/// sam.add_article(&vogue, "Spring Lines").unwrap();
///
/// assert_eq!(catalog.article_count(), 1);
/// assert_eq!(vogue.article_titles(), Some(vec!["Spring Lines".to_string()]));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    state: Arc<CatalogState>,
}

#[derive(Debug)]
pub(crate) struct CatalogState {
    articles: Registry<Article>,
    magazines: Registry<Magazine>,
    next_author_id: AtomicU32,
}

impl Catalog {
    /// Creates an empty, independent catalog.
    pub fn new() -> Self {
        Self {
            state: Arc::new(CatalogState {
                articles: Registry::new(),
                magazines: Registry::new(),
                next_author_id: AtomicU32::new(1),
            }),
        }
    }

    /// Returns the process-wide catalog, creating it on first use.
    ///
    /// It is never torn down; [`Catalog::reset`] empties it.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            info!("Global catalog initialized");
            Catalog::new()
        })
    }

    /// Creates an author that belongs to this catalog.
    ///
    /// # Errors
    /// [`ValidationError::EmptyAuthorName`] if `name` is blank.
    pub fn author(&self, name: impl Into<String>) -> Result<Author, ValidationError> {
        let name = name.into();
        rules::author_name(&name).inspect_err(|e| warn!(error = %e, "Author rejected"))?;

        let id = AuthorId::from(self.state.next_author_id.fetch_add(1, Ordering::SeqCst));
        info!(author_id = %id, %name, "Author created");
        Ok(Author::attach(id, name, self.downgrade()))
    }

    /// Creates a magazine that belongs to this catalog and registers it.
    ///
    /// # Errors
    /// - [`ValidationError::MagazineNameLength`] if `name` is not 2-16 characters
    /// - [`ValidationError::EmptyCategory`] if `category` is blank
    pub fn magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Magazine, ValidationError> {
        let name = name.into();
        let category = category.into();
        rules::magazine_name(&name)
            .and_then(|()| rules::category(&category))
            .inspect_err(|e| warn!(error = %e, "Magazine rejected"))?;

        let magazine = Magazine::attach(
            self.state.magazines.next_id(),
            name,
            category,
            self.downgrade(),
            self.state.magazines.generation(),
        );
        self.state.magazines.register(magazine.clone());
        Ok(magazine)
    }

    /// Every article, in registration order.
    pub fn articles(&self) -> Vec<Article> {
        self.state.articles.snapshot()
    }

    /// Every magazine, in construction order.
    pub fn magazines(&self) -> Vec<Magazine> {
        self.state.magazines.snapshot()
    }

    pub fn article(&self, id: ArticleId) -> Option<Article> {
        self.state.articles.get(id)
    }

    pub fn magazine_by_id(&self, id: MagazineId) -> Option<Magazine> {
        self.state.magazines.get(id)
    }

    pub fn article_count(&self) -> usize {
        self.state.articles.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.state.magazines.len()
    }

    /// Empties both registries.
    ///
    /// Existing handles stay readable and their relationship queries start from
    /// scratch. Magazines created before the reset can no longer receive articles
    /// ([`ValidationError::StaleMagazine`]); create them again. Authors are not
    /// registered anywhere and stay usable. IDs are not reused.
    pub fn reset(&self) {
        info!(
            articles = self.state.articles.len(),
            magazines = self.state.magazines.len(),
            "Resetting catalog"
        );
        self.state.articles.clear();
        self.state.magazines.clear();
    }

    pub(crate) fn article_registry(&self) -> &Registry<Article> {
        &self.state.articles
    }

    pub(crate) fn magazine_generation(&self) -> u64 {
        self.state.magazines.generation()
    }

    pub(crate) fn downgrade(&self) -> Weak<CatalogState> {
        Arc::downgrade(&self.state)
    }

    pub(crate) fn upgrade(handle: &Weak<CatalogState>) -> Option<Self> {
        handle.upgrade().map(|state| Self { state })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
