//! # Generic Entity Registry
//!
//! This module defines the [`CatalogEntity`] contract and the generic [`Registry`]
//! that stores every registered instance of one entity type, in registration order.
//!
//! The registry is append-only. Queries never index: they scan the whole store and
//! hand back clones of the matching handles, which is the right trade for the
//! small data volumes the catalog is built for.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Trait that any entity stored in a [`Registry`] must implement.
///
/// # Architecture Note
/// Entities are cheap, cloneable handles (an `Arc` underneath), so a registry can
/// hand out copies of its entries without copying the entity data itself.
/// The associated `Id` type keeps identifiers of different entities apart:
/// an `ArticleId` can never be used to look up a `Magazine`.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug + From<u32>;

    /// Returns the identifier assigned when the entity was registered.
    fn id(&self) -> Self::Id;
}

/// An ordered, append-only store of entities of one type.
///
/// ## Locking
///
/// Appends take the write lock; scans take the read lock only long enough to clone
/// the matching handles. A poisoned lock is recovered rather than propagated, since
/// every critical section leaves the vector in a consistent state.
pub struct Registry<T: CatalogEntity> {
    store: RwLock<Vec<T>>,
    next_id: AtomicU32,
    generation: AtomicU64,
}

impl<T: CatalogEntity> Registry<T> {
    /// Creates an empty registry whose first allocated ID is `1`.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the current generation. Every [`Registry::clear`] starts a new one,
    /// so an entry can tell whether it was cleared away after it registered.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Allocates the next identifier.
    ///
    /// IDs are never reused, not even after [`Registry::clear`], so handles that
    /// outlive a reset keep a unique identity.
    pub fn next_id(&self) -> T::Id {
        T::Id::from(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Appends `item` and returns the new size of the registry.
    pub fn register(&self, item: T) -> usize {
        let id = item.id();
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        store.push(item);
        let size = store.len();
        info!(entity_type = entity_type::<T>(), %id, size, "Registered");
        size
    }

    /// Returns every entry matching `predicate`, in registration order.
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        let matches: Vec<T> = store.iter().filter(|item| predicate(item)).cloned().collect();
        debug!(
            entity_type = entity_type::<T>(),
            scanned = store.len(),
            matched = matches.len(),
            "Scan"
        );
        matches
    }

    /// Returns a copy of every entry, in registration order.
    pub fn snapshot(&self) -> Vec<T> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.store.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry and starts a new generation. The ID counter keeps counting.
    pub fn clear(&self) {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let removed = store.len();
        store.clear();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(entity_type = entity_type::<T>(), removed, generation, "Cleared");
    }
}

impl<T: CatalogEntity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity + Debug> Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entity_type", &entity_type::<T>())
            .field("size", &self.len())
            .finish()
    }
}

// Extract just the type name (e.g., "Article" instead of "magazine_catalog::model::article::Article")
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
