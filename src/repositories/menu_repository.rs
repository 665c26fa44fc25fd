use async_trait::async_trait;
use std::sync::RwLock;

use crate::models::{MenuItem, MenuItemPatch, RepositoryError, RepositoryResult};
use crate::repositories::seed;

/// Trait defining the interface for menu data access operations
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menu items, in insertion order
    async fn find_all(&self) -> RepositoryResult<Vec<MenuItem>>;

    /// Find a menu item by its id
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<MenuItem>>;

    /// Append a new menu item
    async fn insert(&self, item: MenuItem) -> RepositoryResult<MenuItem>;

    /// Merge a patch into the stored item, returning the updated record, or
    /// None when the id is unknown. Find and merge happen under one
    /// exclusive lock, and the record keeps its position.
    async fn update(&self, id: &str, patch: MenuItemPatch)
        -> RepositoryResult<Option<MenuItem>>;

    /// Remove a menu item, returning the removed record. Survivors keep
    /// their relative order.
    async fn remove(&self, id: &str) -> RepositoryResult<Option<MenuItem>>;
}

/// Process-memory implementation of the MenuRepository trait. Records live
/// in a Vec behind a read-write lock; every mutation holds the write lock
/// for its whole read-modify-write sequence.
pub struct InMemoryMenuRepository {
    items: RwLock<Vec<MenuItem>>,
}

impl InMemoryMenuRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository holding the seed catalog
    pub fn with_seed_data() -> Self {
        Self {
            items: RwLock::new(seed::menu_items()),
        }
    }
}

impl Default for InMemoryMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<MenuItem>> {
        let items = self.items.read().map_err(|e| RepositoryError::LockPoisoned {
            message: e.to_string(),
        })?;
        Ok(items.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<MenuItem>> {
        let items = self.items.read().map_err(|e| RepositoryError::LockPoisoned {
            message: e.to_string(),
        })?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn insert(&self, item: MenuItem) -> RepositoryResult<MenuItem> {
        let mut items = self.items.write().map_err(|e| RepositoryError::LockPoisoned {
            message: e.to_string(),
        })?;
        items.push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: &str,
        patch: MenuItemPatch,
    ) -> RepositoryResult<Option<MenuItem>> {
        let mut items = self.items.write().map_err(|e| RepositoryError::LockPoisoned {
            message: e.to_string(),
        })?;
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply_patch(patch);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &str) -> RepositoryResult<Option<MenuItem>> {
        let mut items = self.items.write().map_err(|e| RepositoryError::LockPoisoned {
            message: e.to_string(),
        })?;
        match items.iter().position(|item| item.id == id) {
            Some(index) => Ok(Some(items.remove(index))),
            None => Ok(None),
        }
    }
}
