use async_trait::async_trait;
use std::sync::RwLock;

use crate::models::{RepositoryError, RepositoryResult, Topping, ToppingPatch};
use crate::repositories::seed;

/// Trait defining the interface for topping data access operations
#[async_trait]
pub trait ToppingRepository: Send + Sync {
    /// All toppings, in insertion order
    async fn find_all(&self) -> RepositoryResult<Vec<Topping>>;

    /// Find a topping by its id
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Topping>>;

    /// Append a new topping
    async fn insert(&self, topping: Topping) -> RepositoryResult<Topping>;

    /// Merge a patch into the stored topping under one exclusive lock,
    /// returning the updated record, or None when the id is unknown
    async fn update(&self, id: &str, patch: ToppingPatch) -> RepositoryResult<Option<Topping>>;

    /// Remove a topping, returning the removed record
    async fn remove(&self, id: &str) -> RepositoryResult<Option<Topping>>;
}

/// Process-memory implementation of the ToppingRepository trait
pub struct InMemoryToppingRepository {
    toppings: RwLock<Vec<Topping>>,
}

impl InMemoryToppingRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            toppings: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository holding the seed catalog
    pub fn with_seed_data() -> Self {
        Self {
            toppings: RwLock::new(seed::toppings()),
        }
    }
}

impl Default for InMemoryToppingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToppingRepository for InMemoryToppingRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Topping>> {
        let toppings = self
            .toppings
            .read()
            .map_err(|e| RepositoryError::LockPoisoned {
                message: e.to_string(),
            })?;
        Ok(toppings.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Topping>> {
        let toppings = self
            .toppings
            .read()
            .map_err(|e| RepositoryError::LockPoisoned {
                message: e.to_string(),
            })?;
        Ok(toppings.iter().find(|topping| topping.id == id).cloned())
    }

    async fn insert(&self, topping: Topping) -> RepositoryResult<Topping> {
        let mut toppings = self
            .toppings
            .write()
            .map_err(|e| RepositoryError::LockPoisoned {
                message: e.to_string(),
            })?;
        toppings.push(topping.clone());
        Ok(topping)
    }

    async fn update(&self, id: &str, patch: ToppingPatch) -> RepositoryResult<Option<Topping>> {
        let mut toppings = self
            .toppings
            .write()
            .map_err(|e| RepositoryError::LockPoisoned {
                message: e.to_string(),
            })?;
        match toppings.iter_mut().find(|topping| topping.id == id) {
            Some(topping) => {
                topping.apply_patch(patch);
                Ok(Some(topping.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &str) -> RepositoryResult<Option<Topping>> {
        let mut toppings = self
            .toppings
            .write()
            .map_err(|e| RepositoryError::LockPoisoned {
                message: e.to_string(),
            })?;
        match toppings.iter().position(|topping| topping.id == id) {
            Some(index) => Ok(Some(toppings.remove(index))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateToppingRequest, NumericInput};
    use rust_decimal_macros::dec;

    fn test_topping(name: &str) -> Topping {
        Topping::from_request(CreateToppingRequest {
            name: Some(name.to_string()),
            additional_price: Some(NumericInput::Number(2500.0)),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryToppingRepository::new();
        let pudding = repo.insert(test_topping("Pudding")).await.unwrap();
        let aloe = repo.insert(test_topping("Aloe Vera")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![&pudding.id, &aloe.id]);

        let found = repo.find_by_id(&aloe.id).await.unwrap();
        assert_eq!(found, Some(aloe));
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let repo = InMemoryToppingRepository::new();
        let topping = repo.insert(test_topping("Pudding")).await.unwrap();

        let patch = ToppingPatch {
            additional_price: Some(dec!(2800)),
            ..Default::default()
        };
        let updated = repo.update(&topping.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.additional_price, dec!(2800));

        let removed = repo.remove(&topping.id).await.unwrap().unwrap();
        assert_eq!(removed.id, topping.id);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.remove(&topping.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_with_seed_data() {
        let repo = InMemoryToppingRepository::with_seed_data();
        let all = repo.find_all().await.unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "t1");
        assert!(!all[2].is_available);
    }
}
