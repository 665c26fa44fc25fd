use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::models::{
    CreateToppingRequest, ServiceError, ServiceResult, Topping, ToppingFilters,
    UpdateToppingRequest,
};
use crate::repositories::ToppingRepository;

/// Service for managing drink toppings
pub struct ToppingService {
    repository: Arc<dyn ToppingRepository>,
}

impl ToppingService {
    /// Create a new ToppingService
    pub fn new(repository: Arc<dyn ToppingRepository>) -> Self {
        Self { repository }
    }

    /// List toppings, optionally filtered by availability
    #[instrument(skip(self), fields(filters = ?filters))]
    pub async fn list_toppings(&self, filters: ToppingFilters) -> ServiceResult<Vec<Topping>> {
        let toppings = self.repository.find_all().await?;

        let filtered: Vec<Topping> = toppings
            .into_iter()
            .filter(|topping| topping.matches_filters(&filters))
            .collect();

        info!("Found {} toppings matching criteria", filtered.len());
        Ok(filtered)
    }

    /// Get a specific topping by id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_topping(&self, id: &str) -> ServiceResult<Topping> {
        match self.repository.find_by_id(id).await? {
            Some(topping) => Ok(topping),
            None => {
                warn!("Topping not found");
                Err(ServiceError::ToppingNotFound { id: id.to_string() })
            }
        }
    }

    /// Create a new topping
    #[instrument(skip(self, request))]
    pub async fn create_topping(&self, request: CreateToppingRequest) -> ServiceResult<Topping> {
        let topping = Topping::from_request(request)?;
        let created = self.repository.insert(topping).await?;

        info!(id = %created.id, "Topping created");
        Ok(created)
    }

    /// Shallow-merge an update into an existing topping. The payload is
    /// validated before the store is touched.
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update_topping(
        &self,
        id: &str,
        request: UpdateToppingRequest,
    ) -> ServiceResult<Topping> {
        let patch = request.into_patch()?;

        match self.repository.update(id, patch).await? {
            Some(topping) => {
                info!("Topping updated");
                Ok(topping)
            }
            None => {
                warn!("Topping not found");
                Err(ServiceError::ToppingNotFound { id: id.to_string() })
            }
        }
    }

    /// Delete a topping, returning the removed record
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_topping(&self, id: &str) -> ServiceResult<Topping> {
        match self.repository.remove(id).await? {
            Some(topping) => {
                info!("Topping deleted");
                Ok(topping)
            }
            None => {
                warn!("Topping not found");
                Err(ServiceError::ToppingNotFound { id: id.to_string() })
            }
        }
    }
}
