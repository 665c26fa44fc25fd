use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::models::{
    CreateMenuItemRequest, MenuFilters, MenuItem, MenuSort, ServiceError, ServiceResult,
    UpdateMenuItemRequest,
};
use crate::repositories::MenuRepository;

/// Service for managing the drink menu
pub struct MenuService {
    repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    /// Create a new MenuService
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// List menu items, filtered and then sorted
    #[instrument(skip(self), fields(filters = ?filters, sort = ?sort))]
    pub async fn list_menu_items(
        &self,
        filters: MenuFilters,
        sort: MenuSort,
    ) -> ServiceResult<Vec<MenuItem>> {
        let items = self.repository.find_all().await?;

        let mut filtered: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| item.matches_filters(&filters))
            .collect();

        sort.apply(&mut filtered);

        info!("Found {} menu items matching criteria", filtered.len());
        Ok(filtered)
    }

    /// Get a specific menu item by id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_menu_item(&self, id: &str) -> ServiceResult<MenuItem> {
        match self.repository.find_by_id(id).await? {
            Some(item) => Ok(item),
            None => {
                warn!("Menu item not found");
                Err(ServiceError::MenuItemNotFound { id: id.to_string() })
            }
        }
    }

    /// Create a new menu item
    #[instrument(skip(self, request))]
    pub async fn create_menu_item(
        &self,
        request: CreateMenuItemRequest,
    ) -> ServiceResult<MenuItem> {
        let item = MenuItem::from_request(request)?;
        let created = self.repository.insert(item).await?;

        info!(id = %created.id, "Menu item created");
        Ok(created)
    }

    /// Shallow-merge an update into an existing menu item. The payload is
    /// validated before the store is touched.
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update_menu_item(
        &self,
        id: &str,
        request: UpdateMenuItemRequest,
    ) -> ServiceResult<MenuItem> {
        let patch = request.into_patch()?;

        match self.repository.update(id, patch).await? {
            Some(item) => {
                info!("Menu item updated");
                Ok(item)
            }
            None => {
                warn!("Menu item not found");
                Err(ServiceError::MenuItemNotFound { id: id.to_string() })
            }
        }
    }

    /// Delete a menu item, returning the removed record
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_menu_item(&self, id: &str) -> ServiceResult<MenuItem> {
        match self.repository.remove(id).await? {
            Some(item) => {
                info!("Menu item deleted");
                Ok(item)
            }
            None => {
                warn!("Menu item not found");
                Err(ServiceError::MenuItemNotFound { id: id.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuItemPatch, MenuSortKey, NumericInput, RepositoryError, SortOrder};
    use async_trait::async_trait;
    use mockall::mock;
    use rust_decimal_macros::dec;

    mock! {
        TestMenuRepository {}

        #[async_trait]
        impl MenuRepository for TestMenuRepository {
            async fn find_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, RepositoryError>;
            async fn insert(&self, item: MenuItem) -> Result<MenuItem, RepositoryError>;
            async fn update(&self, id: &str, patch: MenuItemPatch) -> Result<Option<MenuItem>, RepositoryError>;
            async fn remove(&self, id: &str) -> Result<Option<MenuItem>, RepositoryError>;
        }
    }

    fn test_item(id: &str, category: &str, price: rust_decimal::Decimal, popularity: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Drink {}", id),
            base_price: price,
            description: String::new(),
            category: category.to_string(),
            sweetness_level: 100,
            ice_level: 100,
            image_url: String::new(),
            is_available: true,
            popularity,
        }
    }

    fn create_test_request() -> CreateMenuItemRequest {
        CreateMenuItemRequest {
            name: Some("Oolong Milk Tea".to_string()),
            base_price: Some(NumericInput::Number(23000.0)),
            category: Some("Milk Tea".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_menu_items_filters_and_sorts() {
        let mut mock_repo = MockTestMenuRepository::new();
        let items = vec![
            test_item("1", "Milk Tea", dec!(25000), 10),
            test_item("2", "Coffee", dec!(28000), 8),
            test_item("3", "Milk Tea", dec!(22000), 5),
        ];

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(items.clone()));

        let service = MenuService::new(Arc::new(mock_repo));
        let filters = MenuFilters {
            category: Some("milk tea".to_string()),
            ..Default::default()
        };
        let sort = MenuSort {
            key: Some(MenuSortKey::Price),
            order: SortOrder::Ascending,
        };

        let result = service.list_menu_items(filters, sort).await.unwrap();

        let ids: Vec<&str> = result.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn test_list_menu_items_unsorted_keeps_store_order() {
        let mut mock_repo = MockTestMenuRepository::new();
        let items = vec![
            test_item("1", "Milk Tea", dec!(25000), 10),
            test_item("2", "Coffee", dec!(28000), 8),
        ];

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(items.clone()));

        let service = MenuService::new(Arc::new(mock_repo));

        let result = service
            .list_menu_items(MenuFilters::default(), MenuSort::default())
            .await
            .unwrap();

        let ids: Vec<&str> = result.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_get_menu_item_success() {
        let mut mock_repo = MockTestMenuRepository::new();
        let item = test_item("1", "Milk Tea", dec!(25000), 10);

        mock_repo
            .expect_find_by_id()
            .with(mockall::predicate::eq("1"))
            .times(1)
            .returning(move |_| Ok(Some(item.clone())));

        let service = MenuService::new(Arc::new(mock_repo));

        let found = service.get_menu_item("1").await.unwrap();
        assert_eq!(found.id, "1");
    }

    #[tokio::test]
    async fn test_get_menu_item_not_found() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(mockall::predicate::eq("nonexistent"))
            .times(1)
            .returning(|_| Ok(None));

        let service = MenuService::new(Arc::new(mock_repo));

        let result = service.get_menu_item("nonexistent").await;
        match result.unwrap_err() {
            ServiceError::MenuItemNotFound { id } => assert_eq!(id, "nonexistent"),
            other => panic!("Expected MenuItemNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_menu_item_success() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo.expect_insert().times(1).returning(|item| Ok(item));

        let service = MenuService::new(Arc::new(mock_repo));

        let created = service.create_menu_item(create_test_request()).await.unwrap();
        assert_eq!(created.name, "Oolong Milk Tea");
        assert_eq!(created.base_price, dec!(23000));
    }

    #[tokio::test]
    async fn test_create_menu_item_validation_error_skips_repository() {
        // No expectations on the mock: a validation failure must not reach it
        let mock_repo = MockTestMenuRepository::new();
        let service = MenuService::new(Arc::new(mock_repo));

        let request = CreateMenuItemRequest {
            name: None,
            ..create_test_request()
        };

        let result = service.create_menu_item(request).await;
        match result.unwrap_err() {
            ServiceError::ValidationError { message } => {
                assert!(message.contains("name"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_menu_item_repository_error_propagates() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(RepositoryError::LockPoisoned {
                message: "poisoned".to_string(),
            })
        });

        let service = MenuService::new(Arc::new(mock_repo));

        let result = service.create_menu_item(create_test_request()).await;
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::Repository { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_menu_item_success() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|id, patch| {
                let mut item = test_item(id, "Milk Tea", dec!(25000), 10);
                item.apply_patch(patch);
                Ok(Some(item))
            });

        let service = MenuService::new(Arc::new(mock_repo));

        let request = UpdateMenuItemRequest {
            base_price: Some(NumericInput::Text("27000".to_string())),
            ..Default::default()
        };

        let updated = service.update_menu_item("1", request).await.unwrap();
        assert_eq!(updated.base_price, dec!(27000));
        assert_eq!(updated.id, "1");
    }

    #[tokio::test]
    async fn test_update_menu_item_not_found() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = MenuService::new(Arc::new(mock_repo));

        let result = service
            .update_menu_item("nonexistent", UpdateMenuItemRequest::default())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::MenuItemNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_menu_item_invalid_numeric_skips_repository() {
        let mock_repo = MockTestMenuRepository::new();
        let service = MenuService::new(Arc::new(mock_repo));

        let request = UpdateMenuItemRequest {
            base_price: Some(NumericInput::Text("not-a-price".to_string())),
            ..Default::default()
        };

        let result = service.update_menu_item("1", request).await;
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::ValidationError { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_menu_item_returns_removed_record() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo
            .expect_remove()
            .with(mockall::predicate::eq("2"))
            .times(1)
            .returning(|id| Ok(Some(test_item(id, "Coffee", dec!(28000), 8))));

        let service = MenuService::new(Arc::new(mock_repo));

        let removed = service.delete_menu_item("2").await.unwrap();
        assert_eq!(removed.id, "2");
    }

    #[tokio::test]
    async fn test_delete_menu_item_not_found() {
        let mut mock_repo = MockTestMenuRepository::new();

        mock_repo.expect_remove().times(1).returning(|_| Ok(None));

        let service = MenuService::new(Arc::new(mock_repo));

        let result = service.delete_menu_item("nonexistent").await;
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::MenuItemNotFound { .. }
        ));
    }
}
