use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::net::TcpListener;

use bobashop_rs::handlers::{create_app, AppState};
use bobashop_rs::repositories::{InMemoryMenuRepository, InMemoryToppingRepository};
use bobashop_rs::services::{MenuService, ToppingService};

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    /// Serve a freshly seeded application on an ephemeral port. Every call
    /// gets its own catalog, so tests never observe each other's writes.
    pub async fn new() -> Self {
        let menu_repository = Arc::new(InMemoryMenuRepository::with_seed_data());
        let topping_repository = Arc::new(InMemoryToppingRepository::with_seed_data());

        let state = AppState {
            menu_service: Arc::new(MenuService::new(menu_repository)),
            topping_service: Arc::new(ToppingService::new(topping_repository)),
            expose_error_details: true,
        };

        let app = create_app(state);

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { client, base_url }
    }
}
