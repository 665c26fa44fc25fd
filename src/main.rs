use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use bobashop_rs::{
    handlers::{create_app, AppState},
    init_tracing,
    repositories::{InMemoryMenuRepository, InMemoryToppingRepository},
    services::{MenuService, ToppingService},
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing first
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        return Err(e);
    }

    // Load configuration
    let config = match Config::from_environment() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(Box::new(e));
        }
    };

    info!("Starting bobashop-rs service");
    info!("Environment: {}", config.runtime.node_env);

    // Initialize repositories with the seed catalog
    let menu_repository = Arc::new(InMemoryMenuRepository::with_seed_data());
    let topping_repository = Arc::new(InMemoryToppingRepository::with_seed_data());
    info!("Repositories initialized successfully");

    let menu_service = Arc::new(MenuService::new(menu_repository));
    let topping_service = Arc::new(ToppingService::new(topping_repository));
    info!("Services initialized successfully");

    // Build the application router
    let state = AppState {
        menu_service,
        topping_service,
        expose_error_details: config.is_development(),
    };
    let app = create_app(state);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    info!("Server listening on {}", addr);

    // Create TCP listener
    let listener = TcpListener::bind(addr).await?;

    // Set up graceful shutdown
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
