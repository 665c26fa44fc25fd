// Services module - business logic layer

pub mod menu_service;
pub mod topping_service;

pub use menu_service::MenuService;
pub use topping_service::ToppingService;
