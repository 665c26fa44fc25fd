// Repositories module - data access layer

pub mod menu_repository;
pub mod seed;
pub mod topping_repository;

pub use menu_repository::{InMemoryMenuRepository, MenuRepository};
pub use topping_repository::{InMemoryToppingRepository, ToppingRepository};
