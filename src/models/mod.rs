// Re-export all model types
pub use self::errors::*;
pub use self::menu::*;
pub use self::response::*;
pub use self::topping::*;
pub use self::validation::*;

mod errors;
mod menu;
mod response;
mod topping;
mod validation;
