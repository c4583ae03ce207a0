pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CreateCategoryHandler, CreateCategoryInput, CreateCategoryOutput};
pub use domain::{Category, CategoryRepository, NewCategory};
