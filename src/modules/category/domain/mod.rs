pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Category, NewCategory};
pub use repositories::CategoryRepository;
