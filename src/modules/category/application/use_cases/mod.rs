pub mod create_category;

pub use create_category::{CreateCategoryHandler, CreateCategoryInput, CreateCategoryOutput};
