mod command;
mod handler;
mod result;

pub use command::CreateCategoryInput;
pub use handler::CreateCategoryHandler;
pub use result::CreateCategoryOutput;
