// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (use case, unit of work)
pub mod config; // Environment-driven settings
pub mod domain; // Shared domain seedwork
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)
pub mod validation; // Field validation helpers

pub use config::AppConfig;
pub use errors::{AppError, AppResult, EntityValidationError};
