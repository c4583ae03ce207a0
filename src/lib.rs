pub mod modules;
pub mod shared;

pub use modules::category::{
    Category, CategoryRepository, CreateCategoryHandler, CreateCategoryInput,
    CreateCategoryOutput, NewCategory,
};
pub use shared::{AppConfig, AppError, AppResult, EntityValidationError};

/// Load configuration from the environment and install the logger.
///
/// Call once at startup from whatever binary embeds the catalog core.
pub fn init() -> AppResult<AppConfig> {
    let config = AppConfig::from_env()?;
    shared::utils::init_logger(&config);
    log::debug!("Catalog core initialized with {:?}", config);
    Ok(config)
}
