pub mod category_repository;

pub use category_repository::CategoryRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
