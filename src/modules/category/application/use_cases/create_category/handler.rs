use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::category::domain::{Category, CategoryRepository};
use crate::shared::{
    application::{UnitOfWork, UseCase},
    errors::AppResult,
    utils::{LogContext, TimedOperation},
};

use super::{command::CreateCategoryInput, result::CreateCategoryOutput};

/// Use case handler for creating a new category
pub struct CreateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateCategoryHandler {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            category_repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl UseCase<CreateCategoryInput, CreateCategoryOutput> for CreateCategoryHandler {
    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation: CancellationToken,
    ) -> AppResult<CreateCategoryOutput> {
        let timer = TimedOperation::new("create_category");

        // Validation runs before any I/O
        let category = Category::create(input.into()).inspect_err(|err| {
            log::debug!("Rejected category input: {}", err);
        })?;

        self.category_repository
            .insert(&category, &cancellation)
            .await
            .inspect_err(|err| LogContext::error_with_context(err, "Failed to insert category"))?;

        // Nothing is undone here if commit fails; the unit of work owns that
        self.unit_of_work
            .commit(&cancellation)
            .await
            .inspect_err(|err| LogContext::error_with_context(err, "Failed to commit category"))?;

        let output = CreateCategoryOutput::from(&category);
        log::info!("Created category '{}' ({})", output.name, output.id);
        timer.finish_with_info(&output.id.to_string());

        Ok(output)
    }
}
