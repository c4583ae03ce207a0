use crate::shared::errors::AppResult;
/// Base trait for all use cases following CQRS pattern
///
/// This trait provides a standard interface for command handlers
/// following the Single Responsibility Principle.
///
/// # Example
///
/// ```ignore
/// struct CreateCategoryHandler {
///     repository: Arc<dyn CategoryRepository>,
///     unit_of_work: Arc<dyn UnitOfWork>,
/// }
///
/// #[async_trait]
/// impl UseCase<CreateCategoryInput, CreateCategoryOutput> for CreateCategoryHandler {
///     async fn handle(
///         &self,
///         input: CreateCategoryInput,
///         cancellation: CancellationToken,
///     ) -> AppResult<CreateCategoryOutput> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TInput, TOutput> {
    /// Handle the request. The token is passed on to every I/O collaborator.
    async fn handle(&self, input: TInput, cancellation: CancellationToken) -> AppResult<TOutput>;
}
