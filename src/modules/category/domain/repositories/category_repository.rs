use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::modules::category::domain::entities::Category;
use crate::shared::errors::AppResult;

/// Port (interface) for category persistence following Hexagonal Architecture
/// Infrastructure provides the implementation; failures are passed through untouched
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category. Durable only once the unit of work commits.
    async fn insert(&self, category: &Category, cancellation: &CancellationToken) -> AppResult<()>;
}
