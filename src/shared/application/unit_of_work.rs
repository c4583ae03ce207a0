use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::shared::errors::AppResult;

/// Port for the transaction boundary.
///
/// `commit` finalizes every persistence operation issued since the previous
/// commit. What happens to staged work when commit fails or is cancelled is
/// up to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self, cancellation: &CancellationToken) -> AppResult<()>;
}
