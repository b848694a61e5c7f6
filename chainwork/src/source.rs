//! Block source capability consumed by the estimator.

use crate::types::BlockHeader;
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a block source, opaque to the estimator.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not be reached or did not answer.
    #[error("block source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with something that could not be interpreted.
    #[error("malformed block source response: {0}")]
    Malformed(String),
}

/// Read-only access to blocks by height.
///
/// `Ok(None)` means the chain has no block at that height yet.
/// Implementations are queried strictly sequentially, one height at a time.
#[async_trait]
pub trait BlockSource: Send + Sync {
    async fn block_at(&self, height: u64) -> Result<Option<BlockHeader>, SourceError>;
}
