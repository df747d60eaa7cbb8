use crate::errors::ServiceError;
use async_trait::async_trait;

/// A user as submitted by the client: any JSON value, stored verbatim.
pub type UserRecord = serde_json::Value;

/// Trait abstraction for user storage.
/// Records are kept in insertion order; there is no update or delete.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append one record to the end of the sequence.
    async fn append(&self, record: UserRecord) -> Result<(), ServiceError>;
    /// All records appended before this call, oldest first.
    async fn snapshot(&self) -> Vec<UserRecord>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
