use crate::core::error::Result;
use async_trait::async_trait;

/// Base repository trait for the create / read / delete lifecycle
///
/// There is no update: records are written once and removed whole.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: ?Sized + Sync,
{
    /// Persist a fully-built entity in one atomic write
    async fn create(&self, entity: &T) -> Result<()>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>>;

    /// Delete an entity by ID, returning whether a row was removed
    async fn delete(&self, id: &ID) -> Result<bool>;

    /// List all entities in insertion order
    async fn list(&self) -> Result<Vec<T>>;
}
