use async_trait::async_trait;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::CreateKittenCommand;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::NewKitten;
use crate::domain::user::models::UserId;

/// Port for kitten domain service operations.
///
/// Every operation that touches an existing kitten takes the requesting
/// user's id; ownership is enforced here, not in the handlers.
#[async_trait]
pub trait KittenServicePort: Send + Sync + 'static {
    /// Create a new kitten owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create_kitten(
        &self,
        command: CreateKittenCommand,
        owner: UserId,
    ) -> Result<Kitten, KittenError>;

    /// Retrieve a kitten, enforcing ownership.
    ///
    /// # Errors
    /// * `NotFound` - Kitten does not exist (checked before ownership)
    /// * `NotOwner` - Kitten belongs to a different user
    /// * `DatabaseError` - Store operation failed
    async fn get_kitten(&self, id: &KittenId, requester: &UserId) -> Result<Kitten, KittenError>;

    /// Delete a kitten, enforcing ownership.
    ///
    /// # Errors
    /// * `NotFound` - Kitten does not exist (checked before ownership)
    /// * `NotOwner` - Kitten belongs to a different user
    /// * `DatabaseError` - Store operation failed
    async fn delete_kitten(&self, id: &KittenId, requester: &UserId) -> Result<(), KittenError>;
}

/// Persistence operations for the kitten aggregate.
#[async_trait]
pub trait KittenRepository: Send + Sync + 'static {
    /// Persist a new kitten; the store assigns the id.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError>;

    /// Retrieve kitten by identifier.
    ///
    /// # Returns
    /// Optional kitten entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &KittenId) -> Result<Option<Kitten>, KittenError>;

    /// Remove kitten from storage.
    ///
    /// # Returns
    /// True if a record was deleted, false if it was already gone
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &KittenId) -> Result<bool, KittenError>;
}
