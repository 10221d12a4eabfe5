use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::CreateKittenCommand;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::NewKitten;
use crate::domain::kitten::ports::KittenRepository;
use crate::domain::kitten::ports::KittenServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for kitten operations.
///
/// Concrete implementation of KittenServicePort with dependency injection.
pub struct KittenService<KR>
where
    KR: KittenRepository,
{
    repository: Arc<KR>,
}

impl<KR> KittenService<KR>
where
    KR: KittenRepository,
{
    /// Create a new kitten service with an injected repository.
    pub fn new(repository: Arc<KR>) -> Self {
        Self { repository }
    }

    /// Look up a kitten and enforce ownership, in that order.
    ///
    /// Both read and delete go through here so the existence check always
    /// precedes the ownership comparison.
    async fn owned_kitten(
        &self,
        id: &KittenId,
        requester: &UserId,
    ) -> Result<Kitten, KittenError> {
        let kitten = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(KittenError::NotFound(id.to_string()))?;

        if kitten.owner_id != *requester {
            return Err(KittenError::NotOwner);
        }

        Ok(kitten)
    }
}

#[async_trait]
impl<KR> KittenServicePort for KittenService<KR>
where
    KR: KittenRepository,
{
    async fn create_kitten(
        &self,
        command: CreateKittenCommand,
        owner: UserId,
    ) -> Result<Kitten, KittenError> {
        let kitten = NewKitten {
            name: command.name,
            age: command.age,
            color: command.color,
            owner_id: owner,
        };

        self.repository.create(kitten).await
    }

    async fn get_kitten(&self, id: &KittenId, requester: &UserId) -> Result<Kitten, KittenError> {
        self.owned_kitten(id, requester).await
    }

    async fn delete_kitten(&self, id: &KittenId, requester: &UserId) -> Result<(), KittenError> {
        self.owned_kitten(id, requester).await?;

        // The row can only vanish between the lookup and here through a
        // concurrent delete by the same owner, so a false result still
        // reads as not found.
        if !self.repository.delete(id).await? {
            return Err(KittenError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::kitten::models::KittenName;

    mock! {
        pub TestKittenRepository {}

        #[async_trait]
        impl KittenRepository for TestKittenRepository {
            async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError>;
            async fn find_by_id(&self, id: &KittenId) -> Result<Option<Kitten>, KittenError>;
            async fn delete(&self, id: &KittenId) -> Result<bool, KittenError>;
        }
    }

    fn kitten_from(new_kitten: NewKitten) -> Kitten {
        Kitten {
            id: KittenId::new(),
            name: new_kitten.name,
            age: new_kitten.age,
            color: new_kitten.color,
            owner_id: new_kitten.owner_id,
            created_at: Utc::now(),
        }
    }

    fn sample_kitten(owner: UserId) -> Kitten {
        Kitten {
            id: KittenId::new(),
            name: KittenName::new("Mimi".to_string()).unwrap(),
            age: 1,
            color: "black".to_string(),
            owner_id: owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_kitten_binds_owner() {
        let mut repository = MockTestKittenRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |kitten| kitten.owner_id == owner && kitten.name.as_str() == "Mimi")
            .times(1)
            .returning(|kitten| Ok(kitten_from(kitten)));

        let service = KittenService::new(Arc::new(repository));

        let command = CreateKittenCommand {
            name: KittenName::new("Mimi".to_string()).unwrap(),
            age: 1,
            color: "black".to_string(),
        };

        let kitten = service
            .create_kitten(command, owner)
            .await
            .expect("Creation failed");
        assert_eq!(kitten.owner_id, owner);
    }

    #[tokio::test]
    async fn test_get_kitten_not_found_before_ownership() {
        let mut repository = MockTestKittenRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = KittenService::new(Arc::new(repository));

        // Requester is irrelevant when the kitten does not exist
        let result = service.get_kitten(&KittenId::new(), &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), KittenError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_kitten_rejects_non_owner() {
        let mut repository = MockTestKittenRepository::new();
        let kitten = sample_kitten(UserId::new());
        let kitten_id = kitten.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == kitten_id)
            .times(1)
            .returning(move |_| Ok(Some(kitten.clone())));

        let service = KittenService::new(Arc::new(repository));

        let stranger = UserId::new();
        let result = service.get_kitten(&kitten_id, &stranger).await;
        assert!(matches!(result.unwrap_err(), KittenError::NotOwner));
    }

    #[tokio::test]
    async fn test_get_kitten_success_for_owner() {
        let mut repository = MockTestKittenRepository::new();
        let owner = UserId::new();
        let kitten = sample_kitten(owner);
        let kitten_id = kitten.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(kitten.clone())));

        let service = KittenService::new(Arc::new(repository));

        let found = service
            .get_kitten(&kitten_id, &owner)
            .await
            .expect("Lookup failed");
        assert_eq!(found.id, kitten_id);
        assert_eq!(found.name.as_str(), "Mimi");
    }

    #[tokio::test]
    async fn test_delete_kitten_never_called_for_non_owner() {
        let mut repository = MockTestKittenRepository::new();
        let kitten = sample_kitten(UserId::new());
        let kitten_id = kitten.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(kitten.clone())));
        repository.expect_delete().times(0);

        let service = KittenService::new(Arc::new(repository));

        let result = service.delete_kitten(&kitten_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), KittenError::NotOwner));
    }

    #[tokio::test]
    async fn test_delete_kitten_success_for_owner() {
        let mut repository = MockTestKittenRepository::new();
        let owner = UserId::new();
        let kitten = sample_kitten(owner);
        let kitten_id = kitten.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(kitten.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == kitten_id)
            .times(1)
            .returning(|_| Ok(true));

        let service = KittenService::new(Arc::new(repository));

        let result = service.delete_kitten(&kitten_id, &owner).await;
        assert!(result.is_ok());
    }
}
