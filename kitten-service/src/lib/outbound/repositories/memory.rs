//! In-memory repository adapters.
//!
//! Back the same ports as the Postgres adapters with a locked map. State is
//! lost on restart; suitable for tests and single-process experimentation.
//! Username uniqueness is enforced under the write lock, mirroring the
//! database unique constraint.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::NewKitten;
use crate::domain::kitten::ports::KittenRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// In-memory implementation of the user repository port.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write();

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        let created = User {
            id: UserId::new(),
            username: user.username,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.username == *username)
            .cloned())
    }
}

/// In-memory implementation of the kitten repository port.
#[derive(Clone, Default)]
pub struct MemoryKittenRepository {
    kittens: Arc<RwLock<HashMap<Uuid, Kitten>>>,
}

impl MemoryKittenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored kitten, in no particular order.
    ///
    /// The HTTP surface never exposes kitten ids, so tests use this to
    /// learn the id a create assigned.
    pub fn all(&self) -> Vec<Kitten> {
        self.kittens.read().values().cloned().collect()
    }
}

#[async_trait]
impl KittenRepository for MemoryKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError> {
        let created = Kitten {
            id: KittenId::new(),
            name: kitten.name,
            age: kitten.age,
            color: kitten.color,
            owner_id: kitten.owner_id,
            created_at: Utc::now(),
        };
        self.kittens.write().insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &KittenId) -> Result<Option<Kitten>, KittenError> {
        Ok(self.kittens.read().get(&id.0).cloned())
    }

    async fn delete(&self, id: &KittenId) -> Result<bool, KittenError> {
        Ok(self.kittens.write().remove(&id.0).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kitten::models::KittenName;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: Username::new(name.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_create_and_find() {
        let repo = MemoryUserRepository::new();

        let created = repo.create(new_user("alice")).await.unwrap();

        let by_id = repo.find_by_id(&created.id).await.unwrap();
        assert!(by_id.is_some());

        let username = Username::new("alice".to_string()).unwrap();
        let by_name = repo.find_by_username(&username).await.unwrap();
        assert_eq!(by_name.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_user_duplicate_username_rejected() {
        let repo = MemoryUserRepository::new();

        repo.create(new_user("alice")).await.unwrap();
        let result = repo.create(new_user("alice")).await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_kitten_create_find_delete() {
        let repo = MemoryKittenRepository::new();
        let owner = UserId::new();

        let created = repo
            .create(NewKitten {
                name: KittenName::new("Mimi".to_string()).unwrap(),
                age: 1,
                color: "black".to_string(),
                owner_id: owner,
            })
            .await
            .unwrap();
        assert_eq!(created.owner_id, owner);

        assert!(repo.find_by_id(&created.id).await.unwrap().is_some());

        assert!(repo.delete(&created.id).await.unwrap());
        // Second delete reports the row as already gone
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    }
}
