use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::kitten::errors::KittenIdError;
use crate::domain::kitten::errors::KittenNameError;
use crate::domain::user::models::UserId;

/// Kitten aggregate entity.
///
/// Every kitten references the user that created it; only that owner may
/// read or delete it.
#[derive(Debug, Clone)]
pub struct Kitten {
    pub id: KittenId,
    pub name: KittenName,
    pub age: i32,
    pub color: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Kitten unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KittenId(pub Uuid);

impl KittenId {
    /// Generate a new random kitten ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a kitten ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, KittenIdError> {
        Uuid::parse_str(s)
            .map(KittenId)
            .map_err(|e| KittenIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for KittenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KittenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kitten name value type
///
/// Names are non-empty and at most 100 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittenName(String);

impl KittenName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid kitten name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 100 bytes
    pub fn new(name: String) -> Result<Self, KittenNameError> {
        if name.is_empty() {
            return Err(KittenNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(KittenNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KittenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new kitten with domain types.
///
/// The owner is not part of the command; it is supplied separately from the
/// resolved request identity so an unattributed kitten cannot be created.
#[derive(Debug)]
pub struct CreateKittenCommand {
    pub name: KittenName,
    pub age: i32,
    pub color: String,
}

/// New kitten record handed to the repository; the store assigns the id.
#[derive(Debug)]
pub struct NewKitten {
    pub name: KittenName,
    pub age: i32,
    pub color: String,
    pub owner_id: UserId,
}
