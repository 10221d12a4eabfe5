use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::KittenName;
use crate::domain::kitten::models::NewKitten;
use crate::domain::kitten::ports::KittenRepository;
use crate::domain::user::models::UserId;

/// PostgreSQL adapter for the kitten repository port.
pub struct PostgresKittenRepository {
    pool: PgPool,
}

impl PostgresKittenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct KittenRow {
    id: Uuid,
    name: String,
    age: i32,
    color: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<KittenRow> for Kitten {
    type Error = KittenError;

    fn try_from(row: KittenRow) -> Result<Self, Self::Error> {
        Ok(Kitten {
            id: KittenId(row.id),
            name: KittenName::new(row.name)?,
            age: row.age,
            color: row.color,
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl KittenRepository for PostgresKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError> {
        let row = sqlx::query_as::<_, KittenRow>(
            r#"
            INSERT INTO kittens (name, age, color, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, color, owner_id, created_at
            "#,
        )
        .bind(kitten.name.as_str())
        .bind(kitten.age)
        .bind(&kitten.color)
        .bind(kitten.owner_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &KittenId) -> Result<Option<Kitten>, KittenError> {
        let row = sqlx::query_as::<_, KittenRow>(
            r#"
            SELECT id, name, age, color, owner_id, created_at
            FROM kittens
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        row.map(Kitten::try_from).transpose()
    }

    async fn delete(&self, id: &KittenId) -> Result<bool, KittenError> {
        let result = sqlx::query(
            r#"
            DELETE FROM kittens
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
