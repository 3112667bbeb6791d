use crate::domain::entities::User;
use crate::domain::errors::DomainResult;
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::persistence::Database;
use sqlx::{any::AnyRow, Row};

fn user_from_row(row: &AnyRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        api_key: row.try_get("api_key")?,
    })
}

#[async_trait::async_trait]
impl UserRepository for Database {
    async fn create_user(&self, user: &User) -> DomainResult<i64> {
        let row = sqlx::query(
            "INSERT INTO users (username, api_key)
             VALUES (?, ?)
             RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.api_key)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        tracing::info!("User created: id={}, username={}", id, user.username);
        Ok(id)
    }

    async fn get_user_by_api_key(&self, api_key: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, api_key
             FROM users
             WHERE api_key = ?",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(user_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, api_key
             FROM users
             WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(user_from_row(&row)?)),
            None => Ok(None),
        }
    }
}
