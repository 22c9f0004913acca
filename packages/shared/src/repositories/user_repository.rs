use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
    ) -> Result<User, UserRepositoryError>;
    async fn get_user_by_id(&self, user_id: i64) -> Result<User, UserRepositoryError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError>;
    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError>;
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
    ) -> Result<User, UserRepositoryError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, hashed_password, created_at)
             VALUES (?, ?, ?)
             RETURNING id, username, hashed_password, created_at",
        )
        .bind(username)
        .bind(hashed_password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::AlreadyExists
            } else {
                UserRepositoryError::Database(e.to_string())
            }
        })
    }

    async fn get_user_by_id(&self, user_id: i64) -> Result<User, UserRepositoryError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, hashed_password, created_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserRepositoryError::Database(e.to_string()))?
        .ok_or(UserRepositoryError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, hashed_password, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserRepositoryError::Database(e.to_string()))?
        .ok_or(UserRepositoryError::NotFound)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?;
        Ok(count.0 > 0)
    }
}
