use sqlx::PgPool;

use super::UserRepository;
use crate::error::{DatabaseError, DatabaseOperation, Result};
use crate::models::{User, UserId, UserPayload};

/// [`UserRepository`] backed by a PostgreSQL connection pool
///
/// Assumes the `users` table from `schema.sql` already exists.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn tagged(operation: DatabaseOperation) -> impl FnOnce(sqlx::Error) -> DatabaseError {
    move |e| DatabaseError::from(e).during(operation)
}

impl UserRepository for PgUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(tagged(DatabaseOperation::Query))?;

        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(tagged(DatabaseOperation::Query))?;

        Ok(user)
    }

    async fn create(&self, data: UserPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users(name, email) VALUES($1, $2) RETURNING id, name, email",
        )
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(tagged(DatabaseOperation::Insert))?;

        Ok(user)
    }

    async fn update(&self, id: UserId, data: UserPayload) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET name=$1, email=$2 WHERE id=$3")
            .bind(&data.name)
            .bind(&data.email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(tagged(DatabaseOperation::Update))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id=$1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(tagged(DatabaseOperation::Delete))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DatabaseConfig, database::create_pool};

    /// Connects to `USER_DIRECTORY_TEST_DATABASE_URL` and empties `users`
    async fn repository() -> PgUserRepository {
        let url = std::env::var("USER_DIRECTORY_TEST_DATABASE_URL")
            .expect("USER_DIRECTORY_TEST_DATABASE_URL must point at a scratch database");
        let pool = create_pool(&DatabaseConfig {
            url,
            connect_retries: 0,
            retry_delay_secs: 0,
        })
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("TRUNCATE users RESTART IDENTITY")
            .execute(&pool)
            .await
            .unwrap();

        PgUserRepository::new(pool)
    }

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_crud_against_postgres() {
        let repo = repository().await;

        let ann = repo.create(payload("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(repo.find_by_id(ann.id).await.unwrap(), Some(ann.clone()));

        assert!(repo.update(ann.id, payload("Ann2", "ann2@x.com")).await.unwrap());
        assert!(!repo.update(ann.id + 1, payload("Bob", "bob@x.com")).await.unwrap());
        assert_eq!(repo.find_by_id(ann.id).await.unwrap().unwrap().name, "Ann2");

        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert!(repo.delete(ann.id).await.unwrap());
        assert!(!repo.delete(ann.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
