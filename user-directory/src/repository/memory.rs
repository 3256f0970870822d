use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::UserRepository;
use crate::error::Result;
use crate::models::{User, UserId, UserPayload};

#[derive(Debug, Default)]
struct Table {
    last_id: UserId,
    rows: BTreeMap<UserId, User>,
}

/// In-process [`UserRepository`]
///
/// Ids are assigned like a `SERIAL` column: increasing from 1 and never reused.
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, data: UserPayload) -> Result<User> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let user = data.into_user(table.last_id);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, data: UserPayload) -> Result<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = data.into_user(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = MemoryUserRepository::new();
        let first = repo.create(payload("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(payload("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let repo = MemoryUserRepository::new();
        assert!(!repo.update(1, payload("Ann2", "ann2@x.com")).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = MemoryUserRepository::new();
        let handle = repo.clone();
        repo.create(payload("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(handle.len().await, 1);
        assert_eq!(handle.find_by_id(1).await.unwrap().unwrap().email, "ann@x.com");
    }
}
