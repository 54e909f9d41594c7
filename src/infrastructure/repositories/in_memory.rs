use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{models::User, repositories::UserRepository};

#[derive(Default)]
struct Store {
    users: HashMap<i64, User>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<User> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: store.next_id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, name: &str, email: &str) -> anyhow::Result<Option<User>> {
        let mut store = self.store.write().await;
        match store.users.get_mut(&id) {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut store = self.store.write().await;
        Ok(store.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_sequential_ids_starting_at_one() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert("lee", "lee@google.com").await.unwrap();
        let second = repo.insert("aaaa", "bbbb@naver.com").await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn get_returns_what_insert_stored() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert("lee", "lee@google.com").await.unwrap();

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "lee");
        assert_eq!(fetched.email, "lee@google.com");
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert("lee", "lee@google.com").await.unwrap();

        let updated = repo
            .update(created.id, "abcd", "abcd@google.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "abcd");
        assert_eq!(updated.email, "abcd@google.com");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.update(42, "abcd", "abcd@google.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert("lee", "lee@google.com").await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id_and_tracks_mutations() {
        let repo = InMemoryUserRepository::new();
        for (name, email) in [("a", "a@x"), ("b", "b@x"), ("c", "c@x")] {
            repo.insert(name, email).await.unwrap();
        }
        repo.delete(2).await.unwrap();

        let users = repo.list().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
