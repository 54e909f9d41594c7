use async_trait::async_trait;

use crate::domain::models::User;

/// The user store. Identifier assignment belongs to the store: `insert`
/// hands out a fresh id, and no operation ever changes an existing one.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<User>>;
    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<User>;
    async fn update(&self, id: i64, name: &str, email: &str) -> anyhow::Result<Option<User>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
