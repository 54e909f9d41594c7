use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    // deleting an unknown id is NotFound, not a no-op
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("user {id}")))
        }
    }
}
