use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        User::validate_fields(&request.name, &request.email)?;
        self.repo
            .update(request.id, &request.name, &request.email)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {}", request.id)))
    }
}
