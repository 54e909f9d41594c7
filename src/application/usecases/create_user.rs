use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        User::validate_fields(&request.name, &request.email)?;
        Ok(self.repo.insert(&request.name, &request.email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    #[tokio::test]
    async fn created_user_carries_an_assigned_id() {
        let usecase = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));
        let user = usecase
            .execute(CreateUserRequest {
                name: "lee".to_string(),
                email: "lee@google.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "lee");
        assert_eq!(user.email, "lee@google.com");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_the_store_is_touched() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = CreateUserUseCase::new(repo.clone());

        let err = usecase
            .execute(CreateUserRequest {
                name: String::new(),
                email: "lee@google.com".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert!(repo.list().await.unwrap().is_empty());
    }
}
