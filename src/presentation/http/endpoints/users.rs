use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::UserDto,
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> poem::Result<Json<Vec<UserDto>>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(users.iter().map(map_user).collect()))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<i64>) -> poem::Result<Json<UserDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn add_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> poem::Result<Json<UserDto>> {
        let payload = CreateUserRequest {
            name: request.name.clone(),
            email: request.email.clone(),
        };

        let user = self
            .state
            .create_user_usecase
            .execute(payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<i64>,
        request: Json<UpdateUserRequestDto>,
    ) -> poem::Result<Json<UserDto>> {
        let payload = UpdateUserRequest {
            id: id.0,
            name: request.name.clone(),
            email: request.email.clone(),
        };

        let user = self
            .state
            .update_user_usecase
            .execute(payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i64>) -> poem::Result<()> {
        self.state
            .delete_user_usecase
            .execute(id.0)
            .await
            .map_err(domain_error)?;

        Ok(())
    }
}

fn domain_error(err: DomainError) -> poem::Error {
    let status = match &err {
        DomainError::NotFound(_) => poem::http::StatusCode::NOT_FOUND,
        DomainError::Validation(_) => poem::http::StatusCode::BAD_REQUEST,
        DomainError::Other(_) => poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    };
    poem::Error::from_string(err.to_string(), status)
}
