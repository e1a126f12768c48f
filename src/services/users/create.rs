use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, users::requests::CreateUserRequest};
use crate::services::common::{check_unique, validation_failed};
use crate::storage::UniqueField;
use crate::utils::password::hash_password;

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors = user_data.validate();
    check_unique(
        &storage,
        &mut errors,
        UniqueField::UserUsername,
        Some(user_data.username.clone()),
        None,
    )
    .await?;
    check_unique(
        &storage,
        &mut errors,
        UniqueField::UserEmail,
        Some(user_data.email.clone()),
        None,
    )
    .await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    // 存储层只接收哈希
    user_data.password = hash_password(&user_data.password)?;

    let user = storage.create_user(user_data).await?;
    info!("User {} created with role {}", user.username, user.role);

    Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
}
