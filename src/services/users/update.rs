use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, users::requests::UpdateUserRequest};
use crate::services::common::{
    check_unique, invalidate_user_cache, not_found, validation_failed,
};
use crate::storage::UniqueField;
use crate::utils::password::hash_password;

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors = update_data.validate();
    check_unique(
        &storage,
        &mut errors,
        UniqueField::UserEmail,
        update_data.email.clone(),
        Some(user_id),
    )
    .await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    if let Some(password) = &update_data.password {
        update_data.password = Some(hash_password(password)?);
    }

    match storage.update_user(user_id, update_data).await? {
        Some(user) => {
            invalidate_user_cache(request, user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User information updated successfully",
            )))
        }
        None => Ok(not_found("User")),
    }
}
