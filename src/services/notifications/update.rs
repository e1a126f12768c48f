use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{NotificationService, validate_notification_update};
use crate::models::ApiResponse;
use crate::models::notifications::requests::UpdateNotificationRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_notification(
    service: &NotificationService,
    id: i64,
    update_data: UpdateNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_notification_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_notification(id, update_data).await? {
        Some(notification) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification,
            "Notification updated successfully",
        ))),
        None => Ok(not_found("Notification")),
    }
}
