use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{NotificationService, validate_new_notification};
use crate::models::ApiResponse;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::services::common::validation_failed;

pub async fn create_notification(
    service: &NotificationService,
    notification_data: CreateNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_notification(&storage, &notification_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let notification = storage.create_notification(notification_data.into()).await?;
    info!("Notification {} created", notification.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        notification,
        "Notification created successfully",
    )))
}
