use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::ApiResponse;
use crate::services::common::{not_found, row_scope};

pub async fn get_notification(
    service: &NotificationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    match storage
        .get_notification_by_id(id)
        .await?
        .filter(|notification| scope.permits(notification.recipient_student_id))
    {
        Some(notification) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification,
            "Notification retrieved successfully",
        ))),
        None => Ok(not_found("Notification")),
    }
}
