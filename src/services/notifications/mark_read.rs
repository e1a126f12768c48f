use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::notifications::requests::UpdateNotificationRequest;
use crate::models::{ActionStatus, ApiResponse};
use crate::services::common::{not_found, row_scope};

pub async fn mark_notification_read(
    service: &NotificationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    // 学生只能处理发给自己的通知
    let visible = storage
        .get_notification_by_id(id)
        .await?
        .is_some_and(|n| scope.permits(n.recipient_student_id));
    if !visible {
        return Ok(not_found("Notification"));
    }

    let update = UpdateNotificationRequest {
        read: Some(true),
        ..Default::default()
    };

    match storage.update_notification(id, update).await? {
        Some(_) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ActionStatus::new("Notification marked as read"),
            "Notification marked as read",
        ))),
        None => Ok(not_found("Notification")),
    }
}
