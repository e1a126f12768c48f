use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::notifications::requests::NotificationListParams;
use crate::models::ApiResponse;
use crate::services::common::row_scope;

pub async fn list_notifications(
    service: &NotificationService,
    query: NotificationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    let response = storage
        .list_notifications_with_pagination(query, scope)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Notification list retrieved successfully",
    )))
}
