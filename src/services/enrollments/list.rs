use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::requests::EnrollmentListParams;
use crate::models::ApiResponse;
use crate::services::common::row_scope;

pub async fn list_enrollments(
    service: &EnrollmentService,
    query: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    let response = storage
        .list_enrollments_with_pagination(query, scope)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Enrollment list retrieved successfully",
    )))
}
