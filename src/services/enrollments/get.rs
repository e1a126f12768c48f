use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::ApiResponse;
use crate::services::common::{not_found, row_scope};

pub async fn get_enrollment(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    match storage
        .get_enrollment_by_id(id)
        .await?
        .filter(|enrollment| scope.permits(Some(enrollment.student_id)))
    {
        Some(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment retrieved successfully",
        ))),
        None => Ok(not_found("Enrollment")),
    }
}
