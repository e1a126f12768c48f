use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EnrollmentService, validate_enrollment_update};
use crate::models::ApiResponse;
use crate::models::enrollments::requests::UpdateEnrollmentRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_enrollment(
    service: &EnrollmentService,
    id: i64,
    update_data: UpdateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_enrollment_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_enrollment(id, update_data).await? {
        Some(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment updated successfully",
        ))),
        None => Ok(not_found("Enrollment")),
    }
}
