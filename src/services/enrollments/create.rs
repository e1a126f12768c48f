use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EnrollmentService, validate_new_enrollment};
use crate::models::ApiResponse;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_enrollment(
    service: &EnrollmentService,
    enrollment_data: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_enrollment(&storage, &enrollment_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let enrollment = storage.create_enrollment(enrollment_data).await?;
    info!("Enrollment {} created", enrollment.id);
    triggers::enrollment_created(&storage, &enrollment).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        enrollment,
        "Enrollment created successfully",
    )))
}
