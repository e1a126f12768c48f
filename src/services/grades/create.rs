use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{GradeService, validate_new_grade};
use crate::models::ApiResponse;
use crate::models::grades::requests::CreateGradeRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_grade(
    service: &GradeService,
    grade_data: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_grade(&storage, &grade_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let grade = storage.create_grade(grade_data).await?;
    info!("Grade {} created", grade.id);
    triggers::grade_created(&storage, &grade).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        grade,
        "Grade created successfully",
    )))
}
