use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GradeService, validate_grade_update};
use crate::models::ApiResponse;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_grade(
    service: &GradeService,
    id: i64,
    update_data: UpdateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_grade_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_grade(id, update_data).await? {
        Some(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade updated successfully",
        ))),
        None => Ok(not_found("Grade")),
    }
}
