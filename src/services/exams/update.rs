use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ExamService, validate_exam_update};
use crate::models::ApiResponse;
use crate::models::exams::requests::UpdateExamRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_exam(
    service: &ExamService,
    id: i64,
    update_data: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_exam_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_exam(id, update_data).await? {
        Some(exam) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            exam,
            "Exam updated successfully",
        ))),
        None => Ok(not_found("Exam")),
    }
}
