use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ExamService, validate_new_exam};
use crate::models::ApiResponse;
use crate::models::exams::requests::CreateExamRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_exam(
    service: &ExamService,
    exam_data: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_exam(&storage, &exam_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let exam = storage.create_exam(exam_data).await?;
    info!("Exam {} created", exam.id);
    triggers::exam_created(&storage, &exam).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        exam,
        "Exam created successfully",
    )))
}
