use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, validate_student_update};
use crate::models::ApiResponse;
use crate::models::students::{entities::StudentResponse, requests::UpdateStudentRequest};
use crate::services::common::{not_found, today, validation_failed};

pub async fn update_student(
    service: &StudentService,
    id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_student_update(&storage, id, &update_data, today()).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_student(id, update_data).await? {
        Some(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse::from(student),
            "Student updated successfully",
        ))),
        None => Ok(not_found("Student")),
    }
}
