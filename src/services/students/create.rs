use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, validate_new_student};
use crate::models::ApiResponse;
use crate::models::students::{entities::StudentResponse, requests::CreateStudentRequest};
use crate::services::common::{today, validation_failed};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_student(&storage, &student_data, today()).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let student = storage.create_student(student_data).await?;
    info!("Student {} created", student.registration_no);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        StudentResponse::from(student),
        "Student created successfully",
    )))
}
