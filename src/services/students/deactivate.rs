use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ActionStatus, ApiResponse};
use crate::services::common::not_found;

pub async fn deactivate_student(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let update = UpdateStudentRequest {
        is_active: Some(false),
        ..Default::default()
    };

    match storage.update_student(id, update).await? {
        Some(student) => {
            info!("Student {} deactivated", student.registration_no);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ActionStatus::new("Student deactivated"),
                "Student deactivated",
            )))
        }
        None => Ok(not_found("Student")),
    }
}
