use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, validate_course_update};
use crate::models::ApiResponse;
use crate::models::courses::{entities::CourseResponse, requests::UpdateCourseRequest};
use crate::services::common::{not_found, validation_failed};

pub async fn update_course(
    service: &CourseService,
    id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_course_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_course(id, update_data).await? {
        Some(course) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse::from(course),
            "Course updated successfully",
        ))),
        None => Ok(not_found("Course")),
    }
}
