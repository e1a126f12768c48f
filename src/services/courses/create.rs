use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseService, validate_new_course};
use crate::models::ApiResponse;
use crate::models::courses::{entities::CourseResponse, requests::CreateCourseRequest};
use crate::services::common::validation_failed;

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_course(&storage, &course_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let course = storage.create_course(course_data).await?;
    info!("Course {} created", course.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        CourseResponse::from(course),
        "Course created successfully",
    )))
}
