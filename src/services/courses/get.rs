use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::ApiResponse;
use crate::models::courses::entities::CourseResponse;
use crate::services::common::not_found;

pub async fn get_course(
    service: &CourseService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(id).await? {
        Some(course) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseResponse::from(course),
            "Course retrieved successfully",
        ))),
        None => Ok(not_found("Course")),
    }
}
