use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::{entities::CourseResponse, requests::CourseListParams};
use crate::models::ApiResponse;

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage
        .list_courses_with_pagination(query)
        .await?
        .map(CourseResponse::from);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Course list retrieved successfully",
    )))
}
