use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::{entities::StudentResponse, requests::StudentListParams};
use crate::models::ApiResponse;
use crate::services::common::row_scope;

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    let response = storage
        .list_students_with_pagination(query, scope)
        .await?
        .map(StudentResponse::from);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student list retrieved successfully",
    )))
}
