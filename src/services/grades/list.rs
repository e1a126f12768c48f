use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::requests::GradeListParams;
use crate::models::ApiResponse;
use crate::services::common::row_scope;

pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    let response = storage
        .list_grades_with_pagination(query, scope)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Grade list retrieved successfully",
    )))
}
