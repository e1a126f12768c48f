use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::ApiResponse;
use crate::services::common::{not_found, row_scope};

pub async fn get_grade(
    service: &GradeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    match storage
        .get_grade_by_id(id)
        .await?
        .filter(|grade| scope.permits(Some(grade.student_id)))
    {
        Some(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade retrieved successfully",
        ))),
        None => Ok(not_found("Grade")),
    }
}
