use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::models::students::entities::StudentResponse;
use crate::services::common::{not_found, row_scope};

pub async fn get_student(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    // 范围外的记录按不存在处理
    match storage
        .get_student_by_id(id)
        .await?
        .filter(|s| scope.permits(Some(s.id)))
    {
        Some(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse::from(student),
            "Student retrieved successfully",
        ))),
        None => Ok(not_found("Student")),
    }
}
