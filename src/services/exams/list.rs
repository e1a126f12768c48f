use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::ExamListParams;
use crate::models::ApiResponse;

pub async fn list_exams(
    service: &ExamService,
    query: ExamListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage.list_exams_with_pagination(query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Exam list retrieved successfully",
    )))
}
