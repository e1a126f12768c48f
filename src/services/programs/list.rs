use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgramService;
use crate::models::programs::requests::ProgramListParams;
use crate::models::ApiResponse;

pub async fn list_programs(
    service: &ProgramService,
    query: ProgramListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage.list_programs_with_pagination(query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Program list retrieved successfully",
    )))
}
