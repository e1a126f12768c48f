use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgramService;
use crate::models::ApiResponse;
use crate::services::common::not_found;

pub async fn get_program(
    service: &ProgramService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_program_by_id(id).await? {
        Some(program) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            program,
            "Program retrieved successfully",
        ))),
        None => Ok(not_found("Program")),
    }
}
