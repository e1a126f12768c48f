use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProgramService, validate_program_update};
use crate::models::ApiResponse;
use crate::models::programs::requests::UpdateProgramRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_program(
    service: &ProgramService,
    id: i64,
    update_data: UpdateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_program_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_program(id, update_data).await? {
        Some(program) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            program,
            "Program updated successfully",
        ))),
        None => Ok(not_found("Program")),
    }
}
