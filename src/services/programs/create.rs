use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ProgramService, validate_new_program};
use crate::models::ApiResponse;
use crate::models::programs::requests::CreateProgramRequest;
use crate::services::common::validation_failed;

pub async fn create_program(
    service: &ProgramService,
    program_data: CreateProgramRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_program(&storage, &program_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let program = storage.create_program(program_data).await?;
    info!("Program {} created", program.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        program,
        "Program created successfully",
    )))
}
