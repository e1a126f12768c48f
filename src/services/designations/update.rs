use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DesignationService, validate_designation_update};
use crate::models::ApiResponse;
use crate::models::designations::requests::UpdateDesignationRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_designation(
    service: &DesignationService,
    id: i64,
    update_data: UpdateDesignationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_designation_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_designation(id, update_data).await? {
        Some(designation) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            designation,
            "Designation updated successfully",
        ))),
        None => Ok(not_found("Designation")),
    }
}
