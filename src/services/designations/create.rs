use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{DesignationService, validate_new_designation};
use crate::models::ApiResponse;
use crate::models::designations::requests::CreateDesignationRequest;
use crate::services::common::validation_failed;

pub async fn create_designation(
    service: &DesignationService,
    designation_data: CreateDesignationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_designation(&storage, &designation_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let designation = storage.create_designation(designation_data).await?;
    info!("Designation {} created", designation.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        designation,
        "Designation created successfully",
    )))
}
