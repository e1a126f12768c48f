use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AdmissionService, validate_new_admission};
use crate::models::ApiResponse;
use crate::models::admissions::requests::CreateAdmissionRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_admission(
    service: &AdmissionService,
    admission_data: CreateAdmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_admission(&storage, &admission_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let admission = storage.create_admission(admission_data).await?;
    info!("Admission {} created", admission.id);
    triggers::admission_saved(&storage, &admission, true).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        admission,
        "Admission created successfully",
    )))
}
