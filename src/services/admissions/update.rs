use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AdmissionService, validate_admission_update};
use crate::models::ApiResponse;
use crate::models::admissions::requests::UpdateAdmissionRequest;
use crate::services::common::{not_found, validation_failed};
use crate::services::notifications::triggers;

pub async fn update_admission(
    service: &AdmissionService,
    id: i64,
    update_data: UpdateAdmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_admission_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_admission(id, update_data).await? {
        Some(admission) => {
            triggers::admission_saved(&storage, &admission, false).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                admission,
                "Admission updated successfully",
            )))
        }
        None => Ok(not_found("Admission")),
    }
}
