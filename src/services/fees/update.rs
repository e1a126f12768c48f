use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{FeeService, validate_fee_update};
use crate::models::ApiResponse;
use crate::models::fees::{entities::FeeResponse, requests::UpdateFeeRequest};
use crate::services::common::{not_found, today, validation_failed};
use crate::services::notifications::triggers;

pub async fn update_fee(
    service: &FeeService,
    id: i64,
    update_data: UpdateFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_fee_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_fee(id, update_data).await? {
        Some(fee) => {
            triggers::fee_saved(&storage, &fee, false, today()).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FeeResponse::from(fee),
                "Fee updated successfully",
            )))
        }
        None => Ok(not_found("Fee")),
    }
}
