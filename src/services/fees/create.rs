use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{FeeService, validate_new_fee};
use crate::models::ApiResponse;
use crate::models::fees::{entities::FeeResponse, requests::CreateFeeRequest};
use crate::services::common::{today, validation_failed};
use crate::services::notifications::triggers;

pub async fn create_fee(
    service: &FeeService,
    fee_data: CreateFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_fee(&storage, &fee_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let fee = storage.create_fee(fee_data).await?;
    info!("Fee {} created", fee.id);
    triggers::fee_saved(&storage, &fee, true, today()).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        FeeResponse::from(fee),
        "Fee created successfully",
    )))
}
