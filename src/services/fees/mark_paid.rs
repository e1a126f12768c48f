use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::models::fees::requests::UpdateFeeRequest;
use crate::models::{ActionStatus, ApiResponse};
use crate::services::common::{not_found, today};
use crate::services::notifications::triggers;

pub async fn mark_fee_paid(
    service: &FeeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let today = today();

    let update = UpdateFeeRequest {
        is_paid: Some(true),
        payment_date: Some(today),
        ..Default::default()
    };

    match storage.update_fee(id, update).await? {
        Some(fee) => {
            info!("Fee {} marked as paid", fee.id);
            triggers::fee_saved(&storage, &fee, false, today).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ActionStatus::new("Fee marked as paid"),
                "Fee marked as paid",
            )))
        }
        None => Ok(not_found("Fee")),
    }
}
