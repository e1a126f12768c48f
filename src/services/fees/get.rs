use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::ApiResponse;
use crate::models::fees::entities::FeeResponse;
use crate::services::common::{not_found, row_scope};

pub async fn get_fee(
    service: &FeeService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    match storage
        .get_fee_by_id(id)
        .await?
        .filter(|fee| scope.permits(Some(fee.student_id)))
    {
        Some(fee) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeeResponse::from(fee),
            "Fee retrieved successfully",
        ))),
        None => Ok(not_found("Fee")),
    }
}
