use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::{entities::FeeResponse, requests::FeeListParams};
use crate::models::ApiResponse;
use crate::services::common::row_scope;

pub async fn list_fees(
    service: &FeeService,
    query: FeeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scope = row_scope(&storage, request).await?;

    let response = storage
        .list_fees_with_pagination(query, scope)
        .await?
        .map(FeeResponse::from);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Fee list retrieved successfully",
    )))
}
