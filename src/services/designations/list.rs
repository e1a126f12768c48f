use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DesignationService;
use crate::models::designations::requests::DesignationListParams;
use crate::models::ApiResponse;

pub async fn list_designations(
    service: &DesignationService,
    query: DesignationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage.list_designations_with_pagination(query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Designation list retrieved successfully",
    )))
}
