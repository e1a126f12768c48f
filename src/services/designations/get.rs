use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DesignationService;
use crate::models::ApiResponse;
use crate::services::common::not_found;

pub async fn get_designation(
    service: &DesignationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_designation_by_id(id).await? {
        Some(designation) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            designation,
            "Designation retrieved successfully",
        ))),
        None => Ok(not_found("Designation")),
    }
}
