use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::staff::requests::StaffListParams;
use crate::models::ApiResponse;

pub async fn list_staff(
    service: &StaffService,
    query: StaffListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage.list_staff_with_pagination(query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Staff list retrieved successfully",
    )))
}
