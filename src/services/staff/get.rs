use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::ApiResponse;
use crate::services::common::not_found;

pub async fn get_staff(
    service: &StaffService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_staff_by_id(id).await? {
        Some(staff) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff retrieved successfully",
        ))),
        None => Ok(not_found("Staff")),
    }
}
