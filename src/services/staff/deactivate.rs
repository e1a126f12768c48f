use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StaffService;
use crate::models::staff::requests::UpdateStaffRequest;
use crate::models::{ActionStatus, ApiResponse};
use crate::services::common::not_found;

pub async fn deactivate_staff(
    service: &StaffService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let update = UpdateStaffRequest {
        is_active: Some(false),
        ..Default::default()
    };

    match storage.update_staff(id, update).await? {
        Some(staff) => {
            info!("Staff {} deactivated", staff.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ActionStatus::new("Staff deactivated"),
                "Staff deactivated",
            )))
        }
        None => Ok(not_found("Staff")),
    }
}
