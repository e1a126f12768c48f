use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StaffService, validate_staff_update};
use crate::models::ApiResponse;
use crate::models::staff::requests::UpdateStaffRequest;
use crate::services::common::{not_found, validation_failed};
use crate::services::notifications::triggers;

pub async fn update_staff(
    service: &StaffService,
    id: i64,
    update_data: UpdateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_staff_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_staff(id, update_data).await? {
        Some(staff) => {
            triggers::staff_saved(&storage, &staff, false).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                staff,
                "Staff updated successfully",
            )))
        }
        None => Ok(not_found("Staff")),
    }
}
