use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StaffService, validate_new_staff};
use crate::models::ApiResponse;
use crate::models::staff::requests::CreateStaffRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_staff(
    service: &StaffService,
    staff_data: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_staff(&storage, &staff_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let staff = storage.create_staff(staff_data).await?;
    info!("Staff {} created", staff.id);
    triggers::staff_saved(&storage, &staff, true).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        staff,
        "Staff created successfully",
    )))
}
