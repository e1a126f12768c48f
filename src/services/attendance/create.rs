use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AttendanceService, validate_new_attendance};
use crate::models::ApiResponse;
use crate::models::attendance::requests::CreateAttendanceRequest;
use crate::services::common::validation_failed;
use crate::services::notifications::triggers;

pub async fn create_attendance(
    service: &AttendanceService,
    attendance_data: CreateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_attendance(&storage, &attendance_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let attendance = storage.create_attendance(attendance_data).await?;
    info!("Attendance {} created", attendance.id);
    triggers::attendance_created(&storage, &attendance).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        attendance,
        "Attendance created successfully",
    )))
}
