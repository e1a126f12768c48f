use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, validate_attendance_update};
use crate::models::ApiResponse;
use crate::models::attendance::requests::UpdateAttendanceRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_attendance(
    service: &AttendanceService,
    id: i64,
    update_data: UpdateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_attendance_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_attendance(id, update_data).await? {
        Some(attendance) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attendance,
            "Attendance updated successfully",
        ))),
        None => Ok(not_found("Attendance")),
    }
}
