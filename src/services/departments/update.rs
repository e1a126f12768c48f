use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DepartmentService, validate_department_update};
use crate::models::ApiResponse;
use crate::models::departments::requests::UpdateDepartmentRequest;
use crate::services::common::{not_found, validation_failed};

pub async fn update_department(
    service: &DepartmentService,
    id: i64,
    update_data: UpdateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_department_update(&storage, id, &update_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    match storage.update_department(id, update_data).await? {
        Some(department) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            department,
            "Department updated successfully",
        ))),
        None => Ok(not_found("Department")),
    }
}
