use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{DepartmentService, validate_new_department};
use crate::models::ApiResponse;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::services::common::validation_failed;

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = validate_new_department(&storage, &department_data).await?;
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    let department = storage.create_department(department_data).await?;
    info!("Department {} created", department.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        department,
        "Department created successfully",
    )))
}
