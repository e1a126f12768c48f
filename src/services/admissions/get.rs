use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::models::ApiResponse;
use crate::services::common::not_found;

pub async fn get_admission(
    service: &AdmissionService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_admission_by_id(id).await? {
        Some(admission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            admission,
            "Admission retrieved successfully",
        ))),
        None => Ok(not_found("Admission")),
    }
}
