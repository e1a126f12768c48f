use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::models::admissions::requests::AdmissionListParams;
use crate::models::ApiResponse;

pub async fn list_admissions(
    service: &AdmissionService,
    query: AdmissionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let response = storage.list_admissions_with_pagination(query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Admission list retrieved successfully",
    )))
}
