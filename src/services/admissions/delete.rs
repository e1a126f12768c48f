use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::services::common::deleted;

pub async fn delete_admission(
    service: &AdmissionService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let found = storage.delete_admission(id).await?;
    Ok(deleted(found, "Admission"))
}
