use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DesignationService;
use crate::services::common::deleted;

pub async fn delete_designation(
    service: &DesignationService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let found = storage.delete_designation(id).await?;
    Ok(deleted(found, "Designation"))
}
