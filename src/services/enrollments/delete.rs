use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::services::common::deleted;

pub async fn delete_enrollment(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let found = storage.delete_enrollment(id).await?;
    Ok(deleted(found, "Enrollment"))
}
