use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgramService;
use crate::services::common::deleted;

pub async fn delete_program(
    service: &ProgramService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let found = storage.delete_program(id).await?;
    Ok(deleted(found, "Program"))
}
