use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::services::common::deleted;

pub async fn delete_exam(
    service: &ExamService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let found = storage.delete_exam(id).await?;
    Ok(deleted(found, "Exam"))
}
