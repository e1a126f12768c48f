pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::exams::requests::{CreateExamRequest, ExamListParams, UpdateExamRequest};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(ExamService);

impl ExamService {
    pub async fn list_exams(
        &self,
        query: ExamListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, query, request).await
    }

    pub async fn create_exam(
        &self,
        exam_data: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, exam_data, request).await
    }

    pub async fn get_exam(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_exam(self, id, request).await
    }

    pub async fn update_exam(
        &self,
        id: i64,
        update_data: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, id, update_data, request).await
    }

    pub async fn delete_exam(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, id, request).await
    }
}

pub(crate) async fn validate_new_exam(
    storage: &Arc<dyn Storage>,
    req: &CreateExamRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "course_id",
        RecordKind::Course,
        Some(req.course_id),
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_exam_update(
    storage: &Arc<dyn Storage>,
    _id: i64,
    req: &UpdateExamRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "course_id", RecordKind::Course, req.course_id).await?;
    Ok(errors)
}
