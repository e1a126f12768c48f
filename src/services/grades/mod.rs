pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::requests::{
    CreateGradeRequest, GradeListParams, UpdateGradeRequest, check_marks_within_total,
};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(GradeService);

impl GradeService {
    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    pub async fn create_grade(
        &self,
        grade_data: CreateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, grade_data, request).await
    }

    pub async fn get_grade(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_grade(self, id, request).await
    }

    pub async fn update_grade(
        &self,
        id: i64,
        update_data: UpdateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, id, update_data, request).await
    }

    pub async fn delete_grade(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, id, request).await
    }
}

pub(crate) async fn validate_new_grade(
    storage: &Arc<dyn Storage>,
    req: &CreateGradeRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "student_id",
        RecordKind::Student,
        Some(req.student_id),
    )
    .await?;
    match storage.get_exam_by_id(req.exam_id).await? {
        Some(exam) if !errors.has("obtained_marks") => {
            check_marks_within_total(&mut errors, req.obtained_marks, exam.total_marks)
        }
        Some(_) => {}
        None => errors.add(
            "exam_id",
            format!("Invalid pk \"{}\" - object does not exist.", req.exam_id),
        ),
    }
    Ok(errors)
}

pub(crate) async fn validate_grade_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateGradeRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "student_id", RecordKind::Student, req.student_id).await?;
    check_reference(storage, &mut errors, "exam_id", RecordKind::Exam, req.exam_id).await?;
    if !errors.is_empty() {
        return Ok(errors);
    }

    if req.obtained_marks.is_none() && req.exam_id.is_none() {
        return Ok(errors);
    }

    // 分数或考试变化时，按合并后的值比对总分
    if let Some(current) = storage.get_grade_by_id(id).await?
        && let Some(exam) = storage
            .get_exam_by_id(req.exam_id.unwrap_or(current.exam_id))
            .await?
    {
        check_marks_within_total(
            &mut errors,
            req.obtained_marks.unwrap_or(current.obtained_marks),
            exam.total_marks,
        );
    }
    Ok(errors)
}
