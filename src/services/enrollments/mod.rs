pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::bulk::NON_FIELD_ERRORS;
use crate::models::enrollments::requests::MSG_DUPLICATE_ENROLLMENT;
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListParams, UpdateEnrollmentRequest,
};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(EnrollmentService);

impl EnrollmentService {
    pub async fn list_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    pub async fn create_enrollment(
        &self,
        enrollment_data: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, enrollment_data, request).await
    }

    pub async fn get_enrollment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_enrollment(self, id, request).await
    }

    pub async fn update_enrollment(
        &self,
        id: i64,
        update_data: UpdateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_enrollment(self, id, update_data, request).await
    }

    pub async fn delete_enrollment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_enrollment(self, id, request).await
    }
}

pub(crate) async fn validate_new_enrollment(
    storage: &Arc<dyn Storage>,
    req: &CreateEnrollmentRequest,
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
    check_reference(
        storage,
        &mut errors,
        "course_id",
        RecordKind::Course,
        Some(req.course_id),
    )
    .await?;
    if errors.is_empty()
        && storage
            .enrollment_exists(req.student_id, req.course_id, req.semester, req.year, None)
            .await?
    {
        errors.add(NON_FIELD_ERRORS, MSG_DUPLICATE_ENROLLMENT);
    }
    Ok(errors)
}

pub(crate) async fn validate_enrollment_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateEnrollmentRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "student_id", RecordKind::Student, req.student_id).await?;
    check_reference(storage, &mut errors, "course_id", RecordKind::Course, req.course_id).await?;
    if !errors.is_empty() {
        return Ok(errors);
    }

    // 与现有值合并后再查重
    if let Some(current) = storage.get_enrollment_by_id(id).await?
        && storage
            .enrollment_exists(
                req.student_id.unwrap_or(current.student_id),
                req.course_id.unwrap_or(current.course_id),
                req.semester.unwrap_or(current.semester),
                req.year.unwrap_or(current.year),
                Some(id),
            )
            .await?
    {
        errors.add(NON_FIELD_ERRORS, MSG_DUPLICATE_ENROLLMENT);
    }
    Ok(errors)
}
