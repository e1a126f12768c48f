pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::requests::MSG_DUPLICATE_ATTENDANCE;
use crate::models::bulk::NON_FIELD_ERRORS;
use crate::models::attendance::requests::{
    AttendanceListParams, CreateAttendanceRequest, UpdateAttendanceRequest,
};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(AttendanceService);

impl AttendanceService {
    pub async fn list_attendance(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, query, request).await
    }

    pub async fn create_attendance(
        &self,
        attendance_data: CreateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, attendance_data, request).await
    }

    pub async fn get_attendance(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_attendance(self, id, request).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        update_data: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, id, update_data, request).await
    }

    pub async fn delete_attendance(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, id, request).await
    }
}

pub(crate) async fn validate_new_attendance(
    storage: &Arc<dyn Storage>,
    req: &CreateAttendanceRequest,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
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
            .attendance_exists(req.student_id, req.course_id, req.date, None)
            .await?
    {
        errors.add(NON_FIELD_ERRORS, MSG_DUPLICATE_ATTENDANCE);
    }
    Ok(errors)
}

pub(crate) async fn validate_attendance_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateAttendanceRequest,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    check_reference(storage, &mut errors, "student_id", RecordKind::Student, req.student_id).await?;
    check_reference(storage, &mut errors, "course_id", RecordKind::Course, req.course_id).await?;
    if !errors.is_empty() {
        return Ok(errors);
    }

    if let Some(current) = storage.get_attendance_by_id(id).await?
        && storage
            .attendance_exists(
                req.student_id.unwrap_or(current.student_id),
                req.course_id.unwrap_or(current.course_id),
                req.date.unwrap_or(current.date),
                Some(id),
            )
            .await?
    {
        errors.add(NON_FIELD_ERRORS, MSG_DUPLICATE_ATTENDANCE);
    }
    Ok(errors)
}
