pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(CourseService);

impl CourseService {
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    pub async fn get_course(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_course(self, id, request).await
    }

    pub async fn update_course(
        &self,
        id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, id, update_data, request).await
    }

    pub async fn delete_course(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_course(self, id, request).await
    }
}

pub(crate) async fn validate_new_course(
    storage: &Arc<dyn Storage>,
    req: &CreateCourseRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "program_id",
        RecordKind::Program,
        Some(req.program_id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::CourseCode,
        Some(req.code.clone()),
        None,
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_course_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateCourseRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "program_id", RecordKind::Program, req.program_id).await?;
    check_unique(storage, &mut errors, UniqueField::CourseCode, req.code.clone(), Some(id)).await?;
    Ok(errors)
}
