pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::admissions::requests::{
    AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest,
};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(AdmissionService);

impl AdmissionService {
    pub async fn list_admissions(
        &self,
        query: AdmissionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_admissions(self, query, request).await
    }

    pub async fn create_admission(
        &self,
        admission_data: CreateAdmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_admission(self, admission_data, request).await
    }

    pub async fn get_admission(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_admission(self, id, request).await
    }

    pub async fn update_admission(
        &self,
        id: i64,
        update_data: UpdateAdmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_admission(self, id, update_data, request).await
    }

    pub async fn delete_admission(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_admission(self, id, request).await
    }
}

pub(crate) async fn validate_new_admission(
    storage: &Arc<dyn Storage>,
    req: &CreateAdmissionRequest,
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
        "program_id",
        RecordKind::Program,
        Some(req.program_id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::AdmissionStudent,
        Some(req.student_id),
        None,
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_admission_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateAdmissionRequest,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    check_reference(storage, &mut errors, "student_id", RecordKind::Student, req.student_id).await?;
    check_reference(storage, &mut errors, "program_id", RecordKind::Program, req.program_id).await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::AdmissionStudent,
        req.student_id,
        Some(id),
    )
    .await?;
    Ok(errors)
}
