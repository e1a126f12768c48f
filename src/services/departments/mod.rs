pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(DepartmentService);

impl DepartmentService {
    pub async fn list_departments(
        &self,
        query: DepartmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_departments(self, query, request).await
    }

    pub async fn create_department(
        &self,
        department_data: CreateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, department_data, request).await
    }

    pub async fn get_department(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_department(self, id, request).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        update_data: UpdateDepartmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, id, update_data, request).await
    }

    pub async fn delete_department(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_department(self, id, request).await
    }
}

pub(crate) async fn validate_new_department(
    storage: &Arc<dyn Storage>,
    req: &CreateDepartmentRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "hod_id", RecordKind::Staff, req.hod_id).await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::DepartmentName,
        Some(req.name.clone()),
        None,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::DepartmentCode,
        Some(req.code.clone()),
        None,
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_department_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateDepartmentRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "hod_id", RecordKind::Staff, req.hod_id).await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::DepartmentName,
        req.name.clone(),
        Some(id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::DepartmentCode,
        req.code.clone(),
        Some(id),
    )
    .await?;
    Ok(errors)
}
