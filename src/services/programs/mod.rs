pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::programs::requests::{
    CreateProgramRequest, ProgramListParams, UpdateProgramRequest,
};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(ProgramService);

impl ProgramService {
    pub async fn list_programs(
        &self,
        query: ProgramListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_programs(self, query, request).await
    }

    pub async fn create_program(
        &self,
        program_data: CreateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_program(self, program_data, request).await
    }

    pub async fn get_program(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_program(self, id, request).await
    }

    pub async fn update_program(
        &self,
        id: i64,
        update_data: UpdateProgramRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_program(self, id, update_data, request).await
    }

    pub async fn delete_program(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_program(self, id, request).await
    }
}

pub(crate) async fn validate_new_program(
    storage: &Arc<dyn Storage>,
    req: &CreateProgramRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "department_id",
        RecordKind::Department,
        Some(req.department_id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::ProgramNumber,
        Some(req.program_number),
        None,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::ProgramCode,
        Some(req.code.clone()),
        None,
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_program_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateProgramRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "department_id",
        RecordKind::Department,
        req.department_id,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::ProgramNumber,
        req.program_number,
        Some(id),
    )
    .await?;
    check_unique(storage, &mut errors, UniqueField::ProgramCode, req.code.clone(), Some(id)).await?;
    Ok(errors)
}
