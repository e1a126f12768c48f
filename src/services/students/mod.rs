pub mod create;
pub mod deactivate;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(StudentService);

impl StudentService {
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    pub async fn get_student(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_student(self, id, request).await
    }

    pub async fn update_student(
        &self,
        id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, id, update_data, request).await
    }

    pub async fn delete_student(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, id, request).await
    }

    // 停用学生档案
    pub async fn deactivate_student(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        deactivate::deactivate_student(self, id, request).await
    }
}

/// 新建学生的完整校验，单条创建与批量创建共用
pub(crate) async fn validate_new_student(
    storage: &Arc<dyn Storage>,
    req: &CreateStudentRequest,
    today: NaiveDate,
) -> Result<FieldErrors> {
    let mut errors = req.validate(today);
    check_reference(
        storage,
        &mut errors,
        "program_id",
        RecordKind::Program,
        Some(req.program_id),
    )
    .await?;
    check_reference(storage, &mut errors, "user_id", RecordKind::User, req.user_id).await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentRegistrationNo,
        Some(req.registration_no.clone()),
        None,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentEmail,
        Some(req.email.clone()),
        None,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentPhone,
        Some(req.phone.clone()),
        None,
    )
    .await?;
    check_unique(storage, &mut errors, UniqueField::StudentUser, req.user_id, None).await?;
    Ok(errors)
}

/// 学生更新校验，唯一性检查排除自身
pub(crate) async fn validate_student_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateStudentRequest,
    today: NaiveDate,
) -> Result<FieldErrors> {
    let mut errors = req.validate(today);
    check_reference(storage, &mut errors, "program_id", RecordKind::Program, req.program_id).await?;
    check_reference(storage, &mut errors, "user_id", RecordKind::User, req.user_id).await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentRegistrationNo,
        req.registration_no.clone(),
        Some(id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentEmail,
        req.email.clone(),
        Some(id),
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StudentPhone,
        req.phone.clone(),
        Some(id),
    )
    .await?;
    check_unique(storage, &mut errors, UniqueField::StudentUser, req.user_id, Some(id)).await?;
    Ok(errors)
}
