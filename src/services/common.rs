//! 各服务共用的响应与校验辅助

use actix_web::{HttpRequest, HttpResponse};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::cache::{ObjectCache, user_cache_key};
use crate::errors::{EduSystemError, Result};
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, RowScope};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

/// 当前 UTC 日期
pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub(crate) fn validation_failed(errors: FieldErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors))
}

pub(crate) fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        format!("{what} not found"),
    ))
}

pub(crate) fn deleted(found: bool, what: &str) -> HttpResponse {
    if found {
        HttpResponse::Ok().json(ApiResponse::success_empty(format!(
            "{what} deleted successfully"
        )))
    } else {
        not_found(what)
    }
}

/// 按调用者角色确定行级范围
pub(crate) async fn row_scope(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<RowScope> {
    let user = RequireJWT::extract_user(request)
        .ok_or_else(|| EduSystemError::authentication("Missing authenticated user"))?;

    match user.role {
        UserRole::Admin | UserRole::Staff => Ok(RowScope::All),
        UserRole::Student => {
            let own = storage.get_student_by_user_id(user.id).await?;
            Ok(RowScope::Student(own.map(|s| s.id)))
        }
    }
}

/// 用户被修改或删除后清掉认证缓存
pub(crate) async fn invalidate_user_cache(request: &HttpRequest, user_id: i64) {
    if let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>() {
        cache.remove(&user_cache_key(user_id)).await;
    }
}

/// 外键必须指向已存在的记录
pub(crate) async fn check_reference(
    storage: &Arc<dyn Storage>,
    errors: &mut FieldErrors,
    field: &str,
    kind: RecordKind,
    id: Option<i64>,
) -> Result<()> {
    if let Some(id) = id
        && !errors.has(field)
        && !storage.record_exists(kind, id).await?
    {
        errors.add(field, format!("Invalid pk \"{id}\" - object does not exist."));
    }
    Ok(())
}

/// 唯一值不能被其他记录占用
pub(crate) async fn check_unique<V>(
    storage: &Arc<dyn Storage>,
    errors: &mut FieldErrors,
    field: UniqueField,
    value: Option<V>,
    exclude_id: Option<i64>,
) -> Result<()>
where
    V: Into<sea_orm::Value>,
{
    let name = field.field_name();
    if let Some(value) = value
        && !errors.has(name)
        && storage
            .unique_value_taken(field, value.into(), exclude_id)
            .await?
    {
        errors.add(name, unique_message(field));
    }
    Ok(())
}

pub(crate) fn unique_message(field: UniqueField) -> String {
    let model = match field {
        UniqueField::UserUsername | UniqueField::UserEmail => "user",
        UniqueField::DepartmentName | UniqueField::DepartmentCode => "department",
        UniqueField::ProgramNumber | UniqueField::ProgramCode => "program",
        UniqueField::CourseCode => "course",
        UniqueField::StudentRegistrationNo
        | UniqueField::StudentEmail
        | UniqueField::StudentPhone
        | UniqueField::StudentUser => "student",
        UniqueField::StaffEmail | UniqueField::StaffPhone | UniqueField::StaffUser => "staff",
        UniqueField::AdmissionStudent => "admission",
    };
    let field_label = field.field_name().trim_end_matches("_id").replace('_', " ");
    format!("{model} with this {field_label} already exists.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_messages() {
        assert_eq!(
            unique_message(UniqueField::StudentRegistrationNo),
            "student with this registration no already exists."
        );
        assert_eq!(
            unique_message(UniqueField::StaffUser),
            "staff with this user already exists."
        );
        assert_eq!(
            unique_message(UniqueField::CourseCode),
            "course with this code already exists."
        );
    }

    #[test]
    fn test_deleted_status() {
        assert_eq!(deleted(true, "Course").status(), 200);
        assert_eq!(deleted(false, "Course").status(), 404);
    }
}
