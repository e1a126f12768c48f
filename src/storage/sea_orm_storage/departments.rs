use super::SeaOrmStorage;
use super::query::{apply_ordering, fetch_page, like_term};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            description: Set(req.description),
            hod_id: Set(req.hod_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建院系失败"))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出院系
    pub async fn list_departments_with_pagination_impl(
        &self,
        params: DepartmentListParams,
    ) -> Result<PaginatedResponse<Department>> {
        let mut select = Departments::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(like_term(term)))
                    .add(Column::Code.like(like_term(term))),
            );
        }

        if let Some(code) = params.code {
            select = select.filter(Column::Code.eq(code));
        }

        if let Some(name) = params.name {
            select = select.filter(Column::Name.eq(name));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("name", Column::Name), ("code", Column::Code)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "院系").await?;
        Ok(page.map(|m| m.into_department()))
    }

    /// 更新院系
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        if self.get_department_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(hod_id) = update.hod_id {
            model.hod_id = Set(Some(hod_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新院系失败"))?;

        self.get_department_by_id_impl(id).await
    }

    /// 删除院系
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除院系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    fn department(name: &str, code: &str) -> CreateDepartmentRequest {
        CreateDepartmentRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
            hod_id: None,
        }
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_conflict() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage
            .create_department_impl(department("Physics", "PHY"))
            .await
            .unwrap();

        let err = storage
            .create_department_impl(department("Applied Physics", "PHY"))
            .await
            .unwrap_err();
        assert!(matches!(err, EduSystemError::Conflict(_)));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_into_taken_code_conflicts() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage
            .create_department_impl(department("Physics", "PHY"))
            .await
            .unwrap();
        let maths = storage
            .create_department_impl(department("Mathematics", "MTH"))
            .await
            .unwrap();

        let update = UpdateDepartmentRequest {
            code: Some("PHY".to_string()),
            ..Default::default()
        };
        let err = storage
            .update_department_impl(maths.id, update)
            .await
            .unwrap_err();
        assert!(matches!(err, EduSystemError::Conflict(_)));
    }
}
