use super::SeaOrmStorage;
use super::query::{apply_ordering, fetch_page, like_term};
use crate::entity::programs::{ActiveModel, Column, Entity as Programs};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse,
    programs::{
        entities::Program,
        requests::{CreateProgramRequest, ProgramListParams, UpdateProgramRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建专业
    pub async fn create_program_impl(&self, req: CreateProgramRequest) -> Result<Program> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            program_number: Set(req.program_number),
            name: Set(req.name),
            code: Set(req.code),
            program_type: Set(req.program_type.to_string()),
            department_id: Set(req.department_id),
            duration_years: Set(req.duration_years),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建专业失败"))?;

        Ok(result.into_program())
    }

    /// 通过 ID 获取专业
    pub async fn get_program_by_id_impl(&self, id: i64) -> Result<Option<Program>> {
        let result = Programs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询专业失败: {e}")))?;

        Ok(result.map(|m| m.into_program()))
    }

    /// 分页列出专业
    pub async fn list_programs_with_pagination_impl(
        &self,
        params: ProgramListParams,
    ) -> Result<PaginatedResponse<Program>> {
        let mut select = Programs::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(like_term(term)))
                    .add(Column::Code.like(like_term(term))),
            );
        }

        if let Some(department_id) = params.department {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(program_type) = params.program_type {
            select = select.filter(Column::ProgramType.eq(program_type.to_string()));
        }

        if let Some(code) = params.code {
            select = select.filter(Column::Code.eq(code));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[
                ("name", Column::Name),
                ("program_number", Column::ProgramNumber),
            ],
            &[(Column::ProgramNumber, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "专业").await?;
        Ok(page.map(|m| m.into_program()))
    }

    /// 更新专业
    pub async fn update_program_impl(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<Program>> {
        if self.get_program_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(program_number) = update.program_number {
            model.program_number = Set(program_number);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(program_type) = update.program_type {
            model.program_type = Set(program_type.to_string());
        }
        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }
        if let Some(duration_years) = update.duration_years {
            model.duration_years = Set(duration_years);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新专业失败"))?;

        self.get_program_by_id_impl(id).await
    }

    /// 删除专业
    pub async fn delete_program_impl(&self, id: i64) -> Result<bool> {
        let result = Programs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除专业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
