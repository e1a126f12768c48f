use super::SeaOrmStorage;
use super::query::{apply_ordering, fetch_page, like_term, students_named};
use crate::entity::admissions::{ActiveModel, Column, Entity as Admissions};
use crate::entity::programs;
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse,
    admissions::{
        entities::Admission,
        requests::{AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QuerySelect,
    QueryTrait, Set,
};

impl SeaOrmStorage {
    /// 创建录取记录，录取日期取当天
    pub async fn create_admission_impl(&self, req: CreateAdmissionRequest) -> Result<Admission> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            program_id: Set(req.program_id),
            admission_date: Set(now.date_naive()),
            status: Set(req.status.to_string()),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建录取记录失败"))?;

        Ok(result.into_admission())
    }

    /// 通过 ID 获取录取记录
    pub async fn get_admission_by_id_impl(&self, id: i64) -> Result<Option<Admission>> {
        let result = Admissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询录取记录失败: {e}")))?;

        Ok(result.map(|m| m.into_admission()))
    }

    /// 分页列出录取记录
    pub async fn list_admissions_with_pagination_impl(
        &self,
        params: AdmissionListParams,
    ) -> Result<PaginatedResponse<Admission>> {
        let mut select = Admissions::find();

        // 按学生姓名或专业名称搜索
        if let Some(term) = params.query.search_term() {
            let matching_programs = programs::Entity::find()
                .select_only()
                .column(programs::Column::Id)
                .filter(programs::Column::Name.like(like_term(term)))
                .into_query();
            select = select.filter(
                Condition::any()
                    .add(Column::StudentId.in_subquery(students_named(term)))
                    .add(Column::ProgramId.in_subquery(matching_programs)),
            );
        }

        if let Some(status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(program_id) = params.program {
            select = select.filter(Column::ProgramId.eq(program_id));
        }

        if let Some(student_id) = params.student {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("id", Column::Id), ("admission_date", Column::AdmissionDate)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "录取记录").await?;
        Ok(page.map(|m| m.into_admission()))
    }

    /// 更新录取记录
    pub async fn update_admission_impl(
        &self,
        id: i64,
        update: UpdateAdmissionRequest,
    ) -> Result<Option<Admission>> {
        if self.get_admission_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(program_id) = update.program_id {
            model.program_id = Set(program_id);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新录取记录失败"))?;

        self.get_admission_by_id_impl(id).await
    }

    /// 删除录取记录
    pub async fn delete_admission_impl(&self, id: i64) -> Result<bool> {
        let result = Admissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除录取记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
