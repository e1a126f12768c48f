use super::SeaOrmStorage;
use super::query::{apply_ordering, fetch_page, like_term};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse,
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, Set};

/// 新课程的 ActiveModel，单条创建与批量创建共用
pub(super) fn new_course_model(req: CreateCourseRequest, now: i64) -> ActiveModel {
    ActiveModel {
        code: Set(req.code),
        title: Set(req.title),
        credit_hours: Set(req.credit_hours),
        semester: Set(req.semester),
        program_id: Set(req.program_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// 只包含变更字段的 ActiveModel
pub(super) fn course_update_model(id: i64, update: UpdateCourseRequest, now: i64) -> ActiveModel {
    let mut model = ActiveModel {
        id: Set(id),
        updated_at: Set(now),
        ..Default::default()
    };

    if let Some(code) = update.code {
        model.code = Set(code);
    }
    if let Some(title) = update.title {
        model.title = Set(title);
    }
    if let Some(credit_hours) = update.credit_hours {
        model.credit_hours = Set(credit_hours);
    }
    if let Some(semester) = update.semester {
        model.semester = Set(semester);
    }
    if let Some(program_id) = update.program_id {
        model.program_id = Set(program_id);
    }

    model
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let result = new_course_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建课程失败"))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        params: CourseListParams,
    ) -> Result<PaginatedResponse<Course>> {
        let mut select = Courses::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(like_term(term)))
                    .add(Column::Code.like(like_term(term))),
            );
        }

        if let Some(program_id) = params.program {
            select = select.filter(Column::ProgramId.eq(program_id));
        }

        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(code) = params.code {
            select = select.filter(Column::Code.eq(code));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("title", Column::Title), ("code", Column::Code)],
            &[(Column::Code, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "课程").await?;
        Ok(page.map(|m| m.into_course()))
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        if self.get_course_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        course_update_model(id, update, chrono::Utc::now().timestamp())
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新课程失败"))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
