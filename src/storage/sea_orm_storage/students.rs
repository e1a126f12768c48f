use super::SeaOrmStorage;
use super::query::{apply_ordering, apply_scope, fetch_page, like_term};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse, RowScope,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

/// 新学生的 ActiveModel，单条创建与批量创建共用
pub(super) fn new_student_model(req: CreateStudentRequest, now: i64) -> ActiveModel {
    ActiveModel {
        registration_no: Set(req.registration_no),
        user_id: Set(req.user_id),
        full_name: Set(req.full_name),
        gender: Set(req.gender.to_string()),
        dob: Set(req.dob),
        email: Set(req.email),
        phone: Set(req.phone),
        address: Set(req.address),
        program_id: Set(req.program_id),
        enrollment_year: Set(req.enrollment_year),
        is_active: Set(req.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// 只包含变更字段的 ActiveModel
pub(super) fn student_update_model(
    id: i64,
    update: UpdateStudentRequest,
    now: i64,
) -> ActiveModel {
    let mut model = ActiveModel {
        id: Set(id),
        updated_at: Set(now),
        ..Default::default()
    };

    if let Some(registration_no) = update.registration_no {
        model.registration_no = Set(registration_no);
    }
    if let Some(user_id) = update.user_id {
        model.user_id = Set(Some(user_id));
    }
    if let Some(full_name) = update.full_name {
        model.full_name = Set(full_name);
    }
    if let Some(gender) = update.gender {
        model.gender = Set(gender.to_string());
    }
    if let Some(dob) = update.dob {
        model.dob = Set(dob);
    }
    if let Some(email) = update.email {
        model.email = Set(email);
    }
    if let Some(phone) = update.phone {
        model.phone = Set(phone);
    }
    if let Some(address) = update.address {
        model.address = Set(address);
    }
    if let Some(program_id) = update.program_id {
        model.program_id = Set(program_id);
    }
    if let Some(enrollment_year) = update.enrollment_year {
        model.enrollment_year = Set(enrollment_year);
    }
    if let Some(is_active) = update.is_active {
        model.is_active = Set(is_active);
    }

    model
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let result = new_student_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过登录账号获取学生
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        params: StudentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Student>> {
        let mut select = apply_scope(Students::find(), Column::Id, scope);

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.like(like_term(term)))
                    .add(Column::RegistrationNo.like(like_term(term)))
                    .add(Column::Email.like(like_term(term))),
            );
        }

        if let Some(program_id) = params.program {
            select = select.filter(Column::ProgramId.eq(program_id));
        }

        if let Some(is_active) = params.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        if let Some(enrollment_year) = params.enrollment_year {
            select = select.filter(Column::EnrollmentYear.eq(enrollment_year));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[
                ("full_name", Column::FullName),
                ("enrollment_year", Column::EnrollmentYear),
                ("id", Column::Id),
            ],
            &[(Column::Id, Order::Desc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "学生").await?;
        Ok(page.map(|m| m.into_student()))
    }

    /// 某专业下全部学生的 ID（含已停用）
    pub async fn list_student_ids_by_program_impl(&self, program_id: i64) -> Result<Vec<i64>> {
        let ids = Students::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::ProgramId.eq(program_id))
            .order_by_asc(Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询专业学生失败: {e}")))?;

        Ok(ids)
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        student_update_model(id, update, chrono::Utc::now().timestamp())
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新学生失败"))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
