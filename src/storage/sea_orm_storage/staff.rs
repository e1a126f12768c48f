//! 教职工与职务

use super::SeaOrmStorage;
use super::query::{apply_ordering, fetch_page, like_term};
use crate::entity::designations::{
    ActiveModel as DesignationActiveModel, Column as DesignationColumn, Entity as Designations,
};
use crate::entity::staff::{ActiveModel, Column, Entity as StaffEntity};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse,
    designations::{
        entities::Designation,
        requests::{CreateDesignationRequest, DesignationListParams, UpdateDesignationRequest},
    },
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建职务
    pub async fn create_designation_impl(
        &self,
        req: CreateDesignationRequest,
    ) -> Result<Designation> {
        let now = chrono::Utc::now().timestamp();

        let model = DesignationActiveModel {
            title: Set(req.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建职务失败"))?;

        Ok(result.into_designation())
    }

    /// 通过 ID 获取职务
    pub async fn get_designation_by_id_impl(&self, id: i64) -> Result<Option<Designation>> {
        let result = Designations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询职务失败: {e}")))?;

        Ok(result.map(|m| m.into_designation()))
    }

    /// 分页列出职务
    pub async fn list_designations_with_pagination_impl(
        &self,
        params: DesignationListParams,
    ) -> Result<PaginatedResponse<Designation>> {
        let mut select = Designations::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(DesignationColumn::Title.like(like_term(term)));
        }

        if let Some(title) = params.title {
            select = select.filter(DesignationColumn::Title.eq(title));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("title", DesignationColumn::Title)],
            &[(DesignationColumn::Title, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "职务").await?;
        Ok(page.map(|m| m.into_designation()))
    }

    /// 更新职务
    pub async fn update_designation_impl(
        &self,
        id: i64,
        update: UpdateDesignationRequest,
    ) -> Result<Option<Designation>> {
        if self.get_designation_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = DesignationActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(title) = update.title {
            model.title = Set(title);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新职务失败"))?;

        self.get_designation_by_id_impl(id).await
    }

    /// 删除职务
    pub async fn delete_designation_impl(&self, id: i64) -> Result<bool> {
        let result = Designations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除职务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建教职工，入职日期取当天
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<Staff> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            full_name: Set(req.full_name),
            staff_type: Set(req.staff_type.to_string()),
            designation_id: Set(req.designation_id),
            department_id: Set(req.department_id),
            email: Set(req.email),
            phone: Set(req.phone),
            date_joined: Set(now.date_naive()),
            is_active: Set(req.is_active),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建教职工失败"))?;

        Ok(result.into_staff())
    }

    /// 通过 ID 获取教职工
    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<Staff>> {
        let result = StaffEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教职工失败: {e}")))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 分页列出教职工
    pub async fn list_staff_with_pagination_impl(
        &self,
        params: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>> {
        let mut select = StaffEntity::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.like(like_term(term)))
                    .add(Column::Email.like(like_term(term))),
            );
        }

        if let Some(department_id) = params.department {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        if let Some(staff_type) = params.staff_type {
            select = select.filter(Column::StaffType.eq(staff_type.to_string()));
        }

        if let Some(is_active) = params.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("full_name", Column::FullName), ("id", Column::Id)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "教职工").await?;
        Ok(page.map(|m| m.into_staff()))
    }

    /// 更新教职工
    pub async fn update_staff_impl(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        if self.get_staff_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(staff_type) = update.staff_type {
            model.staff_type = Set(staff_type.to_string());
        }
        if let Some(designation_id) = update.designation_id {
            model.designation_id = Set(Some(designation_id));
        }
        if let Some(department_id) = update.department_id {
            model.department_id = Set(Some(department_id));
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新教职工失败"))?;

        self.get_staff_by_id_impl(id).await
    }

    /// 删除教职工
    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let result = StaffEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除教职工失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
