use super::SeaOrmStorage;
use super::query::{apply_ordering, apply_scope, fetch_page, students_named};
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse, RowScope,
    fees::{
        entities::Fee,
        requests::{CreateFeeRequest, FeeListParams, UpdateFeeRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建费用
    pub async fn create_fee_impl(&self, req: CreateFeeRequest) -> Result<Fee> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            amount: Set(req.amount),
            due_date: Set(req.due_date),
            is_paid: Set(req.is_paid),
            payment_date: Set(req.payment_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建费用失败"))?;

        Ok(result.into_fee())
    }

    /// 通过 ID 获取费用
    pub async fn get_fee_by_id_impl(&self, id: i64) -> Result<Option<Fee>> {
        let result = Fees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询费用失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 分页列出费用
    pub async fn list_fees_with_pagination_impl(
        &self,
        params: FeeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Fee>> {
        let mut select = apply_scope(Fees::find(), Column::StudentId, scope);

        if let Some(term) = params.query.search_term() {
            select = select.filter(Column::StudentId.in_subquery(students_named(term)));
        }

        if let Some(student_id) = params.student {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(is_paid) = params.is_paid {
            select = select.filter(Column::IsPaid.eq(is_paid));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[
                ("payment_date", Column::PaymentDate),
                ("amount", Column::Amount),
            ],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "费用").await?;
        Ok(page.map(|m| m.into_fee()))
    }

    /// 更新费用
    pub async fn update_fee_impl(&self, id: i64, update: UpdateFeeRequest) -> Result<Option<Fee>> {
        if self.get_fee_by_id_impl(id).await?.is_none() {
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
        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date);
        }
        if let Some(is_paid) = update.is_paid {
            model.is_paid = Set(is_paid);
        }
        if let Some(payment_date) = update.payment_date {
            model.payment_date = Set(Some(payment_date));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新费用失败"))?;

        self.get_fee_by_id_impl(id).await
    }

    /// 删除费用
    pub async fn delete_fee_impl(&self, id: i64) -> Result<bool> {
        let result = Fees::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除费用失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
