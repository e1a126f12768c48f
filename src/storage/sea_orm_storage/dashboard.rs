//! 仪表盘计数

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{
    admissions, attendance, enrollments, exams, fees, grades, notifications, staff, students,
};
use crate::errors::{EduSystemError, Result};
use crate::models::dashboard::{DashboardCounts, DateWindow};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 各资源在窗口内创建的记录数；无窗口时为总数
    pub async fn dashboard_counts_impl(&self, window: Option<DateWindow>) -> Result<DashboardCounts> {
        Ok(DashboardCounts {
            total_students: self
                .count_created::<Students>(students::Column::CreatedAt, window)
                .await?,
            total_staff: self
                .count_created::<Staff>(staff::Column::CreatedAt, window)
                .await?,
            total_admissions: self
                .count_created::<Admissions>(admissions::Column::CreatedAt, window)
                .await?,
            total_enrollments: self
                .count_created::<Enrollments>(enrollments::Column::CreatedAt, window)
                .await?,
            total_attendance: self
                .count_created::<Attendance>(attendance::Column::CreatedAt, window)
                .await?,
            total_exams: self
                .count_created::<Exams>(exams::Column::CreatedAt, window)
                .await?,
            total_grades: self
                .count_created::<Grades>(grades::Column::CreatedAt, window)
                .await?,
            total_fees: self
                .count_created::<Fees>(fees::Column::CreatedAt, window)
                .await?,
            total_notifications: self
                .count_created::<Notifications>(notifications::Column::CreatedAt, window)
                .await?,
        })
    }

    async fn count_created<E>(&self, created_at: E::Column, window: Option<DateWindow>) -> Result<u64>
    where
        E: EntityTrait,
        E::Model: Send + Sync + 'static,
    {
        let mut select = E::find();
        if let Some(window) = window {
            // [start 00:00, end 次日 00:00)
            select = select
                .filter(created_at.gte(window.start_timestamp()))
                .filter(created_at.lt(window.end_timestamp_exclusive()));
        }

        select
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("统计记录数失败: {e}")))
    }
}
