//! 外键存在性与唯一性检查

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{
    admissions, attendance, courses, departments, enrollments, programs, staff, students, users,
};
use crate::errors::{EduSystemError, Result};
use crate::storage::{RecordKind, UniqueField};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Value};

impl SeaOrmStorage {
    /// 记录是否存在
    pub async fn record_exists_impl(&self, kind: RecordKind, id: i64) -> Result<bool> {
        let count = match kind {
            RecordKind::User => Users::find_by_id(id).count(&self.db).await,
            RecordKind::Department => Departments::find_by_id(id).count(&self.db).await,
            RecordKind::Designation => Designations::find_by_id(id).count(&self.db).await,
            RecordKind::Program => Programs::find_by_id(id).count(&self.db).await,
            RecordKind::Course => Courses::find_by_id(id).count(&self.db).await,
            RecordKind::Student => Students::find_by_id(id).count(&self.db).await,
            RecordKind::Staff => Staff::find_by_id(id).count(&self.db).await,
            RecordKind::Exam => Exams::find_by_id(id).count(&self.db).await,
        }
        .map_err(|e| EduSystemError::database_operation(format!("查询 {kind:?} 失败: {e}")))?;

        Ok(count > 0)
    }

    /// 唯一列上是否已有相同值（`exclude_id` 为正在更新的记录）
    pub async fn unique_value_taken_impl(
        &self,
        field: UniqueField,
        value: Value,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        use UniqueField::*;

        let ex = exclude_id;
        match field {
            UserUsername => {
                self.value_taken::<Users>(users::Column::Username, users::Column::Id, value, ex)
                    .await
            }
            UserEmail => {
                self.value_taken::<Users>(users::Column::Email, users::Column::Id, value, ex)
                    .await
            }
            DepartmentName => {
                self.value_taken::<Departments>(
                    departments::Column::Name,
                    departments::Column::Id,
                    value,
                    ex,
                )
                .await
            }
            DepartmentCode => {
                self.value_taken::<Departments>(
                    departments::Column::Code,
                    departments::Column::Id,
                    value,
                    ex,
                )
                .await
            }
            ProgramNumber => {
                self.value_taken::<Programs>(
                    programs::Column::ProgramNumber,
                    programs::Column::Id,
                    value,
                    ex,
                )
                .await
            }
            ProgramCode => {
                self.value_taken::<Programs>(programs::Column::Code, programs::Column::Id, value, ex)
                    .await
            }
            CourseCode => {
                self.value_taken::<Courses>(courses::Column::Code, courses::Column::Id, value, ex)
                    .await
            }
            StudentRegistrationNo => {
                self.value_taken::<Students>(
                    students::Column::RegistrationNo,
                    students::Column::Id,
                    value,
                    ex,
                )
                .await
            }
            StudentEmail => {
                self.value_taken::<Students>(students::Column::Email, students::Column::Id, value, ex)
                    .await
            }
            StudentPhone => {
                self.value_taken::<Students>(students::Column::Phone, students::Column::Id, value, ex)
                    .await
            }
            StudentUser => {
                self.value_taken::<Students>(
                    students::Column::UserId,
                    students::Column::Id,
                    value,
                    ex,
                )
                .await
            }
            StaffEmail => {
                self.value_taken::<Staff>(staff::Column::Email, staff::Column::Id, value, ex)
                    .await
            }
            StaffPhone => {
                self.value_taken::<Staff>(staff::Column::Phone, staff::Column::Id, value, ex)
                    .await
            }
            StaffUser => {
                self.value_taken::<Staff>(staff::Column::UserId, staff::Column::Id, value, ex)
                    .await
            }
            AdmissionStudent => {
                self.value_taken::<Admissions>(
                    admissions::Column::StudentId,
                    admissions::Column::Id,
                    value,
                    ex,
                )
                .await
            }
        }
    }

    async fn value_taken<E>(
        &self,
        column: E::Column,
        id_column: E::Column,
        value: Value,
        exclude_id: Option<i64>,
    ) -> Result<bool>
    where
        E: EntityTrait,
        E::Model: Send + Sync + 'static,
    {
        let mut select = E::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            select = select.filter(id_column.ne(id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("唯一性检查失败: {e}")))?;

        Ok(count > 0)
    }

    /// 同一学生、课程、学期、学年是否已有选课
    pub async fn enrollment_exists_impl(
        &self,
        student_id: i64,
        course_id: i64,
        semester: i32,
        year: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::CourseId.eq(course_id))
            .filter(enrollments::Column::Semester.eq(semester))
            .filter(enrollments::Column::Year.eq(year));
        if let Some(id) = exclude_id {
            select = select.filter(enrollments::Column::Id.ne(id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询选课失败: {e}")))?;

        Ok(count > 0)
    }

    /// 同一学生、课程、日期是否已有考勤
    pub async fn attendance_exists_impl(
        &self,
        student_id: i64,
        course_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Attendance::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .filter(attendance::Column::CourseId.eq(course_id))
            .filter(attendance::Column::Date.eq(date));
        if let Some(id) = exclude_id {
            select = select.filter(attendance::Column::Id.ne(id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(count > 0)
    }
}
