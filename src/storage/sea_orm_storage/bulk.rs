//! 批量写入
//!
//! 调用方先完成全部校验；这里只负责在单个事务里落库，任何一条失败整体回滚。

use super::SeaOrmStorage;
use super::courses::{course_update_model, new_course_model};
use super::students::{new_student_model, student_update_model};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, TransactionTrait};
use tracing::debug;

impl SeaOrmStorage {
    async fn begin_bulk(&self) -> Result<DatabaseTransaction> {
        self.db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))
    }

    async fn commit_bulk(txn: DatabaseTransaction, count: usize) -> Result<()> {
        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;
        debug!("批量写入已提交，共 {} 条", count);
        Ok(())
    }

    /// 批量创建学生
    pub async fn bulk_create_students_impl(
        &self,
        items: Vec<CreateStudentRequest>,
    ) -> Result<Vec<Student>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.begin_bulk().await?;

        let mut created = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let model = new_student_model(item, now).insert(&txn).await.map_err(|e| {
                EduSystemError::database_operation(format!("批量创建学生失败 (第 {index} 条): {e}"))
            })?;
            created.push(model.into_student());
        }

        Self::commit_bulk(txn, created.len()).await?;
        Ok(created)
    }

    /// 批量更新学生
    pub async fn bulk_update_students_impl(
        &self,
        items: Vec<(i64, UpdateStudentRequest)>,
    ) -> Result<Vec<Student>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.begin_bulk().await?;

        let mut updated = Vec::with_capacity(items.len());
        for (id, update) in items {
            let model = student_update_model(id, update, now)
                .update(&txn)
                .await
                .map_err(|e| {
                    EduSystemError::database_operation(format!("批量更新学生失败 (id {id}): {e}"))
                })?;
            updated.push(model.into_student());
        }

        Self::commit_bulk(txn, updated.len()).await?;
        Ok(updated)
    }

    /// 批量创建课程
    pub async fn bulk_create_courses_impl(
        &self,
        items: Vec<CreateCourseRequest>,
    ) -> Result<Vec<Course>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.begin_bulk().await?;

        let mut created = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let model = new_course_model(item, now).insert(&txn).await.map_err(|e| {
                EduSystemError::database_operation(format!("批量创建课程失败 (第 {index} 条): {e}"))
            })?;
            created.push(model.into_course());
        }

        Self::commit_bulk(txn, created.len()).await?;
        Ok(created)
    }

    /// 批量更新课程
    pub async fn bulk_update_courses_impl(
        &self,
        items: Vec<(i64, UpdateCourseRequest)>,
    ) -> Result<Vec<Course>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.begin_bulk().await?;

        let mut updated = Vec::with_capacity(items.len());
        for (id, update) in items {
            let model = course_update_model(id, update, now)
                .update(&txn)
                .await
                .map_err(|e| {
                    EduSystemError::database_operation(format!("批量更新课程失败 (id {id}): {e}"))
                })?;
            updated.push(model.into_course());
        }

        Self::commit_bulk(txn, updated.len()).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        departments::requests::CreateDepartmentRequest,
        programs::{entities::ProgramType, requests::CreateProgramRequest},
        students::entities::Gender,
    };
    use chrono::NaiveDate;

    async fn storage_with_program() -> (SeaOrmStorage, i64) {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let department = storage
            .create_department_impl(CreateDepartmentRequest {
                name: "Computing".to_string(),
                code: "CS".to_string(),
                description: None,
                hod_id: None,
            })
            .await
            .unwrap();
        let program = storage
            .create_program_impl(CreateProgramRequest {
                program_number: 1,
                name: "Software Engineering".to_string(),
                code: "BSSE".to_string(),
                program_type: ProgramType::Bachelor,
                department_id: department.id,
                duration_years: 4,
                description: None,
            })
            .await
            .unwrap();
        (storage, program.id)
    }

    fn student(n: u32, program_id: i64) -> CreateStudentRequest {
        CreateStudentRequest {
            registration_no: format!("REG-{n}"),
            user_id: None,
            full_name: format!("Student {n}"),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(2004, 5, 1).unwrap(),
            email: format!("s{n}@school.edu"),
            phone: format!("0300{n:07}"),
            address: "Main road".to_string(),
            program_id,
            enrollment_year: 2024,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_bulk_create_returns_in_input_order() {
        let (storage, program_id) = storage_with_program().await;
        let created = storage
            .bulk_create_students_impl(vec![student(1, program_id), student(2, program_id)])
            .await
            .unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].registration_no, "REG-1");
        assert_eq!(created[1].registration_no, "REG-2");
    }

    #[tokio::test]
    async fn test_failed_bulk_create_rolls_back() {
        let (storage, program_id) = storage_with_program().await;
        // 第二条与第一条 email 冲突，触发唯一约束
        let mut dup = student(2, program_id);
        dup.email = "s1@school.edu".to_string();

        let result = storage
            .bulk_create_students_impl(vec![student(1, program_id), dup])
            .await;
        assert!(result.is_err());
        assert!(storage.get_student_by_id_impl(1).await.unwrap().is_none());
        assert_eq!(
            storage.dashboard_counts_impl(None).await.unwrap().total_students,
            0
        );
    }

    #[tokio::test]
    async fn test_failed_bulk_update_leaves_rows_untouched() {
        let (storage, program_id) = storage_with_program().await;
        let created = storage
            .bulk_create_students_impl(vec![student(1, program_id), student(2, program_id)])
            .await
            .unwrap();

        let rename = UpdateStudentRequest {
            full_name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let steal_phone = UpdateStudentRequest {
            phone: Some(created[0].phone.clone()),
            ..Default::default()
        };
        let result = storage
            .bulk_update_students_impl(vec![(created[0].id, rename), (created[1].id, steal_phone)])
            .await;
        assert!(result.is_err());

        let first = storage
            .get_student_by_id_impl(created[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.full_name, "Student 1");
    }
}
