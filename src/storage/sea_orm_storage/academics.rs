//! 选课、考勤、考试与成绩

use super::SeaOrmStorage;
use super::query::{apply_ordering, apply_scope, courses_titled, fetch_page, students_named};
use crate::entity::prelude::*;
use crate::entity::{attendance, enrollments, exams, grades};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse, RowScope,
    attendance::{
        entities::Attendance as AttendanceRecord,
        requests::{AttendanceListParams, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListParams, UpdateEnrollmentRequest},
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, ExamListParams, UpdateExamRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QuerySelect,
    QueryTrait, Set,
};

impl SeaOrmStorage {
    /// 创建选课，选课日期取当天
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let now = chrono::Utc::now();

        let model = EnrollmentActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            semester: Set(req.semester),
            year: Set(req.year),
            date_enrolled: Set(now.date_naive()),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建选课失败"))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询选课失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 分页列出选课
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        params: EnrollmentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Enrollment>> {
        use enrollments::Column;

        let mut select = apply_scope(Enrollments::find(), Column::StudentId, scope);

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::StudentId.in_subquery(students_named(term)))
                    .add(Column::CourseId.in_subquery(courses_titled(term))),
            );
        }

        if let Some(student_id) = params.student {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = params.course {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }
        if let Some(year) = params.year {
            select = select.filter(Column::Year.eq(year));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[
                ("id", Column::Id),
                ("year", Column::Year),
                ("semester", Column::Semester),
            ],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "选课").await?;
        Ok(page.map(|m| m.into_enrollment()))
    }

    /// 更新选课
    pub async fn update_enrollment_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        if self.get_enrollment_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = EnrollmentActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }
        if let Some(year) = update.year {
            model.year = Set(year);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新选课失败"))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 删除选课
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除选课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建考勤
    pub async fn create_attendance_impl(
        &self,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = AttendanceActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建考勤失败"))?;

        Ok(result.into_attendance())
    }

    /// 通过 ID 获取考勤
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let result = Attendance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 分页列出考勤
    pub async fn list_attendance_with_pagination_impl(
        &self,
        params: AttendanceListParams,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        use attendance::Column;

        let mut select = Attendance::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::StudentId.in_subquery(students_named(term)))
                    .add(Column::CourseId.in_subquery(courses_titled(term))),
            );
        }

        if let Some(student_id) = params.student {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = params.course {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(date) = params.date {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("date", Column::Date), ("student", Column::StudentId)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "考勤").await?;
        Ok(page.map(|m| m.into_attendance()))
    }

    /// 更新考勤
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        if self.get_attendance_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = AttendanceActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新考勤失败"))?;

        self.get_attendance_by_id_impl(id).await
    }

    /// 删除考勤
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = Attendance::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除考勤失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建考试
    pub async fn create_exam_impl(&self, req: CreateExamRequest) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let model = ExamActiveModel {
            course_id: Set(req.course_id),
            exam_type: Set(req.exam_type.to_string()),
            date: Set(req.date),
            total_marks: Set(req.total_marks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建考试失败"))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 分页列出考试
    pub async fn list_exams_with_pagination_impl(
        &self,
        params: ExamListParams,
    ) -> Result<PaginatedResponse<Exam>> {
        use exams::Column;

        let mut select = Exams::find();

        if let Some(term) = params.query.search_term() {
            select = select.filter(Column::CourseId.in_subquery(courses_titled(term)));
        }

        if let Some(course_id) = params.course {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(exam_type) = params.exam_type {
            select = select.filter(Column::ExamType.eq(exam_type.to_string()));
        }
        if let Some(date) = params.date {
            select = select.filter(Column::Date.eq(date));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("date", Column::Date)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "考试").await?;
        Ok(page.map(|m| m.into_exam()))
    }

    /// 更新考试
    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        if self.get_exam_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ExamActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(exam_type.to_string());
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(total_marks) = update.total_marks {
            model.total_marks = Set(total_marks);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新考试失败"))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = GradeActiveModel {
            student_id: Set(req.student_id),
            exam_id: Set(req.exam_id),
            obtained_marks: Set(req.obtained_marks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建成绩失败"))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 分页列出成绩
    pub async fn list_grades_with_pagination_impl(
        &self,
        params: GradeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Grade>> {
        use grades::Column;

        let mut select = apply_scope(Grades::find(), Column::StudentId, scope);

        // 按学生姓名或考试所属课程标题搜索
        if let Some(term) = params.query.search_term() {
            let exams_of_courses = Exams::find()
                .select_only()
                .column(exams::Column::Id)
                .filter(exams::Column::CourseId.in_subquery(courses_titled(term)))
                .into_query();
            select = select.filter(
                Condition::any()
                    .add(Column::StudentId.in_subquery(students_named(term)))
                    .add(Column::ExamId.in_subquery(exams_of_courses)),
            );
        }

        if let Some(student_id) = params.student {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(exam_id) = params.exam {
            select = select.filter(Column::ExamId.eq(exam_id));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("id", Column::Id)],
            &[(Column::Id, Order::Asc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "成绩").await?;
        Ok(page.map(|m| m.into_grade()))
    }

    /// 更新成绩
    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        if self.get_grade_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = GradeActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(exam_id) = update.exam_id {
            model.exam_id = Set(exam_id);
        }
        if let Some(obtained_marks) = update.obtained_marks {
            model.obtained_marks = Set(obtained_marks);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新成绩失败"))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
