use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    PaginatedResponse, RowScope,
    admissions::{
        entities::Admission,
        requests::{AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest},
    },
    attendance::{
        entities::Attendance,
        requests::{AttendanceListParams, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
    },
    dashboard::{DashboardCounts, DateWindow},
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest},
    },
    designations::{
        entities::Designation,
        requests::{CreateDesignationRequest, DesignationListParams, UpdateDesignationRequest},
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListParams, UpdateEnrollmentRequest},
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, ExamListParams, UpdateExamRequest},
    },
    fees::{
        entities::Fee,
        requests::{CreateFeeRequest, FeeListParams, UpdateFeeRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest},
    },
    notifications::{
        entities::{NewNotification, Notification},
        requests::{NotificationListParams, UpdateNotificationRequest},
    },
    programs::{
        entities::Program,
        requests::{CreateProgramRequest, ProgramListParams, UpdateProgramRequest},
    },
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 可做存在性检查的记录类型（外键校验用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Department,
    Designation,
    Program,
    Course,
    Student,
    Staff,
    Exam,
}

/// 带唯一约束的列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    UserUsername,
    UserEmail,
    DepartmentName,
    DepartmentCode,
    ProgramNumber,
    ProgramCode,
    CourseCode,
    StudentRegistrationNo,
    StudentEmail,
    StudentPhone,
    StudentUser,
    StaffEmail,
    StaffPhone,
    StaffUser,
    AdmissionStudent,
}

impl UniqueField {
    /// 请求体中对应的字段名
    pub fn field_name(&self) -> &'static str {
        match self {
            UniqueField::UserUsername => "username",
            UniqueField::UserEmail | UniqueField::StudentEmail | UniqueField::StaffEmail => "email",
            UniqueField::DepartmentName => "name",
            UniqueField::DepartmentCode | UniqueField::ProgramCode | UniqueField::CourseCode => {
                "code"
            }
            UniqueField::ProgramNumber => "program_number",
            UniqueField::StudentRegistrationNo => "registration_no",
            UniqueField::StudentPhone | UniqueField::StaffPhone => "phone",
            UniqueField::StudentUser | UniqueField::StaffUser => "user_id",
            UniqueField::AdmissionStudent => "student_id",
        }
    }
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已是哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(
        &self,
        params: UserListParams,
    ) -> Result<PaginatedResponse<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 令牌黑名单
    async fn blacklist_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()>;
    async fn is_token_blacklisted(&self, jti: &str) -> Result<bool>;
    // 清理已过期的黑名单记录
    async fn purge_expired_tokens(&self, now: i64) -> Result<u64>;

    /// 校验辅助
    async fn record_exists(&self, kind: RecordKind, id: i64) -> Result<bool>;
    // 唯一值是否已被其他记录占用
    async fn unique_value_taken(
        &self,
        field: UniqueField,
        value: sea_orm::Value,
        exclude_id: Option<i64>,
    ) -> Result<bool>;
    async fn enrollment_exists(
        &self,
        student_id: i64,
        course_id: i64,
        semester: i32,
        year: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool>;
    async fn attendance_exists(
        &self,
        student_id: i64,
        course_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool>;

    /// 院系
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        params: DepartmentListParams,
    ) -> Result<PaginatedResponse<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 职务
    async fn create_designation(&self, req: CreateDesignationRequest) -> Result<Designation>;
    async fn get_designation_by_id(&self, id: i64) -> Result<Option<Designation>>;
    async fn list_designations_with_pagination(
        &self,
        params: DesignationListParams,
    ) -> Result<PaginatedResponse<Designation>>;
    async fn update_designation(
        &self,
        id: i64,
        update: UpdateDesignationRequest,
    ) -> Result<Option<Designation>>;
    async fn delete_designation(&self, id: i64) -> Result<bool>;

    /// 专业
    async fn create_program(&self, req: CreateProgramRequest) -> Result<Program>;
    async fn get_program_by_id(&self, id: i64) -> Result<Option<Program>>;
    async fn list_programs_with_pagination(
        &self,
        params: ProgramListParams,
    ) -> Result<PaginatedResponse<Program>>;
    async fn update_program(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<Program>>;
    async fn delete_program(&self, id: i64) -> Result<bool>;

    /// 课程
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        params: CourseListParams,
    ) -> Result<PaginatedResponse<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 批量创建课程（单事务）
    async fn bulk_create_courses(&self, items: Vec<CreateCourseRequest>) -> Result<Vec<Course>>;
    // 批量更新课程（单事务）
    async fn bulk_update_courses(
        &self,
        items: Vec<(i64, UpdateCourseRequest)>,
    ) -> Result<Vec<Course>>;

    /// 学生
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过关联的登录账号获取学生档案
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        params: StudentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Student>>;
    // 某专业下全部学生的 ID
    async fn list_student_ids_by_program(&self, program_id: i64) -> Result<Vec<i64>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn bulk_create_students(
        &self,
        items: Vec<CreateStudentRequest>,
    ) -> Result<Vec<Student>>;
    async fn bulk_update_students(
        &self,
        items: Vec<(i64, UpdateStudentRequest)>,
    ) -> Result<Vec<Student>>;

    /// 教职工
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff>;
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>>;
    async fn list_staff_with_pagination(
        &self,
        params: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>>;
    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>>;
    async fn delete_staff(&self, id: i64) -> Result<bool>;

    /// 录取
    async fn create_admission(&self, req: CreateAdmissionRequest) -> Result<Admission>;
    async fn get_admission_by_id(&self, id: i64) -> Result<Option<Admission>>;
    async fn list_admissions_with_pagination(
        &self,
        params: AdmissionListParams,
    ) -> Result<PaginatedResponse<Admission>>;
    async fn update_admission(
        &self,
        id: i64,
        update: UpdateAdmissionRequest,
    ) -> Result<Option<Admission>>;
    async fn delete_admission(&self, id: i64) -> Result<bool>;

    /// 选课
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        params: EnrollmentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Enrollment>>;
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 考勤
    async fn create_attendance(&self, req: CreateAttendanceRequest) -> Result<Attendance>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>>;
    async fn list_attendance_with_pagination(
        &self,
        params: AttendanceListParams,
    ) -> Result<PaginatedResponse<Attendance>>;
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 考试
    async fn create_exam(&self, req: CreateExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams_with_pagination(
        &self,
        params: ExamListParams,
    ) -> Result<PaginatedResponse<Exam>>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 成绩
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn list_grades_with_pagination(
        &self,
        params: GradeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Grade>>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 费用
    async fn create_fee(&self, req: CreateFeeRequest) -> Result<Fee>;
    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>>;
    async fn list_fees_with_pagination(
        &self,
        params: FeeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Fee>>;
    async fn update_fee(&self, id: i64, update: UpdateFeeRequest) -> Result<Option<Fee>>;
    async fn delete_fee(&self, id: i64) -> Result<bool>;

    /// 通知
    async fn create_notification(&self, notification: NewNotification) -> Result<Notification>;
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    async fn list_notifications_with_pagination(
        &self,
        params: NotificationListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Notification>>;
    async fn update_notification(
        &self,
        id: i64,
        update: UpdateNotificationRequest,
    ) -> Result<Option<Notification>>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;
    // 把学生某类未读通知标记为已读并自动处理，返回影响行数
    async fn resolve_unread_notifications(&self, student_id: i64, notif_type: &str)
    -> Result<u64>;

    /// 仪表盘
    async fn dashboard_counts(&self, window: Option<DateWindow>) -> Result<DashboardCounts>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
