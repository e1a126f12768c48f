use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub credit_hours: f64,
    pub semester: i32,
    pub program_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 形如 `CS101 (3.0 Cr)` 的学分说明
    pub fn credit_info(&self) -> String {
        format!("{} ({:.1} Cr)", self.code, self.credit_hours)
    }
}

// 课程响应（附带派生字段）
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    #[serde(flatten)]
    pub course: Course,
    pub credit_info: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let credit_info = course.credit_info();
        Self {
            course,
            credit_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_info_keeps_one_decimal() {
        let course = Course {
            id: 1,
            code: "CS101".to_string(),
            title: "Programming Fundamentals".to_string(),
            credit_hours: 3.0,
            semester: 1,
            program_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(course.credit_info(), "CS101 (3.0 Cr)");
        let json = serde_json::to_value(CourseResponse::from(course)).unwrap();
        assert_eq!(json["credit_info"], "CS101 (3.0 Cr)");
        assert_eq!(json["code"], "CS101");
    }
}
