use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 性别
    Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub registration_no: String,
    /// 关联的登录账号
    pub user_id: Option<i64>,
    pub full_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub program_id: i64,
    pub enrollment_year: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 截至 `today` 的周岁
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let had_birthday = (today.month(), today.day()) >= (self.dob.month(), self.dob.day());
        today.year() - self.dob.year() - if had_birthday { 0 } else { 1 }
    }
}

// 学生响应（附带年龄）
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    #[serde(flatten)]
    pub student: Student,
    pub age: i32,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let age = student.age_on(chrono::Utc::now().date_naive());
        Self { student, age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_born(dob: NaiveDate) -> Student {
        Student {
            id: 1,
            registration_no: "REG-001".to_string(),
            user_id: None,
            full_name: "Ali Khan".to_string(),
            gender: Gender::Male,
            dob,
            email: "ali@example.com".to_string(),
            phone: "03001234567".to_string(),
            address: "Lahore".to_string(),
            program_id: 1,
            enrollment_year: 2024,
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_age_counts_birthday() {
        let student = student_born(NaiveDate::from_ymd_opt(2004, 6, 15).unwrap());
        assert_eq!(
            student.age_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()),
            19
        );
        assert_eq!(
            student.age_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
            20
        );
    }
}
