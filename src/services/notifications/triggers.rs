//! 写操作成功后生成的通知
//!
//! 通知是附带效果：失败只记日志，不影响原请求。

use chrono::NaiveDate;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::{EduSystemError, Result};
use crate::models::admissions::entities::Admission;
use crate::models::attendance::entities::Attendance;
use crate::models::enrollments::entities::Enrollment;
use crate::models::exams::entities::Exam;
use crate::models::fees::entities::Fee;
use crate::models::grades::entities::Grade;
use crate::models::notifications::entities::NewNotification;
use crate::models::staff::entities::Staff;
use crate::storage::Storage;

const FEE: &str = "Fee";

async fn fire<F>(event: &str, action: F)
where
    F: Future<Output = Result<()>>,
{
    match action.await {
        Ok(()) => debug!("Notification trigger '{}' done", event),
        Err(e) => warn!("Notification trigger '{}' failed: {}", event, e),
    }
}

fn admission_notice(admission: &Admission, program_name: &str, created: bool) -> NewNotification {
    let (notif_type, title, verb) = if created {
        ("Admission", "Admission Created", "created")
    } else {
        ("Admission Update", "Admission Updated", "updated")
    };
    NewNotification::for_student(
        admission.student_id,
        notif_type,
        title,
        format!(
            "Your admission for {program_name} has been {verb} with status {}.",
            admission.status
        ),
    )
}

fn fee_notice(fee: &Fee, created: bool, today: NaiveDate) -> Option<NewNotification> {
    let amount = format!("{:.2}", fee.amount);
    if created && !fee.is_paid {
        Some(NewNotification::for_student(
            fee.student_id,
            FEE,
            "New Fee Assigned",
            format!("A new fee of {amount} is due on {}.", fee.due_date),
        ))
    } else if !created && fee.is_overdue_on(today) {
        Some(NewNotification::for_student(
            fee.student_id,
            FEE,
            "Fee Overdue",
            format!("Your fee of {amount} is overdue!"),
        ))
    } else if !created && fee.is_paid {
        Some(
            NewNotification::for_student(
                fee.student_id,
                FEE,
                "Fee Paid",
                format!("Your fee of {amount} has been paid."),
            )
            .resolved(),
        )
    } else {
        None
    }
}

fn staff_notice(staff: &Staff, department_name: Option<&str>, created: bool) -> NewNotification {
    if created {
        NewNotification::for_staff(
            staff.id,
            "Staff",
            "Welcome to Staff",
            format!(
                "Welcome {} to {}.",
                staff.full_name,
                department_name.unwrap_or("the institution")
            ),
        )
    } else {
        NewNotification::for_staff(
            staff.id,
            "Staff",
            "Staff Record Updated",
            "Your staff record has been updated.".to_string(),
        )
    }
}

pub(crate) async fn admission_saved(storage: &Arc<dyn Storage>, admission: &Admission, created: bool) {
    fire("admission", async {
        let program_name = storage
            .get_program_by_id(admission.program_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_default();
        storage
            .create_notification(admission_notice(admission, &program_name, created))
            .await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn enrollment_created(storage: &Arc<dyn Storage>, enrollment: &Enrollment) {
    fire("enrollment", async {
        let Some(course) = storage.get_course_by_id(enrollment.course_id).await? else {
            return Ok(());
        };
        storage
            .create_notification(NewNotification::for_student(
                enrollment.student_id,
                "Enrollment",
                "Course Enrollment Successful",
                format!(
                    "You have been enrolled in {} for Semester {} ({}).",
                    course.code, enrollment.semester, enrollment.year
                ),
            ))
            .await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn fee_saved(storage: &Arc<dyn Storage>, fee: &Fee, created: bool, today: NaiveDate) {
    fire("fee", async {
        let Some(notice) = fee_notice(fee, created, today) else {
            return Ok(());
        };
        if notice.auto_resolved {
            // 缴费后关闭之前未读的费用提醒
            let resolved = storage
                .resolve_unread_notifications(fee.student_id, FEE)
                .await?;
            debug!("Resolved {} fee notifications for student {}", resolved, fee.student_id);
        }
        storage.create_notification(notice).await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn exam_created(storage: &Arc<dyn Storage>, exam: &Exam) {
    fire("exam", async {
        let Some(course) = storage.get_course_by_id(exam.course_id).await? else {
            return Ok(());
        };
        let message = format!(
            "The {} exam for {} is scheduled on {}.",
            exam.exam_type, course.title, exam.date
        );
        for student_id in storage.list_student_ids_by_program(course.program_id).await? {
            storage
                .create_notification(NewNotification::for_student(
                    student_id,
                    "Exam",
                    "New Exam Scheduled",
                    message.clone(),
                ))
                .await?;
        }
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn attendance_created(storage: &Arc<dyn Storage>, attendance: &Attendance) {
    fire("attendance", async {
        let Some(course) = storage.get_course_by_id(attendance.course_id).await? else {
            return Ok(());
        };
        storage
            .create_notification(NewNotification::for_student(
                attendance.student_id,
                "Attendance",
                "Attendance Recorded",
                format!(
                    "Your attendance for {} on {} has been marked as {}.",
                    course.code, attendance.date, attendance.status
                ),
            ))
            .await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn grade_created(storage: &Arc<dyn Storage>, grade: &Grade) {
    fire("grade", async {
        let Some(exam) = storage.get_exam_by_id(grade.exam_id).await? else {
            return Ok(());
        };
        let course_title = storage
            .get_course_by_id(exam.course_id)
            .await?
            .map(|c| c.title)
            .unwrap_or_default();
        storage
            .create_notification(NewNotification::for_student(
                grade.student_id,
                "Grade",
                &format!("{} Exam Results", exam.exam_type),
                format!(
                    "You scored {:.2} in {}.",
                    grade.obtained_marks, course_title
                ),
            ))
            .await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

pub(crate) async fn staff_saved(storage: &Arc<dyn Storage>, staff: &Staff, created: bool) {
    fire("staff", async {
        let department_name = match staff.department_id {
            Some(id) => storage.get_department_by_id(id).await?.map(|d| d.name),
            None => None,
        };
        storage
            .create_notification(staff_notice(staff, department_name.as_deref(), created))
            .await?;
        Ok::<_, EduSystemError>(())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::admissions::entities::AdmissionStatus;
    use crate::models::staff::entities::StaffType;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fee(is_paid: bool, due_date: NaiveDate) -> Fee {
        Fee {
            id: 1,
            student_id: 7,
            amount: 1500.0,
            due_date,
            is_paid,
            payment_date: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_fee_notices() {
        let today = day(2025, 10, 18);

        let created = fee_notice(&fee(false, day(2025, 11, 1)), true, today).unwrap();
        assert_eq!(created.title, "New Fee Assigned");
        assert_eq!(created.message, "A new fee of 1500.00 is due on 2025-11-01.");
        assert_eq!(created.recipient_student_id, Some(7));
        assert!(!created.read);

        let overdue = fee_notice(&fee(false, day(2025, 10, 1)), false, today).unwrap();
        assert_eq!(overdue.title, "Fee Overdue");
        assert_eq!(overdue.message, "Your fee of 1500.00 is overdue!");

        let paid = fee_notice(&fee(true, day(2025, 10, 1)), false, today).unwrap();
        assert_eq!(paid.title, "Fee Paid");
        assert!(paid.read && paid.auto_resolved);

        // 未到期的更新以及新建即已缴的费用都不发通知
        assert!(fee_notice(&fee(false, day(2025, 11, 1)), false, today).is_none());
        assert!(fee_notice(&fee(true, day(2025, 11, 1)), true, today).is_none());
    }

    #[test]
    fn test_admission_notice_wording() {
        let admission = Admission {
            id: 1,
            student_id: 3,
            program_id: 2,
            admission_date: day(2025, 9, 1),
            status: AdmissionStatus::Approved,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let created = admission_notice(&admission, "Computer Science", true);
        assert_eq!(created.notif_type, "Admission");
        assert_eq!(
            created.message,
            "Your admission for Computer Science has been created with status Approved."
        );
        let updated = admission_notice(&admission, "Computer Science", false);
        assert_eq!(updated.notif_type, "Admission Update");
        assert_eq!(updated.title, "Admission Updated");
    }

    #[test]
    fn test_staff_notice_falls_back_to_institution() {
        let staff = Staff {
            id: 4,
            user_id: None,
            full_name: "Dr. Amina".to_string(),
            staff_type: StaffType::Teaching,
            designation_id: None,
            department_id: None,
            email: "amina@example.com".to_string(),
            phone: "0300".to_string(),
            date_joined: day(2025, 1, 1),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let notice = staff_notice(&staff, None, true);
        assert_eq!(notice.message, "Welcome Dr. Amina to the institution.");
        assert_eq!(notice.recipient_staff_id, Some(4));
        assert_eq!(
            staff_notice(&staff, Some("Physics"), true).message,
            "Welcome Dr. Amina to Physics."
        );
        assert_eq!(staff_notice(&staff, None, false).title, "Staff Record Updated");
    }
}
