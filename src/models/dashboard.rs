//! 仪表盘统计的时间窗口
//!
//! 窗口按 UTC 日期计算，`[start 00:00, end + 1 天 00:00)` 左闭右开。

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 自定义窗口允许的年份范围
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

// 仪表盘查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub filter: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// 闭区间日期窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// 起始时刻（UTC 秒）
    pub fn start_timestamp(&self) -> i64 {
        midnight_timestamp(self.start)
    }

    /// 结束时刻（不含），即 end 次日零点
    pub fn end_timestamp_exclusive(&self) -> i64 {
        match self.end.succ_opt() {
            Some(next) => midnight_timestamp(next),
            None => i64::MAX,
        }
    }
}

fn midnight_timestamp(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// 解析后的过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub filter_type: String,
    pub window: Option<DateWindow>,
}

impl DashboardQuery {
    /// 按 `today` 计算窗口；不合法的组合返回错误说明
    pub fn resolve(&self, today: NaiveDate) -> Result<ResolvedFilter, String> {
        let filter_type = self
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or("all");

        let window = match filter_type {
            "all" => None,
            "today" => Some(DateWindow {
                start: today,
                end: today,
            }),
            "week" => Some(DateWindow {
                start: today - Duration::days(6),
                end: today,
            }),
            "month" => Some(DateWindow {
                start: today.with_day(1).unwrap_or(today),
                end: today,
            }),
            "custom" => {
                let (Some(start), Some(end)) = (self.start.as_deref(), self.end.as_deref()) else {
                    return Err("Custom filter requires both start and end dates.".to_string());
                };
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                if start > end {
                    return Err("Start date must be on or before end date.".to_string());
                }
                Some(DateWindow { start, end })
            }
            other => {
                return Err(format!(
                    "Unknown filter '{other}'. Use today, week, month, custom or all."
                ));
            }
        };

        Ok(ResolvedFilter {
            filter_type: filter_type.to_string(),
            window,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(format!("Date year must be between {MIN_YEAR} and {MAX_YEAR}."));
    }
    Ok(date)
}

// 过滤信息
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterInfo {
    pub filter_type: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<&ResolvedFilter> for FilterInfo {
    fn from(filter: &ResolvedFilter) -> Self {
        Self {
            filter_type: filter.filter_type.clone(),
            start_date: filter
                .window
                .map(|w| w.start.format(DATE_FORMAT).to_string()),
            end_date: filter.window.map(|w| w.end.format(DATE_FORMAT).to_string()),
        }
    }
}

/// 各类记录数量
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DashboardCounts {
    pub total_students: u64,
    pub total_staff: u64,
    pub total_admissions: u64,
    pub total_enrollments: u64,
    pub total_attendance: u64,
    pub total_exams: u64,
    pub total_grades: u64,
    pub total_fees: u64,
    pub total_notifications: u64,
}

// 仪表盘响应
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub counts: DashboardCounts,
    pub filter_info: FilterInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(filter: Option<&str>, start: Option<&str>, end: Option<&str>) -> DashboardQuery {
        DashboardQuery {
            filter: filter.map(str::to_string),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_filter_means_all() {
        let resolved = query(None, None, None).resolve(day(2025, 10, 18)).unwrap();
        assert_eq!(resolved.filter_type, "all");
        assert!(resolved.window.is_none());
        let info = FilterInfo::from(&resolved);
        assert_eq!(info.start_date, None);
        assert_eq!(info.end_date, None);
    }

    #[test]
    fn test_named_windows() {
        let today = day(2025, 10, 18);
        let w = query(Some("today"), None, None).resolve(today).unwrap().window.unwrap();
        assert_eq!((w.start, w.end), (today, today));

        let w = query(Some("week"), None, None).resolve(today).unwrap().window.unwrap();
        assert_eq!((w.start, w.end), (day(2025, 10, 12), today));

        let w = query(Some("month"), None, None).resolve(today).unwrap().window.unwrap();
        assert_eq!((w.start, w.end), (day(2025, 10, 1), today));
    }

    #[test]
    fn test_today_filter_info_dates_match() {
        let today = day(2025, 10, 18);
        let resolved = query(Some("today"), None, None).resolve(today).unwrap();
        let info = FilterInfo::from(&resolved);
        assert_eq!(info.start_date.as_deref(), Some("2025-10-18"));
        assert_eq!(info.start_date, info.end_date);
    }

    #[test]
    fn test_custom_window_is_inclusive() {
        let resolved = query(Some("custom"), Some("2025-01-01"), Some("2025-01-31"))
            .resolve(day(2025, 10, 18))
            .unwrap();
        let w = resolved.window.unwrap();
        assert_eq!(w.start_timestamp(), 1_735_689_600);
        assert_eq!(w.end_timestamp_exclusive(), 1_738_368_000);
    }

    #[test]
    fn test_custom_rejections() {
        let today = day(2025, 10, 18);
        assert!(query(Some("custom"), Some("2025-02-01"), Some("2025-01-01")).resolve(today).is_err());
        assert!(query(Some("custom"), Some("2025-02-01"), None).resolve(today).is_err());
        assert!(query(Some("custom"), Some("01/02/2025"), Some("2025-03-01")).resolve(today).is_err());
        assert!(query(Some("yearly"), None, None).resolve(today).is_err());
    }

    #[test]
    fn test_out_of_range_years_rejected() {
        let today = day(2025, 10, 18);
        assert!(
            query(Some("custom"), Some("2024-01-01"), Some("+262142-12-31"))
                .resolve(today)
                .is_err()
        );
        assert!(
            query(Some("custom"), Some("0000-01-01"), Some("2024-01-01"))
                .resolve(today)
                .is_err()
        );
        assert!(
            query(Some("custom"), Some("9999-12-01"), Some("9999-12-31"))
                .resolve(today)
                .is_ok()
        );
    }

    #[test]
    fn test_window_end_at_max_date_does_not_overflow() {
        let w = DateWindow {
            start: NaiveDate::MAX,
            end: NaiveDate::MAX,
        };
        assert_eq!(w.end_timestamp_exclusive(), i64::MAX);
        assert!(w.start_timestamp() < w.end_timestamp_exclusive());
    }

    #[test]
    fn test_same_day_custom_allowed() {
        let resolved = query(Some("custom"), Some("2025-03-05"), Some("2025-03-05"))
            .resolve(day(2025, 10, 18))
            .unwrap();
        let w = resolved.window.unwrap();
        assert_eq!(w.end_timestamp_exclusive() - w.start_timestamp(), 86_400);
    }
}
