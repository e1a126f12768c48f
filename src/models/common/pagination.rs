use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_page_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page_size: i64,
}

impl PaginationQuery {
    /// 归一化为 (页码, 每页数量)，页码从 1 开始
    pub fn normalized(&self) -> (u64, u64) {
        let max_size = AppConfig::get().pagination.max_page_size.max(1);
        let size = self.page_size.clamp(1, max_size);
        // 偏移量 (page - 1) * size 不能超出 i64
        let page = self.page.clamp(1, i64::MAX / size);
        (page as u64, size as u64)
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> PaginatedResponse<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    AppConfig::get().pagination.default_page_size
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
    }

    #[test]
    fn test_string_numbers_accepted() {
        let q: PaginationQuery =
            serde_json::from_str(r#"{"page":"3","page_size":"25"}"#).unwrap();
        assert_eq!(q.normalized(), (3, 25));
    }

    #[test]
    fn test_normalized_clamps() {
        let q = PaginationQuery {
            page: -4,
            page_size: 1000,
        };
        assert_eq!(q.normalized(), (1, 100));
    }

    #[test]
    fn test_huge_page_keeps_offset_in_range() {
        let q = PaginationQuery {
            page: i64::MAX,
            page_size: 25,
        };
        let (page, size) = q.normalized();
        assert_eq!(size, 25);
        assert!((page - 1).checked_mul(size).is_some_and(|o| o <= i64::MAX as u64));
    }
}
