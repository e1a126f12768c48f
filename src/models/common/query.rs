//! 列表查询通用参数
//!
//! 查询字符串里的值都是字符串，`#[serde(flatten)]` 之后 serde 不再做数字解析，
//! 所以数字和布尔过滤字段需要这里的宽松反序列化函数。

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use sea_orm::Order;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::PaginationQuery;

// 列表查询参数：分页 + 搜索 + 排序
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ListQuery {
    /// 去掉首尾空白后的搜索词，空串视为未提供
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// 解析 `ordering=name,-created_at` 为 (字段, 方向) 列表
    pub fn ordering_fields(&self) -> Vec<(&str, Order)> {
        parse_ordering(self.ordering.as_deref())
    }
}

pub fn parse_ordering(raw: Option<&str>) -> Vec<(&str, Order)> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|field| match field.strip_prefix('-') {
                Some(name) => (name, Order::Desc),
                None => (field, Order::Asc),
            })
            .filter(|(name, _)| !name.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// 可选数字过滤字段，接受数字或数字字符串，空串视为未提供
pub fn deserialize_opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    struct NumberVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for NumberVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = Option<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string containing a number")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            self.visit_str(&value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            self.visit_str(&value.to_string())
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse::<T>()
                .map(Some)
                .map_err(|e| E::custom(format!("invalid number '{value}': {e}")))
        }
    }

    deserializer.deserialize_any(NumberVisitor(PhantomData))
}

/// 可选布尔过滤字段，接受 true/false/1/0（大小写不敏感）
pub fn deserialize_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = Option<bool>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or one of true/false/1/0")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            match value.trim().to_ascii_lowercase().as_str() {
                "" => Ok(None),
                "true" | "1" => Ok(Some(true)),
                "false" | "0" => Ok(Some(false)),
                other => Err(E::custom(format!("invalid boolean '{other}'"))),
            }
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(flatten)]
        list: ListQuery,
        #[serde(default, deserialize_with = "deserialize_opt_number")]
        program: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_opt_bool")]
        is_active: Option<bool>,
    }

    fn parse(qs: &str) -> Result<Params, actix_web::error::QueryPayloadError> {
        actix_web::web::Query::<Params>::from_query(qs).map(|q| q.into_inner())
    }

    #[test]
    fn test_flattened_query_string() {
        let params = parse(
            "page=2&page_size=5&search=ali&ordering=-id&program=7&is_active=True",
        )
        .unwrap();
        assert_eq!(params.list.pagination.page, 2);
        assert_eq!(params.list.pagination.page_size, 5);
        assert_eq!(params.list.search_term(), Some("ali"));
        assert_eq!(params.program, Some(7));
        assert_eq!(params.is_active, Some(true));
    }

    #[test]
    fn test_empty_filters_are_ignored() {
        let params = parse("program=&is_active=&search=%20").unwrap();
        assert_eq!(params.program, None);
        assert_eq!(params.is_active, None);
        assert_eq!(params.list.search_term(), None);
    }

    #[test]
    fn test_bad_number_rejected() {
        assert!(parse("program=abc").is_err());
    }

    #[test]
    fn test_parse_ordering() {
        let fields = parse_ordering(Some("full_name, -enrollment_year,,-"));
        assert_eq!(
            fields,
            vec![("full_name", Order::Asc), ("enrollment_year", Order::Desc)]
        );
        assert!(parse_ordering(None).is_empty());
    }
}
