//! 取值受限的字符串字段
//!
//! 数据库里以字符串保存，API 上以相同字符串收发。

/// 定义枚举型选项字段的宏
///
/// 自动生成：
/// - enum 定义及 `as_str()`
/// - Display / FromStr
/// - 以字符串形式收发的 Serialize / Deserialize
macro_rules! define_choices {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("\"{s}\" is not a valid choice.")),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<$name>().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_choices;

#[cfg(test)]
mod tests {
    define_choices! {
        /// 测试用
        Color {
            Red => "Red",
            DarkBlue => "Dark-Blue",
        }
    }

    #[test]
    fn test_round_trip_through_strings() {
        assert_eq!(Color::DarkBlue.to_string(), "Dark-Blue");
        assert_eq!("Red".parse::<Color>(), Ok(Color::Red));
        assert_eq!(
            "red".parse::<Color>(),
            Err("\"red\" is not a valid choice.".to_string())
        );
        assert_eq!(Color::ALL.len(), 2);
    }

    #[test]
    fn test_serde_uses_literal_values() {
        let json = serde_json::to_string(&Color::DarkBlue).unwrap();
        assert_eq!(json, "\"Dark-Blue\"");
        let err = serde_json::from_str::<Color>("\"Green\"").unwrap_err();
        assert!(err.to_string().contains("not a valid choice"));
    }
}
