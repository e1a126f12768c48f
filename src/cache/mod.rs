//! 对象缓存层
//!
//! 后端以插件形式注册，启动时按 `cache.type` 选择。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明缓存插件
///
/// 为后端类型生成 `register()`，把构造函数以 `$name` 注册进插件表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub fn register() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        match <$ty>::new() {
                            Ok(cache) => Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>),
                            Err(e) => Err($crate::errors::EduSystemError::cache_connection(e)),
                        }
                    })
                }),
            );
        }
    };
}

/// 注册内置缓存后端
pub fn register_builtin_plugins() {
    object_cache::moka::register();
    object_cache::redis::register();
}

/// 认证用户缓存键
pub fn user_cache_key(user_id: i64) -> String {
    format!("user:{user_id}")
}
