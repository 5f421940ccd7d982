pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在插件模块里调用一次，进程启动时通过 ctor 自动注册到全局注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$type>::new().map_err(|e| {
                            $crate::errors::ConfSysError::cache_connection(e.to_string())
                        })?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
