//! 单例作用域缓存

use dashmap::DashMap;
use di_abstractions::Instance;
use infrastructure_common::{DependencyError, TypeKey};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// 单例缓存
///
/// 每个类型键一个 [`OnceCell`] 槽位。并发调用时工厂对每个类型键最多成功执行一次；
/// 工厂失败时槽位保持为空，后续调用可以重试。
#[derive(Debug, Default)]
pub struct ScopeCache {
    slots: DashMap<TypeKey, Arc<OnceCell<Instance>>>,
}

impl ScopeCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取已缓存的实例
    pub fn get(&self, key: TypeKey) -> Option<Instance> {
        self.slots.get(&key).and_then(|slot| slot.get().cloned())
    }

    /// 获取缓存实例，不存在时调用工厂创建并缓存
    ///
    /// 工厂执行期间同一类型键的其它调用者会等待。两个线程分别构造互相依赖的单例时会互相等待，
    /// 同一线程内的重入由调用方的解析链在进入前拒绝。
    pub fn get_or_create<F>(&self, key: TypeKey, factory: F) -> Result<Instance, DependencyError>
    where
        F: FnOnce() -> Result<Instance, DependencyError>,
    {
        // 先释放分片锁再初始化，工厂内部会递归访问缓存
        let slot = self.slots.entry(key).or_insert_with(Default::default).value().clone();
        slot.get_or_try_init(|| {
            let instance = factory()?;
            debug!("缓存单例: {}", key);
            Ok(instance)
        })
        .cloned()
    }

    /// 是否已缓存
    pub fn contains(&self, key: TypeKey) -> bool {
        self.get(key).is_some()
    }

    /// 已缓存的实例数量
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.value().get().is_some()).count()
    }

    /// 是否没有任何已缓存实例
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    struct Service(usize);

    #[test]
    fn test_get_or_create_caches() {
        let cache = ScopeCache::new();
        let key = TypeKey::of::<Service>();
        assert!(cache.get(key).is_none());

        let first = cache.get_or_create(key, || Ok(Instance::new(Arc::new(Service(1))))).unwrap();
        let second = cache.get_or_create(key, || Ok(Instance::new(Arc::new(Service(2))))).unwrap();

        assert!(first.same_object(&second));
        assert_eq!(second.downcast::<Service>().unwrap().0, 1);
        assert!(cache.contains(key));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_factory_leaves_slot_empty() {
        let cache = ScopeCache::new();
        let key = TypeKey::of::<Service>();

        let result = cache.get_or_create(key, || Err(DependencyError::missing(key)));
        assert!(result.is_err());
        assert!(cache.is_empty());

        let retried = cache.get_or_create(key, || Ok(Instance::new(Arc::new(Service(3))))).unwrap();
        assert_eq!(retried.downcast::<Service>().unwrap().0, 3);
    }

    #[test]
    fn test_concurrent_creation_runs_factory_once() {
        let cache = Arc::new(ScopeCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));
        let key = TypeKey::of::<Service>();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_create(key, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(20));
                            Ok(Instance::new(Arc::new(Service(0))))
                        })
                        .unwrap()
                })
            })
            .collect();

        let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(instances.iter().all(|i| i.same_object(&instances[0])));
    }
}
