//! 以參數為鍵的記憶化包裝器

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::{CacheStats, MemoConfig};

/// 記憶化包裝器
///
/// 包裝一個計算函數，每組不同的參數最多只執行一次，結果保存在實例內，
/// 直到實例被丟棄或呼叫 [`Memoizer::clear`]。多參數時以 tuple 作為鍵。
///
/// ```
/// # use memokit_cache::memoize;
/// let mut square = memoize(|n: &u64| n * n);
/// assert_eq!(*square.get(4), 16);
/// assert_eq!(*square.get(4), 16);
/// assert_eq!(square.stats().misses, 1);
/// ```
pub struct Memoizer<K, V, F> {
    func: F,
    cache: HashMap<K, V>,
    config: MemoConfig,
    hits: u64,
    misses: u64,
}

/// 以預設配置創建記憶化包裝器
pub fn memoize<K, V, F, R>(func: F) -> Memoizer<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> R,
{
    Memoizer::new(func)
}

impl<K, V, F> Memoizer<K, V, F>
where
    K: Eq + Hash,
{
    /// 創建新的記憶化包裝器
    ///
    /// `R` 為計算函數的回傳類型：不可失敗時即 `V`，可失敗時為 `Result<V, E>`。
    pub fn new<R>(func: F) -> Self
    where
        F: FnMut(&K) -> R,
    {
        Self::with_config(func, MemoConfig::default())
    }

    /// 以指定配置創建記憶化包裝器
    pub fn with_config<R>(func: F, config: MemoConfig) -> Self
    where
        F: FnMut(&K) -> R,
    {
        Self {
            func,
            cache: HashMap::new(),
            config,
            hits: 0,
            misses: 0,
        }
    }

    /// 取得結果，首次呼叫時執行計算函數
    pub fn get(&mut self, key: K) -> &V
    where
        F: FnMut(&K) -> V,
    {
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                if self.config.trace_hits {
                    tracing::debug!(label = %self.config.label, "快取命中");
                }
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::debug!(label = %self.config.label, "快取未命中，執行計算");
                let value = (self.func)(entry.key());
                entry.insert(value)
            }
        }
    }

    /// 取得可失敗計算的結果
    ///
    /// 只有成功的結果會被快取；錯誤立即回傳給呼叫者，下次呼叫會重新計算。
    pub fn try_get<E>(&mut self, key: K) -> Result<&V, E>
    where
        F: FnMut(&K) -> Result<V, E>,
    {
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                if self.config.trace_hits {
                    tracing::debug!(label = %self.config.label, "快取命中");
                }
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::debug!(label = %self.config.label, "快取未命中，執行計算");
                let value = (self.func)(entry.key())?;
                Ok(entry.insert(value))
            }
        }
    }

    /// 查看已快取的結果，不觸發計算
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    /// 檢查是否已快取
    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    /// 移除單一條目，下次呼叫會重新計算
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.cache.remove(key)
    }

    /// 清除所有條目與統計
    pub fn clear(&mut self) {
        tracing::debug!(label = %self.config.label, "清除 {} 筆快取", self.cache.len());
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn config(&self) -> &MemoConfig {
        &self.config
    }

    /// 獲取快取統計
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }
}
