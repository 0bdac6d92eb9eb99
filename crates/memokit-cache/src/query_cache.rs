//! 查詢結果快取
//!
//! 以查詢字串為鍵保存結果，未命中時記錄查詢並執行呼叫者提供的查詢函數。
//! 快取屬於實例本身，不存在行程層級的共享狀態。

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::{CacheStats, MemoConfig};

/// 查詢快取
#[derive(Debug)]
pub struct QueryCache<R> {
    entries: HashMap<String, R>,
    config: MemoConfig,
    hits: u64,
    misses: u64,
}

impl<R> QueryCache<R> {
    /// 創建新的查詢快取
    pub fn new() -> Self {
        Self::with_config(MemoConfig::new("query"))
    }

    /// 以指定配置創建查詢快取
    pub fn with_config(config: MemoConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            hits: 0,
            misses: 0,
        }
    }

    /// 取得查詢結果，未命中時執行 `run`
    ///
    /// `run` 收到的是原始查詢字串。失敗的查詢不會被快取。
    pub fn fetch_with<F, E>(&mut self, query: &str, run: F) -> Result<&R, E>
    where
        F: FnOnce(&str) -> Result<R, E>,
    {
        let key = self.key_for(query);

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                if self.config.trace_hits {
                    tracing::debug!(label = %self.config.label, "查詢快取命中: {}", entry.key());
                }
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::info!(label = %self.config.label, "執行查詢: {}", query);
                let rows = run(query)?;
                Ok(entry.insert(rows))
            }
        }
    }

    /// 查看已快取的結果
    pub fn get(&self, query: &str) -> Option<&R> {
        self.entries.get(&self.key_for(query))
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(&self.key_for(query))
    }

    /// 移除單一查詢的快取
    pub fn invalidate(&mut self, query: &str) -> Option<R> {
        let key = self.key_for(query);
        self.entries.remove(&key)
    }

    /// 清除所有條目與統計
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 獲取快取統計
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    fn key_for(&self, query: &str) -> String {
        if self.config.normalize_queries {
            query.trim().to_string()
        } else {
            query.to_string()
        }
    }
}

impl<R> Default for QueryCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    type Rows = Vec<(u32, String)>;

    fn users() -> Rows {
        vec![(1, "alice".to_string()), (2, "bob".to_string())]
    }

    #[test]
    fn test_second_fetch_uses_cache() {
        let executed = RefCell::new(Vec::new());
        let mut cache: QueryCache<Rows> = QueryCache::new();

        let run = |query: &str| -> Result<Rows, String> {
            executed.borrow_mut().push(query.to_string());
            Ok(users())
        };

        let first = cache.fetch_with("SELECT * FROM users", run).unwrap().clone();
        let second = cache.fetch_with("SELECT * FROM users", run).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(executed.borrow().len(), 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[rstest]
    #[case(true, "  SELECT 1  ", 1)]
    #[case(false, "  SELECT 1  ", 2)]
    fn test_query_normalization(
        #[case] normalize: bool,
        #[case] padded: &str,
        #[case] expected_runs: usize,
    ) {
        let runs = RefCell::new(0);
        let mut cache =
            QueryCache::with_config(MemoConfig::new("sql").with_normalize_queries(normalize));
        let run = |_: &str| -> Result<u32, ()> {
            *runs.borrow_mut() += 1;
            Ok(1)
        };

        cache.fetch_with("SELECT 1", run).unwrap();
        cache.fetch_with(padded, run).unwrap();

        assert_eq!(*runs.borrow(), expected_runs);
    }

    #[test]
    fn test_failed_query_not_cached() {
        let mut cache: QueryCache<Rows> = QueryCache::default();

        let err = cache
            .fetch_with("SELECT * FROM missing", |_| Err("no such table: missing"))
            .unwrap_err();
        assert_eq!(err, "no such table: missing");
        assert!(!cache.contains("SELECT * FROM missing"));
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let mut cache = QueryCache::new();
        cache
            .fetch_with("SELECT * FROM users", |_| Ok::<_, ()>(users()))
            .unwrap();
        cache
            .fetch_with("SELECT 1", |_| Ok::<_, ()>(Vec::new()))
            .unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.invalidate(" SELECT 1 "), Some(Vec::new()));
        assert_eq!(cache.get("SELECT * FROM users"), Some(&users()));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
