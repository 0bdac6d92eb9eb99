//! # Memokit Cache
//!
//! 記憶化快取模組：以實例持有的快取物件取代全域字典

pub mod config;
pub mod memo_cell;
pub mod memoizer;
pub mod query_cache;

// Re-export 主要類型
pub use config::MemoConfig;
pub use memo_cell::MemoCell;
pub use memoizer::{memoize, Memoizer};
pub use query_cache::QueryCache;

/// 快取錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("無效的快取配置: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// 快取統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// 命中次數
    pub hits: u64,

    /// 未命中次數（即實際執行次數）
    pub misses: u64,

    /// 目前條目數
    pub entries: usize,
}

impl CacheStats {
    /// 命中率（沒有任何呼叫時為 0）
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);

        let stats = CacheStats {
            hits: 3,
            misses: 1,
            entries: 1,
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }
}
