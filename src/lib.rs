//! # Memokit
//!
//! 巢狀資料存取與記憶化工具

pub use memokit_cache::{memoize, CacheError, CacheStats, MemoCell, MemoConfig, Memoizer, QueryCache};
pub use memokit_client::{
    has_license, ClientError, FetchError, JsonFetcher, OrgClient, OrgClientConfig, StaticFetcher,
};
pub use memokit_core::{
    access_nested, access_nested_mut, access_nested_str, parse_path, AccessError, NestedAccess,
    PathKey,
};
pub use serde_json::Value;
