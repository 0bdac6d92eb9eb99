//! # Memokit Core
//!
//! 巢狀資料存取與路徑模型

pub mod nested;
pub mod path;

// Re-export 主要類型
pub use nested::{access_nested, access_nested_mut, access_nested_str, NestedAccess};
pub use path::{parse_path, PathKey};

/// 巢狀存取錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("找不到鍵 {key}（路徑第 {depth} 層）")]
    KeyNotFound { key: PathKey, depth: usize },

    #[error("類型不符：預期 {expected}，實際為 {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AccessError {
    /// 取得出錯的鍵（如果有）
    pub fn key(&self) -> Option<&PathKey> {
        match self {
            AccessError::KeyNotFound { key, .. } => Some(key),
            AccessError::TypeMismatch { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;
