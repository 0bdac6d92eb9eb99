//! 路徑鍵模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 路徑中的單一步驟
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathKey {
    /// 映射鍵
    Key(String),
    /// 序列索引
    Index(usize),
}

impl PathKey {
    /// 是否為序列索引
    pub fn is_index(&self) -> bool {
        matches!(self, PathKey::Index(_))
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Key(key) => write!(f, "'{}'", key),
            PathKey::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

impl From<&String> for PathKey {
    fn from(key: &String) -> Self {
        PathKey::Key(key.clone())
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

impl From<&PathKey> for PathKey {
    fn from(key: &PathKey) -> Self {
        key.clone()
    }
}

/// 解析點號路徑，例如 `"a.b.0"`
///
/// 純數字的段落視為索引，其餘為映射鍵；空字串得到空路徑。
///
/// ```
/// # use memokit_core::{parse_path, PathKey};
/// let path = parse_path("repos.0.name");
/// assert_eq!(path[1], PathKey::Index(0));
/// ```
pub fn parse_path(dotted: &str) -> Vec<PathKey> {
    if dotted.is_empty() {
        return Vec::new();
    }

    dotted
        .split('.')
        .map(|segment| {
            let all_digits = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
            match segment.parse::<usize>() {
                Ok(index) if all_digits => PathKey::Index(index),
                _ => PathKey::Key(segment.to_string()),
            }
        })
        .collect()
}
