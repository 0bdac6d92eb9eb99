//! 巢狀結構存取
//!
//! 以鍵/索引序列逐層走訪 `serde_json::Value`。物件視為映射，陣列視為序列，
//! 其餘值都是葉節點。任何一步失敗立即回傳錯誤，不回傳部分結果。

use serde_json::Value;

use crate::{AccessError, PathKey, Result};

/// 依路徑取得巢狀值
///
/// ```
/// # use memokit_core::access_nested;
/// # use serde_json::json;
/// let map = json!({"a": {"b": 2}});
/// assert_eq!(access_nested(&map, ["a", "b"]).unwrap(), &json!(2));
///
/// let err = access_nested(&map, ["a", "c"]).unwrap_err();
/// assert_eq!(err.key().unwrap().to_string(), "'c'");
/// ```
pub fn access_nested<'v, I>(root: &'v Value, path: I) -> Result<&'v Value>
where
    I: IntoIterator,
    I::Item: Into<PathKey>,
{
    let mut current = root;

    for (depth, key) in path.into_iter().enumerate() {
        let key = key.into();
        current = match step(current, &key) {
            Some(next) => next,
            None => {
                tracing::debug!("巢狀存取失敗：第 {} 層找不到 {}（節點類型 {}）", depth, key, kind_of(current));
                return Err(AccessError::KeyNotFound { key, depth });
            }
        };
    }

    Ok(current)
}

/// 依路徑取得可變的巢狀值
pub fn access_nested_mut<'v, I>(root: &'v mut Value, path: I) -> Result<&'v mut Value>
where
    I: IntoIterator,
    I::Item: Into<PathKey>,
{
    let mut current = root;

    for (depth, key) in path.into_iter().enumerate() {
        let key = key.into();
        current = match step_mut(current, &key) {
            Some(next) => next,
            None => {
                tracing::debug!("巢狀存取失敗：第 {} 層找不到 {}", depth, key);
                return Err(AccessError::KeyNotFound { key, depth });
            }
        };
    }

    Ok(current)
}

/// 依路徑取得字串葉節點
pub fn access_nested_str<'v, I>(root: &'v Value, path: I) -> Result<&'v str>
where
    I: IntoIterator,
    I::Item: Into<PathKey>,
{
    let value = access_nested(root, path)?;
    value.as_str().ok_or(AccessError::TypeMismatch {
        expected: "string",
        found: kind_of(value),
    })
}

/// `serde_json::Value` 的巢狀存取擴充
pub trait NestedAccess {
    fn at<I>(&self, path: I) -> Result<&Value>
    where
        I: IntoIterator,
        I::Item: Into<PathKey>;

    fn at_mut<I>(&mut self, path: I) -> Result<&mut Value>
    where
        I: IntoIterator,
        I::Item: Into<PathKey>;
}

impl NestedAccess for Value {
    fn at<I>(&self, path: I) -> Result<&Value>
    where
        I: IntoIterator,
        I::Item: Into<PathKey>,
    {
        access_nested(self, path)
    }

    fn at_mut<I>(&mut self, path: I) -> Result<&mut Value>
    where
        I: IntoIterator,
        I::Item: Into<PathKey>,
    {
        access_nested_mut(self, path)
    }
}

fn step<'v>(value: &'v Value, key: &PathKey) -> Option<&'v Value> {
    match (value, key) {
        (Value::Object(map), PathKey::Key(k)) => map.get(k),
        (Value::Array(items), PathKey::Index(i)) => items.get(*i),
        _ => None,
    }
}

fn step_mut<'v>(value: &'v mut Value, key: &PathKey) -> Option<&'v mut Value> {
    match (value, key) {
        (Value::Object(map), PathKey::Key(k)) => map.get_mut(k),
        (Value::Array(items), PathKey::Index(i)) => items.get_mut(*i),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
