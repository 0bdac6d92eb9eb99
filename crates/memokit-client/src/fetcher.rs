//! JSON 取得介面

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// 取得錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("找不到資源: {0}")]
    NotFound(String),

    #[error("傳輸錯誤: {0}")]
    Transport(String),
}

/// 依 URL 取得 JSON 載荷
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

impl<F> JsonFetcher for F
where
    F: Fn(&str) -> Result<Value, FetchError>,
{
    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self(url)
    }
}

/// 記憶體內的固定載荷來源，並記錄每次請求
#[derive(Debug, Default)]
pub struct StaticFetcher {
    payloads: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：登記 URL 的載荷
    pub fn with_payload(mut self, url: impl Into<String>, payload: Value) -> Self {
        self.payloads.insert(url.into(), payload);
        self
    }

    /// 所有請求過的 URL（依請求順序）
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// 某個 URL 被請求的次數
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| u.as_str() == url).count()
    }
}

impl JsonFetcher for StaticFetcher {
    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.payloads
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_static_fetcher_records_requests() {
        let fetcher = StaticFetcher::new().with_payload("http://example.com", json!({"payload": true}));

        assert_eq!(fetcher.get_json("http://example.com"), Ok(json!({"payload": true})));
        assert_eq!(
            fetcher.get_json("http://holberton.io"),
            Err(FetchError::NotFound("http://holberton.io".to_string()))
        );
        assert_eq!(fetcher.requests(), vec!["http://example.com", "http://holberton.io"]);
        assert_eq!(fetcher.request_count("http://example.com"), 1);
    }

    #[test]
    fn test_closure_fetcher() {
        let fetcher = |url: &str| -> Result<Value, FetchError> { Ok(json!({ "url": url })) };
        assert_eq!(fetcher.get_json("x").unwrap(), json!({"url": "x"}));
    }
}
