//! 快取配置

use serde::{Deserialize, Serialize};

/// 記憶化快取配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    /// 日誌中使用的名稱
    pub label: String,

    /// 命中時是否輸出 debug 日誌
    pub trace_hits: bool,

    /// 查詢字串是否先去除首尾空白再作為鍵
    pub normalize_queries: bool,
}

impl MemoConfig {
    /// 創建指定名稱的配置
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置名稱
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// 建構器模式：設置是否記錄命中
    pub fn with_trace_hits(mut self, trace: bool) -> Self {
        self.trace_hits = trace;
        self
    }

    /// 建構器模式：設置是否正規化查詢字串
    pub fn with_normalize_queries(mut self, normalize: bool) -> Self {
        self.normalize_queries = normalize;
        self
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            label: "memo".to_string(),
            trace_hits: false,
            normalize_queries: true,
        }
    }
}
