//! 客戶端配置

use serde::{Deserialize, Serialize};

/// 組織 API 的 URL 模板預設值
pub const DEFAULT_ORG_URL: &str = "https://api.github.com/orgs/{org}";

/// 組織客戶端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgClientConfig {
    /// 組織資料 URL 模板，`{org}` 會被替換為組織名稱
    pub org_url_template: String,
}

impl OrgClientConfig {
    /// 從 JSON 載入配置
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// 建構器模式：設置 URL 模板
    pub fn with_org_url_template(mut self, template: impl Into<String>) -> Self {
        self.org_url_template = template.into();
        self
    }

    /// 組出組織資料 URL
    pub fn org_url(&self, org_name: &str) -> String {
        self.org_url_template.replace("{org}", org_name)
    }
}

impl Default for OrgClientConfig {
    fn default() -> Self {
        Self {
            org_url_template: DEFAULT_ORG_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_org_url() {
        let config = OrgClientConfig::default();
        assert_eq!(config.org_url("google"), "https://api.github.com/orgs/google");
    }

    #[test]
    fn test_custom_template() {
        let config = OrgClientConfig::from_json(r#"{"org_url_template": "http://localhost:8080/o/{org}"}"#)
            .unwrap();
        assert_eq!(config.org_url("abc"), "http://localhost:8080/o/abc");

        let config = OrgClientConfig::from_json("{}").unwrap();
        assert_eq!(config, OrgClientConfig::default());
    }
}
