//! 組織客戶端

use memokit_cache::MemoCell;
use memokit_core::access_nested_str;
use serde_json::Value;

use crate::{ClientError, JsonFetcher, OrgClientConfig, Result};

/// 組織資料客戶端
///
/// 組織資料與倉庫清單在每個客戶端實例內各只取得一次。
pub struct OrgClient<F> {
    org_name: String,
    fetcher: F,
    config: OrgClientConfig,
    org: MemoCell<Value>,
    repos_payload: MemoCell<Value>,
}

impl<F: JsonFetcher> OrgClient<F> {
    /// 創建新的客戶端
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self::with_config(org_name, fetcher, OrgClientConfig::default())
    }

    /// 以指定配置創建客戶端
    pub fn with_config(org_name: impl Into<String>, fetcher: F, config: OrgClientConfig) -> Self {
        Self {
            org_name: org_name.into(),
            fetcher,
            config,
            org: MemoCell::new(),
            repos_payload: MemoCell::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// 組織資料（記憶化）
    pub fn org(&self) -> Result<&Value> {
        self.org.get_or_try_init(|| -> Result<Value> {
            let url = self.config.org_url(&self.org_name);
            tracing::info!("取得組織資料: {}", url);
            Ok(self.fetcher.get_json(&url)?)
        })
    }

    /// 公開倉庫清單的 URL
    pub fn public_repos_url(&self) -> Result<&str> {
        Ok(access_nested_str(self.org()?, ["repos_url"])?)
    }

    /// 倉庫清單載荷（記憶化）
    pub fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload.get_or_try_init(|| -> Result<Value> {
            let url = self.public_repos_url()?;
            tracing::info!("取得倉庫清單: {}", url);
            Ok(self.fetcher.get_json(url)?)
        })
    }

    /// 公開倉庫名稱，可依授權鍵過濾
    pub fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos_payload()?.as_array().ok_or_else(|| {
            ClientError::UnexpectedShape(format!("{} 的倉庫清單不是陣列", self.org_name))
        })?;

        let mut names = Vec::with_capacity(repos.len());
        for repo in repos {
            if let Some(key) = license {
                if !has_license(repo, key) {
                    continue;
                }
            }
            names.push(access_nested_str(repo, ["name"])?.to_string());
        }

        tracing::debug!("{} 共 {} 個倉庫符合條件", self.org_name, names.len());
        Ok(names)
    }
}

/// 檢查倉庫是否使用指定授權
///
/// 缺少 `license.key`（包括授權為 `null`）視為不符合。
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    matches!(access_nested_str(repo, ["license", "key"]), Ok(key) if key == license_key)
}
