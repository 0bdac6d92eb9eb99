//! # Memokit Client
//!
//! 組織資料客戶端：以記憶化快取 JSON 載荷，以巢狀存取讀取欄位

pub mod config;
pub mod fetcher;
pub mod org;

// Re-export 主要類型
pub use config::OrgClientConfig;
pub use fetcher::{FetchError, JsonFetcher, StaticFetcher};
pub use org::{has_license, OrgClient};

use memokit_core::AccessError;

/// 客戶端錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("取得資料失敗: {0}")]
    Fetch(#[from] FetchError),

    #[error("資料存取失敗: {0}")]
    Access(#[from] AccessError),

    #[error("非預期的資料結構: {0}")]
    UnexpectedShape(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
