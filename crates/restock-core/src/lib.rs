//! # Restock Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod input;
pub mod item;

// Re-export 主要類型
pub use calendar::HolidayCalendar;
pub use catalog::{Catalog, CatalogEntry};
pub use config::RestockConfig;
pub use input::{ItemUpdate, QuantityField};
pub use item::Item;

/// Restock 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RestockError {
    #[error("無效的數量 {field}: {value:?}")]
    InvalidQuantity { field: QuantityField, value: String },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("找不到品項: {0}")]
    UnknownItem(String),

    #[error("沒有可計算的品項（至少需要一個啟用且每日用量大於 0 的品項）")]
    NoActiveResults,

    #[error("不允許的步驟切換: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("目前步驟不可編輯品項: {0}")]
    ReadOnlyStep(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("配置解析失敗: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RestockError>;
