//! 估算配置模型

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::{RestockError, Result};

/// 預設提前期（營業日）
pub const DEFAULT_LEAD_BUSINESS_DAYS: u32 = 3;

/// 韓國標準時間 UTC+09:00
pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// 預設投影上限（天）
pub const DEFAULT_MAX_PROJECTION_DAYS: u32 = 36_500;

pub const DEFAULT_STORE_URL: &str = "https://readyhome.co.kr";

/// 估算參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestockConfig {
    /// 提前期（營業日）：建議下單日比耗盡日提前的營業日數
    pub lead_business_days: u32,

    /// 顯示地區的 UTC 偏移（秒）
    ///
    /// 星期與假日判斷都以此偏移下的本地日期為準。
    pub utc_offset_seconds: i32,

    /// 耗盡時間最多投影的天數
    ///
    /// 只限制耗盡時間點，可用天數本身不受限制。
    pub max_projection_days: u32,

    /// 商店網址
    pub store_url: String,

    /// 導流來源標記（`from` 參數）
    pub referral_source: String,
}

impl RestockConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            lead_business_days: DEFAULT_LEAD_BUSINESS_DAYS,
            utc_offset_seconds: KST_OFFSET_SECONDS,
            max_projection_days: DEFAULT_MAX_PROJECTION_DAYS,
            store_url: DEFAULT_STORE_URL.to_string(),
            referral_source: "calculator".to_string(),
        }
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_business_days(mut self, days: u32) -> Self {
        self.lead_business_days = days;
        self
    }

    /// 建構器模式：設置 UTC 偏移
    pub fn with_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }

    /// 建構器模式：設置投影上限
    pub fn with_max_projection_days(mut self, days: u32) -> Self {
        self.max_projection_days = days;
        self
    }

    /// 建構器模式：設置商店網址
    pub fn with_store_url(mut self, store_url: String) -> Self {
        self.store_url = store_url;
        self
    }

    /// 建構器模式：設置導流來源
    pub fn with_referral_source(mut self, referral_source: String) -> Self {
        self.referral_source = referral_source;
        self
    }

    /// 顯示地區的時區偏移
    pub fn display_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            RestockError::Config(format!("UTC 偏移超出範圍: {} 秒", self.utc_offset_seconds))
        })
    }

    /// 檢查配置
    pub fn validate(&self) -> Result<()> {
        self.display_offset()?;

        if self.store_url.trim().is_empty() {
            return Err(RestockError::Config("商店網址不可為空".to_string()));
        }

        Ok(())
    }
}

impl Default for RestockConfig {
    fn default() -> Self {
        Self::new()
    }
}
