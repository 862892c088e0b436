//! 品項模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{clamp_non_negative, ItemUpdate};

/// 追蹤中的消耗品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 品項ID（同一組品項內唯一）
    pub id: String,

    /// 顯示名稱
    pub name: String,

    /// 現有包數
    pub packs_owned: Decimal,

    /// 每包數量（最小使用單位）
    pub units_per_pack: Decimal,

    /// 每日用量（最小使用單位）
    pub daily_usage: Decimal,

    /// 是否使用中
    pub is_active: bool,

    /// 圖片
    pub image_url: String,
}

impl Item {
    /// 創建新的品項（未啟用、無庫存、無用量）
    pub fn new(id: String, name: String, units_per_pack: Decimal) -> Self {
        Self {
            id,
            name,
            packs_owned: Decimal::ZERO,
            units_per_pack: clamp_non_negative(units_per_pack),
            daily_usage: Decimal::ZERO,
            is_active: false,
            image_url: String::new(),
        }
    }

    /// 建構器模式：設置現有包數
    pub fn with_packs_owned(mut self, packs_owned: Decimal) -> Self {
        self.packs_owned = clamp_non_negative(packs_owned);
        self
    }

    /// 建構器模式：設置每日用量
    pub fn with_daily_usage(mut self, daily_usage: Decimal) -> Self {
        self.daily_usage = clamp_non_negative(daily_usage);
        self
    }

    /// 建構器模式：設置啟用狀態
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// 建構器模式：設置圖片
    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = image_url;
        self
    }

    /// 現有總數量（包數 × 每包數量）
    pub fn total_units(&self) -> Decimal {
        self.packs_owned.saturating_mul(self.units_per_pack)
    }

    /// 是否參與計算（啟用且每日用量大於 0）
    pub fn is_consuming(&self) -> bool {
        self.is_active && self.daily_usage > Decimal::ZERO
    }

    /// 套用部分更新
    pub fn apply(&mut self, update: &ItemUpdate) {
        if let Some(packs_owned) = update.packs_owned {
            self.packs_owned = clamp_non_negative(packs_owned);
        }
        if let Some(units_per_pack) = update.units_per_pack {
            self.units_per_pack = clamp_non_negative(units_per_pack);
        }
        if let Some(daily_usage) = update.daily_usage {
            self.daily_usage = clamp_non_negative(daily_usage);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}
