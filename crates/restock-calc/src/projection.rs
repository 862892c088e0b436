//! 耗盡投影

use chrono::{DateTime, TimeDelta, Utc};
use restock_core::Item;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 每日毫秒數
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// 投影天數的硬上限（約一萬年），確保日期運算不溢出
pub const PROJECTION_CEILING_DAYS: u32 = 3_650_000;

/// 耗盡投影計算器
pub struct ProjectionCalculator;

impl ProjectionCalculator {
    /// 計算可用天數
    ///
    /// `可用天數 = 包數 × 每包數量 / 每日用量`，不做任何捨入。
    /// 未啟用或每日用量不大於 0 的品項返回 `None`。
    pub fn available_days(item: &Item) -> Option<Decimal> {
        if !item.is_consuming() {
            return None;
        }

        let days = item
            .total_units()
            .checked_div(item.daily_usage)
            .unwrap_or(Decimal::MAX);

        Some(days.max(Decimal::ZERO))
    }

    /// 計算耗盡時間點：`now + 可用天數 × 86400 秒`（毫秒精度）
    ///
    /// 投影天數超過 `max_projection_days` 時以上限計算。
    pub fn exhaustion_instant(
        now: DateTime<Utc>,
        available_days: Decimal,
        max_projection_days: u32,
    ) -> DateTime<Utc> {
        let ceiling = Decimal::from(max_projection_days.min(PROJECTION_CEILING_DAYS));
        let projected_days = available_days.max(Decimal::ZERO).min(ceiling);

        let millis = (projected_days * Decimal::from(MILLIS_PER_DAY))
            .trunc()
            .to_i64()
            .unwrap_or(0);

        now.checked_add_signed(TimeDelta::milliseconds(millis))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// 可用天數是否超過投影上限
    pub fn exceeds_projection(available_days: Decimal, max_projection_days: u32) -> bool {
        available_days > Decimal::from(max_projection_days.min(PROJECTION_CEILING_DAYS))
    }
}
