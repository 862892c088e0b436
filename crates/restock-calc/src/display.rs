//! 顯示格式

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// 星期標籤（週一起算）
const WEEKDAY_LABELS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// 天數取到小數點後一位（四捨五入）
pub fn format_days(days: Decimal) -> String {
    let mut rounded = days.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded.to_string()
}

/// 日期加上星期，例如 `6월 18일 (수)`
pub fn format_date_with_day(date: NaiveDate) -> String {
    let label = WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize];
    format!("{}월 {}일 ({})", date.month(), date.day(), label)
}
