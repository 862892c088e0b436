//! 使用者輸入正規化
//!
//! 原始輸入（文字框、步進按鈕）進入品項紀錄前的唯一檢查點：
//! 負數一律夾到 0，無法解析或非有限的數值直接拒絕。

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{RestockError, Result};

/// 可編輯的數量欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityField {
    /// 現有包數
    PacksOwned,
    /// 每包數量
    UnitsPerPack,
    /// 每日用量
    DailyUsage,
}

impl QuantityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityField::PacksOwned => "packs_owned",
            QuantityField::UnitsPerPack => "units_per_pack",
            QuantityField::DailyUsage => "daily_usage",
        }
    }
}

impl fmt::Display for QuantityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 負數夾到 0
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// 解析文字框輸入的數量
///
/// 空字串視為 0；支援一般小數與科學記號。
pub fn parse_quantity(field: QuantityField, text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| RestockError::InvalidQuantity {
            field,
            value: text.to_string(),
        })?;

    Ok(clamp_non_negative(value))
}

/// 轉換浮點輸入的數量
pub fn quantity_from_f64(field: QuantityField, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(RestockError::InvalidQuantity {
            field,
            value: value.to_string(),
        });
    }

    let decimal = Decimal::from_f64(value).ok_or_else(|| RestockError::InvalidQuantity {
        field,
        value: value.to_string(),
    })?;

    Ok(clamp_non_negative(decimal))
}

/// 品項部分更新
///
/// 只有 `Some` 的欄位會被套用；數值在套用時再經過 [`clamp_non_negative`]。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub packs_owned: Option<Decimal>,
    pub units_per_pack: Option<Decimal>,
    pub daily_usage: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從文字框輸入建立單欄位更新
    pub fn from_text(field: QuantityField, text: &str) -> Result<Self> {
        let value = parse_quantity(field, text)?;
        Ok(Self::new().with_quantity(field, value))
    }

    /// 建構器模式：依欄位設置數量
    pub fn with_quantity(self, field: QuantityField, value: Decimal) -> Self {
        match field {
            QuantityField::PacksOwned => self.with_packs_owned(value),
            QuantityField::UnitsPerPack => self.with_units_per_pack(value),
            QuantityField::DailyUsage => self.with_daily_usage(value),
        }
    }

    /// 建構器模式：設置現有包數
    pub fn with_packs_owned(mut self, packs_owned: Decimal) -> Self {
        self.packs_owned = Some(packs_owned);
        self
    }

    /// 建構器模式：設置每包數量
    pub fn with_units_per_pack(mut self, units_per_pack: Decimal) -> Self {
        self.units_per_pack = Some(units_per_pack);
        self
    }

    /// 建構器模式：設置每日用量
    pub fn with_daily_usage(mut self, daily_usage: Decimal) -> Self {
        self.daily_usage = Some(daily_usage);
        self
    }

    /// 建構器模式：設置啟用狀態
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Decimal::ZERO)]
    #[case("  ", Decimal::ZERO)]
    #[case("4", Decimal::from(4))]
    #[case(" 2.5 ", Decimal::new(25, 1))]
    #[case("-3", Decimal::ZERO)]
    #[case("1e2", Decimal::from(100))]
    fn test_parse_quantity(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_quantity(QuantityField::PacksOwned, text).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("4팩")]
    #[case("1,000")]
    fn test_parse_quantity_rejects_non_numeric(#[case] text: &str) {
        let err = parse_quantity(QuantityField::DailyUsage, text).unwrap_err();
        assert!(matches!(
            err,
            RestockError::InvalidQuantity { field: QuantityField::DailyUsage, .. }
        ));
    }

    #[test]
    fn test_quantity_from_f64() {
        assert_eq!(
            quantity_from_f64(QuantityField::UnitsPerPack, 72.0).unwrap(),
            Decimal::from(72)
        );
        assert_eq!(
            quantity_from_f64(QuantityField::UnitsPerPack, -1.5).unwrap(),
            Decimal::ZERO
        );
        assert!(quantity_from_f64(QuantityField::UnitsPerPack, f64::NAN).is_err());
        assert!(quantity_from_f64(QuantityField::UnitsPerPack, f64::INFINITY).is_err());
    }

    #[test]
    fn test_item_update_from_text() {
        let update = ItemUpdate::from_text(QuantityField::DailyUsage, "3").unwrap();

        assert_eq!(update.daily_usage, Some(Decimal::from(3)));
        assert_eq!(update.packs_owned, None);
        assert!(!update.is_empty());
        assert!(ItemUpdate::new().is_empty());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = parse_quantity(QuantityField::PacksOwned, "x").unwrap_err();
        assert!(err.to_string().contains("packs_owned"));
    }
}
