//! # Restock Session
//!
//! 三步驟流程（介紹 → 輸入 → 結果）與品項編輯

pub mod storefront;

use std::fmt;

use chrono::{DateTime, Utc};
use restock_calc::{EstimateReport, Estimator};
use restock_core::input::parse_quantity;
use restock_core::{Catalog, Item, ItemUpdate, QuantityField, RestockError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use storefront::storefront_url;

/// 流程步驟
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// 介紹頁
    Landing,
    /// 資料輸入
    Input,
    /// 計算結果
    Result,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Landing => "landing",
            Step::Input => "input",
            Step::Result => "result",
        };
        f.write_str(name)
    }
}

/// 單一使用者的估算流程
///
/// 品項組在流程內固定，只有數值與啟用狀態會被編輯。
/// 每次進入結果頁都重新計算，不沿用舊結果。
#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    items: Vec<Item>,
    estimator: Estimator,
    report: Option<EstimateReport>,
}

impl Session {
    /// 創建新的流程（從介紹頁開始）
    pub fn new(items: Vec<Item>, estimator: Estimator) -> Self {
        Self {
            step: Step::Landing,
            items,
            estimator,
            report: None,
        }
    }

    /// 레디홈 預設目錄、韓國日曆與預設配置
    pub fn readyhome() -> Result<Self> {
        Ok(Self::new(Catalog::readyhome().to_items(), Estimator::korean()?))
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// 最近一次進入結果頁時的計算結果
    pub fn report(&self) -> Option<&EstimateReport> {
        self.report.as_ref()
    }

    /// 介紹頁 → 輸入頁
    pub fn start(&mut self) -> Result<()> {
        self.transition(Step::Landing, Step::Input)?;
        self.step = Step::Input;
        Ok(())
    }

    /// 是否可以進入結果頁（至少一個啟用且用量大於 0 的品項）
    pub fn can_calculate(&self) -> bool {
        self.items.iter().any(Item::is_consuming)
    }

    /// 輸入頁 → 結果頁
    ///
    /// 沒有可計算的品項時拒絕切換，停留在輸入頁。
    pub fn calculate(&mut self, now: DateTime<Utc>) -> Result<&EstimateReport> {
        self.transition(Step::Input, Step::Result)?;

        let report = self.estimator.estimate(&self.items, now);
        if report.is_empty() {
            tracing::warn!("沒有可計算的品項，停留在輸入頁");
            return Err(RestockError::NoActiveResults);
        }

        self.step = Step::Result;
        Ok(self.report.insert(report))
    }

    /// 結果頁 → 輸入頁（重新計算）
    pub fn recalculate(&mut self) -> Result<()> {
        self.transition(Step::Result, Step::Input)?;
        self.step = Step::Input;
        self.report = None;
        Ok(())
    }

    /// 套用部分更新
    pub fn update_item(&mut self, id: &str, update: &ItemUpdate) -> Result<()> {
        let item = self.editable_item(id)?;
        item.apply(update);
        tracing::debug!("更新品項 {}: {:?}", id, update);
        Ok(())
    }

    /// 文字框輸入
    pub fn set_field_text(&mut self, id: &str, field: QuantityField, text: &str) -> Result<()> {
        let value = parse_quantity(field, text)?;
        self.update_item(id, &ItemUpdate::new().with_quantity(field, value))
    }

    /// 切換啟用狀態，返回新狀態
    pub fn toggle_active(&mut self, id: &str) -> Result<bool> {
        let item = self.editable_item(id)?;
        item.is_active = !item.is_active;
        Ok(item.is_active)
    }

    /// 包數 +1，返回新包數
    pub fn increment_packs(&mut self, id: &str) -> Result<Decimal> {
        self.step_packs(id, Decimal::ONE)
    }

    /// 包數 -1（不低於 0），返回新包數
    pub fn decrement_packs(&mut self, id: &str) -> Result<Decimal> {
        self.step_packs(id, Decimal::NEGATIVE_ONE)
    }

    /// 參與計算的品項ID（目錄順序）
    pub fn active_item_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.is_consuming())
            .map(|item| item.id.as_str())
            .collect()
    }

    /// 商店導流網址
    pub fn storefront_url(&self) -> String {
        let config = self.estimator.config();
        storefront_url(&config.store_url, &config.referral_source, self.active_item_ids())
    }

    fn step_packs(&mut self, id: &str, delta: Decimal) -> Result<Decimal> {
        let item = self.editable_item(id)?;
        let packs_owned = item.packs_owned.saturating_add(delta);
        item.apply(&ItemUpdate::new().with_packs_owned(packs_owned));
        Ok(item.packs_owned)
    }

    fn editable_item(&mut self, id: &str) -> Result<&mut Item> {
        if self.step != Step::Input {
            return Err(RestockError::ReadOnlyStep(self.step.to_string()));
        }

        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| RestockError::UnknownItem(id.to_string()))
    }

    fn transition(&self, from: Step, to: Step) -> Result<()> {
        if self.step != from {
            tracing::warn!("拒絕步驟切換: {} → {}（目前在 {}）", from, to, self.step);
            return Err(RestockError::InvalidTransition {
                from: self.step.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }
}
