//! # Restock Calculation Engine
//!
//! 耗盡估算與建議下單日計算

pub mod calculator;
pub mod display;
pub mod lead_time;
pub mod projection;
pub mod urgency;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use calculator::Estimator;
pub use lead_time::{is_business_day, LeadTimeCalculator};
pub use urgency::{select_urgent, sort_by_urgency};

/// 單一品項的計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub item_id: String,
    pub item_name: String,
    pub image_url: String,

    /// 可用天數（未捨入）
    pub available_days: Decimal,

    /// 預計耗盡時間（顯示地區時區）
    pub exhaustion_date: DateTime<FixedOffset>,
}

impl CalculationResult {
    /// 耗盡當天的本地日期
    pub fn exhaustion_day(&self) -> NaiveDate {
        self.exhaustion_date.date_naive()
    }
}

/// 估算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// 各品項結果（依可用天數升冪）
    pub results: Vec<CalculationResult>,

    /// 最緊急的品項
    pub urgent: Option<CalculationResult>,

    /// 建議下單日
    pub recommended_order_date: Option<NaiveDate>,

    /// 警告信息
    pub warnings: Vec<EstimateWarning>,
}

impl EstimateReport {
    /// 創建空的估算結果
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            urgent: None,
            recommended_order_date: None,
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 參與計算的品項ID（依結果順序）
    pub fn active_item_ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.item_id.as_str()).collect()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: EstimateWarning) {
        self.warnings.push(warning);
    }
}

/// 估算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateWarning {
    pub item_id: String,
    pub kind: WarningKind,
    pub message: String,
}

impl EstimateWarning {
    pub fn new(item_id: String, kind: WarningKind, message: String) -> Self {
        Self {
            item_id,
            kind,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// 已啟用但每日用量為 0，不列入計算
    ZeroUsage,
    /// 可用天數超過投影上限，耗盡時間以上限計算
    ProjectionCapped,
    /// 建議下單日已夾到今天（應立即下單）
    OrderNow,
}
