//! 耗盡估算主計算器

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use restock_core::{HolidayCalendar, Item, RestockConfig};

use crate::lead_time::LeadTimeCalculator;
use crate::projection::ProjectionCalculator;
use crate::urgency::{select_urgent, sort_by_urgency};
use crate::{CalculationResult, EstimateReport, EstimateWarning, WarningKind};

/// 耗盡估算器
///
/// 純計算：所有入口都接收呼叫端提供的 `now`，不讀取系統時鐘，
/// 也不修改傳入的品項。
#[derive(Debug, Clone)]
pub struct Estimator {
    /// 營業日曆
    calendar: HolidayCalendar,

    /// 估算配置
    config: RestockConfig,

    /// 顯示地區時區
    offset: FixedOffset,
}

impl Estimator {
    /// 創建新的估算器
    pub fn new(calendar: HolidayCalendar, config: RestockConfig) -> restock_core::Result<Self> {
        let offset = config.display_offset()?;
        Ok(Self {
            calendar,
            config,
            offset,
        })
    }

    /// 韓國日曆與預設配置
    pub fn korean() -> restock_core::Result<Self> {
        Self::new(HolidayCalendar::korean(), RestockConfig::default())
    }

    /// 計算各品項的可用天數與耗盡時間
    ///
    /// 只保留啟用且每日用量大於 0 的品項，結果依可用天數升冪（穩定排序）。
    pub fn compute_results(&self, items: &[Item], now: DateTime<Utc>) -> Vec<CalculationResult> {
        let mut results: Vec<CalculationResult> = items
            .iter()
            .filter_map(|item| {
                let available_days = ProjectionCalculator::available_days(item)?;
                let exhaustion = ProjectionCalculator::exhaustion_instant(
                    now,
                    available_days,
                    self.config.max_projection_days,
                );

                Some(CalculationResult {
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                    image_url: item.image_url.clone(),
                    available_days,
                    exhaustion_date: exhaustion.with_timezone(&self.offset),
                })
            })
            .collect();

        sort_by_urgency(&mut results);
        results
    }

    /// 計算建議下單日
    ///
    /// 沒有緊急品項時返回 `None`。
    pub fn recommend_order_date(
        &self,
        urgent: Option<&CalculationResult>,
        now: DateTime<Utc>,
    ) -> Option<NaiveDate> {
        let urgent = urgent?;
        let order_date = LeadTimeCalculator::calculate_order_date(
            urgent.exhaustion_day(),
            self.today(now),
            self.config.lead_business_days,
            &self.calendar,
        );

        tracing::debug!(
            "建議下單日: {} (耗盡日 {}, 提前 {} 個營業日)",
            order_date,
            urgent.exhaustion_day(),
            self.config.lead_business_days
        );

        Some(order_date)
    }

    /// 主估算入口
    pub fn estimate(&self, items: &[Item], now: DateTime<Utc>) -> EstimateReport {
        tracing::info!("開始耗盡估算：品項 {} 筆，基準時間 {}", items.len(), now);

        // Step 1: 可用天數與耗盡時間
        tracing::debug!("Step 1: 計算可用天數");
        let results = self.compute_results(items, now);
        tracing::debug!("參與計算品項: {}", results.len());

        let mut report = EstimateReport::empty();
        self.collect_item_warnings(items, &mut report);

        // Step 2: 緊急品項
        tracing::debug!("Step 2: 選擇緊急品項");
        let urgent = select_urgent(&results);

        // Step 3: 建議下單日
        tracing::debug!("Step 3: 倒推建議下單日");
        let recommended_order_date = self.recommend_order_date(urgent.as_ref(), now);

        if let Some(urgent) = &urgent {
            if LeadTimeCalculator::is_clamped(
                urgent.exhaustion_day(),
                self.today(now),
                self.config.lead_business_days,
                &self.calendar,
            ) {
                report.add_warning(EstimateWarning::new(
                    urgent.item_id.clone(),
                    WarningKind::OrderNow,
                    "建議下單日已過，請立即下單".to_string(),
                ));
            }
        }

        report.results = results;
        report.urgent = urgent;
        report.recommended_order_date = recommended_order_date;

        match &report.urgent {
            Some(urgent) => tracing::info!(
                "耗盡估算完成：最緊急品項 {}，可用 {} 天",
                urgent.item_id,
                urgent.available_days
            ),
            None => tracing::info!("耗盡估算完成：沒有可計算的品項"),
        }

        report
    }

    /// 顯示地區的今天
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// 收集品項層級的警告
    fn collect_item_warnings(&self, items: &[Item], report: &mut EstimateReport) {
        for item in items.iter().filter(|item| item.is_active) {
            if !item.is_consuming() {
                tracing::debug!("品項 {} 已啟用但每日用量為 0，跳過", item.id);
                report.add_warning(EstimateWarning::new(
                    item.id.clone(),
                    WarningKind::ZeroUsage,
                    "已啟用但每日用量為 0，不列入計算".to_string(),
                ));
                continue;
            }

            let capped = ProjectionCalculator::available_days(item).is_some_and(|days| {
                ProjectionCalculator::exceeds_projection(days, self.config.max_projection_days)
            });
            if capped {
                report.add_warning(EstimateWarning::new(
                    item.id.clone(),
                    WarningKind::ProjectionCapped,
                    format!(
                        "可用天數超過 {} 天，耗盡時間以上限計算",
                        self.config.max_projection_days
                    ),
                ));
            }
        }
    }

    /// 獲取營業日曆引用
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// 獲取配置引用
    pub fn config(&self) -> &RestockConfig {
        &self.config
    }
}
