//! 緊急品項選擇

use crate::CalculationResult;

/// 依可用天數升冪排序（穩定排序，同值保持原順序）
pub fn sort_by_urgency(results: &mut [CalculationResult]) {
    results.sort_by(|a, b| a.available_days.cmp(&b.available_days));
}

/// 選出可用天數最少的品項
///
/// 同值時取第一個出現者；空列表返回 `None`。
/// 對已排序的列表等同取第一筆。
pub fn select_urgent(results: &[CalculationResult]) -> Option<CalculationResult> {
    results
        .iter()
        .min_by(|a, b| a.available_days.cmp(&b.available_days))
        .cloned()
}
