//! 簡單耗盡估算示例

use chrono::Utc;
use restock::{format_date_with_day, format_days, Estimator, Item};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 簡單耗盡估算示例 ===\n");

    let estimator = Estimator::korean()?;

    let items = vec![
        Item::new("diaper-outer".to_string(), "겉기저귀".to_string(), Decimal::from(10))
            .with_packs_owned(Decimal::from(4))
            .with_daily_usage(Decimal::from(2))
            .with_active(true),
        Item::new("wipes".to_string(), "물티슈".to_string(), Decimal::from(72))
            .with_packs_owned(Decimal::from(1))
            .with_daily_usage(Decimal::from(6))
            .with_active(true),
    ];

    let report = estimator.estimate(&items, Utc::now());

    println!("品項清單:");
    for result in &report.results {
        println!(
            "  - {}: {} 일, {} 소진 예정",
            result.item_name,
            format_days(result.available_days),
            format_date_with_day(result.exhaustion_day())
        );
    }

    if let Some(date) = report.recommended_order_date {
        println!("\n建議下單日: {}", format_date_with_day(date));
    }

    Ok(())
}
