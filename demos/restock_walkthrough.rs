//! 完整流程範例
//!
//! 展示從介紹頁、輸入、結果到商店導流的完整流程

use chrono::Utc;
use restock::{format_date_with_day, format_days, QuantityField, Session};

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("===== Restock Walkthrough =====\n");

    // 步驟 1: 介紹頁
    println!("[1] Landing");
    let mut session = Session::readyhome()?;
    let calendar = session.estimator().calendar();
    println!(
        "    Calendar: {} ({} holidays)\n",
        calendar.version,
        calendar.holidays.len()
    );

    // 步驟 2: 輸入資料
    println!("[2] Input");
    session.start()?;

    session.toggle_active("diaper-pant")?;
    session.set_field_text("diaper-pant", QuantityField::PacksOwned, "3")?;
    session.set_field_text("diaper-pant", QuantityField::DailyUsage, "4")?;
    println!("    diaper-pant: 3 packs x 10, 4 per day");

    session.toggle_active("wipes")?;
    session.increment_packs("wipes")?;
    session.set_field_text("wipes", QuantityField::DailyUsage, "10")?;
    println!("    wipes: 1 pack x 72, 10 per day");

    session.toggle_active("gloves")?;
    session.increment_packs("gloves")?;
    session.increment_packs("gloves")?;
    session.set_field_text("gloves", QuantityField::DailyUsage, "12")?;
    println!("    gloves: 2 packs x 200, 12 per day\n");

    // 步驟 3: 結果頁
    println!("[3] Result");
    let report = session.calculate(Utc::now())?;

    if let Some(urgent) = &report.urgent {
        println!(
            "    Urgent: {} [{} 일 남음], 소진 예정 {}",
            urgent.item_name,
            format_days(urgent.available_days),
            format_date_with_day(urgent.exhaustion_day())
        );
    }
    if let Some(date) = report.recommended_order_date {
        println!("    Order by: [{}]", format_date_with_day(date));
    }
    for warning in &report.warnings {
        println!("    Warning ({:?}) {}: {}", warning.kind, warning.item_id, warning.message);
    }

    println!("\n    Details:");
    for result in &report.results {
        println!(
            "      - {:<12} {:>6} 일  {}",
            result.item_name,
            format_days(result.available_days),
            format_date_with_day(result.exhaustion_day())
        );
    }

    // 步驟 4: 商店導流
    println!("\n[4] Storefront");
    println!("    {}", session.storefront_url());

    Ok(())
}
