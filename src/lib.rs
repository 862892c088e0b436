//! # Restock
//!
//! 照護消耗品耗盡估算與建議下單日
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use restock::{Estimator, Item};
//! use rust_decimal::Decimal;
//!
//! let estimator = Estimator::korean().unwrap();
//! let items = vec![
//!     Item::new("wipes".to_string(), "물티슈".to_string(), Decimal::from(72))
//!         .with_packs_owned(Decimal::from(2))
//!         .with_daily_usage(Decimal::from(12))
//!         .with_active(true),
//! ];
//!
//! let now = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
//! let report = estimator.estimate(&items, now);
//! assert_eq!(report.urgent.unwrap().available_days, Decimal::from(12));
//! ```

pub use restock_calc::display::{format_date_with_day, format_days};
pub use restock_calc::{
    is_business_day, select_urgent, CalculationResult, EstimateReport, EstimateWarning,
    Estimator, LeadTimeCalculator, WarningKind,
};
pub use restock_core::{
    Catalog, CatalogEntry, HolidayCalendar, Item, ItemUpdate, QuantityField, RestockConfig,
    RestockError, Result,
};
pub use restock_session::{Session, Step};
