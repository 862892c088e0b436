//! 營業日曆模型

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{RestockError, Result};

/// 假日鍵格式（本地日曆日期）
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// 韓國國定假日（2024–2026）
pub const KOREAN_HOLIDAY_KEYS: &[&str] = &[
    "2024-01-01", "2024-02-09", "2024-02-10", "2024-02-11", "2024-02-12",
    "2024-03-01", "2024-04-10", "2024-05-05", "2024-05-06", "2024-05-15",
    "2024-06-06", "2024-08-15", "2024-09-16", "2024-09-17", "2024-09-18",
    "2024-10-03", "2024-10-09", "2024-12-25",
    "2025-01-01", "2025-01-28", "2025-01-29", "2025-01-30", "2025-03-01",
    "2025-03-03", "2025-05-05", "2025-05-06", "2025-06-06", "2025-08-15",
    "2025-10-03", "2025-10-05", "2025-10-06", "2025-10-07", "2025-10-09",
    "2025-12-25",
    "2026-01-01", "2026-02-16", "2026-02-17", "2026-02-18", "2026-03-01",
    "2026-03-02", "2026-05-05", "2026-05-24", "2026-06-06", "2026-08-15",
    "2026-09-24", "2026-09-25", "2026-09-26", "2026-10-03", "2026-10-05",
    "2026-10-09", "2026-12-25",
];

/// 營業日曆
///
/// 由呼叫端注入的假日查詢表，附帶版本字串以便追蹤資料來源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// 資料版本（例如 "KR-2024-2026"）
    pub version: String,

    /// 營業日（週一到週日，true 表示營業日）
    /// 索引 0 = 週一, 1 = 週二, ..., 6 = 週日
    pub working_days: [bool; 7],

    /// 假日（本地日曆日期）
    pub holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// 創建新的營業日曆（預設週一到週五為營業日，無假日）
    pub fn new(version: String) -> Self {
        Self {
            version,
            working_days: [true, true, true, true, true, false, false],
            holidays: BTreeSet::new(),
        }
    }

    /// 創建 24/7 日曆（所有日子都是營業日）
    pub fn new_24_7(version: String) -> Self {
        Self {
            version,
            working_days: [true; 7],
            holidays: BTreeSet::new(),
        }
    }

    /// 韓國日曆：週一到週五營業，並排除國定假日
    pub fn korean() -> Self {
        let holidays = KOREAN_HOLIDAY_KEYS
            .iter()
            .filter_map(|key| NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok());

        Self::new("KR-2024-2026".to_string()).with_holidays(holidays)
    }

    /// 從 `YYYY-MM-DD` 假日鍵創建日曆
    pub fn from_date_keys<S: AsRef<str>>(version: String, keys: &[S]) -> Result<Self> {
        let holidays = keys
            .iter()
            .map(|key| parse_date_key(key.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self {
            holidays,
            ..Self::new(version)
        })
    }

    /// 從 JSON 載入日曆
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置營業日
    pub fn with_working_days(mut self, working_days: [bool; 7]) -> Self {
        self.working_days = working_days;
        self
    }

    /// 建構器模式：添加假日
    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// 添加假日
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// 檢查是否為假日
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// 檢查是否為營業日
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        if self.is_holiday(date) {
            return false;
        }

        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.working_days[weekday_index]
    }

    /// 一週內是否至少有一個營業日
    pub fn has_business_days(&self) -> bool {
        self.working_days.iter().any(|&working| working)
    }

    /// 計算營業日（向後推算）
    ///
    /// 每次往前一個日曆日，只有落在營業日時才扣減計數。
    /// 一週沒有任何營業日時直接返回起始日期。
    pub fn subtract_business_days(&self, start_date: NaiveDate, days: u32) -> NaiveDate {
        if !self.has_business_days() {
            return start_date;
        }

        let mut current = start_date;
        let mut remaining = days;

        while remaining > 0 {
            current = match current.pred_opt() {
                Some(previous) => previous,
                None => return current,
            };
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }

        current
    }

    /// 獲取上一個營業日
    pub fn previous_business_day(&self, date: NaiveDate) -> NaiveDate {
        self.subtract_business_days(date, 1)
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new("DEFAULT".to_string())
    }
}

/// 解析 `YYYY-MM-DD` 日期鍵
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| RestockError::InvalidDate(key.to_string()))
}

/// 日期轉為 `YYYY-MM-DD` 鍵
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_calendar() {
        let calendar = HolidayCalendar::new("TEST".to_string());
        assert_eq!(calendar.version, "TEST");

        // 2025-10-06 是週一
        assert!(calendar.is_business_day(ymd(2025, 10, 6)));
        // 週末不是營業日
        assert!(!calendar.is_business_day(ymd(2025, 10, 11)));
        assert!(!calendar.is_business_day(ymd(2025, 10, 12)));
    }

    #[test]
    fn test_subtract_business_days() {
        let calendar = HolidayCalendar::new("TEST".to_string());

        // 2025-10-13 是週一，減 5 個營業日回到上週一
        let result = calendar.subtract_business_days(ymd(2025, 10, 13), 5);
        assert_eq!(result, ymd(2025, 10, 6));
    }

    #[test]
    fn test_subtract_zero_business_days() {
        let calendar = HolidayCalendar::new("TEST".to_string());

        // 週日起算，0 天不移動
        let sunday = ymd(2025, 6, 22);
        assert_eq!(calendar.subtract_business_days(sunday, 0), sunday);
    }

    #[test]
    fn test_holidays() {
        let mut calendar = HolidayCalendar::new("TEST".to_string());

        let holiday = ymd(2025, 10, 10);
        calendar.add_holiday(holiday);
        calendar.add_holiday(holiday);

        assert_eq!(calendar.holidays.len(), 1);
        assert!(calendar.is_holiday(holiday));
        assert!(!calendar.is_business_day(holiday));
    }

    #[test]
    fn test_korean_calendar() {
        let calendar = HolidayCalendar::korean();

        assert_eq!(calendar.version, "KR-2024-2026");
        assert_eq!(calendar.holidays.len(), KOREAN_HOLIDAY_KEYS.len());

        // 2025-06-06 顯忠日（週五）
        assert!(!calendar.is_business_day(ymd(2025, 6, 6)));
        // 2025-06-05 週四
        assert!(calendar.is_business_day(ymd(2025, 6, 5)));
    }

    #[test]
    fn test_24_7_calendar() {
        let calendar = HolidayCalendar::new_24_7("24/7".to_string());

        assert!(calendar.is_business_day(ymd(2025, 10, 11)));
        assert!(calendar.is_business_day(ymd(2025, 10, 12)));
        assert_eq!(calendar.previous_business_day(ymd(2025, 10, 12)), ymd(2025, 10, 11));
    }

    #[test]
    fn test_no_business_days_does_not_walk() {
        let calendar = HolidayCalendar::new("CLOSED".to_string()).with_working_days([false; 7]);

        let start = ymd(2025, 10, 13);
        assert!(!calendar.has_business_days());
        assert_eq!(calendar.subtract_business_days(start, 3), start);
    }

    #[test]
    fn test_from_date_keys() {
        let calendar =
            HolidayCalendar::from_date_keys("SYN-1".to_string(), &["2025-06-19", " 2025-06-20 "])
                .unwrap();

        assert!(calendar.is_holiday(ymd(2025, 6, 19)));
        assert!(calendar.is_holiday(ymd(2025, 6, 20)));
        assert_eq!(date_key(ymd(2025, 6, 19)), "2025-06-19");
    }

    #[test]
    fn test_from_date_keys_rejects_malformed_key() {
        let err = HolidayCalendar::from_date_keys("BAD".to_string(), &["2025-13-01"]).unwrap_err();
        assert!(matches!(err, RestockError::InvalidDate(key) if key == "2025-13-01"));
    }

    #[test]
    fn test_calendar_json_round_trip() {
        let calendar = HolidayCalendar::korean();
        let json = serde_json::to_string(&calendar).unwrap();

        assert!(json.contains("\"2025-06-06\""));
        assert_eq!(HolidayCalendar::from_json(&json).unwrap(), calendar);
    }
}
