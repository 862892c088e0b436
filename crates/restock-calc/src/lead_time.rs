//! 建議下單日計算

use chrono::NaiveDate;
use restock_core::HolidayCalendar;

/// 檢查是否為營業日（非週末、非假日）
pub fn is_business_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    calendar.is_business_day(date)
}

/// 交期計算器
pub struct LeadTimeCalculator;

impl LeadTimeCalculator {
    /// 計算建議下單日
    ///
    /// 從耗盡日往前逐日倒推，只在營業日扣減提前期；
    /// 結果早於今天時以今天為準。
    pub fn calculate_order_date(
        exhaustion_day: NaiveDate,
        today: NaiveDate,
        lead_business_days: u32,
        calendar: &HolidayCalendar,
    ) -> NaiveDate {
        let candidate = calendar.subtract_business_days(exhaustion_day, lead_business_days);
        candidate.max(today)
    }

    /// 建議下單日是否被夾到今天
    pub fn is_clamped(
        exhaustion_day: NaiveDate,
        today: NaiveDate,
        lead_business_days: u32,
        calendar: &HolidayCalendar,
    ) -> bool {
        calendar.subtract_business_days(exhaustion_day, lead_business_days) < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekday_calendar() -> HolidayCalendar {
        HolidayCalendar::new("TEST".to_string())
    }

    // 2025-06-01 往前的日期作為「今天」，確保不觸發夾值
    const TODAY: (i32, u32, u32) = (2025, 6, 1);

    #[rstest]
    // 週三耗盡 → 週二、週一、上週五
    #[case(ymd(2025, 6, 18), ymd(2025, 6, 13))]
    // 週一耗盡 → 週日、週六跳過，週五、週四、週三
    #[case(ymd(2025, 6, 23), ymd(2025, 6, 18))]
    // 週日耗盡 → 週六跳過，週五、週四、週三
    #[case(ymd(2025, 6, 22), ymd(2025, 6, 18))]
    // 週五耗盡 → 週四、週三、週二
    #[case(ymd(2025, 6, 20), ymd(2025, 6, 17))]
    fn test_three_business_days_back(#[case] exhaustion: NaiveDate, #[case] expected: NaiveDate) {
        let today = ymd(TODAY.0, TODAY.1, TODAY.2);
        let order_date =
            LeadTimeCalculator::calculate_order_date(exhaustion, today, 3, &weekday_calendar());

        assert_eq!(order_date, expected);
        assert!(is_business_day(order_date, &weekday_calendar()));
    }

    #[test]
    fn test_wednesday_lands_on_previous_friday() {
        let exhaustion = ymd(2025, 6, 18);
        assert_eq!(exhaustion.weekday(), Weekday::Wed);

        let order_date = LeadTimeCalculator::calculate_order_date(
            exhaustion,
            ymd(2025, 6, 1),
            3,
            &weekday_calendar(),
        );
        assert_eq!(order_date.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_holiday_consumes_extra_day() {
        // 週四 06-19 設為假日：週五 06-20、(週四跳過)、週三 06-18、週二 06-17
        let mut calendar = weekday_calendar();
        calendar.add_holiday(ymd(2025, 6, 19));

        let order_date =
            LeadTimeCalculator::calculate_order_date(ymd(2025, 6, 23), ymd(2025, 6, 1), 3, &calendar);
        assert_eq!(order_date, ymd(2025, 6, 17));
    }

    #[test]
    fn test_zero_lead_time_returns_exhaustion_day() {
        let sunday = ymd(2025, 6, 22);
        let order_date =
            LeadTimeCalculator::calculate_order_date(sunday, ymd(2025, 6, 1), 0, &weekday_calendar());
        assert_eq!(order_date, sunday);
    }

    #[test]
    fn test_clamped_to_today() {
        let today = ymd(2025, 6, 2);

        // 耗盡日在明天，倒推 3 個營業日早於今天
        let order_date =
            LeadTimeCalculator::calculate_order_date(ymd(2025, 6, 3), today, 3, &weekday_calendar());
        assert_eq!(order_date, today);
        assert!(LeadTimeCalculator::is_clamped(ymd(2025, 6, 3), today, 3, &weekday_calendar()));

        // 零提前期但耗盡日已過
        let order_date =
            LeadTimeCalculator::calculate_order_date(ymd(2025, 5, 30), today, 0, &weekday_calendar());
        assert_eq!(order_date, today);
    }

    #[test]
    fn test_korean_holiday_in_walk() {
        // 2025-06-06（週五）顯忠日：週一 06-09 耗盡 → 週五跳過，週四、週三、週二
        let calendar = HolidayCalendar::korean();
        let order_date =
            LeadTimeCalculator::calculate_order_date(ymd(2025, 6, 9), ymd(2025, 5, 1), 3, &calendar);
        assert_eq!(order_date, ymd(2025, 6, 3));
    }
}
