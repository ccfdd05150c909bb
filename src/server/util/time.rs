//! Civil-time helpers for regional reporting.
//!
//! Approval stamps and deadline checks use a fixed UTC-5 offset rather than
//! UTC so the dates in reports line up with the liaison office's calendar.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Fixed regional offset, UTC-5. Not DST-aware; the region does not observe it.
const CIVIL_OFFSET_SECONDS: i32 = -5 * 3600;

fn civil_offset() -> FixedOffset {
    FixedOffset::east_opt(CIVIL_OFFSET_SECONDS).expect("civil offset in range")
}

/// Converts an instant to the naive civil timestamp used for storage.
pub fn to_civil(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&civil_offset()).naive_local()
}

/// Current civil timestamp.
pub fn civil_now() -> NaiveDateTime {
    to_civil(Utc::now())
}

/// Current civil calendar date, used for deadline comparisons.
pub fn civil_today() -> NaiveDate {
    civil_now().date()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::to_civil;

    /// Expect an instant shortly after UTC midnight to fall on the previous civil day
    #[test]
    fn civil_time_lags_utc_by_five_hours() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 3, 30, 0).unwrap();

        let civil = to_civil(instant);

        assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert_eq!(civil.time().to_string(), "22:30:00");
    }

    /// Expect a midday instant to keep its civil date
    #[test]
    fn midday_keeps_date() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();

        let civil = to_civil(instant);

        assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    }
}
