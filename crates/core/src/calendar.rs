//! Simplified calendar decomposition.
//!
//! Breaks a Unix timestamp into year/month/day/hour/minute fields using
//! flat accounting: every month is exactly 30 days and every year exactly
//! 365 days. Hour-of-day and minute-of-hour wrap correctly, but the
//! month/day breakdown is deliberately *not* a Gregorian calendar -- no
//! leap years, no variable month lengths -- so callers must not expect
//! agreement with a real calendar for the same instant.

/// Date and time-of-day fields decomposed from a Unix timestamp.
///
/// `month` and `day` are zero-based remainders (month 0-11, day 0-29),
/// matching the monitoring product's table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Decompose seconds-since-epoch into simplified calendar fields.
///
/// Pure and total over all non-negative inputs. Years count from 1970.
#[must_use]
pub fn decompose(seconds: i64) -> DateFields {
    let total_minutes = seconds / 60;
    let total_hours = total_minutes / 60;
    let total_days = total_hours / 24;
    let total_months = total_days / 30;
    let total_years = total_days / 365;

    DateFields {
        year: total_years + 1970,
        month: (total_months % 12) as u32,
        day: (total_days % 30) as u32,
        hour: (total_hours % 24) as u32,
        minute: (total_minutes % 60) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_decomposes_to_origin() {
        let fields = decompose(0);
        assert_eq!(fields.year, 1970);
        assert_eq!(fields.month, 0);
        assert_eq!(fields.day, 0);
        assert_eq!(fields.hour, 0);
        assert_eq!(fields.minute, 0);
    }

    #[test]
    fn simulation_start_decomposes_consistently() {
        // 49 flat years after the epoch: 49 * 365 days = 17885 days.
        let fields = decompose(49 * 365 * 24 * 60 * 60);
        assert_eq!(fields.year, 2019);
        // 17885 days = 596 thirty-day months + 5 days
        assert_eq!(fields.month, 596 % 12);
        assert_eq!(fields.day, 5);
        assert_eq!(fields.hour, 0);
        assert_eq!(fields.minute, 0);
    }

    #[test]
    fn time_of_day_wraps() {
        // 1 day, 23 hours, 59 minutes, 59 seconds
        let seconds = 24 * 3600 + 23 * 3600 + 59 * 60 + 59;
        let fields = decompose(seconds);
        assert_eq!(fields.day, 1);
        assert_eq!(fields.hour, 23);
        assert_eq!(fields.minute, 59);
    }

    #[test]
    fn fields_stay_in_range_over_sweep() {
        // Sweep several simulated years with a stride coprime to the
        // wrap periods so remainders get exercised.
        let mut seconds = 0_i64;
        while seconds < 3 * 365 * 24 * 3600 {
            let fields = decompose(seconds);
            assert!(fields.year >= 1970);
            assert!(fields.month <= 11, "month out of range at t={seconds}");
            assert!(fields.day <= 29, "day out of range at t={seconds}");
            assert!(fields.hour <= 23, "hour out of range at t={seconds}");
            assert!(fields.minute <= 59, "minute out of range at t={seconds}");
            seconds += 7919;
        }
    }

    #[test]
    fn thirty_day_months_roll_over() {
        let end_of_first_month = decompose(29 * 24 * 3600);
        assert_eq!(end_of_first_month.month, 0);
        assert_eq!(end_of_first_month.day, 29);

        let start_of_second_month = decompose(30 * 24 * 3600);
        assert_eq!(start_of_second_month.month, 1);
        assert_eq!(start_of_second_month.day, 0);
    }

    #[test]
    fn flat_years_ignore_leap_days() {
        // 365 flat days later is always the next year, even across what a
        // real calendar would treat as a leap year.
        let fields = decompose(365 * 24 * 3600);
        assert_eq!(fields.year, 1971);
        assert_eq!(fields.day, 365 % 30);
    }
}
