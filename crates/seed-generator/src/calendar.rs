//! Year-aware month arithmetic and the rolling window of month buckets.
//!
//! Orders are spread over `order_count / ORDERS_PER_MONTH` consecutive
//! calendar months ending at the reference month. A month cursor may fall
//! before January or after December of the reference year, so months are
//! handled as an absolute ordinal (`year * 12 + month0`) instead of a raw
//! month number.

use crate::generator::GeneratorError;
use chrono::{Datelike, Months, NaiveDateTime};
use std::fmt;
use tracing::debug;

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    /// Zero-based month, `0..=11`
    month0: u32,
}

impl YearMonth {
    /// Create from a one-based month (`1..=12`).
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self {
            year,
            month0: month - 1,
        })
    }

    /// Month containing the given instant.
    pub fn of(instant: &NaiveDateTime) -> Self {
        Self {
            year: instant.year(),
            month0: instant.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month0)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        // Euclidean division keeps month0 in 0..=11 for cursors before year 0 too.
        Self {
            year: ordinal.div_euclid(12) as i32,
            month0: ordinal.rem_euclid(12) as u32,
        }
    }

    /// Month `months` after (or before, when negative) this one.
    pub fn offset(self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal() + months)
    }

    /// Signed number of months from `other` to `self`.
    pub fn months_since(self, other: YearMonth) -> i64 {
        self.ordinal() - other.ordinal()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

/// Shift an instant by a signed number of calendar months.
///
/// The day of month is clamped to the last day of the target month
/// (Mar 31 shifted by -1 is Feb 28/29); time of day is kept.
pub fn shift_months(instant: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        instant.checked_add_months(magnitude)
    } else {
        instant.checked_sub_months(magnitude)
    }
}

/// One month bucket of the order window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    /// Zero-based bucket position; orders `index * 1000 .. (index + 1) * 1000` fall here
    pub index: u64,
    /// Calendar month of the bucket cursor
    pub month: YearMonth,
    /// Whether `month` is the reference month
    pub is_current: bool,
    /// Inclusive start of the `created_at` window
    pub window_start: NaiveDateTime,
    /// Exclusive end of the `created_at` window
    pub window_end: NaiveDateTime,
}

/// Plan `bucket_count` consecutive month buckets ending at the reference month.
///
/// The cursor starts `bucket_count` months before the reference month and
/// advances once per bucket, so the last bucket is always the reference month.
/// Each bucket's `created_at` window is the month preceding the bucket month's
/// boundary, anchored at the reference day and time of day: for the current
/// bucket that is `[reference - 1 month, reference)`. Consecutive windows share
/// their boundary, so windows never overlap and never reach past the reference.
pub fn plan_buckets(
    reference: NaiveDateTime,
    bucket_count: u64,
) -> Result<Vec<MonthBucket>, GeneratorError> {
    let current = YearMonth::of(&reference);
    let count = i64::try_from(bucket_count)
        .map_err(|_| GeneratorError::CalendarOverflow { months: i64::MAX })?;
    // The oldest window starts `count` months back; checked before allocating.
    shift_months(reference, -count)
        .ok_or(GeneratorError::CalendarOverflow { months: -count })?;
    let mut cursor = current.offset(-count);

    let mut buckets = Vec::with_capacity(bucket_count as usize);
    for index in 0..bucket_count {
        cursor = cursor.offset(1);
        let relative = cursor.months_since(current);
        let window_end = shift_months(reference, relative)
            .ok_or(GeneratorError::CalendarOverflow { months: relative })?;
        let window_start = shift_months(reference, relative - 1)
            .ok_or(GeneratorError::CalendarOverflow {
                months: relative - 1,
            })?;

        debug!(
            "Bucket {} -> {} window [{}, {})",
            index, cursor, window_start, window_end
        );

        buckets.push(MonthBucket {
            index,
            month: cursor,
            is_current: cursor == current,
            window_start,
            window_end,
        });
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_year_month_bounds() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert_eq!(ym(2024, 12).month(), 12);
    }

    #[test]
    fn test_offset_rolls_years() {
        assert_eq!(ym(2024, 1).offset(-1), ym(2023, 12));
        assert_eq!(ym(2024, 3).offset(-6), ym(2023, 9));
        assert_eq!(ym(2024, 12).offset(1), ym(2025, 1));
        assert_eq!(ym(2024, 2).offset(-26), ym(2021, 12));
        assert_eq!(ym(2024, 2).offset(35), ym(2027, 1));
    }

    #[test]
    fn test_months_since() {
        assert_eq!(ym(2024, 1).months_since(ym(2023, 11)), 2);
        assert_eq!(ym(2023, 11).months_since(ym(2024, 1)), -2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(at(2024, 3, 31), -1), Some(at(2024, 2, 29)));
        assert_eq!(shift_months(at(2023, 3, 31), -1), Some(at(2023, 2, 28)));
        assert_eq!(shift_months(at(2024, 1, 15), -2), Some(at(2023, 11, 15)));
        assert_eq!(shift_months(at(2024, 11, 30), 3), Some(at(2025, 2, 28)));
        assert_eq!(shift_months(at(2024, 5, 5), 0), Some(at(2024, 5, 5)));
    }

    #[test]
    fn test_single_bucket_is_current_month() {
        let reference = at(2024, 5, 20);
        let buckets = plan_buckets(reference, 1).unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].month, ym(2024, 5));
        assert!(buckets[0].is_current);
        assert_eq!(buckets[0].window_start, at(2024, 4, 20));
        assert_eq!(buckets[0].window_end, reference);
    }

    #[test]
    fn test_january_reference_spans_previous_year() {
        let reference = at(2024, 1, 10);
        let buckets = plan_buckets(reference, 6).unwrap();

        let months: Vec<_> = buckets.iter().map(|b| b.month).collect();
        assert_eq!(
            months,
            vec![
                ym(2023, 8),
                ym(2023, 9),
                ym(2023, 10),
                ym(2023, 11),
                ym(2023, 12),
                ym(2024, 1)
            ]
        );
        assert_eq!(buckets[0].window_start, at(2023, 7, 10));
        assert_eq!(buckets[4].window_end, at(2023, 12, 10));
    }

    #[test]
    fn test_december_reference() {
        let buckets = plan_buckets(at(2024, 12, 31), 3).unwrap();

        assert_eq!(buckets[2].month, ym(2024, 12));
        assert_eq!(buckets[1].window_end, at(2024, 11, 30));
        assert_eq!(buckets[0].window_start, at(2024, 9, 30));
    }

    #[test]
    fn test_multi_year_window() {
        let reference = at(2024, 2, 29);
        let buckets = plan_buckets(reference, 30).unwrap();

        assert_eq!(buckets[0].month, ym(2021, 9));
        assert_eq!(buckets.last().unwrap().month, ym(2024, 2));
        assert_eq!(buckets.iter().filter(|b| b.is_current).count(), 1);
    }

    #[test]
    fn test_buckets_strictly_increase_and_tile() {
        let reference = at(2024, 3, 31);
        let buckets = plan_buckets(reference, 14).unwrap();

        for pair in buckets.windows(2) {
            assert_eq!(pair[1].month.months_since(pair[0].month), 1);
            assert_eq!(pair[0].window_end, pair[1].window_start);
        }
        for bucket in &buckets {
            assert!(bucket.window_start < bucket.window_end);
            assert!(bucket.window_end <= reference);
        }
        assert_eq!(buckets.last().unwrap().month, YearMonth::of(&reference));
    }

    #[test]
    fn test_bucket_count_beyond_calendar() {
        let result = plan_buckets(at(2024, 1, 1), 1u64 << 50);
        assert!(matches!(
            result,
            Err(GeneratorError::CalendarOverflow { months }) if months == -(1i64 << 50)
        ));

        let result = plan_buckets(at(2024, 1, 1), u64::MAX);
        assert!(matches!(result, Err(GeneratorError::CalendarOverflow { .. })));
    }

    #[test]
    fn test_zero_buckets() {
        assert!(plan_buckets(at(2024, 1, 1), 0).unwrap().is_empty());
    }
}
