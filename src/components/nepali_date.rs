//! This module implements `NepaliDate`, a Bikram Sambat calendar date.

use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    calendar::{self, NepaliMonth, Weekday},
    iso::IsoDate,
    parsers::{self, FormattableDate},
    GregorianDate, NepaliError, NepaliResult, NepaliUnwrap,
};

/// A Bikram Sambat (BS) calendar date.
///
/// ```rust
/// use nepali_rs::{GregorianDate, NepaliDate, NepaliMonth};
///
/// let date = NepaliDate::try_new(2080, 9, 16).unwrap();
/// assert_eq!(date.month_name(), NepaliMonth::Poush);
/// assert_eq!(date.to_gregorian_date(), GregorianDate::try_new(2024, 1, 1).unwrap());
/// assert_eq!(date.to_string(), "2080-09-16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NepaliDate {
    year: i32,
    month: NepaliMonth,
    day: u8,
    epoch_days: i32,
}

impl NepaliDate {
    /// Creates a new validated `NepaliDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> NepaliResult<Self> {
        let epoch_days = calendar::to_epoch_days(year, month, day)?;
        let month = NepaliMonth::from_ordinal(month).nepali_unwrap()?;
        Ok(Self {
            year,
            month,
            day,
            epoch_days,
        })
    }

    /// Creates a `NepaliDate` from a count of days since 1970-01-01.
    pub(crate) fn from_epoch_days(epoch_days: i32) -> NepaliResult<Self> {
        let (year, month, day) = calendar::from_epoch_days(epoch_days)?;
        let month = NepaliMonth::from_ordinal(month).nepali_unwrap()?;
        Ok(Self {
            year,
            month,
            day,
            epoch_days,
        })
    }

    /// Converts a Gregorian date into Bikram Sambat.
    ///
    /// Returns a Range error if the date falls outside the supported BS years.
    pub fn from_gregorian_date(date: GregorianDate) -> NepaliResult<Self> {
        Self::from_epoch_days(date.iso.to_epoch_days())
    }

    /// Converts this date into the Gregorian calendar.
    #[must_use]
    pub fn to_gregorian_date(&self) -> GregorianDate {
        GregorianDate::new_unchecked(IsoDate::from_epoch_days(self.epoch_days))
    }

    /// Returns the BS year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the BS month, in `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month.ordinal()
    }

    /// Returns the day of the month, in `1..=32`.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month as a [`NepaliMonth`].
    #[inline]
    #[must_use]
    pub fn month_name(&self) -> NepaliMonth {
        self.month
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.epoch_days)
    }

    /// Returns the length of this date's month.
    pub fn days_in_month(&self) -> NepaliResult<u8> {
        calendar::days_in_month(self.year, self.month()).nepali_unwrap()
    }

    /// Returns the length of this date's year.
    pub fn days_in_year(&self) -> NepaliResult<u16> {
        calendar::days_in_year(self.year).nepali_unwrap()
    }

    /// Returns the date `days` days after this one; negative values move backwards.
    pub fn checked_add_days(&self, days: i32) -> NepaliResult<Self> {
        let epoch_days = self.epoch_days.checked_add(days).ok_or(
            NepaliError::range().with_message("day arithmetic overflowed."),
        )?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i32 {
        other.epoch_days - self.epoch_days
    }

    pub(crate) fn formattable(&self) -> FormattableDate {
        FormattableDate(self.year, self.month(), self.day)
    }
}

impl TryFrom<GregorianDate> for NepaliDate {
    type Error = NepaliError;

    fn try_from(value: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_gregorian_date(value)
    }
}

impl From<NepaliDate> for GregorianDate {
    fn from(value: NepaliDate) -> Self {
        value.to_gregorian_date()
    }
}

impl Writeable for NepaliDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(10)
    }
}

impl_display_with_writeable!(NepaliDate);

impl FromStr for NepaliDate {
    type Err = NepaliError;

    /// Parses a `YYYY-MM-DD` Bikram Sambat date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_nepali(s)?;
        if parsed.time.is_some() {
            return Err(NepaliError::syntax().with_message("a NepaliDate has no time of day."));
        }
        Self::try_new(parsed.year, parsed.month, parsed.day)
    }
}

#[cfg(test)]
mod tests {
    use super::NepaliDate;
    use crate::{calendar::Weekday, ErrorKind, GregorianDate, NepaliMonth};
    use core::str::FromStr;

    #[test]
    fn gregorian_round_trip() {
        let gregorian = GregorianDate::try_new(2024, 1, 1).unwrap();
        let date = NepaliDate::from_gregorian_date(gregorian).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2080, 9, 16));
        assert_eq!(date.to_gregorian_date(), gregorian);
        assert_eq!(date.weekday(), Weekday::Monday);
        assert_eq!(date.month_name(), NepaliMonth::Poush);
    }

    #[test]
    fn known_conversions() {
        let cases = [
            ((2023, 12, 31), (2080, 9, 15)),
            ((2000, 1, 1), (2056, 9, 17)),
            ((2025, 1, 1), (2081, 9, 17)),
            ((1970, 1, 1), (2026, 9, 17)),
            ((2023, 4, 14), (2080, 1, 1)),
            ((1943, 4, 14), (2000, 1, 1)),
        ];
        for ((y, m, d), expected) in cases {
            let date =
                NepaliDate::from_gregorian_date(GregorianDate::try_new(y, m, d).unwrap()).unwrap();
            assert_eq!((date.year(), date.month(), date.day()), expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn out_of_table_dates() {
        let early = GregorianDate::try_new(1943, 4, 13).unwrap();
        let err = NepaliDate::from_gregorian_date(early).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(NepaliDate::try_new(2080, 1, 32).is_err());
        assert!(NepaliDate::try_new(2091, 1, 1).is_err());
        assert!(NepaliDate::try_new(2080, 13, 1).is_err());
    }

    #[test]
    fn day_arithmetic() {
        let date = NepaliDate::try_new(2080, 12, 30).unwrap();
        let next = date.checked_add_days(1).unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (2081, 1, 1));
        assert_eq!(date.days_until(&next), 1);
        assert_eq!(next.days_until(&date), -1);
        assert_eq!(next.checked_add_days(-1).unwrap(), date);
        assert!(date < next);

        let year_later = date.checked_add_days(i32::from(next.days_in_year().unwrap())).unwrap();
        assert_eq!(year_later.year(), 2081);
        assert!(date.checked_add_days(i32::MAX).is_err());
    }

    #[test]
    fn huge_day_offsets_are_range_errors() {
        let date = NepaliDate::try_new(2080, 1, 1).unwrap();
        let err = date.checked_add_days(i32::MAX - 20_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = date.checked_add_days(i32::MIN + 20_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn month_lengths() {
        let date = NepaliDate::try_new(2080, 2, 32).unwrap();
        assert_eq!(date.days_in_month().unwrap(), 32);
        assert_eq!(date.days_in_year().unwrap(), 365);
    }

    #[test]
    fn parse_and_format() {
        let date = NepaliDate::from_str("2080-02-32").unwrap();
        assert_eq!(date.to_string(), "2080-02-32");
        assert!(NepaliDate::from_str("2080-01-32").is_err());
        assert!(NepaliDate::from_str("2080-09-16T10:00").is_err());
    }
}
