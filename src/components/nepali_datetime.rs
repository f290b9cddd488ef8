//! This module implements `NepaliDateTime`, a Bikram Sambat date with a
//! Nepal local time of day.

use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    calendar::Weekday,
    iso::{IsoDateTime, IsoTime},
    parsers::{self, FormattableDateTime},
    provider::TimeZoneProvider,
    time::EpochNanoseconds,
    GregorianDate, GregorianDateTime, NepalTimeZoneProvider, NepaliDate, NepaliError,
    NepaliResult, TimeZone,
};

/// A Bikram Sambat date and time of day.
///
/// A `NepaliDateTime` has no time zone field; its wall clock is always
/// Nepal local time (UTC+05:45).
///
/// ```rust
/// use nepali_rs::{GregorianDateTime, NepaliDateTime, TimeZone};
///
/// let utc = GregorianDateTime::try_new_zoned(2023, 12, 31, 18, 15, 0, 0, TimeZone::Utc).unwrap();
/// let nepali = NepaliDateTime::from_gregorian_datetime(utc).unwrap();
/// assert_eq!(nepali.to_string(), "2080-09-16T00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NepaliDateTime {
    date: NepaliDate,
    time: IsoTime,
}

impl NepaliDateTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(date: NepaliDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `NepaliDateTime`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> NepaliResult<Self> {
        let date = NepaliDate::try_new(year, month, day)?;
        let time = IsoTime::new(hour, minute, second, nanosecond)?;
        Ok(Self::new_unchecked(date, time))
    }

    /// Combines a date and a time of day.
    pub fn try_from_date_and_time(date: NepaliDate, time: IsoTime) -> NepaliResult<Self> {
        if !time.is_valid() {
            return Err(NepaliError::range().with_message("IsoTime is not valid."));
        }
        Ok(Self::new_unchecked(date, time))
    }

    /// Creates a `NepaliDateTime` at midnight of `date`.
    #[must_use]
    pub fn from_nepali_date(date: NepaliDate) -> Self {
        Self::new_unchecked(date, IsoTime::midnight())
    }

    /// Creates a `NepaliDateTime` at midnight of a Gregorian date.
    pub fn from_gregorian_date(date: GregorianDate) -> NepaliResult<Self> {
        NepaliDate::from_gregorian_date(date).map(Self::from_nepali_date)
    }

    /// Converts a Gregorian timestamp, reading a naive value as Nepal local time.
    pub fn from_gregorian_datetime(datetime: GregorianDateTime) -> NepaliResult<Self> {
        Self::from_gregorian_datetime_with_provider(datetime, &NepalTimeZoneProvider)
    }

    /// Converts a Gregorian timestamp.
    ///
    /// A naive value is tagged with the provider's default time zone, then
    /// the instant is re-expressed in Nepal local time. The BS date is taken
    /// from that wall clock and the time of day is kept.
    pub fn from_gregorian_datetime_with_provider(
        datetime: GregorianDateTime,
        provider: &impl TimeZoneProvider,
    ) -> NepaliResult<Self> {
        let local = datetime.to_timezone_with_provider(TimeZone::Nepal, provider);
        let date = NepaliDate::from_gregorian_date(local.date())?;
        Ok(Self::new_unchecked(date, local.iso.time))
    }

    /// Creates the Nepal local `NepaliDateTime` of an instant.
    pub fn from_epoch_nanoseconds(epoch_ns: EpochNanoseconds) -> NepaliResult<Self> {
        let local = GregorianDateTime::from_epoch_nanoseconds(epoch_ns, TimeZone::Nepal)?;
        Self::from_gregorian_datetime(local)
    }

    /// Converts this value into an aware Gregorian timestamp in the Nepal time zone.
    #[must_use]
    pub fn to_gregorian_datetime(&self) -> GregorianDateTime {
        let date = self.date.to_gregorian_date();
        GregorianDateTime::new_unchecked(
            IsoDateTime::new_unchecked(date.iso, self.time),
            Some(TimeZone::Nepal),
        )
    }

    /// Returns the instant this value denotes.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        let iso = IsoDateTime::new_unchecked(self.date.to_gregorian_date().iso, self.time);
        iso.to_epoch_nanoseconds(TimeZone::Nepal.offset_minutes())
    }

    /// Returns the date portion.
    #[inline]
    #[must_use]
    pub fn date(&self) -> NepaliDate {
        self.date
    }

    /// Returns the time of day.
    #[inline]
    #[must_use]
    pub fn time(&self) -> IsoTime {
        self.time
    }

    /// Returns the BS year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the BS month, in `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Returns the hour value.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.time.hour
    }

    /// Returns the minute value.
    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.time.minute
    }

    /// Returns the second value.
    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.time.second
    }

    /// Returns the nanosecond value.
    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns this value moved by `days` whole days, keeping the time of day.
    pub fn checked_add_days(&self, days: i32) -> NepaliResult<Self> {
        self.date
            .checked_add_days(days)
            .map(|date| Self::new_unchecked(date, self.time))
    }
}

impl From<NepaliDate> for NepaliDateTime {
    fn from(value: NepaliDate) -> Self {
        Self::from_nepali_date(value)
    }
}

impl From<NepaliDateTime> for GregorianDateTime {
    fn from(value: NepaliDateTime) -> Self {
        value.to_gregorian_datetime()
    }
}

impl Writeable for NepaliDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDateTime::from_parts(self.date.formattable(), self.time).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDateTime::from_parts(self.date.formattable(), self.time)
            .writeable_length_hint()
    }
}

impl_display_with_writeable!(NepaliDateTime);

impl FromStr for NepaliDateTime {
    type Err = NepaliError;

    /// Parses `YYYY-MM-DD[THH:MM[:SS[.fff]]]`. A missing time is midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_nepali(s)?;
        let date = NepaliDate::try_new(parsed.year, parsed.month, parsed.day)?;
        Ok(Self::new_unchecked(
            date,
            parsed.time.unwrap_or(IsoTime::midnight()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::NepaliDateTime;
    use crate::{GregorianDate, GregorianDateTime, NepaliDate, TimeZone, UtcOffset};
    use core::str::FromStr;

    #[test]
    fn naive_gregorian_is_nepal_local() {
        let naive = GregorianDateTime::try_new(2024, 1, 1, 10, 30, 0, 0).unwrap();
        let nepali = NepaliDateTime::from_gregorian_datetime(naive).unwrap();
        assert_eq!(
            (nepali.year(), nepali.month(), nepali.day(), nepali.hour(), nepali.minute()),
            (2080, 9, 16, 10, 30)
        );
    }

    #[test]
    fn aware_gregorian_shifts_to_nepal() {
        let utc = GregorianDateTime::try_new_zoned(2023, 12, 31, 20, 0, 0, 0, TimeZone::Utc)
            .unwrap();
        let nepali = NepaliDateTime::from_gregorian_datetime(utc).unwrap();
        assert_eq!((nepali.day(), nepali.hour(), nepali.minute()), (16, 1, 45));

        let same_wall_clock = GregorianDateTime::try_new(2023, 12, 31, 20, 0, 0, 0).unwrap();
        let as_utc =
            NepaliDateTime::from_gregorian_datetime_with_provider(same_wall_clock, &TimeZone::Utc)
                .unwrap();
        assert_eq!(as_utc, nepali);
    }

    #[test]
    fn midnight_constructors() {
        let date = NepaliDate::try_new(2080, 9, 16).unwrap();
        let from_date = NepaliDateTime::from_nepali_date(date);
        let from_gregorian =
            NepaliDateTime::from_gregorian_date(GregorianDate::try_new(2024, 1, 1).unwrap())
                .unwrap();
        assert_eq!(from_date, from_gregorian);
        assert_eq!(from_date.to_string(), "2080-09-16T00:00:00");
    }

    #[test]
    fn gregorian_round_trip() {
        let nepali = NepaliDateTime::try_new(2080, 9, 16, 0, 10, 0, 0).unwrap();
        let gregorian = nepali.to_gregorian_datetime();
        assert_eq!(gregorian.to_string(), "2024-01-01T00:10:00+05:45");
        assert_eq!(gregorian.epoch_nanoseconds(), Some(nepali.epoch_nanoseconds()));

        let offset = TimeZone::Offset(UtcOffset::from_minutes(-480).unwrap());
        let elsewhere = gregorian.to_timezone(offset);
        assert_eq!(NepaliDateTime::from_gregorian_datetime(elsewhere).unwrap(), nepali);
    }

    #[test]
    fn ordering_and_arithmetic() {
        let early = NepaliDateTime::try_new(2080, 9, 16, 8, 0, 0, 0).unwrap();
        let late = NepaliDateTime::try_new(2080, 9, 16, 9, 0, 0, 0).unwrap();
        assert!(early < late);
        let tomorrow = early.checked_add_days(1).unwrap();
        assert!(late < tomorrow);
        assert_eq!((tomorrow.day(), tomorrow.hour()), (17, 8));
        assert_eq!(
            early.checked_add_days(i32::MAX - 20_000).unwrap_err().kind(),
            crate::ErrorKind::Range
        );
    }

    #[test]
    fn parse_and_format() {
        let dt = NepaliDateTime::from_str("2080-02-32T23:59:59").unwrap();
        assert_eq!(dt.to_string(), "2080-02-32T23:59:59");
        let midnight = NepaliDateTime::from_str("2080-09-16").unwrap();
        assert_eq!(midnight.time(), crate::iso::IsoTime::midnight());
        assert!(NepaliDateTime::from_str("2080-09-16T24:00").is_err());
    }
}
