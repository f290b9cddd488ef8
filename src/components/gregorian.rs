//! This module implements `GregorianDate` and `GregorianDateTime`.

use core::str::FromStr;

use crate::{
    calendar::Weekday,
    iso::{IsoDate, IsoDateTime, IsoTime},
    parsers::{self, FormattableDate, FormattableDateTime},
    provider::TimeZoneProvider,
    time::EpochNanoseconds,
    NepaliDate, NepaliError, NepaliResult, TimeZone,
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// A Gregorian calendar date with no time of day and no time zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub(crate) iso: IsoDate,
}

impl GregorianDate {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Creates a new validated `GregorianDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> NepaliResult<Self> {
        IsoDate::new(year, month, day).map(Self::new_unchecked)
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns the day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.iso.to_epoch_days())
    }

    /// Converts this date into Bikram Sambat.
    pub fn to_nepali_date(&self) -> NepaliResult<NepaliDate> {
        NepaliDate::from_gregorian_date(*self)
    }

    /// Returns the internal `IsoDate` record.
    #[inline]
    #[must_use]
    pub fn iso_date(&self) -> IsoDate {
        self.iso
    }
}

impl Writeable for GregorianDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDate::from(self.iso).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDate::from(self.iso).writeable_length_hint()
    }
}

impl_display_with_writeable!(GregorianDate);

impl FromStr for GregorianDate {
    type Err = NepaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_gregorian(s)?;
        Ok(Self::new_unchecked(parsed.iso.date))
    }
}

/// A Gregorian date and time of day, optionally tagged with a [`TimeZone`].
///
/// A `GregorianDateTime` without a time zone is "naive". Conversions never
/// read a naive value as UTC: they tag it with the default time zone of a
/// [`TimeZoneProvider`] first.
///
/// Constructors accept years 1 through 9999. Moving a value on the first or
/// last of those days into another time zone can yield a wall clock in year
/// 0 or 10000; such values keep their instant and can be shifted back, but
/// fall outside the Bikram Sambat table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDateTime {
    pub(crate) iso: IsoDateTime,
    pub(crate) timezone: Option<TimeZone>,
}

impl GregorianDateTime {
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(iso: IsoDateTime, timezone: Option<TimeZone>) -> Self {
        Self {
            iso,
            timezone: timezone.map(TimeZone::canonical),
        }
    }

    /// Creates a new naive `GregorianDateTime`.
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
        let date = IsoDate::new(year, month, day)?;
        let time = IsoTime::new(hour, minute, second, nanosecond)?;
        Ok(Self::new_unchecked(IsoDateTime::new(date, time)?, None))
    }

    /// Creates a new aware `GregorianDateTime` whose wall clock is read in `timezone`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new_zoned(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        timezone: TimeZone,
    ) -> NepaliResult<Self> {
        Self::try_new(year, month, day, hour, minute, second, nanosecond)
            .map(|dt| dt.with_timezone(timezone))
    }

    /// Creates an aware `GregorianDateTime` in `timezone` for an instant.
    pub fn from_epoch_nanoseconds(
        epoch_ns: EpochNanoseconds,
        timezone: TimeZone,
    ) -> NepaliResult<Self> {
        let iso = IsoDateTime::from_epoch_nanoseconds(epoch_ns, timezone.offset_minutes())?;
        Ok(Self::new_unchecked(iso, Some(timezone)))
    }

    /// Creates a `GregorianDateTime` at midnight of `date`. The result is naive.
    #[must_use]
    pub fn from_date(date: GregorianDate) -> Self {
        Self::new_unchecked(IsoDateTime::new_unchecked(date.iso, IsoTime::midnight()), None)
    }

    /// Returns the year value.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.date.year
    }

    /// Returns the month value, in `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso.date.month
    }

    /// Returns the day value.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.date.day
    }

    /// Returns the hour value.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    /// Returns the minute value.
    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    /// Returns the second value.
    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.iso.time.second
    }

    /// Returns the nanosecond value.
    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.iso.time.nanosecond
    }

    /// Returns the internal `IsoDateTime` record.
    #[inline]
    #[must_use]
    pub fn iso_datetime(&self) -> IsoDateTime {
        self.iso
    }

    /// Returns the calendar date of the wall clock.
    #[must_use]
    pub fn date(&self) -> GregorianDate {
        GregorianDate::new_unchecked(self.iso.date)
    }

    /// Returns the attached time zone, if any.
    #[inline]
    #[must_use]
    pub fn timezone(&self) -> Option<&TimeZone> {
        self.timezone.as_ref()
    }

    /// Returns whether a time zone is attached.
    #[inline]
    #[must_use]
    pub fn is_aware(&self) -> bool {
        self.timezone.is_some()
    }

    /// Returns a copy with `timezone` attached, keeping the wall clock
    /// unchanged. Any previously attached time zone is replaced.
    #[must_use]
    pub fn with_timezone(&self, timezone: TimeZone) -> Self {
        Self::new_unchecked(self.iso, Some(timezone))
    }

    /// Returns a copy with no time zone, keeping the wall clock unchanged.
    #[must_use]
    pub fn to_naive(&self) -> Self {
        Self::new_unchecked(self.iso, None)
    }

    /// Returns the instant of an aware value, or `None` for a naive value.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> Option<EpochNanoseconds> {
        self.timezone
            .map(|tz| self.iso.to_epoch_nanoseconds(tz.offset_minutes()))
    }

    /// Re-expresses this value in `target`, preserving the instant.
    ///
    /// A naive value is first tagged with the provider's default time zone.
    #[must_use]
    pub fn to_timezone_with_provider(
        &self,
        target: TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> Self {
        let source = match self.timezone {
            Some(tz) => tz,
            None => {
                #[cfg(feature = "log")]
                log::trace!("attaching default time zone to naive timestamp {:?}", self.iso);
                provider.default_time_zone()
            }
        };
        let delta = i32::from(target.offset_minutes()) - i32::from(source.offset_minutes());
        Self::new_unchecked(self.iso.add_minutes(delta), Some(target))
    }

    /// Re-expresses this value in `target`, reading a naive value as Nepal local time.
    #[must_use]
    pub fn to_timezone(&self, target: TimeZone) -> Self {
        self.to_timezone_with_provider(target, &crate::NepalTimeZoneProvider)
    }

    /// Re-expresses this value in UTC, preserving the instant.
    #[must_use]
    pub fn to_utc(&self) -> Self {
        self.to_timezone(TimeZone::Utc)
    }

    /// Re-expresses this value in Nepal local time, preserving the instant.
    #[must_use]
    pub fn to_nepal(&self) -> Self {
        self.to_timezone(TimeZone::Nepal)
    }

    /// Returns whether `self` and `other` are the same instant. Naive values
    /// compare by wall clock and never equal an aware value.
    ///
    /// `==` additionally compares the wall clock and time zone, so the same
    /// instant seen from two zones is not `==`. An `Offset` equal to UTC or
    /// Nepal time is stored as the named zone, so it compares equal to it.
    #[must_use]
    pub fn is_same_instant(&self, other: &Self) -> bool {
        match (self.epoch_nanoseconds(), other.epoch_nanoseconds()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.iso == other.iso,
            _ => false,
        }
    }
}

impl From<GregorianDate> for GregorianDateTime {
    fn from(value: GregorianDate) -> Self {
        Self::from_date(value)
    }
}

impl Writeable for GregorianDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDateTime::new(self.iso, self.timezone.map(|tz| tz.offset())).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDateTime::new(self.iso, self.timezone.map(|tz| tz.offset()))
            .writeable_length_hint()
    }
}

impl_display_with_writeable!(GregorianDateTime);

impl FromStr for GregorianDateTime {
    type Err = NepaliError;

    /// Parses an RFC 9557 date/time. Offsets, `Z`, and time zone
    /// annotations make the result aware.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parsers::parse_gregorian(s)?;
        Ok(Self::new_unchecked(parsed.iso, parsed.timezone))
    }
}
