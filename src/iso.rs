//! This module implements the internal ISO (proleptic Gregorian) field records.
//!
//! The three main records are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDateTime` is the combination of an `IsoDate` and an `IsoTime`
//! and carries no time zone. Time zone handling lives on
//! [`GregorianDateTime`](crate::GregorianDateTime).

use num_traits::ToPrimitive;

use crate::{
    time::EpochNanoseconds, NepaliError, NepaliResult, NS_PER_DAY, NS_PER_MINUTE,
    NS_PER_SECOND,
};

/// The minimum supported Gregorian year.
pub const MIN_ISO_YEAR: i32 = 1;
/// The maximum supported Gregorian year.
pub const MAX_ISO_YEAR: i32 = 9999;

// A time zone shift of a value on the first or last supported day may
// cross into the neighbouring year; such values stay representable.
const MIN_SHIFTED_YEAR: i32 = MIN_ISO_YEAR - 1;
const MAX_SHIFTED_YEAR: i32 = MAX_ISO_YEAR + 1;

/// `IsoDateTime` is the record of an `IsoDate` and an `IsoTime`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validaiton.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `IsoDateTime`.
    pub fn new(date: IsoDate, time: IsoTime) -> NepaliResult<Self> {
        if !date.is_valid() || !time.is_valid() {
            return Err(NepaliError::range().with_message("IsoDateTime is not valid."));
        }
        Ok(Self::new_unchecked(date, time))
    }

    /// Creates the wall-clock `IsoDateTime` observed at `offset_minutes`
    /// from UTC for the provided epoch nanoseconds.
    pub(crate) fn from_epoch_nanoseconds(
        epoch_ns: EpochNanoseconds,
        offset_minutes: i16,
    ) -> NepaliResult<Self> {
        let local = EpochNanoseconds::from(
            epoch_ns.as_i128() + i128::from(offset_minutes) * i128::from(NS_PER_MINUTE),
        );
        local.check_validity()?;
        let days = local
            .epoch_days()
            .to_i32()
            .ok_or(NepaliError::range().with_message("epoch days exceed a valid range."))?;
        Ok(Self::new_unchecked(
            IsoDate::from_epoch_days(days),
            IsoTime::from_nanoseconds_of_day(local.nanoseconds_of_day()),
        ))
    }

    /// Returns the epoch nanoseconds of this wall-clock value when read at
    /// `offset_minutes` from UTC.
    pub(crate) fn to_epoch_nanoseconds(self, offset_minutes: i16) -> EpochNanoseconds {
        let days = i128::from(self.date.to_epoch_days());
        let local = days * i128::from(NS_PER_DAY) + i128::from(self.time.to_nanoseconds_of_day());
        EpochNanoseconds::from(local - i128::from(offset_minutes) * i128::from(NS_PER_MINUTE))
    }

    /// Shifts this wall-clock value by a number of minutes, balancing any
    /// overflow into the date.
    pub(crate) fn add_minutes(self, minutes: i32) -> Self {
        let nanos = self.time.to_nanoseconds_of_day() + i64::from(minutes) * NS_PER_MINUTE;
        let overflow_days = nanos.div_euclid(NS_PER_DAY);
        let time = IsoTime::from_nanoseconds_of_day(nanos.rem_euclid(NS_PER_DAY));
        // NOTE: offsets are under a day each, so the shift spans at most two days.
        let date = IsoDate::balance(
            self.date.year,
            self.date.month.into(),
            i32::from(self.date.day) + overflow_days as i32,
        );
        Self::new_unchecked(date, time)
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` is the record of a proleptic Gregorian year, month, and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn new(year: i32, month: u8, day: u8) -> NepaliResult<Self> {
        if !(MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&year) {
            return Err(NepaliError::range().with_message("year is outside the supported range."));
        }
        if !is_valid_date(year, month.into(), day.into()) {
            return Err(NepaliError::range().with_message("not a valid ISO date."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Create a balanced `IsoDate`, where `month` and `day` may overflow.
    pub(crate) fn balance(year: i32, month: i32, day: i32) -> Self {
        let (year, month) = balance_iso_year_month(year, month);
        let epoch_days = iso_date_to_epoch_days(year, month, 1) + day - 1;
        Self::from_epoch_days(epoch_days)
    }

    /// Creates an `IsoDate` from a count of days since 1970-01-01.
    pub(crate) fn from_epoch_days(epoch_days: i32) -> Self {
        let (year, month, day) = ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the count of days since 1970-01-01.
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i32 {
        iso_date_to_epoch_days(self.year, self.month.into(), self.day.into())
    }

    /// Returns if the current `IsoDate` is valid.
    ///
    /// Years 0 and 10000 are accepted, since shifting a value on the edge of
    /// the constructible range by a UTC offset can land there.
    pub(crate) fn is_valid(self) -> bool {
        (MIN_SHIFTED_YEAR..=MAX_SHIFTED_YEAR).contains(&self.year)
            && is_valid_date(self.year, self.month.into(), self.day.into())
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains a wall-clock time of day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,        // 0..=23
    pub minute: u8,      // 0..=59
    pub second: u8,      // 0..=59
    pub nanosecond: u32, // 0..=999_999_999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> NepaliResult<Self> {
        let time = Self::new_unchecked(hour, minute, second, nanosecond);
        if !time.is_valid() {
            return Err(NepaliError::range().with_message("IsoTime is not valid"));
        }
        Ok(time)
    }

    /// Returns an `IsoTime` set to 00:00:00
    pub const fn midnight() -> Self {
        Self::new_unchecked(0, 0, 0, 0)
    }

    /// Creates an `IsoTime` from a nanosecond count in `0..NS_PER_DAY`.
    pub(crate) fn from_nanoseconds_of_day(nanos: i64) -> Self {
        debug_assert!((0..NS_PER_DAY).contains(&nanos));
        let (seconds, nanosecond) = div_mod(nanos, NS_PER_SECOND);
        let (minutes, second) = div_mod(seconds, 60);
        let (hours, minute) = div_mod(minutes, 60);
        Self::new_unchecked(hours as u8, minute as u8, second as u8, nanosecond as u32)
    }

    /// Returns the nanoseconds elapsed since midnight.
    pub(crate) fn to_nanoseconds_of_day(self) -> i64 {
        let seconds =
            i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        seconds * NS_PER_SECOND + i64::from(self.nanosecond)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_valid_time(self.hour, self.minute, self.second, self.nanosecond)
    }

    /// Builds an `IsoTime` from a parsed `ixdtf` time record.
    pub(crate) fn from_time_record(record: ixdtf::records::TimeRecord) -> NepaliResult<Self> {
        let nanosecond = record
            .fraction
            .map(|fraction| fraction.to_nanoseconds())
            .unwrap_or(Some(0));
        let Some(nanosecond) = nanosecond else {
            return Err(
                NepaliError::range().with_message("fractional seconds exceed nanosecond precision.")
            );
        };
        // NOTE: leap seconds are constrained to 59.
        Self::new(record.hour, record.minute, record.second.min(59), nanosecond)
    }
}

// ==== Gregorian date equations ====
//
// Epoch day conversions use the Euclidean affine functions described by
// Cassio Neri and Lorenz Schneider. Rata die here are "computational":
// day zero is 0000-03-01.

const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;
const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant
// Shift by one 400 year cycle so that year zero stays non-negative.
const SHIFT_CYCLES: i32 = 1;

/// Returns the Epoch days based off the given year, month (1-12), and day.
#[inline]
fn iso_date_to_epoch_days(year: i32, month: i32, day: i32) -> i32 {
    let j = i32::from(month <= 2);
    let comp_year = year - j;
    let comp_month = month + 12 * j;
    let comp_day = day - 1;
    let century = comp_year.div_euclid(100);
    let y_star = (1461 * comp_year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - EPOCH_COMPUTATIONAL_RATA_DIE
}

fn ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let rata_die = (epoch_days
        + EPOCH_COMPUTATIONAL_RATA_DIE
        + DAYS_IN_A_400Y_CYCLE as i32 * SHIFT_CYCLES) as u32;

    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE;
    let n_two = (n_one % DAYS_IN_A_400Y_CYCLE) | 3;
    let year_of_century = ((376_287_347 * u64::from(n_two)) / TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    let j = u32::from(day_of_year >= 306);
    let year = (100 * century + year_of_century + j) as i32 - 400 * SHIFT_CYCLES;
    (year, (month - 12 * j) as u8, (day + 1) as u8)
}

#[inline]
fn balance_iso_year_month(year: i32, month: i32) -> (i32, i32) {
    let y = year + (month - 1).div_euclid(12);
    let m = (month - 1).rem_euclid(12) + 1;
    (y, m)
}

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given Gregorian month.
pub(crate) fn iso_days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

#[inline]
// Determines if the month and day are valid for the given year.
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=iso_days_in_month(year, month)).contains(&day)
}

#[inline]
fn is_valid_time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> bool {
    hour <= 23 && minute <= 59 && second <= 59 && nanosecond < NS_PER_SECOND as u32
}

#[inline]
fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_anchors() {
        assert_eq!(IsoDate::new_unchecked(1970, 1, 1).to_epoch_days(), 0);
        assert_eq!(IsoDate::new_unchecked(1943, 4, 14).to_epoch_days(), -9759);
        assert_eq!(IsoDate::new_unchecked(2024, 1, 1).to_epoch_days(), 19_723);
        assert_eq!(IsoDate::new_unchecked(1, 1, 1).to_epoch_days(), -719_162);
        assert_eq!(IsoDate::new_unchecked(9999, 12, 31).to_epoch_days(), 2_932_896);

        assert_eq!(IsoDate::from_epoch_days(0), IsoDate::new_unchecked(1970, 1, 1));
        assert_eq!(IsoDate::from_epoch_days(-1), IsoDate::new_unchecked(1969, 12, 31));
        assert_eq!(
            IsoDate::from_epoch_days(-719_163),
            IsoDate::new_unchecked(0, 12, 31)
        );
    }

    #[test]
    fn leap_day_round_trip() {
        for date in [
            IsoDate::new_unchecked(2000, 2, 29),
            IsoDate::new_unchecked(2024, 2, 29),
            IsoDate::new_unchecked(1900, 3, 1),
        ] {
            assert_eq!(IsoDate::from_epoch_days(date.to_epoch_days()), date);
        }
        assert!(IsoDate::new(1900, 2, 29).is_err());
        assert!(IsoDate::new(2023, 2, 29).is_err());
        assert!(IsoDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn balance_overflowing_fields() {
        assert_eq!(IsoDate::balance(2023, 13, 1), IsoDate::new_unchecked(2024, 1, 1));
        assert_eq!(IsoDate::balance(2024, 1, 0), IsoDate::new_unchecked(2023, 12, 31));
        assert_eq!(IsoDate::balance(2024, 2, 30), IsoDate::new_unchecked(2024, 3, 1));
    }

    #[test]
    fn add_minutes_crosses_midnight() {
        let dt = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2024, 1, 1),
            IsoTime::midnight(),
        );
        let shifted = dt.add_minutes(-345);
        assert_eq!(shifted.date, IsoDate::new_unchecked(2023, 12, 31));
        assert_eq!(shifted.time, IsoTime::new_unchecked(18, 15, 0, 0));

        let back = shifted.add_minutes(345);
        assert_eq!(back, dt);
    }

    #[test]
    fn add_minutes_at_supported_edges() {
        let first = IsoDateTime::new(IsoDate::new(1, 1, 1).unwrap(), IsoTime::midnight()).unwrap();
        let before = first.add_minutes(-345);
        assert_eq!(before.date, IsoDate::new_unchecked(0, 12, 31));
        assert!(before.date.is_valid());
        assert_eq!(before.add_minutes(345), first);

        let last = IsoDateTime::new(
            IsoDate::new(9999, 12, 31).unwrap(),
            IsoTime::new(23, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let after = last.add_minutes(345);
        assert_eq!(after.date, IsoDate::new_unchecked(10_000, 1, 1));
        assert!(after.date.is_valid());
        assert_eq!(after.add_minutes(-345), last);

        assert!(IsoDate::new(0, 12, 31).is_err());
        assert!(IsoDate::new(10_000, 1, 1).is_err());
    }

    #[test]
    fn epoch_nanoseconds_with_offset() {
        let dt = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(1970, 1, 1),
            IsoTime::new_unchecked(5, 45, 0, 0),
        );
        assert_eq!(dt.to_epoch_nanoseconds(345).as_i128(), 0);

        let utc = IsoDateTime::from_epoch_nanoseconds(EpochNanoseconds::from(0), 0).unwrap();
        assert_eq!(utc.date, IsoDate::new_unchecked(1970, 1, 1));
        assert_eq!(utc.time, IsoTime::midnight());

        let nepal = IsoDateTime::from_epoch_nanoseconds(EpochNanoseconds::from(0), 345).unwrap();
        assert_eq!(nepal, dt);
    }

    #[test]
    fn time_validation() {
        assert!(IsoTime::new(23, 59, 59, 999_999_999).is_ok());
        assert!(IsoTime::new(24, 0, 0, 0).is_err());
        assert!(IsoTime::new(0, 60, 0, 0).is_err());
        assert!(IsoTime::new(0, 0, 0, 1_000_000_000).is_err());
    }
}
