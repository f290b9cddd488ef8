//! Bikram Sambat calendar arithmetic.
//!
//! Bikram Sambat month lengths are not rule based; they follow the
//! published almanac (panchang). This module carries a month length table
//! for BS years [`BS_MIN_YEAR`] through [`BS_MAX_YEAR`], anchored at
//! BS 2000-01-01 which fell on Gregorian 1943-04-14.
//!
//! ```rust
//! use nepali_rs::calendar;
//!
//! assert_eq!(calendar::days_in_month(2080, 2), Some(32));
//! assert_eq!(calendar::days_in_year(2081), Some(366));
//! assert_eq!(calendar::days_in_month(2200, 1), None);
//! ```

use tinystr::{tinystr, TinyAsciiStr};

use crate::{nepali_assert, NepaliError, NepaliResult};

/// The first Bikram Sambat year covered by the month table.
pub const BS_MIN_YEAR: i32 = 2000;
/// The last Bikram Sambat year covered by the month table.
pub const BS_MAX_YEAR: i32 = 2090;

/// Epoch days (days since 1970-01-01) of BS 2000-01-01, i.e. 1943-04-14.
const BS_EPOCH_DAYS: i32 = -9759;

const BS_MONTH_DAYS: [[u8; 12]; (BS_MAX_YEAR - BS_MIN_YEAR + 1) as usize] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

/// Returns the number of days in `month` of BS `year`, or `None` if either
/// is outside the supported table.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    let months = year_row(year)?;
    months.get(usize::from(month).checked_sub(1)?).copied()
}

/// Returns the number of days in BS `year`, or `None` if the year is not supported.
pub fn days_in_year(year: i32) -> Option<u16> {
    year_row(year).map(|months| months.iter().map(|d| u16::from(*d)).sum())
}

/// Returns whether the year, month, and day form a valid Bikram Sambat date.
pub fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    days_in_month(year, month).is_some_and(|max| (1..=max).contains(&day))
}

fn year_row(year: i32) -> Option<&'static [u8; 12]> {
    if !(BS_MIN_YEAR..=BS_MAX_YEAR).contains(&year) {
        return None;
    }
    BS_MONTH_DAYS.get((year - BS_MIN_YEAR) as usize)
}

/// Converts a Bikram Sambat date into days since 1970-01-01.
pub(crate) fn to_epoch_days(year: i32, month: u8, day: u8) -> NepaliResult<i32> {
    if !is_valid_date(year, month, day) {
        return Err(NepaliError::range().with_message("not a valid Bikram Sambat date."));
    }
    let preceding_years: i32 = (BS_MIN_YEAR..year)
        .filter_map(days_in_year)
        .map(i32::from)
        .sum();
    let preceding_months: i32 = (1..month)
        .filter_map(|m| days_in_month(year, m))
        .map(i32::from)
        .sum();
    Ok(BS_EPOCH_DAYS + preceding_years + preceding_months + i32::from(day) - 1)
}

/// Converts days since 1970-01-01 into a Bikram Sambat `(year, month, day)`.
pub(crate) fn from_epoch_days(epoch_days: i32) -> NepaliResult<(i32, u8, u8)> {
    let mut remaining = epoch_days
        .checked_sub(BS_EPOCH_DAYS)
        .ok_or_else(out_of_range)?;
    if remaining < 0 {
        return Err(out_of_range());
    }
    for (year, months) in (BS_MIN_YEAR..).zip(BS_MONTH_DAYS.iter()) {
        for (month, length) in (1u8..).zip(months.iter()) {
            let length = i32::from(*length);
            if remaining < length {
                let day = (remaining + 1) as u8;
                nepali_assert!(
                    is_valid_date(year, month, day),
                    "computed an invalid BS date {year}-{month}-{day}"
                );
                return Ok((year, month, day));
            }
            remaining -= length;
        }
    }
    Err(out_of_range())
}

fn out_of_range() -> NepaliError {
    NepaliError::range().with_message("date is outside the supported Bikram Sambat range.")
}

/// The twelve months of the Bikram Sambat year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NepaliMonth {
    Baishakh = 1,
    Jestha,
    Ashadh,
    Shrawan,
    Bhadra,
    Ashwin,
    Kartik,
    Mangsir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl NepaliMonth {
    /// Returns the month for an ordinal in `1..=12`.
    pub fn from_ordinal(month: u8) -> Option<Self> {
        let month = match month {
            1 => Self::Baishakh,
            2 => Self::Jestha,
            3 => Self::Ashadh,
            4 => Self::Shrawan,
            5 => Self::Bhadra,
            6 => Self::Ashwin,
            7 => Self::Kartik,
            8 => Self::Mangsir,
            9 => Self::Poush,
            10 => Self::Magh,
            11 => Self::Falgun,
            12 => Self::Chaitra,
            _ => return None,
        };
        Some(month)
    }

    /// Returns the month ordinal in `1..=12`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the romanized month name.
    pub fn name(self) -> TinyAsciiStr<8> {
        match self {
            Self::Baishakh => tinystr!(8, "Baishakh"),
            Self::Jestha => tinystr!(8, "Jestha"),
            Self::Ashadh => tinystr!(8, "Ashadh"),
            Self::Shrawan => tinystr!(8, "Shrawan"),
            Self::Bhadra => tinystr!(8, "Bhadra"),
            Self::Ashwin => tinystr!(8, "Ashwin"),
            Self::Kartik => tinystr!(8, "Kartik"),
            Self::Mangsir => tinystr!(8, "Mangsir"),
            Self::Poush => tinystr!(8, "Poush"),
            Self::Magh => tinystr!(8, "Magh"),
            Self::Falgun => tinystr!(8, "Falgun"),
            Self::Chaitra => tinystr!(8, "Chaitra"),
        }
    }

    /// Returns the month name in Devanagari.
    pub fn devanagari_name(self) -> &'static str {
        match self {
            Self::Baishakh => "बैशाख",
            Self::Jestha => "जेठ",
            Self::Ashadh => "असार",
            Self::Shrawan => "साउन",
            Self::Bhadra => "भदौ",
            Self::Ashwin => "असोज",
            Self::Kartik => "कात्तिक",
            Self::Mangsir => "मंसिर",
            Self::Poush => "पुस",
            Self::Magh => "माघ",
            Self::Falgun => "फागुन",
            Self::Chaitra => "चैत",
        }
    }
}

/// A day of the week. The Nepali week starts on Sunday (Aaitabar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the weekday of a day counted from 1970-01-01, a Thursday.
    pub(crate) fn from_epoch_days(epoch_days: i32) -> Self {
        match (epoch_days + 4).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Days since Sunday, in `0..=6`.
    pub fn days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the English weekday name.
    pub fn name(self) -> TinyAsciiStr<9> {
        match self {
            Self::Sunday => tinystr!(9, "Sunday"),
            Self::Monday => tinystr!(9, "Monday"),
            Self::Tuesday => tinystr!(9, "Tuesday"),
            Self::Wednesday => tinystr!(9, "Wednesday"),
            Self::Thursday => tinystr!(9, "Thursday"),
            Self::Friday => tinystr!(9, "Friday"),
            Self::Saturday => tinystr!(9, "Saturday"),
        }
    }

    /// Returns the weekday name in Devanagari.
    pub fn devanagari_name(self) -> &'static str {
        match self {
            Self::Sunday => "आइतबार",
            Self::Monday => "सोमबार",
            Self::Tuesday => "मंगलबार",
            Self::Wednesday => "बुधबार",
            Self::Thursday => "बिहीबार",
            Self::Friday => "शुक्रबार",
            Self::Saturday => "शनिबार",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_anchor_is_new_year_2000() {
        assert_eq!(to_epoch_days(2000, 1, 1).unwrap(), -9759);
        assert_eq!(from_epoch_days(-9759).unwrap(), (2000, 1, 1));
        assert!(from_epoch_days(-9760).is_err());
    }

    #[test]
    fn new_year_anchors() {
        // 2023-04-14, 2024-04-13, and 2020-04-13 respectively.
        assert_eq!(to_epoch_days(2080, 1, 1).unwrap(), 19_461);
        assert_eq!(to_epoch_days(2081, 1, 1).unwrap(), 19_826);
        assert_eq!(to_epoch_days(2077, 1, 1).unwrap(), 18_365);
    }

    #[test]
    fn gregorian_new_year_2024() {
        // 2024-01-01 is epoch day 19_723.
        assert_eq!(from_epoch_days(19_723).unwrap(), (2080, 9, 16));
        assert_eq!(to_epoch_days(2080, 9, 16).unwrap(), 19_723);
    }

    #[test]
    fn last_supported_day() {
        let last = to_epoch_days(BS_MAX_YEAR, 12, 30).unwrap();
        assert_eq!(from_epoch_days(last).unwrap(), (BS_MAX_YEAR, 12, 30));
        assert!(from_epoch_days(last + 1).is_err());
    }

    #[test]
    fn far_future_epoch_days() {
        let err = from_epoch_days(i32::MAX).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Range);
        assert!(from_epoch_days(i32::MAX - 9_000).is_err());
        assert!(from_epoch_days(i32::MIN).is_err());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2080, 2), Some(32));
        assert_eq!(days_in_month(2080, 9), Some(29));
        assert_eq!(days_in_month(2080, 0), None);
        assert_eq!(days_in_month(2080, 13), None);
        assert_eq!(days_in_month(1999, 1), None);
        assert_eq!(days_in_year(2080), Some(365));
        assert!(is_valid_date(2080, 2, 32));
        assert!(!is_valid_date(2080, 1, 32));
        assert!(to_epoch_days(2080, 1, 32).is_err());
    }

    #[test]
    fn every_table_row_is_plausible() {
        for year in BS_MIN_YEAR..=BS_MAX_YEAR {
            let total = days_in_year(year).unwrap();
            assert!((364..=367).contains(&total), "{year} has {total} days");
            for month in 1..=12 {
                let len = days_in_month(year, month).unwrap();
                assert!((29..=32).contains(&len));
            }
        }
    }

    #[test]
    fn weekdays() {
        assert_eq!(Weekday::from_epoch_days(0), Weekday::Thursday);
        assert_eq!(Weekday::from_epoch_days(19_723), Weekday::Monday);
        assert_eq!(Weekday::from_epoch_days(-1), Weekday::Wednesday);
        assert_eq!(Weekday::Monday.name(), "Monday");
        assert_eq!(Weekday::Sunday.devanagari_name(), "आइतबार");
    }

    #[test]
    fn month_names() {
        assert_eq!(NepaliMonth::from_ordinal(9), Some(NepaliMonth::Poush));
        assert_eq!(NepaliMonth::Poush.name(), "Poush");
        assert_eq!(NepaliMonth::Poush.ordinal(), 9);
        assert_eq!(NepaliMonth::Baishakh.devanagari_name(), "बैशाख");
        assert_eq!(NepaliMonth::from_ordinal(0), None);
    }
}
