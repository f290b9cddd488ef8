//! The `nepali_rs` crate converts between Gregorian date/times and the
//! Nepali calendar, Bikram Sambat (BS).
//!
//! ```rust
//! use nepali_rs::{to_nepalidate, to_utc_timezone, GregorianDate, GregorianDateTime, Value};
//!
//! // A Gregorian date converts to its Bikram Sambat equivalent.
//! let date = GregorianDate::try_new(2024, 1, 1).unwrap();
//! let nepali = to_nepalidate(date.into()).unwrap().unwrap();
//! assert_eq!((nepali.year(), nepali.month(), nepali.day()), (2080, 9, 16));
//!
//! // Naive timestamps are read as Nepal local time (UTC+05:45).
//! let naive = GregorianDateTime::try_new(2024, 1, 1, 0, 0, 0, 0).unwrap();
//! let Value::DateTime(utc) = to_utc_timezone(naive.into()) else {
//!     unreachable!()
//! };
//! assert_eq!(utc.to_string(), "2023-12-31T18:15:00+00:00");
//! ```
//!
//! The crate is organised around four conversions:
//!
//! - [`to_utc_timezone`] and [`to_nepali_timezone`] normalize a Gregorian
//!   timestamp into a target time zone, passing any other value through.
//! - [`to_nepalidatetime`] and [`to_nepalidate`] coerce any supported
//!   [`Value`] into the Nepali calendar.
//!
//! Timestamps without a time zone are always tagged with a default zone
//! before conversion. The default is supplied by a [`TimeZoneProvider`];
//! the `_with_provider` variants accept a custom one, the others use
//! [`NepalTimeZoneProvider`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod calendar;
pub mod conversion;
pub mod error;
pub mod iso;
pub mod provider;

mod components;
mod epoch_nanoseconds;
mod parsers;

#[cfg(feature = "sys")]
mod sys;

#[doc(inline)]
pub use error::{ErrorKind, NepaliError};

/// The `nepali_rs` result type
pub type NepaliResult<T> = Result<T, NepaliError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::calendar::{NepaliMonth, Weekday};
pub use crate::components::{
    GregorianDate, GregorianDateTime, NepaliDate, NepaliDateTime, TimeZone, UtcOffset, Value,
};
pub use crate::conversion::{
    to_nepali_timezone, to_nepali_timezone_with_provider, to_nepalidate,
    to_nepalidate_with_provider, to_nepalidatetime, to_nepalidatetime_with_provider,
    to_utc_timezone, to_utc_timezone_with_provider,
};
pub use crate::provider::{NepalTimeZoneProvider, TimeZoneProvider};

#[cfg(feature = "sys")]
pub use crate::sys::Now;

/// A library specific trait for unwrapping assertions.
pub(crate) trait NepaliUnwrap {
    type Output;

    /// `nepali_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn nepali_unwrap(self) -> NepaliResult<Self::Output>;
}

impl<T> NepaliUnwrap for Option<T> {
    type Output = T;

    fn nepali_unwrap(self) -> NepaliResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(NepaliError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! nepali_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::NepaliError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::NepaliError::assert());
        }
    };
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds per minute constant: 6e+10
pub const NS_PER_MINUTE: i64 = 60 * NS_PER_SECOND;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i64 = 24 * 60 * NS_PER_MINUTE;
/// Nepal's fixed offset from UTC in minutes: +05:45.
pub const NEPAL_OFFSET_MINUTES: i16 = 5 * 60 + 45;
