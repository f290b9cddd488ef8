//! The primary date and time components provided by `nepali_rs`.
//!
//! Gregorian values may carry a [`TimeZone`]; Nepali values are always
//! Nepal local time. [`Value`] is the closed set of inputs accepted by the
//! conversion functions.

mod gregorian;
mod nepali_date;
mod nepali_datetime;
mod timezone;
mod value;

#[doc(inline)]
pub use gregorian::{GregorianDate, GregorianDateTime};
#[doc(inline)]
pub use nepali_date::NepaliDate;
#[doc(inline)]
pub use nepali_datetime::NepaliDateTime;
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
#[doc(inline)]
pub use value::Value;
