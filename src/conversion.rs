//! Conversion of arbitrary [`Value`]s into normalized Gregorian timestamps
//! and into the Nepali calendar.
//!
//! Every function here treats a naive [`GregorianDateTime`] the same way:
//! it is tagged with the default time zone of a [`TimeZoneProvider`] before
//! anything else happens. The unsuffixed functions use
//! [`NepalTimeZoneProvider`].

use crate::{
    provider::{NepalTimeZoneProvider, TimeZoneProvider},
    NepaliDate, NepaliDateTime, NepaliError, NepaliResult, TimeZone, Value,
};

/// Re-expresses a Gregorian timestamp in `target`. Every other value is
/// returned unchanged.
pub fn normalize_timezone_with_provider(
    value: Value,
    target: TimeZone,
    provider: &impl TimeZoneProvider,
) -> Value {
    match value {
        Value::DateTime(datetime) => {
            Value::DateTime(datetime.to_timezone_with_provider(target, provider))
        }
        other => other,
    }
}

/// Normalizes a Gregorian timestamp to UTC, reading a naive value as
/// Nepal local time.
///
/// ```rust
/// use nepali_rs::{to_utc_timezone, GregorianDateTime, Value};
///
/// let naive = GregorianDateTime::try_new(2024, 1, 1, 0, 0, 0, 0).unwrap();
/// let Value::DateTime(utc) = to_utc_timezone(naive.into()) else {
///     unreachable!()
/// };
/// assert_eq!(utc.to_string(), "2023-12-31T18:15:00+00:00");
/// assert_eq!(to_utc_timezone(Value::None), Value::None);
/// ```
pub fn to_utc_timezone(value: Value) -> Value {
    to_utc_timezone_with_provider(value, &NepalTimeZoneProvider)
}

/// Normalizes a Gregorian timestamp to UTC with a custom default time zone.
pub fn to_utc_timezone_with_provider(value: Value, provider: &impl TimeZoneProvider) -> Value {
    normalize_timezone_with_provider(value, TimeZone::Utc, provider)
}

/// Normalizes a Gregorian timestamp to Nepal local time. A naive value keeps
/// its wall clock and gains the +05:45 offset.
pub fn to_nepali_timezone(value: Value) -> Value {
    to_nepali_timezone_with_provider(value, &NepalTimeZoneProvider)
}

/// Normalizes a Gregorian timestamp to Nepal local time with a custom
/// default time zone.
pub fn to_nepali_timezone_with_provider(value: Value, provider: &impl TimeZoneProvider) -> Value {
    normalize_timezone_with_provider(value, TimeZone::Nepal, provider)
}

/// Coerces a value into a [`NepaliDateTime`].
///
/// `None` and the empty string produce `Ok(None)`. Integers and non-empty
/// strings are rejected with [`ErrorKind::InvalidInputType`](crate::ErrorKind::InvalidInputType).
///
/// ```rust
/// use nepali_rs::{to_nepalidatetime, ErrorKind, GregorianDate, Value};
///
/// let date = GregorianDate::try_new(2024, 1, 1).unwrap();
/// let nepali = to_nepalidatetime(date.into()).unwrap().unwrap();
/// assert_eq!(nepali.to_string(), "2080-09-16T00:00:00");
///
/// assert_eq!(to_nepalidatetime(Value::from("")).unwrap(), None);
/// let err = to_nepalidatetime(Value::Integer(42)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidInputType);
/// ```
pub fn to_nepalidatetime(value: Value) -> NepaliResult<Option<NepaliDateTime>> {
    to_nepalidatetime_with_provider(value, &NepalTimeZoneProvider)
}

/// Coerces a value into a [`NepaliDateTime`] with a custom default time zone.
pub fn to_nepalidatetime_with_provider(
    value: Value,
    provider: &impl TimeZoneProvider,
) -> NepaliResult<Option<NepaliDateTime>> {
    #[cfg(feature = "log")]
    let type_name = value.type_name();
    let datetime = match value {
        Value::NepaliDateTime(datetime) => datetime,
        Value::NepaliDate(date) => NepaliDateTime::from_nepali_date(date),
        Value::DateTime(datetime) => {
            NepaliDateTime::from_gregorian_datetime_with_provider(datetime, provider)?
        }
        Value::Date(date) => NepaliDateTime::from_gregorian_date(date)?,
        absent if absent.is_empty() => return Ok(None),
        _ => {
            #[cfg(feature = "log")]
            log::debug!("rejecting {type_name} input for Nepali conversion");
            return Err(NepaliError::invalid_input_type());
        }
    };
    Ok(Some(datetime))
}

/// Coerces a value into a [`NepaliDate`]. Accepts the same inputs as
/// [`to_nepalidatetime`] and drops the time of day.
pub fn to_nepalidate(value: Value) -> NepaliResult<Option<NepaliDate>> {
    to_nepalidate_with_provider(value, &NepalTimeZoneProvider)
}

/// Coerces a value into a [`NepaliDate`] with a custom default time zone.
pub fn to_nepalidate_with_provider(
    value: Value,
    provider: &impl TimeZoneProvider,
) -> NepaliResult<Option<NepaliDate>> {
    Ok(to_nepalidatetime_with_provider(value, provider)?.map(|datetime| datetime.date()))
}
