//! Access to the system clock, behind the `sys` feature.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{
    time::EpochNanoseconds, GregorianDateTime, NepaliDate, NepaliDateTime, NepaliError,
    NepaliResult, TimeZone,
};

/// The current system time, in either calendar.
///
/// ```rust
/// use nepali_rs::Now;
///
/// let today = Now::nepali_date().unwrap();
/// assert!(today.year() >= 2080);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Now;

impl Now {
    /// Returns the current instant.
    pub fn epoch_nanoseconds() -> NepaliResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }

    /// Returns the current Nepal local date and time.
    pub fn nepali_datetime() -> NepaliResult<NepaliDateTime> {
        NepaliDateTime::from_epoch_nanoseconds(get_system_nanoseconds()?)
    }

    /// Returns the current Nepal local date.
    pub fn nepali_date() -> NepaliResult<NepaliDate> {
        Self::nepali_datetime().map(|datetime| datetime.date())
    }

    /// Returns the current time as an aware UTC timestamp.
    pub fn utc_datetime() -> NepaliResult<GregorianDateTime> {
        GregorianDateTime::from_epoch_nanoseconds(get_system_nanoseconds()?, TimeZone::Utc)
    }

    /// Returns the current time as an aware Nepal local timestamp.
    pub fn nepal_datetime() -> NepaliResult<GregorianDateTime> {
        GregorianDateTime::from_epoch_nanoseconds(get_system_nanoseconds()?, TimeZone::Nepal)
    }
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> NepaliResult<EpochNanoseconds> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| NepaliError::general("Error fetching system time"))?;
    i128::try_from(duration.as_nanos())
        .map(EpochNanoseconds::from)
        .map_err(|_| NepaliError::general("System time exceeds the supported range"))
}
