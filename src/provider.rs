//! The `TimeZoneProvider` trait.
//!
//! A provider supplies the time zone that is attached to naive Gregorian
//! timestamps before they are converted. Conversions that need one take a
//! `&impl TimeZoneProvider` in their `_with_provider` variant and use
//! [`NepalTimeZoneProvider`] otherwise.

use crate::TimeZone;

/// The `TimeZoneProvider` trait supplies the default time zone for naive values.
pub trait TimeZoneProvider {
    /// Returns the time zone assumed for timestamps that carry none.
    fn default_time_zone(&self) -> TimeZone;
}

/// The default provider: naive timestamps are Nepal local time (UTC+05:45).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NepalTimeZoneProvider;

impl TimeZoneProvider for NepalTimeZoneProvider {
    #[inline]
    fn default_time_zone(&self) -> TimeZone {
        TimeZone::Nepal
    }
}

/// A fixed `TimeZone` acts as a provider of itself.
impl TimeZoneProvider for TimeZone {
    #[inline]
    fn default_time_zone(&self) -> TimeZone {
        *self
    }
}

impl<P: TimeZoneProvider + ?Sized> TimeZoneProvider for &P {
    #[inline]
    fn default_time_zone(&self) -> TimeZone {
        (**self).default_time_zone()
    }
}
