//! This module implements `TimeZone` and `UtcOffset`.

use alloc::string::String;
use core::str::FromStr;

use ixdtf::{
    encoding::Utf8,
    parsers::TimeZoneParser,
    records::{MinutePrecisionOffset, Sign, TimeZoneRecord, UtcOffsetRecord},
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{parsers::write_padded_u8, NepaliError, NepaliResult, NEPAL_OFFSET_MINUTES};

const MINUTES_PER_DAY: i16 = 24 * 60;

/// A fixed offset from UTC, with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i16);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);
    /// Nepal Standard Time, UTC+05:45.
    pub const NEPAL: Self = Self(NEPAL_OFFSET_MINUTES);

    /// Creates a `UtcOffset` from a count of minutes east of UTC.
    pub fn from_minutes(minutes: i16) -> NepaliResult<Self> {
        if minutes.abs() >= MINUTES_PER_DAY {
            return Err(NepaliError::range().with_message("UTC offset must be less than a day."));
        }
        Ok(Self(minutes))
    }

    /// Returns the offset in minutes east of UTC.
    #[inline]
    #[must_use]
    pub fn minutes(&self) -> i16 {
        self.0
    }

    pub(crate) fn from_minute_precision(record: MinutePrecisionOffset) -> NepaliResult<Self> {
        let minutes = i16::from(record.hour) * 60 + i16::from(record.minute);
        match record.sign {
            Sign::Negative => Self::from_minutes(-minutes),
            Sign::Positive => Self::from_minutes(minutes),
        }
    }

    pub(crate) fn from_offset_record(record: UtcOffsetRecord) -> NepaliResult<Self> {
        if record.second().is_some_and(|s| s != 0) || record.fraction().is_some() {
            return Err(
                NepaliError::range().with_message("sub-minute UTC offsets are not supported.")
            );
        }
        Self::from_minute_precision(MinutePrecisionOffset {
            sign: record.sign(),
            hour: record.hour(),
            minute: record.minute(),
        })
    }
}

impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.0 < 0 {
            sink.write_char('-')?;
        } else {
            sink.write_char('+')?;
        }
        let minutes = self.0.unsigned_abs();
        write_padded_u8((minutes / 60) as u8, sink)?;
        sink.write_char(':')?;
        write_padded_u8((minutes % 60) as u8, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6)
    }
}

impl_display_with_writeable!(UtcOffset);

impl FromStr for UtcOffset {
    type Err = NepaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = TimeZoneParser::from_str(s).parse_offset()?;
        Self::from_offset_record(record)
    }
}

/// The time zone attached to an aware [`GregorianDateTime`](crate::GregorianDateTime).
///
/// Only fixed-offset zones are represented; Nepal has observed a constant
/// UTC+05:45 since 1986.
///
/// `Offset(UtcOffset::NEPAL)` and `Nepal` denote the same zone but are
/// distinct values. Parsing, `From<UtcOffset>` and
/// [`GregorianDateTime`](crate::GregorianDateTime) always use the named
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZone {
    /// Coordinated Universal Time.
    Utc,
    /// Nepal Standard Time, `Asia/Kathmandu`.
    Nepal,
    /// An arbitrary fixed offset.
    Offset(UtcOffset),
}

impl TimeZone {
    /// Returns the UTC offset of this time zone.
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        match self {
            Self::Utc => UtcOffset::UTC,
            Self::Nepal => UtcOffset::NEPAL,
            Self::Offset(offset) => *offset,
        }
    }

    /// Returns the UTC offset of this time zone in minutes east of UTC.
    #[inline]
    #[must_use]
    pub fn offset_minutes(&self) -> i16 {
        self.offset().minutes()
    }

    /// Returns the identifier of this time zone, e.g. `Asia/Kathmandu` or `+05:30`.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.write_to_string().into_owned()
    }

    /// Resolves a time zone identifier. Identifiers are compared case-insensitively.
    pub(crate) fn try_from_identifier_bytes(identifier: &[u8]) -> NepaliResult<Self> {
        const UTC_NAMES: [&[u8]; 4] = [b"UTC", b"Etc/UTC", b"Etc/GMT", b"GMT"];
        const NEPAL_NAMES: [&[u8]; 2] = [b"Asia/Kathmandu", b"Asia/Katmandu"];

        if UTC_NAMES.iter().any(|n| n.eq_ignore_ascii_case(identifier)) {
            return Ok(Self::Utc);
        }
        if NEPAL_NAMES.iter().any(|n| n.eq_ignore_ascii_case(identifier)) {
            return Ok(Self::Nepal);
        }
        Err(NepaliError::range().with_message("Unsupported time zone identifier."))
    }

    /// Returns the named zone for offsets that equal UTC or Nepal time.
    #[must_use]
    pub(crate) fn canonical(self) -> Self {
        match self {
            Self::Offset(UtcOffset::UTC) => Self::Utc,
            Self::Offset(UtcOffset::NEPAL) => Self::Nepal,
            other => other,
        }
    }

    pub(crate) fn try_from_record(record: TimeZoneRecord<'_, Utf8>) -> NepaliResult<Self> {
        match record {
            TimeZoneRecord::Name(name) => Self::try_from_identifier_bytes(name),
            TimeZoneRecord::Offset(offset) => {
                UtcOffset::from_minute_precision(offset).map(Self::from)
            }
            _ => Err(NepaliError::range().with_message("Unsupported time zone record.")),
        }
    }
}

impl From<UtcOffset> for TimeZone {
    /// `+00:00` becomes [`TimeZone::Utc`] and `+05:45` becomes [`TimeZone::Nepal`].
    fn from(value: UtcOffset) -> Self {
        Self::Offset(value).canonical()
    }
}

impl Writeable for TimeZone {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self {
            Self::Utc => sink.write_str("UTC"),
            Self::Nepal => sink.write_str("Asia/Kathmandu"),
            Self::Offset(offset) => offset.write_to(sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self {
            Self::Utc => LengthHint::exact(3),
            Self::Nepal => LengthHint::exact(14),
            Self::Offset(offset) => offset.writeable_length_hint(),
        }
    }
}

impl_display_with_writeable!(TimeZone);

impl FromStr for TimeZone {
    type Err = NepaliError;

    /// Parses an IANA name (`UTC`, `Asia/Kathmandu`) or a minute precision offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Z" {
            return Ok(Self::Utc);
        }
        let record = TimeZoneParser::from_str(s).parse_identifier()?;
        Self::try_from_record(record)
    }
}
