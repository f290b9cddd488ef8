//! This module implements date/time parsing and `Writeable` formatting.
//!
//! Gregorian strings are parsed with `ixdtf` as RFC 9557 date/times.
//! Bikram Sambat strings use a small dedicated grammar, since their days
//! may exceed what a Gregorian parser accepts:
//!
//! ```text
//! NepaliDateTime := Year "-" Month "-" Day [ ("T" | " ") Hour ":" Minute [ ":" Second [ "." Fraction ] ] ]
//! ```

use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{IxdtfParseRecord, UtcOffsetRecordOrZ},
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    NepaliError, NepaliResult, TimeZone, UtcOffset,
};

// ==== Gregorian parsing ====

/// The result of parsing a Gregorian date/time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedGregorian {
    pub(crate) iso: IsoDateTime,
    pub(crate) timezone: Option<TimeZone>,
}

/// Parses an RFC 9557 date or date-time string.
pub(crate) fn parse_gregorian(source: &str) -> NepaliResult<ParsedGregorian> {
    let record = IxdtfParser::from_str(source).parse()?;
    let timezone = resolve_timezone(&record)?;

    let date = record
        .date
        .ok_or(NepaliError::syntax().with_message("a date is required."))?;
    let date = IsoDate::new(date.year, date.month, date.day)?;
    let time = match record.time {
        Some(time) => IsoTime::from_time_record(time)?,
        None => IsoTime::midnight(),
    };

    Ok(ParsedGregorian {
        iso: IsoDateTime::new(date, time)?,
        timezone,
    })
}

/// Resolves the time zone from the offset and annotation of a parse record.
///
/// A bracketed annotation wins over the offset, but both must agree.
fn resolve_timezone(record: &IxdtfParseRecord<'_, Utf8>) -> NepaliResult<Option<TimeZone>> {
    let offset = match record.offset {
        Some(UtcOffsetRecordOrZ::Z) => Some(TimeZone::Utc),
        Some(UtcOffsetRecordOrZ::Offset(offset)) => {
            Some(TimeZone::from(UtcOffset::from_offset_record(offset)?))
        }
        None => None,
    };
    let annotation = match &record.tz {
        Some(annotation) => Some(TimeZone::try_from_record(annotation.tz.clone())?),
        None => None,
    };

    match (offset, annotation) {
        (Some(offset), Some(annotated)) if offset.offset() != annotated.offset() => Err(
            NepaliError::range().with_message("UTC offset does not match the time zone annotation."),
        ),
        (_, Some(annotated)) => Ok(Some(annotated)),
        (offset, None) => Ok(offset),
    }
}

// ==== Bikram Sambat parsing ====

/// The raw fields of a Bikram Sambat date/time string; not yet validated
/// against the month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedNepali {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) time: Option<IsoTime>,
}

struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, expected: u8) -> NepaliResult<()> {
        if self.eat(expected) {
            return Ok(());
        }
        Err(NepaliError::syntax().with_message("unexpected character in Nepali date string."))
    }

    /// Reads exactly `digits` ASCII digits.
    fn digits(&mut self, digits: usize) -> NepaliResult<u32> {
        let end = self.pos + digits;
        let slice = self
            .source
            .get(self.pos..end)
            .ok_or(NepaliError::syntax().with_message("Nepali date string ended abruptly."))?;
        let mut value = 0u32;
        for digit in slice {
            if !digit.is_ascii_digit() {
                return Err(NepaliError::syntax().with_message("expected a digit."));
            }
            value = value * 10 + u32::from(digit - b'0');
        }
        self.pos = end;
        Ok(value)
    }

    /// Reads a fraction of 1 to 9 digits as nanoseconds.
    fn fraction(&mut self) -> NepaliResult<u32> {
        let mut nanos = 0u32;
        let mut count = 0;
        while let Some(digit) = self.peek().filter(u8::is_ascii_digit) {
            if count == 9 {
                return Err(
                    NepaliError::syntax().with_message("fraction exceeds nanosecond precision.")
                );
            }
            nanos = nanos * 10 + u32::from(digit - b'0');
            count += 1;
            self.pos += 1;
        }
        if count == 0 {
            return Err(NepaliError::syntax().with_message("expected fractional digits."));
        }
        Ok(nanos * 10u32.pow(9 - count))
    }

    fn is_done(&self) -> bool {
        self.pos == self.source.len()
    }
}

/// Parses a Bikram Sambat `YYYY-MM-DD[THH:MM[:SS[.fff]]]` string.
pub(crate) fn parse_nepali(source: &str) -> NepaliResult<ParsedNepali> {
    let mut cursor = Cursor::new(source);
    let year = cursor.digits(4)? as i32;
    cursor.expect(b'-')?;
    let month = cursor.digits(2)? as u8;
    cursor.expect(b'-')?;
    let day = cursor.digits(2)? as u8;

    let time = if cursor.eat(b'T') || cursor.eat(b't') || cursor.eat(b' ') {
        let hour = cursor.digits(2)? as u8;
        cursor.expect(b':')?;
        let minute = cursor.digits(2)? as u8;
        let (second, nanosecond) = if cursor.eat(b':') {
            let second = cursor.digits(2)? as u8;
            let nanosecond = if cursor.eat(b'.') || cursor.eat(b',') {
                cursor.fraction()?
            } else {
                0
            };
            (second, nanosecond)
        } else {
            (0, 0)
        };
        Some(IsoTime::new(hour, minute, second, nanosecond)?)
    } else {
        None
    };

    if !cursor.is_done() {
        return Err(NepaliError::syntax().with_message("unexpected trailing characters."));
    }

    Ok(ParsedNepali {
        year,
        month,
        day,
        time,
    })
}

// ==== Formatting ====

pub(crate) fn write_padded_u8<W: core::fmt::Write + ?Sized>(
    num: u8,
    sink: &mut W,
) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        let digits = year.unsigned_abs();
        for divisor in [1000, 100, 10, 1] {
            sink.write_char(char::from(b'0' + ((digits / divisor) % 10) as u8))?;
        }
        return Ok(());
    }
    // Expanded years carry a sign and six digits.
    if year < 0 {
        sink.write_char('-')?;
    } else {
        sink.write_char('+')?;
    }
    let digits = year.unsigned_abs();
    for divisor in [100_000, 10_000, 1000, 100, 10, 1] {
        sink.write_char(char::from(b'0' + ((digits / divisor) % 10) as u8))?;
    }
    Ok(())
}

/// Writes nanoseconds without trailing zeros.
fn write_nanosecond<W: core::fmt::Write + ?Sized>(
    nanosecond: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let mut value = nanosecond;
    let mut digits = 9;
    while value % 10 == 0 && digits > 1 {
        value /= 10;
        digits -= 1;
    }
    let mut divisor = 10u32.pow(digits - 1);
    while divisor > 0 {
        sink.write_char(char::from(b'0' + ((value / divisor) % 10) as u8))?;
        divisor /= 10;
    }
    Ok(())
}

#[derive(Debug)]
pub(crate) struct FormattableDate(pub i32, pub u8, pub u8);

impl From<IsoDate> for FormattableDate {
    fn from(value: IsoDate) -> Self {
        Self(value.year, value.month, value.day)
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if (0..=9999).contains(&self.0) {
            LengthHint::exact(10)
        } else {
            LengthHint::exact(13)
        }
    }
}

#[derive(Debug)]
pub(crate) struct FormattableTime(pub IsoTime);

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.0.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.0.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.0.second, sink)?;
        if self.0.nanosecond == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        write_nanosecond(self.0.nanosecond, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.0.nanosecond == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 18)
    }
}

/// A date, time, and optional UTC offset, written as `YYYY-MM-DDTHH:MM:SS[.fff][+HH:MM]`.
#[derive(Debug)]
pub(crate) struct FormattableDateTime {
    date: FormattableDate,
    time: FormattableTime,
    offset: Option<UtcOffset>,
}

impl FormattableDateTime {
    pub(crate) fn new(iso: IsoDateTime, offset: Option<UtcOffset>) -> Self {
        Self {
            date: FormattableDate::from(iso.date),
            time: FormattableTime(iso.time),
            offset,
        }
    }

    pub(crate) fn from_parts(date: FormattableDate, time: IsoTime) -> Self {
        Self {
            date,
            time: FormattableTime(time),
            offset: None,
        }
    }
}

impl Writeable for FormattableDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)?;
        match self.offset {
            Some(offset) => offset.write_to(sink),
            None => Ok(()),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let offset = self
            .offset
            .map_or(LengthHint::exact(0), |o| o.writeable_length_hint());
        self.date.writeable_length_hint() + 1 + self.time.writeable_length_hint() + offset
    }
}

impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableDateTime);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nepali_grammar() {
        let parsed = parse_nepali("2080-02-32").unwrap();
        assert_eq!((parsed.year, parsed.month, parsed.day), (2080, 2, 32));
        assert_eq!(parsed.time, None);

        let parsed = parse_nepali("2080-09-16T10:20").unwrap();
        assert_eq!(parsed.time, Some(IsoTime::new(10, 20, 0, 0).unwrap()));

        let parsed = parse_nepali("2080-09-16 10:20:30.25").unwrap();
        assert_eq!(parsed.time, Some(IsoTime::new(10, 20, 30, 250_000_000).unwrap()));

        assert!(parse_nepali("2080-9-16").is_err());
        assert!(parse_nepali("2080-09-16T25:00").is_err());
        assert!(parse_nepali("2080-09-16Z").is_err());
        assert!(parse_nepali("").is_err());
    }

    #[test]
    fn gregorian_offset_must_match_annotation() {
        assert!(parse_gregorian("2024-01-01T00:00+05:45[Asia/Kathmandu]").is_ok());
        assert!(parse_gregorian("2024-01-01T00:00+01:00[Asia/Kathmandu]").is_err());
        assert!(parse_gregorian("2024-01-01T00:00[America/New_York]").is_err());
        assert!(parse_gregorian("2024-02-30").is_err());
    }

    #[test]
    fn time_formatting() {
        let time = IsoTime::new(1, 2, 3, 0).unwrap();
        assert_eq!(FormattableTime(time).to_string(), "01:02:03");
        let time = IsoTime::new(1, 2, 3, 120_000_000).unwrap();
        assert_eq!(FormattableTime(time).to_string(), "01:02:03.12");
        let time = IsoTime::new(1, 2, 3, 5).unwrap();
        assert_eq!(FormattableTime(time).to_string(), "01:02:03.000000005");
    }

    #[test]
    fn expanded_year_formatting() {
        assert_eq!(FormattableDate(0, 12, 31).to_string(), "0000-12-31");
        assert_eq!(FormattableDate(10_000, 1, 1).to_string(), "+010000-01-01");
    }
}
