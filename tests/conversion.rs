use core::str::FromStr;

use nepali_rs::{
    calendar, to_nepali_timezone, to_nepali_timezone_with_provider, to_nepalidate,
    to_nepalidate_with_provider, to_nepalidatetime, to_nepalidatetime_with_provider,
    to_utc_timezone, ErrorKind, GregorianDate, GregorianDateTime, NepalTimeZoneProvider,
    NepaliDate, NepaliDateTime, TimeZone, TimeZoneProvider, UtcOffset, Value,
};

/// A provider that reads naive timestamps as UTC-05:00.
struct FixedProvider;

impl TimeZoneProvider for FixedProvider {
    fn default_time_zone(&self) -> TimeZone {
        TimeZone::Offset(UtcOffset::from_minutes(-300).unwrap())
    }
}

fn expect_datetime(value: Value) -> GregorianDateTime {
    match value {
        Value::DateTime(datetime) => datetime,
        other => panic!("expected a Gregorian timestamp, got {other:?}"),
    }
}

#[test]
fn naive_timestamp_round_trip() {
    let naive = GregorianDateTime::from_str("2024-01-01T00:00:00").unwrap();

    let utc = expect_datetime(to_utc_timezone(naive.into()));
    assert_eq!(utc.to_string(), "2023-12-31T18:15:00+00:00");

    let local = expect_datetime(to_nepali_timezone(naive.into()));
    assert_eq!(local.to_string(), "2024-01-01T00:00:00+05:45");

    let back = expect_datetime(to_nepali_timezone(Value::DateTime(utc)));
    assert_eq!(back, local);
    assert!(back.is_same_instant(&utc));
}

#[test]
fn aware_timestamps_keep_their_instant() {
    let utc = GregorianDateTime::from_str("2023-12-31T18:15:00Z").unwrap();
    let local = expect_datetime(to_nepali_timezone(utc.into()));
    assert_eq!(local.to_string(), "2024-01-01T00:00:00+05:45");

    let nepali = to_nepalidatetime(utc.into()).unwrap().unwrap();
    assert_eq!(nepali.to_string(), "2080-09-16T00:00:00");
}

#[test]
fn custom_provider_is_honoured_everywhere() {
    let naive = GregorianDateTime::from_str("2024-01-01T00:00").unwrap();

    let local = expect_datetime(to_nepali_timezone_with_provider(naive.into(), &FixedProvider));
    assert_eq!(local.to_string(), "2024-01-01T10:45:00+05:45");

    let nepali = to_nepalidatetime_with_provider(naive.into(), &FixedProvider)
        .unwrap()
        .unwrap();
    assert_eq!((nepali.day(), nepali.hour(), nepali.minute()), (16, 10, 45));

    let date = to_nepalidate_with_provider(naive.into(), &FixedProvider)
        .unwrap()
        .unwrap();
    assert_eq!(date, nepali.date());

    let default = to_nepalidatetime_with_provider(naive.into(), &NepalTimeZoneProvider).unwrap();
    assert_eq!(default, to_nepalidatetime(naive.into()).unwrap());
}

#[test]
fn late_evening_crosses_the_date_line() {
    // 20:00 UTC is already the next day in Kathmandu.
    let utc = GregorianDateTime::from_str("2024-04-12T20:00:00Z").unwrap();
    let date = to_nepalidate(utc.into()).unwrap().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2081, 1, 1));

    let naive = GregorianDateTime::from_str("2024-04-12T20:00:00").unwrap();
    let date = to_nepalidate(naive.into()).unwrap().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2080, 12, 30));
}

#[test]
fn nepali_values_pass_through() {
    let datetime = NepaliDateTime::from_str("2080-02-32T12:30").unwrap();
    assert_eq!(to_nepalidatetime(datetime.into()).unwrap(), Some(datetime));
    assert_eq!(to_nepalidate(datetime.into()).unwrap(), Some(datetime.date()));

    let date = NepaliDate::from_str("2080-02-32").unwrap();
    assert_eq!(
        to_nepalidatetime(date.into()).unwrap().map(|dt| dt.to_string()),
        Some("2080-02-32T00:00:00".into())
    );
}

#[test]
fn absent_and_invalid_inputs() {
    assert_eq!(to_nepalidatetime(Value::None).unwrap(), None);
    assert_eq!(to_nepalidate(Value::from(String::new())).unwrap(), None);
    assert_eq!(to_nepalidate(Value::from(None::<GregorianDate>)).unwrap(), None);

    let err = to_nepalidate(Value::Integer(42)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInputType);
    assert_eq!(
        err.to_string(),
        "InvalidInputTypeError: Argument must be instance of NepaliDate or NepaliDateTime or GregorianDateTime or GregorianDate"
    );
}

#[test]
fn gregorian_dates_across_the_table() {
    let first = GregorianDate::from_str("1943-04-14").unwrap();
    let date = to_nepalidate(first.into()).unwrap().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (calendar::BS_MIN_YEAR, 1, 1));

    let before = GregorianDate::from_str("1943-04-13").unwrap();
    assert_eq!(to_nepalidate(before.into()).unwrap_err().kind(), ErrorKind::Range);

    // Every day of a Gregorian year maps to consecutive BS days.
    let mut previous = to_nepalidate(GregorianDate::try_new(2023, 12, 31).unwrap().into())
        .unwrap()
        .unwrap();
    for ordinal in 0..366 {
        let next = previous.checked_add_days(1).unwrap();
        let gregorian = next.to_gregorian_date();
        assert_eq!(to_nepalidate(gregorian.into()).unwrap(), Some(next), "day {ordinal}");
        assert_eq!(previous.days_until(&next), 1);
        previous = next;
    }
}
