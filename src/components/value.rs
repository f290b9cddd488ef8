//! This module implements `Value`, the input of the conversion functions.

use alloc::string::String;

use crate::{GregorianDate, GregorianDateTime, NepaliDate, NepaliDateTime};

/// Any value that may be handed to the conversion functions.
///
/// The conversion functions dispatch on the exact variant: a
/// `NepaliDateTime` is never treated as a `NepaliDate`, and a
/// `DateTime` is never treated as a `Date`. `Text` and `Integer` exist so
/// that unsupported inputs can be represented and rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A Bikram Sambat date and time.
    NepaliDateTime(NepaliDateTime),
    /// A Bikram Sambat date.
    NepaliDate(NepaliDate),
    /// A Gregorian timestamp, naive or aware.
    DateTime(GregorianDateTime),
    /// A Gregorian date.
    Date(GregorianDate),
    /// A string. Only the empty string is accepted, as an absent value.
    Text(String),
    /// An integer. Always rejected.
    Integer(i64),
    /// No value.
    #[default]
    None,
}

impl Value {
    /// Returns whether this value is `None` or an empty `Text`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Returns the variant name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NepaliDateTime(_) => "NepaliDateTime",
            Self::NepaliDate(_) => "NepaliDate",
            Self::DateTime(_) => "GregorianDateTime",
            Self::Date(_) => "GregorianDate",
            Self::Text(_) => "Text",
            Self::Integer(_) => "Integer",
            Self::None => "None",
        }
    }
}

impl From<NepaliDateTime> for Value {
    fn from(value: NepaliDateTime) -> Self {
        Self::NepaliDateTime(value)
    }
}

impl From<NepaliDate> for Value {
    fn from(value: NepaliDate) -> Self {
        Self::NepaliDate(value)
    }
}

impl From<GregorianDateTime> for Value {
    fn from(value: GregorianDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<GregorianDate> for Value {
    fn from(value: GregorianDate) -> Self {
        Self::Date(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::{GregorianDate, NepaliDate};

    #[test]
    fn conversions_pick_exact_variant() {
        let date = GregorianDate::try_new(2024, 1, 1).unwrap();
        assert_eq!(Value::from(date), Value::Date(date));
        assert_eq!(Value::from(Some(date)), Value::Date(date));
        assert_eq!(Value::from(None::<NepaliDate>), Value::None);
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from("x").type_name(), "Text");
    }

    #[test]
    fn emptiness() {
        assert!(Value::None.is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::from(" ").is_empty());
        assert!(!Value::Integer(0).is_empty());
        assert_eq!(Value::default(), Value::None);
    }
}
