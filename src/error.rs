//! This module implements `NepaliError`.

use alloc::borrow::Cow;
use core::fmt;

use ixdtf::ParseError;

/// `NepaliError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// An error that should never occur; indicates a bug in the library.
    Assert,
    /// A value of an unsupported kind was handed to a coercion function.
    InvalidInputType,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
            Self::InvalidInputType => "InvalidInputTypeError",
        }
        .fmt(f)
    }
}

/// The error type for `nepali_rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct NepaliError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl NepaliError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[must_use]
    pub fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: assertion failed.")
    }

    /// Creates the error raised when a coercion receives a value it does not accept.
    #[must_use]
    pub fn invalid_input_type() -> Self {
        Self::new(ErrorKind::InvalidInputType).with_message(
            "Argument must be instance of NepaliDate or NepaliDateTime or GregorianDateTime or GregorianDate",
        )
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for NepaliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for NepaliError {}

impl From<ParseError> for NepaliError {
    fn from(value: ParseError) -> Self {
        Self::syntax().with_message(value.to_static_string())
    }
}
