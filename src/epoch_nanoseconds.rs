use crate::{NepaliError, NS_PER_DAY};

/// Epoch days of 0001-01-01.
const MIN_EPOCH_DAYS: i128 = -719_162;
/// Epoch days of 9999-12-31.
const MAX_EPOCH_DAYS: i128 = 2_932_896;

/// A count of nanoseconds since the Unix epoch, 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the number of whole days since the epoch, rounding toward negative infinity.
    pub fn epoch_days(&self) -> i128 {
        self.0.div_euclid(i128::from(NS_PER_DAY))
    }

    /// Returns the nanoseconds elapsed since the start of the day.
    pub fn nanoseconds_of_day(&self) -> i64 {
        // NOTE: rem_euclid keeps this in 0..NS_PER_DAY.
        self.0.rem_euclid(i128::from(NS_PER_DAY)) as i64
    }

    pub fn check_validity(&self) -> Result<(), NepaliError> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(NepaliError::range().with_message("Instant is outside the supported range."));
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
///
/// The range covers Gregorian years 1 through 9999 with a day of slack
/// on either side for offset adjustments.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    let day = i128::from(NS_PER_DAY);
    ((MIN_EPOCH_DAYS - 1) * day..(MAX_EPOCH_DAYS + 2) * day).contains(nanos)
}
