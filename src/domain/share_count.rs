//! `ShareCount` newtype for member and group counts

use crate::error::{Error, Result};

/// Number of shares (or groups) to issue (1..=16)
///
/// The share header stores `count - 1` in a 4-bit field, which bounds the
/// value to 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Maximum count representable in the share header
    pub const MAX: u8 = 16;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if the value is 0 or greater than 16
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kintsugi::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(17).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 {
            return Err(Error::parameter("share count must be at least 1"));
        }
        if value > Self::MAX {
            return Err(Error::parameter(format!(
                "share count {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
