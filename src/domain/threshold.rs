//! `Threshold` newtype for member and group thresholds

use crate::error::{Error, Result};

/// Minimum shares (or groups) required for reconstruction (1..=16)
///
/// The share header stores `threshold - 1` in a 4-bit field, which bounds the
/// value to 16. A threshold of 1 is legal: single-group layouts use a 1-of-1
/// outer split, though a 1-of-N member split offers no secrecy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Maximum threshold representable in the share header
    pub const MAX: u8 = 16;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the value is 0 or greater than 16
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kintsugi::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// assert!(Threshold::new(17).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 {
            return Err(Error::parameter("threshold must be at least 1"));
        }
        if value > Self::MAX {
            return Err(Error::parameter(format!(
                "threshold {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
