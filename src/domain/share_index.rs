//! `ShareIndex` newtype for group and member positions

use crate::error::{Error, Result};

/// Position of a share within its group, or of a group within the layout
/// (0..=15)
///
/// Indices are 0-based in the header; the Shamir x-coordinate is always
/// `index + 1` so x = 0 (the secret itself) is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Maximum index representable in the share header
    pub const MAX: u8 = 15;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if the index is greater than 15
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::parameter(format!(
                "share index {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// The Shamir x-coordinate for this index.
    #[must_use]
    pub fn x_coordinate(self) -> u8 {
        self.0 + 1
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
