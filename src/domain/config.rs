//! Validated split layouts and the per-invocation plan

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Mnemonic standard a split or reconstruction operates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    /// Plain entropy partition into independent sub-mnemonics.
    Bip39,
    /// Grouped Shamir shares with per-group thresholds.
    Slip39,
}

/// One group's member layout: how many shares it gets and how many of them
/// reconstruct the group's value.
///
/// Enforces `member_threshold <= member_count` at construction.
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    member_threshold: Threshold,
    member_count: ShareCount,
}

impl GroupSpec {
    /// Creates a new group spec
    ///
    /// # Errors
    /// Returns an error if the member threshold exceeds the member count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kintsugi::domain::{GroupSpec, ShareCount, Threshold};
    ///
    /// let spec = GroupSpec::new(Threshold::new(2).unwrap(), ShareCount::new(3).unwrap()).unwrap();
    /// assert_eq!(*spec.member_threshold(), 2);
    /// assert_eq!(*spec.member_count(), 3);
    ///
    /// let result = GroupSpec::new(Threshold::new(4).unwrap(), ShareCount::new(3).unwrap());
    /// assert!(result.is_err());
    /// ```
    pub fn new(member_threshold: Threshold, member_count: ShareCount) -> Result<Self> {
        if *member_threshold > *member_count {
            return Err(Error::parameter(format!(
                "member threshold {} cannot exceed member count {}",
                *member_threshold, *member_count
            )));
        }
        Ok(Self {
            member_threshold,
            member_count,
        })
    }

    #[must_use]
    pub fn member_threshold(&self) -> Threshold {
        self.member_threshold
    }

    #[must_use]
    pub fn member_count(&self) -> ShareCount {
        self.member_count
    }
}

/// A full grouped layout: the outer group threshold plus one [`GroupSpec`]
/// per group.
///
/// Enforces `1 <= group_threshold <= group count <= 16` at construction.
#[derive(Debug, Clone)]
pub struct SlipConfig {
    group_threshold: Threshold,
    groups: Vec<GroupSpec>,
}

impl SlipConfig {
    /// Creates a new grouped layout
    ///
    /// # Errors
    /// Returns an error if no groups are given, more than 16 are given, or
    /// the group threshold exceeds the group count
    pub fn new(group_threshold: Threshold, groups: Vec<GroupSpec>) -> Result<Self> {
        if groups.is_empty() {
            return Err(Error::parameter("at least one group is required"));
        }
        if groups.len() > ShareCount::MAX as usize {
            return Err(Error::parameter(format!(
                "{} groups exceed maximum {}",
                groups.len(),
                ShareCount::MAX
            )));
        }
        if *group_threshold as usize > groups.len() {
            return Err(Error::parameter(format!(
                "group threshold {} cannot exceed group count {}",
                *group_threshold,
                groups.len()
            )));
        }
        Ok(Self {
            group_threshold,
            groups,
        })
    }

    #[must_use]
    pub fn group_threshold(&self) -> Threshold {
        self.group_threshold
    }

    #[must_use]
    pub fn groups(&self) -> &[GroupSpec] {
        &self.groups
    }

    #[must_use]
    pub fn group_count(&self) -> u8 {
        self.groups.len() as u8
    }
}

/// Parameters of one deconstruction call, tagged by standard.
///
/// Created per invocation and discarded with it; nothing here is persisted.
#[derive(Debug, Clone)]
pub enum SplitPlan {
    Bip39 {
        part_count: u8,
        digits: bool,
    },
    Slip39 {
        config: SlipConfig,
        digits: bool,
    },
}

impl SplitPlan {
    #[must_use]
    pub fn standard(&self) -> Standard {
        match self {
            SplitPlan::Bip39 { .. } => Standard::Bip39,
            SplitPlan::Slip39 { .. } => Standard::Slip39,
        }
    }

    #[must_use]
    pub fn digits(&self) -> bool {
        match self {
            SplitPlan::Bip39 { digits, .. } | SplitPlan::Slip39 { digits, .. } => *digits,
        }
    }
}
