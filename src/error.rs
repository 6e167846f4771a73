//! Failure taxonomy shared by every codec and the secret-sharing engine
//!
//! All variants are terminal for the operation that raised them: they signal
//! malformed caller input or tampered/incomplete secret material, never a
//! transient condition, so nothing here is retried or downgraded to a warning.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A word is not in the 2048-word BIP39 list.
    #[error("word '{word}' is not in the BIP39 wordlist")]
    UnknownWord { word: String },

    /// Mnemonic word count or entropy byte count outside the BIP39 set.
    #[error("invalid length: {length} {unit} (valid: {valid})")]
    InvalidLength {
        length: usize,
        unit: &'static str,
        valid: &'static str,
    },

    /// Recomputed entropy checksum disagrees with the encoded one.
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// Division by or inversion of zero in GF(256).
    #[error("division by zero in GF(256)")]
    DivideByZero,

    /// Fewer distinct share points than the reconstruction threshold.
    #[error("insufficient shares: need {needed}, got {got} distinct")]
    InsufficientShares { needed: u8, got: usize },

    /// Two shares claim the same x-coordinate with different values.
    #[error("duplicate share at x={x} with conflicting values")]
    DuplicateShare { x: u8 },

    /// A share mnemonic failed structural or CRC validation.
    #[error("corrupt share: {reason}")]
    CorruptShare { reason: String },

    /// Fewer satisfied groups than the group threshold.
    #[error("insufficient groups: need {needed}, got {got}")]
    InsufficientGroups { needed: u8, got: usize },

    /// Shares of one recovery attempt disagree on set-wide metadata.
    #[error("mismatched share set: {reason}")]
    MismatchedShareSet { reason: String },

    /// Entropy does not partition evenly for the requested part count.
    #[error("entropy of {bytes} bytes does not divide into {parts} valid parts")]
    IndivisibleLength { bytes: usize, parts: usize },

    /// Digit transcoding input is malformed or out of range.
    #[error("invalid digit group '{token}'")]
    InvalidDigitFormat { token: String },

    /// A split parameter violates its domain bounds.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

impl Error {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptShare {
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatched(reason: impl Into<String>) -> Self {
        Error::MismatchedShareSet {
            reason: reason.into(),
        }
    }

    pub(crate) fn parameter(reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            reason: reason.into(),
        }
    }
}
