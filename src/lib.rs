//! Seed mnemonic splitting and reconstruction
//!
//! Two standards are supported. The BIP39 path partitions a mnemonic's
//! entropy into independent sub-mnemonics and joins them back, a low-security
//! convenience where every part is needed and each leaks its slice. The
//! SLIP39-style path splits entropy into grouped Shamir Secret Shares over
//! GF(256), where any quorum of groups, each satisfying its own member
//! threshold, reconstructs the secret and fewer reveal nothing. Either output
//! can be transcoded to fixed-width digit sequences for physical backup.

pub mod cli;
pub mod commands;
pub mod digits;
pub mod domain;
pub mod error;
pub mod gf256;
pub mod mnemonic;
pub mod shamir;
pub mod share;
pub mod wordlist;

pub use error::{Error, Result};
