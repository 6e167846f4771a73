//! Deconstruct/reconstruct orchestration over the mnemonic and share codecs
//!
//! The entropy-level functions are the crate's external interface: callers
//! hand in entropy or mnemonic text plus a [`SplitPlan`] and get structured
//! results or typed failures back. No file access, no argument parsing, no
//! output formatting happens here.

use std::collections::BTreeMap;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::digits;
use crate::domain::{SlipConfig, SplitPlan, Standard};
use crate::error::{Error, Result};
use crate::mnemonic;
use crate::share;

/// Structured result of a deconstruction, tagged by standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeconstructResult {
    /// Independent sub-mnemonics, in partition order.
    Bip39 { parts: Vec<String> },
    /// Share mnemonics keyed by group index.
    Slip39 { groups: BTreeMap<u8, Vec<String>> },
}

/// Partitions entropy into `part_count` sub-mnemonics.
///
/// Each part is a contiguous run of the entropy bytes, re-encoded with its
/// own fresh checksum as a standalone mnemonic. This is a plain partition,
/// not a secret-sharing scheme: every part exposes its slice of the entropy,
/// and all parts are required to reconstruct it.
///
/// # Errors
/// Returns [`Error::IndivisibleLength`] when the entropy does not divide into
/// `part_count` runs of a valid entropy size, and [`Error::InvalidLength`]
/// for entropy that is no valid mnemonic source to begin with.
pub fn deconstruct_bip39(entropy: &[u8], part_count: u8) -> Result<Vec<String>> {
    if part_count == 0 {
        return Err(Error::parameter("part count must be at least 1"));
    }
    if !mnemonic::VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidLength {
            length: entropy.len(),
            unit: "entropy bytes",
            valid: "16, 20, 24, 28 or 32",
        });
    }

    let parts = part_count as usize;
    let divides_evenly = entropy.len() % parts == 0;
    if !divides_evenly || !mnemonic::VALID_ENTROPY_LENGTHS.contains(&(entropy.len() / parts)) {
        return Err(Error::IndivisibleLength {
            bytes: entropy.len(),
            parts,
        });
    }

    entropy
        .chunks(entropy.len() / parts)
        .map(|chunk| Ok(mnemonic::encode(chunk)?.join(" ")))
        .collect()
}

/// Reassembles entropy from BIP39 parts produced by [`deconstruct_bip39`].
///
/// Each part's checksum is verified on decode, then the concatenated entropy
/// must itself be a valid mnemonic source.
///
/// # Errors
/// Propagates decode failures per part; returns [`Error::InvalidLength`]
/// when the concatenation is no valid entropy length.
pub fn reconstruct_bip39<S: AsRef<str>>(parts: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    if parts.is_empty() {
        return Err(Error::parameter("no mnemonic parts provided"));
    }

    let mut entropy = Zeroizing::new(Vec::new());
    for part in parts {
        let decoded = mnemonic::decode_text(part.as_ref())?;
        entropy.extend_from_slice(&decoded);
    }

    if !mnemonic::VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidLength {
            length: entropy.len(),
            unit: "entropy bytes",
            valid: "16, 20, 24, 28 or 32",
        });
    }

    Ok(entropy)
}

/// Splits entropy into grouped share mnemonics per `config`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] for entropy that is no valid mnemonic
/// source; propagates split failures.
pub fn deconstruct_slip39<R: RngCore + CryptoRng>(
    entropy: &[u8],
    config: &SlipConfig,
    rng: &mut R,
) -> Result<BTreeMap<u8, Vec<String>>> {
    if !mnemonic::VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidLength {
            length: entropy.len(),
            unit: "entropy bytes",
            valid: "16, 20, 24, 28 or 32",
        });
    }
    share::split_groups(entropy, config, rng)
}

/// Recovers entropy from a set of grouped share mnemonics.
///
/// The set is unordered; each share carries its own group and member
/// position in its header.
///
/// # Errors
/// Propagates decode and recovery failures ([`Error::CorruptShare`],
/// [`Error::MismatchedShareSet`], [`Error::InsufficientGroups`], ...).
pub fn reconstruct_slip39<S: AsRef<str>>(shares: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    let decoded: Vec<share::GroupShare> = shares
        .iter()
        .map(|text| share::decode_share(text.as_ref()))
        .collect::<Result<_>>()?;
    share::recover_groups(&decoded)
}

/// Transcodes an outgoing word mnemonic to its digit form.
fn words_to_digit_text(mnemonic_text: &str) -> Result<String> {
    digits::to_digits(&mnemonic::split_words(mnemonic_text))
}

/// Transcodes an incoming digit sequence back to a word mnemonic.
fn digit_text_to_words(digit_text: &str) -> Result<String> {
    Ok(digits::from_digits(digit_text)?.join(" "))
}

/// Deconstructs a mnemonic per `plan`, transcoding the output to digit form
/// when the plan asks for it. Randomness comes from the operating system
/// generator.
///
/// # Errors
/// Propagates decode and split failures.
pub fn deconstruct(mnemonic_text: &str, plan: &SplitPlan) -> Result<DeconstructResult> {
    let entropy = mnemonic::decode_text(mnemonic_text)?;

    match plan {
        SplitPlan::Bip39 { part_count, digits } => {
            let mut parts = deconstruct_bip39(&entropy, *part_count)?;
            if *digits {
                parts = parts
                    .iter()
                    .map(|part| words_to_digit_text(part))
                    .collect::<Result<_>>()?;
            }
            Ok(DeconstructResult::Bip39 { parts })
        }
        SplitPlan::Slip39 { config, digits } => {
            let mut groups = deconstruct_slip39(&entropy, config, &mut OsRng)?;
            if *digits {
                for mnemonics in groups.values_mut() {
                    for mnemonic_text in mnemonics.iter_mut() {
                        *mnemonic_text = words_to_digit_text(mnemonic_text)?;
                    }
                }
            }
            Ok(DeconstructResult::Slip39 { groups })
        }
    }
}

/// Reconstructs the original mnemonic from parts or shares, transcoding
/// digit-form input first when `digit_mode` is set.
///
/// # Errors
/// Propagates transcode, decode and recovery failures.
pub fn reconstruct<S: AsRef<str>>(
    inputs: &[S],
    standard: Standard,
    digit_mode: bool,
) -> Result<String> {
    let texts: Vec<String> = if digit_mode {
        inputs
            .iter()
            .map(|input| digit_text_to_words(input.as_ref()))
            .collect::<Result<_>>()?
    } else {
        inputs
            .iter()
            .map(|input| input.as_ref().to_string())
            .collect()
    };

    let entropy = match standard {
        Standard::Bip39 => reconstruct_bip39(&texts)?,
        Standard::Slip39 => reconstruct_slip39(&texts)?,
    };

    Ok(mnemonic::encode(&entropy)?.join(" "))
}
