//! BIP39 entropy/mnemonic codec
//!
//! Entropy bytes are concatenated with a hash-derived checksum and sliced
//! MSB-first into 11-bit groups, each mapped through the wordlist. Decoding
//! inverts the slicing and re-verifies the checksum; a mismatch is a hard
//! failure, never a warning.
//!
//! Checksum length is `entropy_bits / 32`, taken from the leading bits of
//! SHA-256(entropy), so every valid entropy length yields a whole number of
//! words: 16 bytes -> 12 words up to 32 bytes -> 24 words.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::wordlist;
use crate::wordlist::BITS_PER_WORD;

/// Entropy byte lengths accepted by [`encode`].
pub const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Word counts accepted by [`decode`].
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Computes the checksum for `entropy`: the leading `entropy_bits / 32` bits
/// of SHA-256(entropy), returned right-aligned in a byte.
///
/// Valid entropy lengths need at most 8 checksum bits, so one byte holds them.
fn checksum_value(entropy: &[u8]) -> u8 {
    let cs_bits = entropy.len() / 4;
    let digest = Sha256::digest(entropy);
    digest[0] >> (8 - cs_bits)
}

/// Verifies `checksum` (right-aligned) against a fresh hash of `entropy`.
fn checksum_matches(entropy: &[u8], checksum: u8) -> bool {
    checksum_value(entropy) == checksum
}

/// Encodes entropy bytes as a BIP39 word sequence.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if the entropy length is not one of
/// 16/20/24/28/32 bytes.
pub fn encode(entropy: &[u8]) -> Result<Vec<&'static str>> {
    if !VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidLength {
            length: entropy.len(),
            unit: "entropy bytes",
            valid: "16, 20, 24, 28 or 32",
        });
    }

    let cs_bits = entropy.len() / 4;
    let checksum = checksum_value(entropy);
    let word_count = (entropy.len() * 8 + cs_bits) / BITS_PER_WORD;

    let mut words = Vec::with_capacity(word_count);
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = 0;

    let entropy_bits = entropy
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |pos| (byte >> pos) & 1));
    let checksum_bits = (0..cs_bits).rev().map(|pos| (checksum >> pos) & 1);

    for bit in entropy_bits.chain(checksum_bits) {
        bit_buffer = (bit_buffer << 1) | u16::from(bit);
        bits_in_buffer += 1;

        if bits_in_buffer == BITS_PER_WORD {
            words.push(wordlist::word_at(bit_buffer));
            bit_buffer = 0;
            bits_in_buffer = 0;
        }
    }

    Ok(words)
}

/// Decodes a BIP39 word sequence back to its entropy bytes.
///
/// # Errors
/// Returns [`Error::InvalidLength`] for word counts outside 12/15/18/21/24,
/// [`Error::UnknownWord`] for words not in the list, and
/// [`Error::ChecksumMismatch`] when the recomputed checksum disagrees.
pub fn decode<S: AsRef<str>>(words: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    if !VALID_WORD_COUNTS.contains(&words.len()) {
        return Err(Error::InvalidLength {
            length: words.len(),
            unit: "words",
            valid: "12, 15, 18, 21 or 24",
        });
    }

    let total_bits = words.len() * BITS_PER_WORD;
    // 32 entropy bits per checksum bit, so a 33rd of the stream is checksum.
    let cs_bits = total_bits / 33;
    let entropy_bits = total_bits - cs_bits;

    let mut entropy = Zeroizing::new(Vec::with_capacity(entropy_bits / 8));
    let mut checksum: u8 = 0;
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = 0;
    let mut bits_processed = 0;

    for word in words {
        let index = wordlist::index_of(word.as_ref())?;

        for pos in (0..BITS_PER_WORD).rev() {
            let bit = ((index >> pos) & 1) as u8;

            if bits_processed < entropy_bits {
                bit_buffer = (bit_buffer << 1) | u16::from(bit);
                bits_in_buffer += 1;

                if bits_in_buffer == 8 {
                    entropy.push(bit_buffer as u8);
                    bit_buffer = 0;
                    bits_in_buffer = 0;
                }
            } else {
                checksum = (checksum << 1) | bit;
            }

            bits_processed += 1;
        }
    }

    if !checksum_matches(&entropy, checksum) {
        return Err(Error::ChecksumMismatch);
    }

    Ok(entropy)
}

/// Splits mnemonic text into its words (lowercase, whitespace-delimited).
#[must_use]
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Decodes mnemonic text directly, convenience over [`decode`].
///
/// # Errors
/// Same failures as [`decode`].
pub fn decode_text(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    decode(&split_words(text))
}
