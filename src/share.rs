//! Grouped share encoding: two-level Shamir shares as word mnemonics
//!
//! A secret is first split across groups with an outer threshold, then each
//! group's value is split across that group's members with its own threshold.
//! Every member share is framed as:
//!
//! ```text
//! header (40 bits, MSB-first):
//!   identifier          15 bits   random per split, identical on every share
//!   iteration exponent   5 bits   reserved, currently 0
//!   group index          4 bits
//!   group threshold - 1  4 bits
//!   group count - 1      4 bits
//!   member index         4 bits
//!   member threshold - 1 4 bits
//! payload = header || value bytes
//! encoded = payload length (u16 BE) || payload || CRC32(payload) (BE)
//! ```
//!
//! and the encoded bytes are left-padded to an 11-bit boundary and mapped
//! through the wordlist. The CRC32 guards the share format; it is a separate
//! primitive from the SHA-256 entropy checksum on purpose, so a corrupt share
//! is reported as such rather than as a bad mnemonic.

use std::collections::BTreeMap;

use crc::{CRC_32_ISO_HDLC, Crc};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, SlipConfig, Threshold};
use crate::error::{Error, Result};
use crate::shamir::{self, ShamirShare};
use crate::wordlist;
use crate::wordlist::BITS_PER_WORD;

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

const HEADER_BYTES: usize = 5;

/// Length prefix + CRC32 trailer around the payload.
const FRAME_BYTES: usize = 6;

/// A decoded member share: set-wide metadata, its position in the layout,
/// and its slice of the inner split.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupShare {
    /// Random 15-bit tag shared by every share of one split.
    pub identifier: u16,
    /// Reserved KDF parameter, always 0 for now.
    pub iteration_exponent: u8,
    pub group_index: ShareIndex,
    pub group_threshold: Threshold,
    /// Total groups in the layout (1..=16).
    pub group_count: u8,
    pub member_index: ShareIndex,
    pub member_threshold: Threshold,
    pub value: Zeroizing<Vec<u8>>,
}

fn pack_header(share: &GroupShare) -> [u8; HEADER_BYTES] {
    let id = share.identifier & 0x7FFF;
    let iter = share.iteration_exponent & 0x1F;
    [
        (id >> 7) as u8,
        (((id & 0x7F) as u8) << 1) | (iter >> 4),
        ((iter & 0x0F) << 4) | *share.group_index,
        ((*share.group_threshold - 1) << 4) | (share.group_count - 1),
        (*share.member_index << 4) | (*share.member_threshold - 1),
    ]
}

fn unpack_header(header: &[u8]) -> Result<(u16, u8, ShareIndex, Threshold, u8, ShareIndex, Threshold)> {
    let identifier = (u16::from(header[0]) << 7) | (u16::from(header[1]) >> 1);
    let iteration_exponent = ((header[1] & 1) << 4) | (header[2] >> 4);
    let group_index = ShareIndex::new(header[2] & 0x0F)?;
    let group_threshold = Threshold::new((header[3] >> 4) + 1)?;
    let group_count = (header[3] & 0x0F) + 1;
    let member_index = ShareIndex::new(header[4] >> 4)?;
    let member_threshold = Threshold::new((header[4] & 0x0F) + 1)?;

    if *group_index >= group_count {
        return Err(Error::corrupt(format!(
            "group index {} outside group count {}",
            *group_index, group_count
        )));
    }
    if *group_threshold > group_count {
        return Err(Error::corrupt(format!(
            "group threshold {} exceeds group count {}",
            *group_threshold, group_count
        )));
    }

    Ok((
        identifier,
        iteration_exponent,
        group_index,
        group_threshold,
        group_count,
        member_index,
        member_threshold,
    ))
}

/// Encodes bytes as words, 11 bits each, left-padded with zero bits.
fn bytes_to_words(data: &[u8]) -> Vec<&'static str> {
    let bit_count = data.len() * 8;
    let padding = (BITS_PER_WORD - (bit_count % BITS_PER_WORD)) % BITS_PER_WORD;
    let word_count = (bit_count + padding) / BITS_PER_WORD;

    let mut words = Vec::with_capacity(word_count);
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = padding;

    for &byte in data {
        for bit_pos in (0..8).rev() {
            let bit = (byte >> bit_pos) & 1;
            bit_buffer = (bit_buffer << 1) | u16::from(bit);
            bits_in_buffer += 1;

            if bits_in_buffer == BITS_PER_WORD {
                words.push(wordlist::word_at(bit_buffer));
                bit_buffer = 0;
                bits_in_buffer = 0;
            }
        }
    }

    words
}

/// Decodes words back to bytes, dropping the left padding.
fn words_to_bytes<S: AsRef<str>>(words: &[S]) -> Result<Zeroizing<Vec<u8>>> {
    let total_bits = words.len() * BITS_PER_WORD;
    let byte_count = total_bits / 8;
    let padding = total_bits - byte_count * 8;

    let mut bytes = Zeroizing::new(Vec::with_capacity(byte_count));
    let mut bit_buffer: u16 = 0;
    let mut bits_in_buffer = 0;
    let mut bits_processed = 0;

    for word in words {
        let index = wordlist::index_of(word.as_ref())?;

        for bit_pos in (0..BITS_PER_WORD).rev() {
            let bit = (index >> bit_pos) & 1;

            if bits_processed < padding {
                bits_processed += 1;
                continue;
            }

            bit_buffer = (bit_buffer << 1) | bit;
            bits_in_buffer += 1;

            if bits_in_buffer == 8 {
                bytes.push(bit_buffer as u8);
                bit_buffer = 0;
                bits_in_buffer = 0;
            }

            bits_processed += 1;
        }
    }

    Ok(bytes)
}

/// Encodes one member share as a word mnemonic.
#[must_use]
pub fn encode_share(share: &GroupShare) -> String {
    let header = pack_header(share);

    let mut payload = Zeroizing::new(Vec::with_capacity(HEADER_BYTES + share.value.len()));
    payload.extend_from_slice(&header);
    payload.extend_from_slice(&share.value);

    let checksum = CRC32.checksum(&payload);

    let mut encoded = Zeroizing::new(Vec::with_capacity(FRAME_BYTES + payload.len()));
    encoded.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    encoded.extend_from_slice(&payload);
    encoded.extend_from_slice(&checksum.to_be_bytes());

    bytes_to_words(&encoded).join(" ")
}

/// Decodes a share mnemonic, verifying the frame and CRC32.
///
/// # Errors
/// Returns [`Error::UnknownWord`] for words not in the list and
/// [`Error::CorruptShare`] for any structural or checksum failure.
pub fn decode_share(text: &str) -> Result<GroupShare> {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return Err(Error::corrupt("empty share mnemonic"));
    }

    let mut encoded = words_to_bytes(&words)?;

    // Bit alignment can introduce one leading zero byte ahead of the length
    // prefix; the prefix of a real share is never zero.
    while encoded.len() > FRAME_BYTES + HEADER_BYTES && encoded[0] == 0 && encoded[1] == 0 {
        encoded.remove(0);
    }

    if encoded.len() < FRAME_BYTES + HEADER_BYTES + 1 {
        return Err(Error::corrupt(format!(
            "share too short: {} bytes decoded",
            encoded.len()
        )));
    }

    let payload_len = u16::from_be_bytes([encoded[0], encoded[1]]) as usize;
    if payload_len < HEADER_BYTES + 1 || encoded.len() < FRAME_BYTES + payload_len {
        return Err(Error::corrupt(format!(
            "length prefix {payload_len} inconsistent with {} decoded bytes",
            encoded.len()
        )));
    }

    let payload = &encoded[2..2 + payload_len];
    let checksum_bytes = &encoded[2 + payload_len..2 + payload_len + 4];
    let expected = CRC32.checksum(payload);
    let actual = u32::from_be_bytes([
        checksum_bytes[0],
        checksum_bytes[1],
        checksum_bytes[2],
        checksum_bytes[3],
    ]);
    if expected != actual {
        return Err(Error::corrupt(format!(
            "checksum mismatch: expected 0x{expected:08x}, got 0x{actual:08x}"
        )));
    }

    let (
        identifier,
        iteration_exponent,
        group_index,
        group_threshold,
        group_count,
        member_index,
        member_threshold,
    ) = unpack_header(&payload[..HEADER_BYTES])?;

    Ok(GroupShare {
        identifier,
        iteration_exponent,
        group_index,
        group_threshold,
        group_count,
        member_index,
        member_threshold,
        value: Zeroizing::new(payload[HEADER_BYTES..].to_vec()),
    })
}

/// Splits `secret` into grouped share mnemonics per `config`.
///
/// Outer split across groups first, then an independent inner split of each
/// group value across its members. Returns the mnemonics keyed by group
/// index.
///
/// # Errors
/// Propagates [`Error::InvalidParameter`] from the underlying splits.
pub fn split_groups<R: RngCore + CryptoRng>(
    secret: &[u8],
    config: &SlipConfig,
    rng: &mut R,
) -> Result<BTreeMap<u8, Vec<String>>> {
    let identifier = (rng.next_u32() & 0x7FFF) as u16;

    let outer = shamir::split(
        secret,
        *config.group_threshold(),
        config.group_count(),
        rng,
    )?;

    let mut groups = BTreeMap::new();
    for (group_share, spec) in outer.iter().zip(config.groups()) {
        let group_index = ShareIndex::new(group_share.x - 1)?;
        let inner = shamir::split(
            &group_share.value,
            *spec.member_threshold(),
            *spec.member_count(),
            rng,
        )?;

        let mut mnemonics = Vec::with_capacity(inner.len());
        for member_share in &inner {
            let share = GroupShare {
                identifier,
                iteration_exponent: 0,
                group_index,
                group_threshold: config.group_threshold(),
                group_count: config.group_count(),
                member_index: ShareIndex::new(member_share.x - 1)?,
                member_threshold: spec.member_threshold(),
                value: member_share.value.clone(),
            };
            mnemonics.push(encode_share(&share));
        }
        groups.insert(*group_index, mnemonics);
    }

    Ok(groups)
}

/// Recovers the secret from a set of decoded member shares.
///
/// # Errors
/// Returns [`Error::MismatchedShareSet`] when shares disagree on set-wide
/// metadata, [`Error::InsufficientGroups`] when fewer groups than the group
/// threshold can be resolved, and propagates [`Error::DuplicateShare`] /
/// [`Error::InsufficientShares`] from the per-group reconstructions.
pub fn recover_groups(shares: &[GroupShare]) -> Result<Zeroizing<Vec<u8>>> {
    let first = shares
        .first()
        .ok_or_else(|| Error::mismatched("no shares provided"))?;

    for share in shares {
        if share.identifier != first.identifier {
            return Err(Error::mismatched(format!(
                "identifiers differ: {:#06x} vs {:#06x}",
                first.identifier, share.identifier
            )));
        }
        if share.iteration_exponent != first.iteration_exponent {
            return Err(Error::mismatched("iteration exponents differ"));
        }
        if share.group_count != first.group_count {
            return Err(Error::mismatched("group counts differ"));
        }
        if share.group_threshold != first.group_threshold {
            return Err(Error::mismatched("group thresholds differ"));
        }
    }

    let mut buckets: BTreeMap<ShareIndex, Vec<&GroupShare>> = BTreeMap::new();
    for share in shares {
        buckets.entry(share.group_index).or_default().push(share);
    }

    let group_threshold = first.group_threshold;
    let mut resolved: Vec<ShamirShare> = Vec::with_capacity(buckets.len());

    for (group_index, members) in &buckets {
        let member_threshold = members[0].member_threshold;
        if members
            .iter()
            .any(|share| share.member_threshold != member_threshold)
        {
            return Err(Error::mismatched(format!(
                "member thresholds differ within group {}",
                **group_index
            )));
        }

        let mut distinct: Vec<u8> = members.iter().map(|share| *share.member_index).collect();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < *member_threshold as usize {
            // Not enough members; the group simply does not participate.
            continue;
        }

        let points: Vec<ShamirShare> = members
            .iter()
            .map(|share| ShamirShare {
                x: share.member_index.x_coordinate(),
                value: share.value.clone(),
            })
            .collect();

        let value = shamir::reconstruct(&points, *member_threshold)?;
        resolved.push(ShamirShare {
            x: group_index.x_coordinate(),
            value,
        });
    }

    if resolved.len() < *group_threshold as usize {
        return Err(Error::InsufficientGroups {
            needed: *group_threshold,
            got: resolved.len(),
        });
    }

    shamir::reconstruct(&resolved, *group_threshold)
}
