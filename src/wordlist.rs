//! Word/index lookup over the English BIP39 wordlist
//!
//! Every mnemonic codec in this crate maps 11-bit groups through this table.
//! The list itself comes from the `bip39` crate and is immutable for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use bip39::Language;

use crate::error::{Error, Result};

/// Number of words in the list; each word carries 11 bits.
pub const WORD_COUNT: u16 = 2048;

/// Bits encoded per word.
pub const BITS_PER_WORD: usize = 11;

/// Static `HashMap` for O(1) word-to-index lookups
static WORD_TO_INDEX_MAP: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    Language::English
        .word_list()
        .iter()
        .enumerate()
        .map(|(idx, &word)| (word, idx as u16))
        .collect()
});

/// Looks up a word's index (0..=2047), case-normalized and exact.
///
/// # Errors
/// Returns [`Error::UnknownWord`] if the word is not in the list.
pub fn index_of(word: &str) -> Result<u16> {
    let lower = word.to_lowercase();
    WORD_TO_INDEX_MAP
        .get(lower.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownWord {
            word: word.to_string(),
        })
}

/// Returns the word at `index`.
///
/// Callers produce `index` by masking 11-bit groups, so it is always in
/// range; the mask here keeps the lookup total.
#[must_use]
pub fn word_at(index: u16) -> &'static str {
    Language::English.word_list()[(index & (WORD_COUNT - 1)) as usize]
}
