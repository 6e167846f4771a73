//! Numeric transcoding of word sequences for durable physical backups
//!
//! Each word maps to its wordlist index as a zero-padded 4-digit decimal
//! group (0000..=2047), so a row of digits stamped on metal carries exactly
//! the information of the word sequence. The fixed width makes the encoding
//! bijective whether or not the separating spaces survive.

use crate::error::{Error, Result};
use crate::wordlist;

const DIGITS_PER_WORD: usize = 4;

/// Transcodes a word sequence to its digit form, one 4-digit group per word,
/// space-separated.
///
/// # Errors
/// Returns [`Error::UnknownWord`] for words not in the list.
pub fn to_digits<S: AsRef<str>>(words: &[S]) -> Result<String> {
    let mut groups = Vec::with_capacity(words.len());
    for word in words {
        groups.push(format!("{:04}", wordlist::index_of(word.as_ref())?));
    }
    Ok(groups.join(" "))
}

/// Transcodes digit text back to the word sequence.
///
/// Accepts whitespace-separated 4-digit groups, or one contiguous digit run
/// whose length is a multiple of 4.
///
/// # Errors
/// Returns [`Error::InvalidDigitFormat`] on malformed width, non-digit
/// characters, or values above 2047.
pub fn from_digits(text: &str) -> Result<Vec<&'static str>> {
    let tokens: Vec<&str> = if text.split_whitespace().nth(1).is_some() {
        text.split_whitespace().collect()
    } else {
        let run = text.trim();
        if run.len() % DIGITS_PER_WORD != 0 {
            return Err(Error::InvalidDigitFormat {
                token: run.to_string(),
            });
        }
        run.as_bytes()
            .chunks(DIGITS_PER_WORD)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or(run))
            .collect()
    };

    if tokens.is_empty() {
        return Err(Error::InvalidDigitFormat {
            token: text.to_string(),
        });
    }

    let mut words = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.len() != DIGITS_PER_WORD || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDigitFormat {
                token: token.to_string(),
            });
        }
        let index: u16 = token.parse().map_err(|_| Error::InvalidDigitFormat {
            token: token.to_string(),
        })?;
        if index >= wordlist::WORD_COUNT {
            return Err(Error::InvalidDigitFormat {
                token: token.to_string(),
            });
        }
        words.push(wordlist::word_at(index));
    }

    Ok(words)
}
