//! Property tests for the mnemonic and digit codecs

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use kintsugi::{digits, mnemonic};

/// Entropy of a random valid BIP39 length
#[derive(Clone, Debug)]
struct ValidEntropy(Vec<u8>);

impl Arbitrary for ValidEntropy {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = *g
            .choose(&mnemonic::VALID_ENTROPY_LENGTHS)
            .expect("non-empty length set");
        ValidEntropy((0..length).map(|_| u8::arbitrary(g)).collect())
    }
}

#[quickcheck]
fn prop_encode_decode_round_trip(entropy: ValidEntropy) -> bool {
    let ValidEntropy(bytes) = entropy;
    let words = mnemonic::encode(&bytes).expect("valid entropy encodes");
    let decoded = mnemonic::decode(&words).expect("own encoding decodes");
    *decoded == bytes
}

/// Replacing one word with a different one never silently yields the
/// original entropy: the decode either fails the checksum or produces
/// different bytes.
#[quickcheck]
fn prop_word_substitution_never_preserves_entropy(
    entropy: ValidEntropy,
    position: usize,
    replacement: u16,
) -> bool {
    let ValidEntropy(bytes) = entropy;
    let mut words = mnemonic::encode(&bytes).expect("valid entropy encodes");

    let position = position % words.len();
    let replacement = kintsugi::wordlist::word_at(replacement % 2048);
    if words[position] == replacement {
        return true; // No substitution happened.
    }
    words[position] = replacement;

    match mnemonic::decode(&words) {
        Err(_) => true,
        Ok(decoded) => *decoded != bytes,
    }
}

#[quickcheck]
fn prop_digit_transcoding_round_trip(entropy: ValidEntropy) -> bool {
    let ValidEntropy(bytes) = entropy;
    let words = mnemonic::encode(&bytes).expect("valid entropy encodes");

    let digit_text = digits::to_digits(&words).expect("wordlist words transcode");
    let words_again = digits::from_digits(&digit_text).expect("own digits parse");

    words_again == words && *mnemonic::decode(&words_again).expect("decodes") == bytes
}

#[quickcheck]
fn prop_invalid_entropy_lengths_are_rejected(bytes: Vec<u8>) -> bool {
    let valid = mnemonic::VALID_ENTROPY_LENGTHS.contains(&bytes.len());
    mnemonic::encode(&bytes).is_ok() == valid
}
