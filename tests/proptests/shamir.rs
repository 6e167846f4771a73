//! Property tests for the Shamir engine

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use kintsugi::error::Error;
use kintsugi::shamir::{self, ShamirShare};

/// Valid threshold and share count pair within the header bounds
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u8,
    count: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = (u8::arbitrary(g) % 15) + 2; // 2..=16
        let threshold = (u8::arbitrary(g) % count) + 1; // 1..=count
        ValidParams { threshold, count }
    }
}

/// Non-empty secret of up to 32 bytes
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = (usize::arbitrary(g) % 32) + 1;
        Secret((0..length).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Picks `take` distinct shares pseudo-randomly, seeded by the test case.
fn pick_subset(shares: &[ShamirShare], take: usize, seed: u64) -> Vec<ShamirShare> {
    let mut indices: Vec<usize> = (0..shares.len()).collect();
    let mut state = seed;
    for i in (1..indices.len()).rev() {
        // xorshift64 is plenty for test-case selection.
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        indices.swap(i, (state as usize) % (i + 1));
    }
    indices
        .into_iter()
        .take(take)
        .map(|i| shares[i].clone())
        .collect()
}

#[quickcheck]
fn prop_any_threshold_subset_reconstructs(secret: Secret, params: ValidParams, seed: u64) -> bool {
    let Secret(bytes) = secret;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let shares =
        shamir::split(&bytes, params.threshold, params.count, &mut rng).expect("valid params");

    let subset = pick_subset(&shares, params.threshold as usize, seed);
    let recovered = shamir::reconstruct(&subset, params.threshold).expect("quorum present");
    *recovered == bytes
}

#[quickcheck]
fn prop_below_threshold_fails(secret: Secret, params: ValidParams, seed: u64) -> bool {
    if params.threshold < 2 {
        return true; // A 1-of-n split has no below-threshold subset.
    }
    let Secret(bytes) = secret;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let shares =
        shamir::split(&bytes, params.threshold, params.count, &mut rng).expect("valid params");

    let subset = pick_subset(&shares, params.threshold as usize - 1, seed);
    matches!(
        shamir::reconstruct(&subset, params.threshold),
        Err(Error::InsufficientShares { .. })
    )
}

#[quickcheck]
fn prop_extra_shares_do_not_change_the_secret(
    secret: Secret,
    params: ValidParams,
    seed: u64,
) -> bool {
    let Secret(bytes) = secret;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let shares =
        shamir::split(&bytes, params.threshold, params.count, &mut rng).expect("valid params");

    // Feeding the full share set must agree with a minimal quorum.
    let recovered = shamir::reconstruct(&shares, params.threshold).expect("quorum present");
    *recovered == bytes
}

#[quickcheck]
fn prop_tampered_duplicate_is_detected(secret: Secret, seed: u64) -> bool {
    let Secret(bytes) = secret;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let shares = shamir::split(&bytes, 2, 3, &mut rng).expect("valid params");

    let mut tampered = shares[0].clone();
    tampered.value[0] ^= 0x01;
    let set = vec![shares[0].clone(), tampered, shares[1].clone()];
    matches!(
        shamir::reconstruct(&set, 2),
        Err(Error::DuplicateShare { .. })
    )
}
