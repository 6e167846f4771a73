//! Property tests for grouped share encoding and recovery

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use kintsugi::domain::{GroupSpec, ShareCount, SlipConfig, Threshold};
use kintsugi::error::Error;
use kintsugi::{commands, mnemonic, share};

/// A small random grouped layout (1..=4 groups, members 1..=6 each)
#[derive(Clone, Debug)]
struct ValidLayout {
    group_threshold: u8,
    groups: Vec<(u8, u8)>,
}

impl Arbitrary for ValidLayout {
    fn arbitrary(g: &mut Gen) -> Self {
        let group_count = (u8::arbitrary(g) % 4) + 1;
        let groups = (0..group_count)
            .map(|_| {
                let count = (u8::arbitrary(g) % 6) + 1;
                let threshold = (u8::arbitrary(g) % count) + 1;
                (threshold, count)
            })
            .collect();
        let group_threshold = (u8::arbitrary(g) % group_count) + 1;
        ValidLayout {
            group_threshold,
            groups,
        }
    }
}

impl ValidLayout {
    fn config(&self) -> SlipConfig {
        let specs = self
            .groups
            .iter()
            .map(|&(threshold, count)| {
                GroupSpec::new(
                    Threshold::new(threshold).expect("generated in range"),
                    ShareCount::new(count).expect("generated in range"),
                )
                .expect("threshold <= count by construction")
            })
            .collect();
        SlipConfig::new(
            Threshold::new(self.group_threshold).expect("generated in range"),
            specs,
        )
        .expect("group threshold <= group count by construction")
    }
}

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

/// Taking exactly the member threshold from exactly the group threshold of
/// groups always recovers the secret.
#[quickcheck]
fn prop_minimal_quorum_recovers(entropy: ValidEntropy, layout: ValidLayout, seed: u64) -> bool {
    let ValidEntropy(bytes) = entropy;
    let config = layout.config();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let groups = commands::deconstruct_slip39(&bytes, &config, &mut rng).expect("valid layout");

    let selected: Vec<&String> = groups
        .iter()
        .take(layout.group_threshold as usize)
        .flat_map(|(index, mnemonics)| {
            let member_threshold = layout.groups[*index as usize].0 as usize;
            mnemonics.iter().take(member_threshold)
        })
        .collect();

    let recovered = commands::reconstruct_slip39(&selected).expect("quorum satisfied");
    *recovered == bytes
}

/// Every share mnemonic survives a decode/encode round trip.
#[quickcheck]
fn prop_share_mnemonics_round_trip(entropy: ValidEntropy, layout: ValidLayout, seed: u64) -> bool {
    let ValidEntropy(bytes) = entropy;
    let config = layout.config();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let groups = commands::deconstruct_slip39(&bytes, &config, &mut rng).expect("valid layout");

    groups.values().flatten().all(|mnemonic_text| {
        let decoded = share::decode_share(mnemonic_text).expect("own share decodes");
        share::encode_share(&decoded) == *mnemonic_text
    })
}

/// One group short of the group threshold always fails with
/// `InsufficientGroups`.
#[quickcheck]
fn prop_missing_group_fails(entropy: ValidEntropy, layout: ValidLayout, seed: u64) -> bool {
    let ValidEntropy(bytes) = entropy;
    let config = layout.config();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let groups = commands::deconstruct_slip39(&bytes, &config, &mut rng).expect("valid layout");

    let selected: Vec<&String> = groups
        .iter()
        .take(layout.group_threshold as usize - 1)
        .flat_map(|(index, mnemonics)| {
            let member_threshold = layout.groups[*index as usize].0 as usize;
            mnemonics.iter().take(member_threshold)
        })
        .collect();

    matches!(
        commands::reconstruct_slip39(&selected),
        Err(Error::InsufficientGroups { .. }) | Err(Error::MismatchedShareSet { .. })
    )
}

/// A group supplying fewer members than its threshold never counts toward
/// the group quorum.
#[quickcheck]
fn prop_starved_group_does_not_count(entropy: ValidEntropy, seed: u64) -> bool {
    let ValidEntropy(bytes) = entropy;
    let config = SlipConfig::new(
        Threshold::new(2).expect("valid"),
        vec![
            GroupSpec::new(Threshold::new(2).expect("valid"), ShareCount::new(3).expect("valid"))
                .expect("valid"),
            GroupSpec::new(Threshold::new(2).expect("valid"), ShareCount::new(3).expect("valid"))
                .expect("valid"),
        ],
    )
    .expect("valid");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let groups = commands::deconstruct_slip39(&bytes, &config, &mut rng).expect("valid layout");

    let selected = [
        groups[&0][0].as_str(),
        groups[&0][1].as_str(),
        groups[&1][0].as_str(),
    ];
    matches!(
        commands::reconstruct_slip39(&selected),
        Err(Error::InsufficientGroups { needed: 2, got: 1 })
    )
}
