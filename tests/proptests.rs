//! Property-based tests
//!
//! This test suite uses quickcheck to verify correctness across random
//! inputs: entropy of every valid length, random thresholds and layouts, and
//! random share selections.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/groups.rs"]
mod groups;

#[path = "proptests/mnemonic.rs"]
mod mnemonic;

#[path = "proptests/shamir.rs"]
mod shamir;
