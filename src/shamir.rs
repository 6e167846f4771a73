//! Shamir Secret Sharing over GF(256), one polynomial per secret byte
//!
//! Splitting embeds each secret byte as the constant term of a random
//! polynomial of degree `threshold - 1` and evaluates it at x = 1..=count;
//! x = 0 is the secret itself and is never issued as a share. Reconstruction
//! interpolates back to x = 0 with Lagrange basis polynomials, byte by byte.
//!
//! Coefficient randomness comes from an injected CSPRNG so production code
//! uses the operating system generator while tests pin a seeded one.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::gf256;

/// One point of a byte-wise split: the x-coordinate and one polynomial
/// evaluation per secret byte.
#[derive(Debug, Clone, PartialEq)]
pub struct ShamirShare {
    pub x: u8,
    pub value: Zeroizing<Vec<u8>>,
}

/// Evaluates a polynomial (constant term first) at `x` by Horner's rule.
fn eval(coefficients: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &coefficient in coefficients.iter().rev() {
        result = gf256::add(gf256::mul(result, x), coefficient);
    }
    result
}

/// Splits `secret` into `count` shares of which any `threshold` reconstruct.
///
/// A threshold of 1 is a degree-zero polynomial: every share carries the
/// secret verbatim. That is deliberate, single-group SLIP39 layouts use a
/// 1-of-1 outer split.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if `threshold` is zero or exceeds
/// `count`, or if `count` is zero or the secret is empty.
pub fn split<R: RngCore + CryptoRng>(
    secret: &[u8],
    threshold: u8,
    count: u8,
    rng: &mut R,
) -> Result<Vec<ShamirShare>> {
    if threshold == 0 {
        return Err(Error::parameter("threshold must be at least 1"));
    }
    if count == 0 {
        return Err(Error::parameter("share count must be at least 1"));
    }
    if threshold > count {
        return Err(Error::parameter(format!(
            "threshold {threshold} cannot exceed share count {count}"
        )));
    }
    if secret.is_empty() {
        return Err(Error::parameter("secret must not be empty"));
    }

    let mut shares: Vec<ShamirShare> = (1..=count)
        .map(|x| ShamirShare {
            x,
            value: Zeroizing::new(Vec::with_capacity(secret.len())),
        })
        .collect();

    let mut coefficients = Zeroizing::new(vec![0u8; threshold as usize]);
    for &secret_byte in secret {
        coefficients[0] = secret_byte;
        rng.fill_bytes(&mut coefficients[1..]);

        for share in &mut shares {
            share.value.push(eval(&coefficients, share.x));
        }
    }

    Ok(shares)
}

/// Reconstructs the secret from at least `threshold` distinct share points.
///
/// Exactly `threshold` points (lowest x first) feed the interpolation; any
/// consistent subset of that size yields the identical secret.
///
/// # Errors
/// Returns [`Error::DuplicateShare`] when one x-coordinate carries two
/// different values, [`Error::MismatchedShareSet`] when value lengths
/// disagree, and [`Error::InsufficientShares`] when fewer than `threshold`
/// distinct x-coordinates are present.
pub fn reconstruct(shares: &[ShamirShare], threshold: u8) -> Result<Zeroizing<Vec<u8>>> {
    let mut distinct: Vec<&ShamirShare> = Vec::with_capacity(shares.len());
    for share in shares {
        match distinct.iter().find(|seen| seen.x == share.x) {
            Some(seen) if seen.value == share.value => {}
            Some(_) => return Err(Error::DuplicateShare { x: share.x }),
            None => distinct.push(share),
        }
    }

    if let Some(first) = distinct.first() {
        let length = first.value.len();
        if distinct.iter().any(|share| share.value.len() != length) {
            return Err(Error::mismatched("share value lengths differ"));
        }
    }

    if distinct.len() < threshold as usize {
        return Err(Error::InsufficientShares {
            needed: threshold,
            got: distinct.len(),
        });
    }

    distinct.sort_by_key(|share| share.x);
    let points = &distinct[..threshold as usize];

    // Lagrange basis at x = 0 is independent of the byte position.
    let mut basis = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let mut weight = 1u8;
        for (j, other) in points.iter().enumerate() {
            if i != j {
                let numerator = other.x;
                let denominator = gf256::sub(other.x, point.x);
                weight = gf256::mul(weight, gf256::div(numerator, denominator)?);
            }
        }
        basis.push(weight);
    }

    let length = points[0].value.len();
    let mut secret = Zeroizing::new(vec![0u8; length]);
    for (point, &weight) in points.iter().zip(&basis) {
        for (secret_byte, &y) in secret.iter_mut().zip(point.value.iter()) {
            *secret_byte = gf256::add(*secret_byte, gf256::mul(weight, y));
        }
    }

    Ok(secret)
}
