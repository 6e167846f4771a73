//! Arithmetic in GF(2^8) with the AES/SLIP39 polynomial x^8+x^4+x^3+x+1
//!
//! Addition is XOR (every element is its own additive inverse).
//! Multiplication and division go through exponential/logarithm tables over
//! the generator 3, built once at process start and read-only afterwards. The
//! exp table is doubled so a sum of two logs never needs reduction mod 255.

use std::sync::LazyLock;

use crate::error::{Error, Result};

/// x^8 + x^4 + x^3 + x + 1
const POLYNOMIAL: u16 = 0x11B;

struct Tables {
    exp: [u8; 510],
    log: [u8; 256],
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];

    // Successive powers of the generator 3 = x + 1: value*3 = value*2 ^ value.
    let mut value: u16 = 1;
    for i in 0..255 {
        exp[i] = value as u8;
        exp[i + 255] = value as u8;
        log[value as usize] = i as u8;

        let mut doubled = value << 1;
        if doubled & 0x100 != 0 {
            doubled ^= POLYNOMIAL;
        }
        value = doubled ^ value;
    }

    Tables { exp, log }
});

/// Addition in GF(256).
#[inline]
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtraction in GF(256); identical to addition in characteristic 2.
#[inline]
#[must_use]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication in GF(256).
#[inline]
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let tables = &*TABLES;
    tables.exp[tables.log[a as usize] as usize + tables.log[b as usize] as usize]
}

/// Division in GF(256).
///
/// # Errors
/// Returns [`Error::DivideByZero`] if `b` is zero.
#[inline]
pub fn div(a: u8, b: u8) -> Result<u8> {
    if b == 0 {
        return Err(Error::DivideByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let tables = &*TABLES;
    Ok(tables.exp[tables.log[a as usize] as usize + 255 - tables.log[b as usize] as usize])
}

/// Multiplicative inverse in GF(256).
///
/// # Errors
/// Returns [`Error::DivideByZero`] if `a` is zero.
#[inline]
pub fn inv(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(Error::DivideByZero);
    }
    let tables = &*TABLES;
    Ok(tables.exp[255 - tables.log[a as usize] as usize])
}
