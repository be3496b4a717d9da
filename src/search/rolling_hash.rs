//! Polynomial rolling hash over a sliding window of chars.
//!
//! The hash of a window `w` is `Σ code(w[k]) * BASE^k (mod MODULUS)`. Sliding
//! right by one removes the term at position 0, shifts every remaining term
//! down one power and adds the entering char at the top power.
//!
//! The shift is a division by `BASE`. Over unbounded integers that division is
//! exact, but a fixed-width port of it would overflow for long windows, so the
//! whole computation is carried out modulo a prime and the division becomes a
//! multiplication by the modular inverse of `BASE`.

use crate::error::{AlgoError, Result};
use tracing::trace;

pub const BASE: u64 = 3;

/// Prime modulus; `MODULUS * MODULUS` fits in a `u64`.
pub const MODULUS: u64 = 1_000_000_007;

/// `BASE^-1 mod MODULUS`, via Fermat's little theorem.
pub const BASE_INVERSE: u64 = pow_mod(BASE, MODULUS - 2);

const fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut result = 1;
    base %= MODULUS;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % MODULUS;
        }
        base = base * base % MODULUS;
        exp >>= 1;
    }
    result
}

fn code(ch: char) -> u64 {
    u64::from(ch) % MODULUS
}

/// Hash of `window` computed from scratch.
pub fn polynomial_hash(window: &[char]) -> u64 {
    let mut hash = 0;
    let mut power = 1;

    for &ch in window {
        hash = (hash + code(ch) * power) % MODULUS;
        power = power * BASE % MODULUS;
    }

    hash
}

/// Fixed-width window over `text` whose hash is maintained in O(1) per step.
#[derive(Debug, Clone)]
pub struct RollingHasher<'a> {
    text: &'a [char],
    width: usize,
    start: usize,
    hash: u64,
    top_power: u64,
}

impl<'a> RollingHasher<'a> {
    pub fn new(text: &'a [char], width: usize) -> Result<Self> {
        if width == 0 {
            return Err(AlgoError::invalid_input("rolling hash window must be non-empty"));
        }
        if width > text.len() {
            return Err(AlgoError::invalid_input(format!(
                "window of {} chars does not fit in text of {} chars",
                width,
                text.len()
            )));
        }

        Ok(RollingHasher {
            text,
            width,
            start: 0,
            hash: polynomial_hash(&text[..width]),
            top_power: pow_mod(BASE, (width - 1) as u64),
        })
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn window(&self) -> &'a [char] {
        &self.text[self.start..self.start + self.width]
    }

    /// Slides the window one char to the right. Returns `false`, leaving the
    /// window unchanged, when it already ends at the last char.
    pub fn roll(&mut self) -> bool {
        let end = self.start + self.width;
        if end >= self.text.len() {
            return false;
        }

        let leaving = code(self.text[self.start]);
        let entering = code(self.text[end]);

        let shifted = (self.hash + MODULUS - leaving) % MODULUS * BASE_INVERSE % MODULUS;
        self.hash = (shifted + entering * self.top_power) % MODULUS;
        self.start += 1;

        trace!(start = self.start, hash = self.hash, "rolled window");
        true
    }
}
