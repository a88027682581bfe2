//! Booking reference ids: a fixed alphabetic prefix followed by a random
//! decimal number, not zero-padded. They are neither unique nor persisted.

use std::fmt;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceId {
    prefix: String,
    number: u32,
}

impl ReferenceId {
    /// Draw a reference with a number in `[0, max]`.
    pub fn generate<R: Rng + ?Sized>(prefix: &str, max: u32, rng: &mut R) -> Self {
        Self {
            prefix: prefix.to_string(),
            number: rng.gen_range(0..=max),
        }
    }

    /// Parse `<prefix><digits>`. Zero-padded numbers are rejected since
    /// generated ids never carry them.
    pub fn parse(value: &str, prefix: &str) -> Option<Self> {
        let digits = value.strip_prefix(prefix)?;
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            number: digits.parse().ok()?,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}
