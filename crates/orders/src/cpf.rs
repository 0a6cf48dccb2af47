//! Brazilian individual tax id (CPF).
//!
//! Accepts the bare 11-digit form or the punctuated `000.000.000-00` form.
//! The last two digits are mod-11 check digits over the preceding ones.

use serde::{Deserialize, Serialize};

/// A CPF that passed the checksum, stored as its 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Normalize and checksum `raw`; `None` when it is not a valid CPF.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = digits_of(raw)?;

        // Repeated digits satisfy the checksum but are never issued.
        if digits.iter().all(|d| *d == digits[0]) {
            return None;
        }

        let mut body = [0u32; 9];
        body.copy_from_slice(&digits[..9]);
        let (first, second) = check_digits(&body);
        if digits[9] != first || digits[10] != second {
            return None;
        }

        Some(Self(digits.iter().filter_map(|d| char::from_digit(*d, 10)).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid(raw: &str) -> bool {
    Cpf::parse(raw).is_some()
}

fn digits_of(raw: &str) -> Option<[u32; 11]> {
    let digits = raw
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;
    digits.try_into().ok()
}

/// Compute both check digits for the first nine digits.
pub(crate) fn check_digits(body: &[u32; 9]) -> (u32, u32) {
    let first = mod11(body.iter().zip((2..=10).rev()).map(|(d, w)| d * w).sum());
    let second = mod11(
        body.iter()
            .zip((3..=11).rev())
            .map(|(d, w)| d * w)
            .sum::<u32>()
            + first * 2,
    );
    (first, second)
}

fn mod11(sum: u32) -> u32 {
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}
