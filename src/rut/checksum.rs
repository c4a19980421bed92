//! Modulo-11 check digit computation.
//!
//! Digits of the body are weighted right-to-left with the cyclic sequence
//! 2, 3, 4, 5, 6, 7, 2, 3, ... and the weighted sum is reduced modulo 11.

use super::model::CheckDigit;

/// First weight applied to the rightmost body digit
const FIRST_WEIGHT: u32 = 2;
/// Weight after which the sequence wraps back to `FIRST_WEIGHT`
const LAST_WEIGHT: u32 = 7;

/// Weighted sum of the body digits modulo 11, or `None` if the body holds
/// a non-digit.
///
/// Reduced at every step so bodies of any length stay within `u32`. Each
/// character is converted on its own, so leading zeros keep their position
/// in the weighting and only contribute a zero.
pub fn weighted_residue(body: &str) -> Option<u32> {
    let mut residue = 0;
    let mut multiplier = FIRST_WEIGHT;

    for ch in body.chars().rev() {
        let digit = ch.to_digit(10)?;
        residue = (residue + digit * multiplier) % 11;
        multiplier = if multiplier == LAST_WEIGHT {
            FIRST_WEIGHT
        } else {
            multiplier + 1
        };
    }

    Some(residue)
}

/// Map a weighted sum (or its residue) to its check digit
pub fn check_digit_for_sum(sum: u32) -> CheckDigit {
    match 11 - (sum % 11) {
        11 => CheckDigit::Digit(0),
        10 => CheckDigit::K,
        // 1..=9 always fits in a u8
        remainder => CheckDigit::Digit(remainder as u8),
    }
}

/// Compute the check digit for a body of ASCII digits.
///
/// Returns `None` for an empty body or one containing anything but `0-9`.
/// Length is not restricted here; see [`crate::Rut::from_body`] for the
/// 7–8 digit rule.
pub fn check_digit(body: &str) -> Option<CheckDigit> {
    if body.is_empty() {
        return None;
    }
    weighted_residue(body).map(check_digit_for_sum)
}
