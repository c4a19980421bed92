//! Chilean RUT validation
//!
//! [`is_valid_rut`] is the boolean check used by form and field handling.
//! [`Rut::parse`] accepts the same inputs and additionally says why a
//! rejected input failed.

pub mod checksum;
pub mod model;

use std::sync::LazyLock;

use regex::Regex;

pub use checksum::check_digit;
pub use model::{CheckDigit, Rut, RutError};

/// `body-dv`: 7 or 8 ASCII digits, a hyphen, one of `0-9kK`.
///
/// `[0-9]` rather than `\d`, which is Unicode-aware in the regex crate.
static RUT_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{7,8})-([0-9kK])$").expect("RUT pattern is valid"));

/// Decide whether `input` is a well-formed RUT with a matching check digit.
///
/// Never fails: malformed text and checksum mismatches both yield `false`.
pub fn is_valid_rut(input: &str) -> bool {
    let Some(captures) = RUT_FORMAT.captures(input) else {
        log::trace!("RUT format mismatch: {:?}", input);
        return false;
    };

    let body = &captures[1];
    let found = captures[2].chars().next().and_then(CheckDigit::from_char);

    match (check_digit(body), found) {
        (Some(expected), Some(found)) => expected == found,
        _ => false,
    }
}
