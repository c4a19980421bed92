//! RUT value types
//!
//! A [`Rut`] can only be obtained through [`Rut::parse`] or
//! [`Rut::from_body`], so holding one means the number is well-formed and
//! its check digit matches the body.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::checksum;

/// Allowed body lengths, in digits
pub const BODY_LENGTHS: std::ops::RangeInclusive<usize> = 7..=8;

/// The verification character that follows the hyphen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    /// A decimal digit, 0 through 9
    Digit(u8),
    /// The letter K, standing for a remainder of 10
    K,
}

impl CheckDigit {
    /// Parse a check character, accepting `k` and `K` alike
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'k' | 'K' => Some(CheckDigit::K),
            // to_digit(10) only accepts ASCII 0-9 and yields 0..=9
            c => c.to_digit(10).map(|d| CheckDigit::Digit(d as u8)),
        }
    }

    /// Upper-case character form
    pub fn as_char(self) -> char {
        match self {
            CheckDigit::Digit(d) => char::from(b'0' + d),
            CheckDigit::K => 'K',
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Reasons a string is not a valid RUT
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RutError {
    Empty,
    MissingSeparator,
    InvalidBodyCharacter { ch: char },
    BodyLength { len: usize },
    CheckDigitLength { len: usize },
    InvalidCheckDigit { ch: char },
    ChecksumMismatch {
        expected: CheckDigit,
        found: CheckDigit,
    },
}

impl RutError {
    /// True when the text is well-formed and only the checksum disagrees
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, RutError::ChecksumMismatch { .. })
    }
}

impl fmt::Display for RutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RutError::Empty => write!(f, "RUT is empty"),
            RutError::MissingSeparator => {
                write!(f, "missing '-' between body and check digit")
            }
            RutError::InvalidBodyCharacter { ch } => {
                write!(f, "body contains non-digit character {:?}", ch)
            }
            RutError::BodyLength { len } => {
                write!(f, "body must have 7 or 8 digits, found {}", len)
            }
            RutError::CheckDigitLength { len } => write!(
                f,
                "check digit must be a single character, found {}",
                len
            ),
            RutError::InvalidCheckDigit { ch } => {
                write!(f, "check digit {:?} is not 0-9 or K", ch)
            }
            RutError::ChecksumMismatch { expected, found } => write!(
                f,
                "check digit mismatch: expected '{}', found '{}'",
                expected, found
            ),
        }
    }
}

impl std::error::Error for RutError {}

/// A well-formed RUT with a matching check digit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check_digit: CheckDigit,
}

impl Rut {
    /// Parse `"<body>-<check digit>"`, reporting why the text is rejected.
    ///
    /// Accepts exactly what [`crate::is_valid_rut`] accepts. The input is
    /// taken literally: surrounding whitespace is an error.
    pub fn parse(input: &str) -> Result<Self, RutError> {
        if input.is_empty() {
            return Err(RutError::Empty);
        }

        let (body, dv) = input
            .split_once('-')
            .ok_or(RutError::MissingSeparator)?;
        check_body(body)?;

        let mut dv_chars = dv.chars();
        let ch = match (dv_chars.next(), dv_chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(RutError::CheckDigitLength {
                    len: dv.chars().count(),
                });
            }
        };
        let found = CheckDigit::from_char(ch).ok_or(RutError::InvalidCheckDigit { ch })?;

        let expected =
            checksum::check_digit(body).ok_or(RutError::BodyLength { len: body.len() })?;
        if expected != found {
            return Err(RutError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            body: body.to_string(),
            check_digit: found,
        })
    }

    /// Build the RUT for a 7 or 8 digit body by computing its check digit
    pub fn from_body(body: &str) -> Result<Self, RutError> {
        if body.is_empty() {
            return Err(RutError::Empty);
        }
        check_body(body)?;

        let check_digit =
            checksum::check_digit(body).ok_or(RutError::BodyLength { len: body.len() })?;
        Ok(Self {
            body: body.to_string(),
            check_digit,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }
}

/// Body must be ASCII digits only, with an allowed length
fn check_body(body: &str) -> Result<(), RutError> {
    if let Some(ch) = body.chars().find(|c| !c.is_ascii_digit()) {
        return Err(RutError::InvalidBodyCharacter { ch });
    }
    if !BODY_LENGTHS.contains(&body.len()) {
        return Err(RutError::BodyLength { len: body.len() });
    }
    Ok(())
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body, self.check_digit)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
