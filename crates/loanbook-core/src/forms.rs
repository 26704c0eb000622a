//! Form-field boundary for free-text numeric input.
//!
//! The presentation layer feeds raw strings from partially-filled forms
//! into the tolerant calculators. Those inputs are modelled as an explicit
//! variant rather than coerced: a calculator that tolerates a blank field
//! does so through [`ParsedNumber::or_zero`], never through implicit
//! parsing.

use rust_decimal::Decimal;

/// A numeric form field after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNumber {
    Valid(Decimal),
    Missing,
    Invalid,
}

impl ParsedNumber {
    /// Parse a raw form value. Blank (after trimming) is `Missing`;
    /// anything unparseable is `Invalid`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParsedNumber::Missing;
        }
        match trimmed.parse::<Decimal>() {
            Ok(value) => ParsedNumber::Valid(value),
            Err(_) => ParsedNumber::Invalid,
        }
    }

    /// Parse an optional field; an absent field is `Missing`.
    pub fn from_option(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => ParsedNumber::parse(s),
            None => ParsedNumber::Missing,
        }
    }

    /// The documented tolerant default: any non-valid field counts as zero.
    pub fn or_zero(self) -> Decimal {
        self.valid().unwrap_or(Decimal::ZERO)
    }

    pub fn valid(self) -> Option<Decimal> {
        match self {
            ParsedNumber::Valid(value) => Some(value),
            ParsedNumber::Missing | ParsedNumber::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, ParsedNumber::Valid(_))
    }
}

impl From<Decimal> for ParsedNumber {
    fn from(value: Decimal) -> Self {
        ParsedNumber::Valid(value)
    }
}
