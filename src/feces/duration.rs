use crate::error::{FecesError, Result};

/// Units accepted by the compact duration grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            'M' => Some(Self::Months),
            'y' => Some(Self::Years),
            _ => None,
        }
    }

    /// Milliseconds in one unit. Months and years use the civil averages
    /// (30.44 and 365.25 days).
    pub fn millis(self) -> i64 {
        match self {
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
            Self::Weeks => 604_800_000,
            Self::Months => 2_629_800_000,
            Self::Years => 31_557_600_000,
        }
    }
}

/// Parses a compact duration like `10d` or `36h` into milliseconds.
///
/// The literal `"0"` is a sentinel meaning "everything, regardless of age"
/// and parses to zero without a unit; a quantified zero such as `"0h"` is
/// rejected. Anything else must be one or more digits followed by a single
/// unit letter (s, m, h, d, w, M, y). No whitespace, sign, or decimals.
pub fn parse_duration(text: &str) -> Result<i64> {
    if text == "0" {
        return Ok(0);
    }

    let invalid = || FecesError::InvalidDuration(text.to_string());

    let unit_ch = text.chars().next_back().ok_or_else(invalid)?;
    let unit = DurationUnit::from_char(unit_ch).ok_or_else(invalid)?;

    let digits = &text[..text.len() - unit_ch.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let count: i64 = digits.parse().map_err(|_| invalid())?;
    if count == 0 {
        return Err(invalid());
    }

    count.checked_mul(unit.millis()).ok_or_else(invalid)
}
