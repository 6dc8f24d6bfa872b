// src/models/option_type.rs
use crate::error::PricingError;
use std::fmt;
use std::str::FromStr;

/// Exercise right of a European vanilla option
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Permissive parse kept for compatibility with loosely typed callers
    ///
    /// Only `"call"` (any case) selects [`OptionType::Call`]; every other
    /// string, including typos, falls through to [`OptionType::Put`].
    /// Use [`str::parse`] to reject unknown strings instead.
    pub fn lenient(value: &str) -> Self {
        let normalized = value.to_lowercase();
        if normalized == "call" {
            OptionType::Call
        } else {
            if normalized != "put" {
                tracing::warn!(
                    option_type = %value,
                    "unrecognized option type, pricing as put"
                );
            }
            OptionType::Put
        }
    }

    /// Capitalized name used in chart titles
    pub fn label(self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}
