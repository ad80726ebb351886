//! Token types shared by the tokenizers and the ranker.
//!
//! A corpus is an ordered `Vec` of tokens; order is what the ranker's
//! tie-breaking leans on, so tokenizers must preserve input order.

use serde::{Deserialize, Serialize};

/// A numeric token with exact value equality.
///
/// Wraps the column value's bit pattern so it can key a hash map.
/// Negative zero is normalized to positive zero on construction; the two
/// compare equal as values and must count as one token. NaN never reaches
/// this type — the numeric tokenizer treats it as missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number(u64);

impl Serialize for Number {
    /// Serializes as the numeric value, not the bit pattern.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl Number {
    /// Wrap a column value.
    pub fn new(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        Self(value.to_bits())
    }

    /// The wrapped value.
    pub fn value(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// How many ranked entries to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TopN {
    /// The ten most frequent tokens (default).
    #[default]
    #[serde(rename = "10")]
    #[cfg_attr(feature = "clap", value(name = "10"))]
    Ten,
    /// The twenty most frequent tokens.
    #[serde(rename = "20")]
    #[cfg_attr(feature = "clap", value(name = "20"))]
    Twenty,
    /// The fifty most frequent tokens.
    #[serde(rename = "50")]
    #[cfg_attr(feature = "clap", value(name = "50"))]
    Fifty,
    /// Every entry.
    #[serde(rename = "all")]
    #[cfg_attr(feature = "clap", value(name = "all"))]
    All,
}

impl TopN {
    /// The entry limit, or `None` for [`TopN::All`].
    pub const fn limit(&self) -> Option<usize> {
        match self {
            Self::Ten => Some(10),
            Self::Twenty => Some(20),
            Self::Fifty => Some(50),
            Self::All => None,
        }
    }
}

impl std::fmt::Display for TopN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ten => f.write_str("10"),
            Self::Twenty => f.write_str("20"),
            Self::Fifty => f.write_str("50"),
            Self::All => f.write_str("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_are_one_token() {
        assert_eq!(Number::new(2.5), Number::new(2.5));
        assert_ne!(Number::new(2.5), Number::new(2.50001));
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(Number::new(-0.0), Number::new(0.0));
    }

    #[test]
    fn exact_precision_is_kept() {
        let n = Number::new(0.1 + 0.2);
        assert_eq!(n.value(), 0.1 + 0.2);
        assert_ne!(n, Number::new(0.3));
    }

    #[test]
    fn limits() {
        assert_eq!(TopN::Ten.limit(), Some(10));
        assert_eq!(TopN::Twenty.limit(), Some(20));
        assert_eq!(TopN::Fifty.limit(), Some(50));
        assert_eq!(TopN::All.limit(), None);
    }

    #[test]
    fn serde_round_trip_uses_display_names() {
        let json = serde_json::to_string(&TopN::All).unwrap();
        assert_eq!(json, "\"all\"");
        let back: TopN = serde_json::from_str("\"20\"").unwrap();
        assert_eq!(back, TopN::Twenty);
    }
}
