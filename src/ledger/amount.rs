//! Lenient parsing for user-entered amounts.
//!
//! Inputs arrive as free text typed into a form, often with thousands
//! separators (`1.500.000`, `1,500,000`, `1 500 000`) and sometimes a
//! trailing unit (`1.500.000 COP`). Separators and whitespace are stripped,
//! the longest leading number is kept, and input with no leading number
//! counts as zero. Parsing never errors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Parses a locale-formatted amount, coercing unparseable input to `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '.' | ',') && !ch.is_whitespace())
        .collect();
    match leading_number(&cleaned).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix of `text` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut idx: usize| {
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
        idx
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 || has_digits {
            has_digits |= fraction_end > end + 1;
            end = fraction_end;
        }
    }
    if !has_digits {
        return "";
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}

/// An amount exactly as it was entered.
///
/// Persisted records may hold either a JSON string or a JSON number for these
/// fields. Both forms are kept as they came in so a snapshot written back out
/// is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    pub fn new(raw: impl Into<String>) -> Self {
        RawAmount::Text(raw.into())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            RawAmount::Text(text) => text.trim().is_empty(),
            RawAmount::Number(_) => false,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            RawAmount::Text(text) => parse_amount(text),
            RawAmount::Number(number) if number.is_finite() => *number,
            RawAmount::Number(_) => 0.0,
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text(String::new())
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Text(text) => f.write_str(text),
            RawAmount::Number(number) => write!(f, "{}", number),
        }
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawAmount::Text(text) => serializer.serialize_str(text),
            RawAmount::Number(number) => serializer.serialize_f64(*number),
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LooseValue::deserialize(deserializer)? {
            LooseValue::Text(text) => Ok(RawAmount::Text(text)),
            LooseValue::Number(number) => Ok(RawAmount::Number(number)),
            LooseValue::Missing => Ok(RawAmount::default()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Number(f64),
    Missing,
}

impl LooseValue {
    fn to_amount(&self) -> f64 {
        match self {
            LooseValue::Text(text) => parse_amount(text),
            LooseValue::Number(number) if number.is_finite() => *number,
            LooseValue::Number(_) => 0.0,
            LooseValue::Missing => 0.0,
        }
    }
}

/// Deserializes a list of amounts whose elements may be numbers, numeric
/// strings or nulls.
pub fn lenient_amounts<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<LooseValue>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .iter()
        .map(LooseValue::to_amount)
        .collect())
}

/// Deserializes a single amount that may be stored as a number or a string.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.map(|value| value.to_amount()).unwrap_or(0.0))
}
