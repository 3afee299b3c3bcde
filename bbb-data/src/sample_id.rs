//! Canonical sample identifiers.
//!
//! The dataset spells the same identifier differently depending on where it
//! appears: `names` and `samples[].id` hold strings (`"940"`) while
//! `metadata[].id` holds numbers (`940`). Every identifier is normalized to
//! one canonical string when the document is deserialized, so lookups are
//! plain string comparisons.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A sample identifier in canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SampleId(String);

impl SampleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonicalize a JSON scalar. Returns `None` for values that cannot
    /// name a sample (null, booleans, arrays, objects).
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    n.as_f64().map(|f| Self(format_number(f)))
                }
            }
            _ => None,
        }
    }
}

/// The integer value of `f` when it has no fractional part and fits `i64`.
pub(crate) fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e18 {
        Some(f as i64)
    } else {
        None
    }
}

/// Format a float the way JavaScript's `String(number)` does: integral
/// values without a fraction (`940.0` -> `940`), exponent form below 1e-6
/// and from 1e21 up (`1e-7`, `1e+21`).
pub(crate) fn format_number(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits, e.g. "-1.5e-7"
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // value = 0.<digits> * 10^n
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{}e{}{}", head, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", head, tail, sign, (n - 1).abs())
        }
    };

    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SampleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SampleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for SampleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        SampleId::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a string or number sample id, got {value}"))
        })
    }
}
