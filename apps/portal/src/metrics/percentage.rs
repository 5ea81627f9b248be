use std::fmt;

use serde::{Deserialize, Serialize};

/// Text shown in place of a ratio whose denominator is zero.
pub const UNDEFINED_DISPLAY: &str = "—";

/// A ratio expressed as a percentage, rounded to one decimal.
///
/// A zero or non-finite denominator produces `Undefined` instead of NaN or
/// infinity. It renders as `—`, serializes as `null`, and reads as `0.0`
/// through [`Percentage::value_or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Option<f64>", from = "Option<f64>")]
pub enum Percentage {
    Defined(f64),
    Undefined,
}

impl Percentage {
    pub fn value(self) -> Option<f64> {
        match self {
            Percentage::Defined(v) => Some(v),
            Percentage::Undefined => None,
        }
    }

    pub fn value_or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Percentage::Defined(_))
    }
}

impl From<Percentage> for Option<f64> {
    fn from(p: Percentage) -> Self {
        p.value()
    }
}

impl From<Option<f64>> for Percentage {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) if v.is_finite() => Percentage::Defined(v),
            _ => Percentage::Undefined,
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Defined(v) => write!(f, "{v:.1}%"),
            Percentage::Undefined => f.write_str(UNDEFINED_DISPLAY),
        }
    }
}

/// `round(numerator / denominator * 100, 1)`.
pub fn percentage(numerator: f64, denominator: f64) -> Percentage {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return Percentage::Undefined;
    }
    let value = round_to_tenth(numerator / denominator * 100.0);
    if value.is_finite() {
        Percentage::Defined(value)
    } else {
        Percentage::Undefined
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
