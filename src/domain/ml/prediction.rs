use serde::Serialize;
use std::fmt;

/// Raw classifier output before presentation rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inference {
    /// Predicted class: 0 = non-default, 1 = default
    pub class: u8,
    /// Probability of the positive (default) class, in [0, 1]
    pub default_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanLabel {
    Default,
    NonDefault,
}

impl LoanLabel {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            LoanLabel::Default
        } else {
            LoanLabel::NonDefault
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanLabel::Default => "Default",
            LoanLabel::NonDefault => "Non-Default",
        }
    }
}

impl fmt::Display for LoanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LoanLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Prediction as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultPrediction {
    pub prediction: u8,
    pub label: LoanLabel,
    pub default_probability: f64,
}

impl From<Inference> for DefaultPrediction {
    fn from(inference: Inference) -> Self {
        Self {
            prediction: inference.class,
            label: LoanLabel::from_class(inference.class),
            default_probability: round_probability(inference.default_probability),
        }
    }
}

/// Rounds to 4 decimal places (half to even) and clamps into [0, 1].
pub fn round_probability(p: f64) -> f64 {
    ((p * 10_000.0).round_ties_even() / 10_000.0).clamp(0.0, 1.0)
}
