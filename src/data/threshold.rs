//! Threshold domain types.
//!
//! A threshold is a configured acceptable [min, max] range for one monitored
//! water-quality parameter. The remote API is the source of truth; these types
//! cover both the wire format and the parsed domain form.

use serde::{Deserialize, Serialize};

/// A monitored water-quality parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Ph,
    Temperature,
    Tds,
}

impl Parameter {
    /// All parameters, in the fixed order used for sequential saves.
    pub const ALL: [Parameter; 3] = [Parameter::Ph, Parameter::Temperature, Parameter::Tds];

    /// Parse a wire-format parameter name. Unknown names return `None` so
    /// callers can skip records this client doesn't know about.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ph" => Some(Parameter::Ph),
            "temperature" => Some(Parameter::Temperature),
            "tds" => Some(Parameter::Tds),
            _ => None,
        }
    }

    /// Wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Temperature => "temperature",
            Parameter::Tds => "tds",
        }
    }

    /// Display label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Temperature => "Temperature",
            Parameter::Tds => "TDS",
        }
    }

    /// Display unit (informational only).
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Temperature => "°C",
            Parameter::Tds => "ppm",
        }
    }

    /// Factory default range for this parameter.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            Parameter::Ph => (6.0, 9.0),
            Parameter::Temperature => (0.0, 30.0),
            Parameter::Tds => (0.0, 2000.0),
        }
    }
}

/// A validated threshold ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    pub parameter: Parameter,
    pub min_value: f64,
    pub max_value: f64,
    pub unit: &'static str,
}

impl Threshold {
    pub fn new(parameter: Parameter, min_value: f64, max_value: f64) -> Self {
        Self {
            parameter,
            min_value,
            max_value,
            unit: parameter.unit(),
        }
    }
}

/// A raw threshold record as returned by `GET /api/thresholds`.
///
/// The parameter stays a plain string here: the server may carry entries this
/// client doesn't recognize, and those are ignored rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdRecord {
    pub parameter: String,
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub unit: String,
}
