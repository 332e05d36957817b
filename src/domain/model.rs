use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the two text inputs of a converter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RomanNumeral,
    Integer,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::RomanNumeral => "Roman numeral",
            Field::Integer => "Integer",
        }
    }

    pub fn other(self) -> Field {
        match self {
            Field::RomanNumeral => Field::Integer,
            Field::Integer => Field::RomanNumeral,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which component drives the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ConverterMode {
    #[default]
    Networked,
    Local,
}

/// Request body sent to the conversion service. Serializes to
/// `{"roman": ...}` or `{"integer": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConversionRequest {
    RomanToInteger { roman: String },
    IntegerToRoman { integer: String },
}

impl ConversionRequest {
    /// Builds the request for the field the user edited.
    pub fn from_source(source: Field, text: &str) -> Self {
        match source {
            Field::RomanNumeral => ConversionRequest::RomanToInteger {
                roman: text.to_string(),
            },
            Field::Integer => ConversionRequest::IntegerToRoman {
                integer: text.to_string(),
            },
        }
    }

    pub fn source_field(&self) -> Field {
        match self {
            ConversionRequest::RomanToInteger { .. } => Field::RomanNumeral,
            ConversionRequest::IntegerToRoman { .. } => Field::Integer,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ConversionRequest::RomanToInteger { roman } => roman,
            ConversionRequest::IntegerToRoman { integer } => integer,
        }
    }

    pub fn endpoint_path(&self) -> &'static str {
        match self {
            ConversionRequest::RomanToInteger { .. } => "/convert/romanToInteger",
            ConversionRequest::IntegerToRoman { .. } => "/convert/integerToRoman",
        }
    }
}

/// Both representations of one value. The service may send `integer` as a
/// JSON number or a string; it is kept as display text either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub roman: String,
    #[serde(deserialize_with = "integer_as_text")]
    pub integer: String,
}

impl ConversionResult {
    pub fn new(roman: impl Into<String>, integer: impl Into<String>) -> Self {
        Self {
            roman: roman.into(),
            integer: integer.into(),
        }
    }

    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::RomanNumeral => &self.roman,
            Field::Integer => &self.integer,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerRepr {
    Number(serde_json::Number),
    Text(String),
}

fn integer_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IntegerRepr::deserialize(deserializer)? {
        IntegerRepr::Number(n) => n.to_string(),
        IntegerRepr::Text(s) => s,
    })
}

/// Snapshot of one input as a renderer would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub disabled: bool,
}

impl FieldState {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
