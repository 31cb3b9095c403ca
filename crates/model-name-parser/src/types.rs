//! Parse result types and field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

//  Field names

/// One of the metadata slots a file name is broken into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelField {
    Name,
    Parameters,
    Context,
    Quantization,
    Instruct,
    Extension,
}

impl ModelField {
    /// Every field, in declaration order.
    pub const ALL: [ModelField; 6] = [
        Self::Name,
        Self::Parameters,
        Self::Context,
        Self::Quantization,
        Self::Instruct,
        Self::Extension,
    ];

    /// Full display: everything that was recognised.
    pub const LONG: [ModelField; 6] = [
        Self::Name,
        Self::Parameters,
        Self::Context,
        Self::Instruct,
        Self::Quantization,
        Self::Extension,
    ];

    /// Compact display without the storage details.
    pub const SHORT: [ModelField; 4] = [
        Self::Name,
        Self::Parameters,
        Self::Context,
        Self::Instruct,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Parameters => "parameters",
            Self::Context => "context",
            Self::Quantization => "quantization",
            Self::Instruct => "instruct",
            Self::Extension => "extension",
        }
    }
}

impl fmt::Display for ModelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| FieldError::Unknown(key.to_string()))
    }
}

//  Results

/// Metadata extracted from a single model file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModelName {
    /// What is left of the file name once every recognised token is gone.
    /// Never absent; may be empty.
    pub name: String,
    pub parameters: Option<String>,
    pub context: Option<String>,
    pub quantization: Option<String>,
    pub instruct: Option<String>,
    pub extension: Option<String>,
    pub formatted: FormattedModelName,
}

/// Display renderings of a [`ParsedModelName`].
///
/// `name` and `instruct` are title-cased, the rest are upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedModelName {
    pub name: String,
    pub parameters: Option<String>,
    pub context: Option<String>,
    pub quantization: Option<String>,
    pub instruct: Option<String>,
    pub extension: Option<String>,
}

impl FormattedModelName {
    pub fn get(&self, field: ModelField) -> Option<&str> {
        match field {
            ModelField::Name => Some(self.name.as_str()),
            ModelField::Parameters => self.parameters.as_deref(),
            ModelField::Context => self.context.as_deref(),
            ModelField::Quantization => self.quantization.as_deref(),
            ModelField::Instruct => self.instruct.as_deref(),
            ModelField::Extension => self.extension.as_deref(),
        }
    }

    /// Look up a field by its exact lower-case key. Unknown keys yield `None`.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        ModelField::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .and_then(|field| self.get(field))
    }
}

//  Error

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown model field: {0:?} (expected one of name, parameters, context, quantization, instruct, extension)")]
    Unknown(String),
}
