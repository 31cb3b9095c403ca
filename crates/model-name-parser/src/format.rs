//! Joining formatted fields into a single display string.

use std::fmt;

use crate::types::{ModelField, ParsedModelName};

/// Join the formatted values named by `keys` with single spaces, in the
/// order given. Absent, empty and unknown keys are skipped.
pub fn format_model_name_result<K: AsRef<str>>(result: &ParsedModelName, keys: &[K]) -> String {
    join_present(keys.iter().map(|key| result.formatted.get_key(key.as_ref())))
}

/// Typed counterpart of [`format_model_name_result`].
pub fn format_fields(result: &ParsedModelName, fields: &[ModelField]) -> String {
    join_present(fields.iter().map(|&field| result.formatted.get(field)))
}

fn join_present<'a>(values: impl Iterator<Item = Option<&'a str>>) -> String {
    values
        .flatten()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ParsedModelName {
    /// Every recognised part, e.g. `Dolphin 2.9.1 Yi 1.5 9B 128K Instruct Q4_K_M GGUF`.
    pub fn long_name(&self) -> String {
        format_fields(self, &ModelField::LONG)
    }

    /// Name, size, context and instruct marker only.
    pub fn short_name(&self) -> String {
        format_fields(self, &ModelField::SHORT)
    }
}

impl fmt::Display for ParsedModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_name())
    }
}
