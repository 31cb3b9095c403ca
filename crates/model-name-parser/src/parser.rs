//! Model file name parser — token classification and base-name recovery.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::title_case::title_case;
use crate::types::{FormattedModelName, ParsedModelName};

/// Characters a file name is split on.
const TOKEN_DELIMITERS: [char; 2] = ['.', '-'];

//  Token patterns

/// Parameter count: `70B`, `9b`.
static PARAMETERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?i-u:b)$").expect("parameters pattern is valid"));

/// Quantisation scheme, following the llama.cpp quantize type list:
/// `Q4_K_M`, `IQ2_M`, `TQ2_0`, `Q4_0_4_4` or `F32`, `FP16`, `BF16`.
/// The float forms need the `F`, so version digits like the `3` of `Llama-3` don't match.
static QUANTIZATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i-u:T?I?Q)[0-9]_[^\n\r\u{2028}\u{2029}]*|(?i-u:B?FP?)[0-9]+)$")
        .expect("quantization pattern is valid")
});

/// Context length: `200k`, `128K`.
static CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?i-u:k)$").expect("context pattern is valid"));

static INSTRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i-u:instruct)$").expect("instruct pattern is valid"));

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i-u:gguf)$").expect("extension pattern is valid"));

static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));

static REPEATED_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("dot pattern is valid"));

//  Classification

/// Slot a single token was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Parameters,
    Quantization,
    Context,
    Instruct,
    Extension,
}

/// First matching rule wins. The extension rule only applies to the last token.
fn classify(token: &str, is_last: bool) -> Option<TokenKind> {
    if PARAMETERS.is_match(token) {
        Some(TokenKind::Parameters)
    } else if QUANTIZATION.is_match(token) {
        Some(TokenKind::Quantization)
    } else if CONTEXT.is_match(token) {
        Some(TokenKind::Context)
    } else if INSTRUCT.is_match(token) {
        Some(TokenKind::Instruct)
    } else if is_last && EXTENSION.is_match(token) {
        Some(TokenKind::Extension)
    } else {
        None
    }
}

//  Parse

/// Break a model file name such as `Reflection-Llama-3.1-70B-IQ2_M.gguf`
/// into its metadata slots.
///
/// Never fails: slots that nothing matched are `None`, and the residual
/// name may be empty. When several tokens fit the same slot the last one
/// wins, so `model-F16-Q4_K_M` reports `Q4_K_M`.
pub fn parse_model_name(file_name: &str) -> ParsedModelName {
    let tokens: Vec<&str> = file_name.split(TOKEN_DELIMITERS).collect();
    let last_index = tokens.len() - 1;

    let mut parsed = ParsedModelName::default();
    for (index, &token) in tokens.iter().enumerate() {
        let Some(kind) = classify(token, index == last_index) else {
            continue;
        };
        trace!(token, index, ?kind, "classified token");

        let slot = match kind {
            TokenKind::Parameters => &mut parsed.parameters,
            TokenKind::Quantization => &mut parsed.quantization,
            TokenKind::Context => &mut parsed.context,
            TokenKind::Instruct => &mut parsed.instruct,
            TokenKind::Extension => &mut parsed.extension,
        };
        *slot = Some(token.to_string());
    }

    parsed.name = residual_name(file_name, &parsed);
    parsed.formatted = format_parts(&parsed);

    debug!(
        file_name,
        name = %parsed.name,
        parameters = ?parsed.parameters,
        context = ?parsed.context,
        quantization = ?parsed.quantization,
        instruct = ?parsed.instruct,
        extension = ?parsed.extension,
        "parsed model name"
    );

    parsed
}

impl From<&str> for ParsedModelName {
    fn from(file_name: &str) -> Self {
        parse_model_name(file_name)
    }
}

/// Strip the first literal occurrence of every extracted value from the
/// original file name, then tidy the separators left behind.
///
/// Working on the unsplit name keeps the dots inside version numbers.
fn residual_name(file_name: &str, parsed: &ParsedModelName) -> String {
    let extracted = [
        &parsed.parameters,
        &parsed.context,
        &parsed.quantization,
        &parsed.instruct,
        &parsed.extension,
    ];

    let name = extracted
        .into_iter()
        .flatten()
        .fold(file_name.to_string(), |name, value| name.replacen(value.as_str(), "", 1));

    clean_separators(&name)
}

/// Collapse runs of `-` and `.` and drop trailing separators and whitespace.
pub(crate) fn clean_separators(name: &str) -> String {
    let name = REPEATED_HYPHENS.replace_all(name, "-");
    let name = REPEATED_DOTS.replace_all(&name, ".");
    name.trim_end_matches(|c: char| c == '-' || c == '.' || is_trailing_space(c))
        .to_string()
}

/// White space as far as name trimming goes: Unicode `White_Space` without
/// NEL (U+0085), plus the byte order mark.
fn is_trailing_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn format_parts(parsed: &ParsedModelName) -> FormattedModelName {
    let upper = |value: &Option<String>| value.as_deref().map(str::to_uppercase);

    FormattedModelName {
        name: title_case(&parsed.name.replace('-', " ")),
        parameters: upper(&parsed.parameters),
        context: upper(&parsed.context),
        quantization: upper(&parsed.quantization),
        instruct: parsed.instruct.as_deref().map(title_case),
        extension: upper(&parsed.extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_parameters() {
        assert_eq!(classify("70B", false), Some(TokenKind::Parameters));
        assert_eq!(classify("9b", true), Some(TokenKind::Parameters));
        assert_eq!(classify("b", false), None);
        assert_eq!(classify("7x8b", false), None);
    }

    #[test]
    fn classifies_quantization() {
        for token in [
            "Q4_K_M", "q4_k_m", "IQ2_M", "TQ2_0", "Q4_0_4_4", "F32", "fp16", "BF16", "bf16",
        ] {
            assert_eq!(classify(token, false), Some(TokenKind::Quantization), "{token}");
        }
        assert_eq!(classify("Q4", false), None);
        assert_eq!(classify("IQ_2", false), None);
        assert_eq!(classify("FP", false), None);
    }

    #[test]
    fn bare_digits_are_not_quantization() {
        assert_eq!(classify("16", false), None);
        assert_eq!(classify("3", false), None);
        assert_eq!(classify("B16", false), None);
        assert_eq!(classify("P16", false), None);
        assert_eq!(classify("F16", false), Some(TokenKind::Quantization));
    }

    #[test]
    fn version_digits_stay_in_the_name() {
        let parsed = parse_model_name("Meta-Llama-3-8B.gguf");
        assert_eq!(parsed.quantization, None);
        assert_eq!(parsed.name, "Meta-Llama-3");

        let parsed = parse_model_name("Mistral-7B-v0.3.gguf");
        assert_eq!(parsed.quantization, None);
        assert_eq!(parsed.name, "Mistral-v0.3");
    }

    #[test]
    fn classifies_context_and_instruct() {
        assert_eq!(classify("200k", false), Some(TokenKind::Context));
        assert_eq!(classify("128K", false), Some(TokenKind::Context));
        assert_eq!(classify("Instruct", false), Some(TokenKind::Instruct));
        assert_eq!(classify("instructed", false), None);
    }

    #[test]
    fn extension_only_when_last() {
        assert_eq!(classify("gguf", true), Some(TokenKind::Extension));
        assert_eq!(classify("GGUF", true), Some(TokenKind::Extension));
        assert_eq!(classify("gguf", false), None);
        assert_eq!(classify("zip", true), None);
    }

    #[test]
    fn empty_token_matches_nothing() {
        assert_eq!(classify("", false), None);
        assert_eq!(classify("", true), None);
    }

    #[test]
    fn last_matching_token_wins() {
        let parsed = parse_model_name("model-F16-Q4_K_M");
        assert_eq!(parsed.quantization.as_deref(), Some("Q4_K_M"));
    }

    #[test]
    fn clean_separators_collapses_and_trims() {
        assert_eq!(clean_separators("a--b..c"), "a-b.c");
        assert_eq!(clean_separators("name-.-. \t"), "name");
        assert_eq!(clean_separators("---"), "");
        assert_eq!(clean_separators("keep-.inner"), "keep-.inner");
        assert_eq!(clean_separators("bom-\u{feff}"), "bom");
        assert_eq!(clean_separators("nel-\u{85}"), "nel-\u{85}");
        assert_eq!(clean_separators("nbsp.\u{a0}"), "nbsp");
    }

    #[test]
    fn removes_only_first_occurrence() {
        // `7b` also appears inside the base name and is stripped from there first.
        let parsed = parse_model_name("model7b-7b");
        assert_eq!(parsed.parameters.as_deref(), Some("7b"));
        assert_eq!(parsed.name, "model-7b");
    }

    #[test]
    fn empty_input_degrades_gracefully() {
        let parsed = parse_model_name("");
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.parameters, None);
        assert_eq!(parsed.extension, None);
        assert_eq!(parsed.formatted.name, "");
    }

    #[test]
    fn delimiter_only_input() {
        let parsed = parse_model_name("-.-..--");
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.quantization, None);
        assert_eq!(parsed.formatted.name, "");
    }

    #[test]
    fn from_str_ref_parses() {
        let parsed = ParsedModelName::from("qwen2-7b-instruct-fp16.gguf");
        assert_eq!(parsed, parse_model_name("qwen2-7b-instruct-fp16.gguf"));
    }

    proptest::proptest! {
        #[test]
        fn cleanup_is_idempotent(file_name in "[a-z0-9 .\\-]{0,24}") {
            let name = parse_model_name(&file_name).name;
            proptest::prop_assert_eq!(clean_separators(&name), name);
        }
    }
}
