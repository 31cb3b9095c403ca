//! Title-casing for display names.
//!
//! Heuristic in the style of the classic `to-title-case` script: small words
//! stay lower-case inside a title, and words that already carry deliberate
//! capitalisation (`ArliAI`, `RPMax`, `v1.1`) are left alone.

use std::sync::LazyLock;

use regex::Regex;

/// Characters a title is split on. Each one is kept as its own segment.
const WORD_SEPARATORS: [char; 5] = [' ', ':', '\u{2013}', '\u{2014}', '-'];

/// Articles, conjunctions and short prepositions. `v` and `vs` may carry one
/// trailing character (`v.`, `vs.`) from the Basic Multilingual Plane.
static SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?i-u:a|an|and|as|at|but|by|en|for|if|in|nor|of|on|or|per|the|to|via)|(?i-u:vs?)[^\n\r\u{2028}\u{2029}\u{10000}-\u{10FFFF}]?)$",
    )
    .expect("small word pattern is valid")
});

/// Upper-case letter or a dot followed by anything, found after the first character.
static INTENTIONAL_CAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]|\.[^\n\r\u{2028}\u{2029}]").expect("capitalisation pattern is valid")
});

/// ASCII letters and digits plus the Latin-1 supplement letters.
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9\u{00C0}-\u{00FF}]").expect("alphanumeric pattern is valid")
});

/// Title-case `text`, preserving every separator so the output lines up
/// character-for-character with the input apart from case changes.
pub fn title_case(text: &str) -> String {
    let segments = split_keep_separators(text);
    let segment_at = |index: Option<usize>| index.and_then(|i| segments.get(i)).copied();

    let mut out = String::with_capacity(text.len());
    for (index, &current) in segments.iter().enumerate() {
        let prev = segment_at(index.checked_sub(1));
        let next = segment_at(index.checked_add(1));

        let is_inner_small_word = SMALL_WORD.is_match(current)
            && index != 0
            && index != segments.len() - 1
            // title end and subtitle start
            && segment_at(index.checked_sub(3)) != Some(":")
            && next != Some(":")
            // only lower-case the start of a hyphenated phrase when it sits between hyphens
            && (next != Some("-") || (prev == Some("-") && next == Some("-")));

        if is_inner_small_word {
            out.push_str(&current.to_lowercase());
        } else if has_intentional_caps(current) {
            out.push_str(current);
        } else if next == Some(":") && segment_at(index.checked_add(2)) != Some("") {
            // scheme of a URL-like segment
            out.push_str(current);
        } else {
            push_capitalized(&mut out, current);
        }
    }
    out
}

fn split_keep_separators(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if WORD_SEPARATORS.contains(&ch) {
            let end = idx + ch.len_utf8();
            segments.push(&text[start..idx]);
            segments.push(&text[idx..end]);
            start = end;
        }
    }
    segments.push(&text[start..]);
    segments
}

fn has_intentional_caps(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next();
    INTENTIONAL_CAPS.is_match(chars.as_str())
}

fn push_capitalized(out: &mut String, segment: &str) {
    match ALPHANUMERIC.find(segment) {
        Some(m) => {
            out.push_str(&segment[..m.start()]);
            out.extend(m.as_str().chars().flat_map(char::to_uppercase));
            out.push_str(&segment[m.end()..]);
        }
        None => out.push_str(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_separators_and_empty_segments() {
        assert_eq!(split_keep_separators("a b"), vec!["a", " ", "b"]);
        assert_eq!(split_keep_separators(""), vec![""]);
        assert_eq!(split_keep_separators("a--b"), vec!["a", "-", "", "-", "b"]);
        assert_eq!(split_keep_separators("x\u{2014}y"), vec!["x", "\u{2014}", "y"]);
    }

    #[test]
    fn capitalizes_plain_words() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("dolphin 2.9.1 yi 1.5"), "Dolphin 2.9.1 Yi 1.5");
        assert_eq!(title_case("instruct"), "Instruct");
    }

    #[test]
    fn keeps_intentional_capitalization() {
        assert_eq!(title_case("ArliAI RPMax v1.1"), "ArliAI RPMax v1.1");
        assert_eq!(title_case("INSTRUCT"), "INSTRUCT");
        assert_eq!(title_case("llama.cpp server"), "llama.cpp Server");
    }

    #[test]
    fn lowercases_inner_small_words() {
        assert_eq!(title_case("mixture OF experts"), "Mixture of Experts");
        assert_eq!(title_case("the best of the rest"), "The Best of the Rest");
        assert_eq!(title_case("llama vs mistral"), "Llama vs Mistral");
        assert_eq!(title_case("llama vs. mistral"), "Llama vs. Mistral");
        assert_eq!(title_case("llama V2 chat"), "Llama v2 Chat");
    }

    #[test]
    fn v_with_astral_suffix_is_not_a_small_word() {
        assert_eq!(title_case("a v\u{1F600} a"), "A V\u{1F600} A");
        assert_eq!(title_case("a v\u{e9} b"), "A v\u{e9} B");
    }

    #[test]
    fn small_words_at_edges_are_capitalized() {
        assert_eq!(title_case("a model"), "A Model");
        assert_eq!(title_case("model of"), "Model Of");
    }

    #[test]
    fn small_words_next_to_colons_are_capitalized() {
        assert_eq!(title_case("models: a survey"), "Models: A Survey");
        assert_eq!(title_case("the end of: story"), "The End Of: Story");
    }

    #[test]
    fn hyphenated_small_words() {
        assert_eq!(title_case("state-of-the-art"), "State-of-the-Art");
        assert_eq!(title_case("model in-context"), "Model In-Context");
    }

    #[test]
    fn leaves_url_like_segments() {
        assert_eq!(title_case("see http://example.com"), "See http://example.com");
        assert_eq!(title_case("see http://example"), "See http://Example");
    }

    #[test]
    fn capitalizes_first_alphanumeric_only() {
        assert_eq!(title_case("(beta) build"), "(Beta) Build");
        assert_eq!(title_case("\u{e9}t\u{e9}"), "\u{c9}t\u{e9}");
        assert_eq!(title_case("__"), "__");
    }

    #[test]
    fn handles_empty_and_separator_only_input() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("- -"), "- -");
        assert_eq!(title_case(":"), ":");
    }
}
