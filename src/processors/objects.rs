//! Turning free-form model text into object tokens

use regex::Regex;
use std::sync::OnceLock;

/// Leading or trailing runs of `.`, `,`, `、` and whitespace
fn edge_punctuation() -> &'static Regex {
    static EDGES: OnceLock<Regex> = OnceLock::new();
    EDGES.get_or_init(|| Regex::new(r"^[.,、\s]+|[.,、\s]+$").expect("valid regex"))
}

/// Strip surrounding punctuation and whitespace from model output
pub fn clean_text(text: &str) -> String {
    edge_punctuation().replace_all(text.trim(), "").into_owned()
}

/// Split on `delimiter`, trimming fragments and dropping empty ones
fn split_fragments(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Parse raw recognition text into an ordered list of object names.
///
/// Splits on commas first. When that yields a single fragment the model most
/// likely answered one item per line, so the input is re-split on
/// newlines. Every token is cleaned and tokens left empty are dropped;
/// duplicates are kept.
pub fn parse_objects(text: &str) -> Vec<String> {
    let mut fragments = split_fragments(text, ',');

    if fragments.len() == 1 {
        fragments = split_fragments(text, '\n');
    }

    fragments
        .into_iter()
        .map(clean_text)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lines of a list-style answer, without blanks or markdown decoration
pub fn list_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(&['-', '=', '+', '*'][..]))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_objects("apple, cat, keyboard"),
            vec!["apple", "cat", "keyboard"]
        );
    }

    #[test]
    fn test_newline_fallback() {
        assert_eq!(
            parse_objects("apple\ncat\nkeyboard"),
            vec!["apple", "cat", "keyboard"]
        );
        assert_eq!(parse_objects("\n apple \n\n cat\n"), vec!["apple", "cat"]);
    }

    #[test]
    fn test_commas_win_over_newlines() {
        assert_eq!(
            parse_objects("red apple,\nblack cat"),
            vec!["red apple", "black cat"]
        );
        assert_eq!(
            parse_objects("apple, cat\nkeyboard"),
            vec!["apple", "cat\nkeyboard"]
        );
    }

    #[test]
    fn test_single_item_with_trailing_comma() {
        assert_eq!(parse_objects("apple,"), vec!["apple"]);
        assert_eq!(parse_objects("apple."), vec!["apple"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_objects("").is_empty());
        assert!(parse_objects("   \n\t ").is_empty());
        assert!(parse_objects(", ,").is_empty());
        assert!(parse_objects(".\n、").is_empty());
    }

    #[test]
    fn test_duplicates_pass_through() {
        assert_eq!(parse_objects("cup, cup, plate"), vec!["cup", "cup", "plate"]);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  ..apple,、 "), "apple");
        assert_eq!(clean_text("貓。"), "貓。");
        assert_eq!(clean_text("猫 (ねこ)."), "猫 (ねこ)");
        assert_eq!(clean_text("e.g. mug"), "e.g. mug");
        assert_eq!(clean_text(". , 、"), "");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        for input in ["apple", " .,apple., ", "、고양이、", "", "...", "a . b"] {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_list_lines_filters_decoration() {
        let text = "林檎 (りんご)\n\n- note\n* bullet\n=====\n+ extra\n  猫 (ねこ) \n";
        assert_eq!(list_lines(text), vec!["林檎 (りんご)", "猫 (ねこ)"]);
    }
}
