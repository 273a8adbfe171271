//! # Line Classifier
//!
//! Classifies one line of pasted recipe text as a heading, a list item, a
//! section label, blank or plain prose. Pure and infallible: anything that is
//! not recognized falls back to [`LineKind::Plain`].

use regex::Regex;
use std::sync::LazyLock;

/// Longest line, in words, that still counts as a section label ("Ingredients:")
pub const MAX_LABEL_WORDS: usize = 5;

static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]\s+(.+)").expect("Bullet pattern should be valid"));

static NUMBERED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)").expect("Numbered pattern should be valid"));

/// Classification of a single trimmed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Markdown heading (`#` run followed by whitespace); `level` is the number of leading `#`
    Heading { level: usize, text: String },
    /// Bullet (`-`, `•`, `*`) or numbered (`1.`) list item, marker removed
    Item(String),
    /// Short line ending in a colon, e.g. "Ingredients:" or "**Method:**"
    Label(String),
    Plain(String),
}

impl LineKind {
    /// Text content of the line without its structural markers
    pub fn text(&self) -> &str {
        match self {
            LineKind::Blank => "",
            LineKind::Heading { text, .. } => text,
            LineKind::Item(text) | LineKind::Label(text) | LineKind::Plain(text) => text,
        }
    }
}

/// Classify one line of input
///
/// # Examples
///
/// ```rust
/// use recipe_importer::line_classifier::{classify, LineKind};
///
/// assert_eq!(classify("## Steps"), LineKind::Heading { level: 2, text: "Steps".to_string() });
/// assert_eq!(classify("- 2 cups flour"), LineKind::Item("2 cups flour".to_string()));
/// assert_eq!(classify("Ingredients:"), LineKind::Label("Ingredients".to_string()));
/// assert_eq!(classify("   "), LineKind::Blank);
/// ```
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        let level = line.chars().take_while(|&c| c == '#').count();
        let rest = &line[level..];
        // "#quick #easy" is a hashtag line, not a heading
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return LineKind::Heading {
                level,
                text: rest.trim().to_string(),
            };
        }
    }

    if let Some(caps) = BULLET_REGEX
        .captures(line)
        .or_else(|| NUMBERED_REGEX.captures(line))
    {
        return LineKind::Item(caps[1].trim().to_string());
    }

    if let Some(label) = label_text(line) {
        return LineKind::Label(label);
    }

    LineKind::Plain(line.to_string())
}

fn label_text(line: &str) -> Option<String> {
    let unmarked = line.replace("**", "");
    let label = unmarked.trim().strip_suffix(':')?.trim();

    let words = label.split_whitespace().count();
    if words == 0 || words > MAX_LABEL_WORDS {
        return None;
    }
    Some(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify(" \t "), LineKind::Blank);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify("# Ingredients"),
            LineKind::Heading { level: 1, text: "Ingredients".to_string() }
        );
        assert_eq!(
            classify("### For the sauce"),
            LineKind::Heading { level: 3, text: "For the sauce".to_string() }
        );
        assert_eq!(classify("####"), LineKind::Heading { level: 4, text: String::new() });
    }

    #[test]
    fn test_hashtags_are_not_headings() {
        assert_eq!(
            classify("#quick #easy"),
            LineKind::Plain("#quick #easy".to_string())
        );
        assert_eq!(
            classify("##Directions"),
            LineKind::Plain("##Directions".to_string())
        );
    }

    #[test]
    fn test_bullets_and_numbers() {
        assert_eq!(classify("- 2 cups flour"), LineKind::Item("2 cups flour".to_string()));
        assert_eq!(classify("• pinch of salt"), LineKind::Item("pinch of salt".to_string()));
        assert_eq!(classify("* butter"), LineKind::Item("butter".to_string()));
        assert_eq!(classify("12. Serve hot"), LineKind::Item("Serve hot".to_string()));
    }

    #[test]
    fn test_emphasis_is_not_a_bullet() {
        assert_eq!(
            classify("**Boil** water"),
            LineKind::Plain("**Boil** water".to_string())
        );
        assert_eq!(classify("-5 degrees"), LineKind::Plain("-5 degrees".to_string()));
        assert_eq!(classify("1.5 kg beef"), LineKind::Plain("1.5 kg beef".to_string()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify("Ingredients:"), LineKind::Label("Ingredients".to_string()));
        assert_eq!(classify("**Method:**"), LineKind::Label("Method".to_string()));
        assert_eq!(classify("**Method**:"), LineKind::Label("Method".to_string()));
        assert_eq!(
            classify("For the dough:"),
            LineKind::Label("For the dough".to_string())
        );
    }

    #[test]
    fn test_long_or_inline_colon_lines_stay_plain() {
        assert_eq!(
            classify("Prep time: 10 minutes"),
            LineKind::Plain("Prep time: 10 minutes".to_string())
        );
        assert_eq!(
            classify("Then do all of the following steps in order:"),
            LineKind::Plain("Then do all of the following steps in order:".to_string())
        );
        assert_eq!(classify(":"), LineKind::Plain(":".to_string()));
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(classify("## Steps").text(), "Steps");
        assert_eq!(classify("- salt").text(), "salt");
        assert_eq!(classify("").text(), "");
    }
}
