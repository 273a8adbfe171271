//! # Metadata Extractors
//!
//! Independent pattern matchers for the recipe fields that are not ingredients
//! or steps. Servings, cooking time and hashtags are checked line by line
//! during the routing pass; title, difficulty and tags run over the collected
//! text afterwards. Every extractor returns `None` or an empty list when
//! nothing matches.

use crate::importer_config::TitleRules;
use crate::line_classifier::{classify, LineKind};
use crate::recipe_model::Difficulty;
use crate::text_utils::strip_emphasis;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use std::collections::HashSet;

pub const SERVINGS_PATTERN: &str =
    r"(?i)(?:serves|servings|yield):\s*(\d+)|(?:for|serves)\s+(\d+)\s+(?:people|servings)";

pub const COOKING_TIME_PATTERN: &str =
    r"(?i)(?:prep|cooking|total) time:?\s*(\d+)\s*(min|minute|hour|hr)";

// A tag starts with a letter; "#10 can" is a can size, not a tag
pub const HASHTAG_PATTERN: &str = r"#(\p{L}\w*)";

pub const BOLD_PATTERN: &str = r"\*\*([^*]+)\*\*";

/// Diet and speed terms recognized anywhere in the text
pub const TAG_VOCABULARY: &[&str] = &[
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "quick",
    "easy",
    "healthy",
];

lazy_static! {
    static ref SERVINGS_REGEX: Regex =
        Regex::new(SERVINGS_PATTERN).expect("Servings pattern should be valid");
    static ref COOKING_TIME_REGEX: Regex =
        Regex::new(COOKING_TIME_PATTERN).expect("Cooking time pattern should be valid");
    static ref HASHTAG_REGEX: Regex =
        Regex::new(HASHTAG_PATTERN).expect("Hashtag pattern should be valid");
    static ref BOLD_REGEX: Regex = Regex::new(BOLD_PATTERN).expect("Bold pattern should be valid");
    // Whole words only, so "Hardly" or "uneasy" never rate a recipe
    static ref DIFFICULTY_REGEX: Regex = {
        let words: Vec<&str> = Difficulty::SYNONYMS.iter().map(|(word, _)| *word).collect();
        Regex::new(&format!(r"(?i)\b({})\b", words.join("|")))
            .expect("Difficulty pattern should be valid")
    };
}

/// Metadata recognized on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMetadata {
    Servings(u32),
    CookingTime(u32),
    /// Line carrying hashtags; holds the remaining prose with the hashtags removed
    Hashtags(String),
}

/// Per-line extractors, checked in order; the first match classifies the line
const LINE_EXTRACTORS: &[fn(&str) -> Option<LineMetadata>] =
    &[servings_line, cooking_time_line, hashtag_line];

fn servings_line(line: &str) -> Option<LineMetadata> {
    extract_servings(line).map(LineMetadata::Servings)
}

fn cooking_time_line(line: &str) -> Option<LineMetadata> {
    extract_cooking_time(line).map(LineMetadata::CookingTime)
}

fn hashtag_line(line: &str) -> Option<LineMetadata> {
    has_hashtags(line).then(|| LineMetadata::Hashtags(strip_hashtags(line)))
}

/// Check one line against the per-line metadata patterns
pub fn detect_line_metadata(line: &str) -> Option<LineMetadata> {
    let found = LINE_EXTRACTORS.iter().find_map(|extract| extract(line));
    if let Some(ref metadata) = found {
        trace!("Line '{}' carries metadata {:?}", line, metadata);
    }
    found
}

/// Number of servings, e.g. "Serves: 4", "Yield: 12" or "for 6 people"
pub fn extract_servings(text: &str) -> Option<u32> {
    let caps = SERVINGS_REGEX.captures(text)?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

/// True when the whole line is a servings statement ("Serves: 4", "Serves 6 people.")
pub fn is_servings_line(line: &str) -> bool {
    let line = line.trim().trim_end_matches('.');
    SERVINGS_REGEX
        .find(line)
        .is_some_and(|found| found.start() == 0 && found.end() == line.len())
}

/// Cooking time in minutes, e.g. "Prep time: 10 minutes" or "Total time 2 hours"
pub fn extract_cooking_time(text: &str) -> Option<u32> {
    let caps = COOKING_TIME_REGEX.captures(text)?;
    let value: u32 = caps[1].parse().ok()?;

    if caps[2].to_lowercase().starts_with('h') {
        value.checked_mul(60)
    } else {
        Some(value)
    }
}

/// First difficulty word found in the given text parts, synonyms normalized
pub fn extract_difficulty<S: AsRef<str>>(parts: &[S]) -> Option<Difficulty> {
    parts.iter().find_map(|part| {
        let word = DIFFICULTY_REGEX.find(part.as_ref())?;
        Difficulty::from_word(word.as_str())
    })
}

/// Hashtags followed by vocabulary terms, lowercased, first occurrence kept
pub fn extract_tags(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();

    let hashtags = HASHTAG_REGEX
        .captures_iter(&lower)
        .map(|caps| caps[1].to_string());
    let vocabulary = TAG_VOCABULARY
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| term.to_string());

    let tags: Vec<String> = hashtags
        .chain(vocabulary)
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

    debug!("Extracted {} tags", tags.len());
    tags
}

/// Title from the first lines of the input
///
/// Prefers `**bold**` text within the length bounds, otherwise the first
/// prose line within the bounds (headings, list items and labels are skipped). Only the first `rules.scan_lines`
/// non-blank lines are considered.
pub fn extract_title(text: &str, rules: &TitleRules) -> Option<String> {
    let head: Vec<&str> = text
        .lines()
        .take(rules.scan_lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let bold = head.iter().find_map(|line| {
        BOLD_REGEX
            .captures_iter(line)
            .map(|caps| caps[1].trim().to_string())
            .find(|candidate| rules.accepts(candidate))
    });
    if bold.is_some() {
        return bold;
    }

    head.iter()
        .filter(|line| !matches!(classify(line), LineKind::Heading { .. }))
        .map(|line| strip_emphasis(line))
        .find(|candidate| rules.accepts(candidate))
}

pub fn has_hashtags(text: &str) -> bool {
    HASHTAG_REGEX.is_match(text)
}

/// Remove hashtags and collapse the remaining whitespace
pub fn strip_hashtags(text: &str) -> String {
    HASHTAG_REGEX
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servings_variants() {
        assert_eq!(extract_servings("Serves: 4"), Some(4));
        assert_eq!(extract_servings("servings: 6"), Some(6));
        assert_eq!(extract_servings("Yield: 12 cookies"), Some(12));
        assert_eq!(extract_servings("Enough for 8 people"), Some(8));
        assert_eq!(extract_servings("Serves 2 servings"), Some(2));
        assert_eq!(extract_servings("Serves 4"), None);
        assert_eq!(extract_servings("Serves: lots"), None);
    }

    #[test]
    fn test_cooking_time_normalized_to_minutes() {
        assert_eq!(extract_cooking_time("Prep time: 10 minutes"), Some(10));
        assert_eq!(extract_cooking_time("Cooking time 45 min"), Some(45));
        assert_eq!(extract_cooking_time("Total Time: 2 hours"), Some(120));
        assert_eq!(extract_cooking_time("total time: 1hr"), Some(60));
        assert_eq!(extract_cooking_time("Bake for 10 minutes"), None);
        assert_eq!(extract_cooking_time("Cooking time: about an hour"), None);
    }

    #[test]
    fn test_cooking_time_overflow_degrades() {
        assert_eq!(extract_cooking_time("Prep time: 99999999 hours"), None);
    }

    #[test]
    fn test_difficulty_first_match_wins() {
        let parts = vec!["A simple weeknight dish".to_string(), "Hard to get wrong".to_string()];
        assert_eq!(extract_difficulty(&parts), Some(Difficulty::Easy));

        assert_eq!(extract_difficulty(&["Level: Intermediate"]), Some(Difficulty::Medium));
        assert_eq!(extract_difficulty(&["ADVANCED technique"]), Some(Difficulty::Hard));
        assert_eq!(extract_difficulty(&["Hardly any effort"]), None);
        assert_eq!(extract_difficulty(&["An uneasy cook with new hardware"]), None);
        assert_eq!(extract_difficulty(&["Stays easy, not hard"]), Some(Difficulty::Easy));
        assert_eq!(extract_difficulty::<&str>(&[]), None);
    }

    #[test]
    fn test_tags_from_hashtags_and_vocabulary() {
        let tags = extract_tags("A quick dinner. #Quick #easy\nFully vegan and Gluten-Free.");
        assert_eq!(tags, vec!["quick", "easy", "vegan", "gluten-free"]);
    }

    #[test]
    fn test_tags_ignore_markdown_headings() {
        assert!(extract_tags("## Ingredients\n- 2 cups flour").is_empty());
    }

    #[test]
    fn test_title_prefers_bold() {
        let rules = TitleRules::default();
        let text = "Grandma's recipe\n**Lemon Tart**\nServes: 6";
        assert_eq!(extract_title(text, &rules), Some("Lemon Tart".to_string()));
    }

    #[test]
    fn test_title_falls_back_to_first_short_line() {
        let rules = TitleRules::default();
        let text = "\n# Recipes\nEasy Pasta Recipe\nServes 4";
        assert_eq!(extract_title(text, &rules), Some("Easy Pasta Recipe".to_string()));
    }

    #[test]
    fn test_title_fallback_only_skips_headings() {
        let rules = TitleRules::default();
        assert_eq!(
            extract_title("- Lemon Tart\nmore", &rules),
            Some("- Lemon Tart".to_string())
        );
        assert_eq!(
            extract_title("## Recipes\nIngredients:", &rules),
            Some("Ingredients:".to_string())
        );
    }

    #[test]
    fn test_title_scan_counts_blank_lines() {
        let rules = TitleRules::default();
        assert_eq!(extract_title("\n\n\n\n\n\nLate Title\nbody", &rules), None);
        assert_eq!(
            extract_title("\n\n\n\nEarly Title\nbody", &rules),
            Some("Early Title".to_string())
        );
    }

    #[test]
    fn test_title_skips_lines_outside_bounds() {
        let rules = TitleRules::default();
        let long = "This is a very long descriptive sentence that goes well beyond fifty characters";
        let text = format!("{long}\nok\nShort Title");
        assert_eq!(extract_title(&text, &rules), Some("Short Title".to_string()));
    }

    #[test]
    fn test_title_only_scans_first_lines() {
        let rules = TitleRules::default();
        let filler = "x\n".repeat(5);
        let text = format!("{filler}Late Title");
        assert_eq!(extract_title(&text, &rules), None);
    }

    #[test]
    fn test_line_metadata_order() {
        assert_eq!(detect_line_metadata("Serves: 4"), Some(LineMetadata::Servings(4)));
        assert_eq!(
            detect_line_metadata("Prep time: 15 min"),
            Some(LineMetadata::CookingTime(15))
        );
        assert_eq!(
            detect_line_metadata("A quick dinner. #quick #easy"),
            Some(LineMetadata::Hashtags("A quick dinner.".to_string()))
        );
        assert_eq!(detect_line_metadata("Boil water"), None);
    }

    #[test]
    fn test_numeric_hashtags_are_not_tags() {
        assert!(!has_hashtags("1 #10 can tomatoes"));
        assert!(extract_tags("Stir in the #2 noodles").is_empty());
        assert_eq!(detect_line_metadata("Use a #10 can"), None);
    }

    #[test]
    fn test_whole_servings_lines() {
        assert!(is_servings_line("Serves: 4"));
        assert!(is_servings_line("serves 6 people."));
        assert!(!is_servings_line("Divide into bowls; serves 4 people"));
        assert!(!is_servings_line("Yield: 12 cookies"));
        assert!(!is_servings_line("Boil water"));
    }

    #[test]
    fn test_strip_hashtags() {
        assert_eq!(strip_hashtags("#vegan   soup #winter"), "soup");
        assert_eq!(strip_hashtags("#quick"), "");
    }
}
