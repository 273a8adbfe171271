//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and word tables used to find the boundary
//! between the amount and the name of a free-text ingredient line.

use lazy_static::lazy_static;
use regex::Regex;

/// Recognized measurement units and the plural suffix each one accepts ("" for none)
pub const MEASUREMENT_UNITS: &[(&str, &str)] = &[
    ("cup", "s"),
    ("tbsp", "s"),
    ("tablespoon", "s"),
    ("tsp", "s"),
    ("teaspoon", "s"),
    ("liter", "s"),
    ("litre", "s"),
    ("l", ""),
    ("clove", "s"),
    ("gram", "s"),
    ("g", ""),
    ("kilogram", "s"),
    ("kg", "s"),
    ("ml", ""),
    ("ounce", "s"),
    ("oz", ""),
    ("pound", "s"),
    ("lb", "s"),
    ("piece", "s"),
    ("pc", "s"),
    ("slice", "s"),
    ("pinch", "es"),
    ("can", "s"),
    ("packet", "s"),
    ("pack", "s"),
    ("package", "s"),
    ("jar", "s"),
    ("bottle", "s"),
    ("bunch", "es"),
    ("handful", "s"),
    ("dash", "es"),
    ("splash", "es"),
    ("sprinkle", "s"),
    ("spoon", "s"),
];

// Integer, decimal or simple fraction
pub const NUMERIC_PATTERN: &str = r"^(?:\d+(?:\.\d+)?|\d+/\d+)$";

// Words, quoted phrases and parenthetical groups
pub const TOKEN_PATTERN: &str = r#"[^\s"]+|"([^"]*)"|(\([^)]*\))"#;

pub const PREPARATION_NOTE_PATTERN: &str = r"\(([^)]*)\)\s*$";

pub const TO_TASTE_PATTERN: &str = r"(?i)^(.*?)[\s,]*\b(?:to taste|as needed|as required)\.?$";

pub const LEADING_QUANTIFIER_PATTERN: &str = r"(?i)^(?:a|an|some)\s+";

// Lazy static regexes to avoid recompilation
lazy_static! {
    // Whole-token unit match, tolerating an abbreviation period ("tbsp.")
    pub static ref MEASUREMENT_WORD_REGEX: Regex = {
        let units: Vec<String> = MEASUREMENT_UNITS
            .iter()
            .map(|(unit, plural)| match *plural {
                "" => unit.to_string(),
                plural => format!("{unit}(?:{plural})?"),
            })
            .collect();
        Regex::new(&format!(r"(?i)^(?:{})\.?$", units.join("|")))
            .expect("Measurement word pattern should be valid")
    };
    pub static ref NUMERIC_REGEX: Regex =
        Regex::new(NUMERIC_PATTERN).expect("Numeric pattern should be valid");
    pub static ref TOKEN_REGEX: Regex =
        Regex::new(TOKEN_PATTERN).expect("Token pattern should be valid");
    pub static ref PREPARATION_NOTE_REGEX: Regex =
        Regex::new(PREPARATION_NOTE_PATTERN).expect("Preparation note pattern should be valid");
    pub static ref TO_TASTE_REGEX: Regex =
        Regex::new(TO_TASTE_PATTERN).expect("To-taste pattern should be valid");
    pub static ref LEADING_QUANTIFIER_REGEX: Regex = Regex::new(LEADING_QUANTIFIER_PATTERN)
        .expect("Leading quantifier pattern should be valid");
}

/// Check whether a single token is a recognized measurement word
pub fn is_measurement_word(token: &str) -> bool {
    MEASUREMENT_WORD_REGEX.is_match(token)
}

/// Check whether a single token is a number ("2", "1.5", "1/2")
pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_REGEX.is_match(token)
}
