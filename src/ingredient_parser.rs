//! # Ingredient Parser
//!
//! This module turns one free-text ingredient line into a structured
//! [`Ingredient`] with a `name` and a free-text `amount`.
//!
//! ## Features
//!
//! - Split the line after the last measurement word ("2 cups flour")
//! - Fall back to the last number when no unit is present ("3 eggs")
//! - Recognize trailing "to taste" / "as needed" / "as required"
//! - Keep a trailing parenthetical as a preparation note ("onion (finely chopped)")
//! - Never fail: an unrecognized line becomes the ingredient name
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::id_generator::SequentialIds;
//! use recipe_importer::ingredient_parser::parse_ingredient;
//!
//! let mut ids = SequentialIds::new("ing");
//! let flour = parse_ingredient("2 cups flour", &mut ids);
//!
//! assert_eq!(flour.name, "Flour");
//! assert_eq!(flour.amount, "2 cups");
//! ```

use crate::id_generator::IdGenerator;
use crate::line_classifier::{classify, LineKind};
use crate::measurement_patterns::{
    is_measurement_word, is_numeric_token, LEADING_QUANTIFIER_REGEX, PREPARATION_NOTE_REGEX,
    TOKEN_REGEX, TO_TASTE_REGEX,
};
use crate::recipe_model::Ingredient;
use crate::text_utils::capitalize_first;
use log::{debug, trace};

/// Amount text used for "to taste", "as needed" and "as required"
pub const TO_TASTE: &str = "to taste";

/// Token predicates that mark the end of the amount, in precedence order.
/// A measurement word anywhere in the line beats a bare number.
const SPLIT_MARKERS: &[(&str, fn(&str) -> bool)] = &[
    ("measurement word", is_measurement_word),
    ("number", is_numeric_token),
];

/// Name and amount of an ingredient line, before an id is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub amount: String,
}

/// Parse a single ingredient line
pub fn parse_ingredient(line: &str, ids: &mut dyn IdGenerator) -> Ingredient {
    let parsed = split_ingredient(line);
    Ingredient {
        id: ids.next_id(),
        name: parsed.name,
        amount: parsed.amount,
    }
}

/// Parse a multi-line paste, one ingredient per non-blank line
///
/// List markers are removed; headings and labels such as "For the sauce:" are skipped.
pub fn parse_ingredient_lines(text: &str, ids: &mut dyn IdGenerator) -> Vec<Ingredient> {
    let ingredients: Vec<Ingredient> = text
        .lines()
        .filter_map(|line| match classify(line) {
            LineKind::Blank | LineKind::Heading { .. } | LineKind::Label(_) => None,
            LineKind::Item(text) | LineKind::Plain(text) => Some(text),
        })
        .map(|line| parse_ingredient(&line, ids))
        .collect();

    debug!("Parsed {} ingredients from pasted text", ingredients.len());
    ingredients
}

/// Split an ingredient line into its name and amount
pub fn split_ingredient(line: &str) -> ParsedLine {
    let line = line.trim();
    let (main, note) = split_preparation_note(line);

    let tokens: Vec<regex::Match> = TOKEN_REGEX.find_iter(main).collect();
    let split_point = SPLIT_MARKERS.iter().find_map(|(marker, is_marker)| {
        tokens
            .iter()
            .rposition(|token| is_marker(token.as_str().trim_end_matches(',')))
            .map(|index| {
                trace!("Split '{}' after {} '{}'", main, marker, tokens[index].as_str());
                index + 1
            })
    });

    let (name, amount) = match split_point {
        Some(split) => {
            let rest = clean_name(&main[tokens[split - 1].end()..]);
            if rest.is_empty() {
                (main.to_string(), String::new())
            } else {
                let amount_text = tokens[..split]
                    .iter()
                    .map(|token| token.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                (rest, normalize_amount(&amount_text))
            }
        }
        None => match TO_TASTE_REGEX.captures(main) {
            Some(caps) if !clean_name(&caps[1]).is_empty() => {
                (clean_name(&caps[1]), TO_TASTE.to_string())
            }
            _ => (main.to_string(), String::new()),
        },
    };

    let mut name = capitalize_first(&name);
    if let Some(note) = note {
        name = format!("{name} ({note})");
    }

    debug!("Parsed ingredient line '{}' -> name='{}', amount='{}'", line, name, amount);
    ParsedLine { name, amount }
}

/// Separate a trailing "(...)" group from the rest of the line
fn split_preparation_note(line: &str) -> (&str, Option<String>) {
    let Some(caps) = PREPARATION_NOTE_REGEX.captures(line) else {
        return (line, None);
    };
    let Some(whole) = caps.get(0) else {
        return (line, None);
    };

    let main = line[..whole.start()].trim_end();
    let note = caps[1].trim();
    if main.is_empty() || note.is_empty() {
        return (line, None);
    }
    (main, Some(note.to_string()))
}

/// Trim separators and a leading "of" from the name part
fn clean_name(raw: &str) -> String {
    let name = raw.trim().trim_matches(|c: char| c == ',' || c == ';').trim();
    let lower = name.to_lowercase();
    let name = if lower.starts_with("of ") { name[3..].trim_start() } else { name };
    name.to_string()
}

/// Drop a leading "a"/"an"/"some" and give bare unit words an "a " prefix
fn normalize_amount(raw: &str) -> String {
    let amount = LEADING_QUANTIFIER_REGEX.replace(raw.trim(), "").trim().to_string();

    let has_digit = amount.chars().any(|c| c.is_ascii_digit());
    let single_word = amount.split_whitespace().count() == 1;
    if !has_digit && single_word && !amount.eq_ignore_ascii_case(TO_TASTE) {
        return format!("a {amount}");
    }
    amount
}
