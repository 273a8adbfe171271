//! # Recipe Data Model
//!
//! This module defines the value records produced by the raw-text importer.
//! None of them are persisted here; ownership of a [`ConversionResult`] passes
//! to the caller, which merges it into its own editable form state.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::recipe_model::{Ingredient, Step};
//!
//! let flour = Ingredient::new("flour-1", "Flour", "2 cups");
//! let boil = Step::new("step-1", "Boil water");
//!
//! assert_eq!(flour.to_string(), "2 cups Flour");
//! assert_eq!(boil.to_string(), "Boil water");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Opaque identifier, unique within one conversion result
    pub id: String,

    /// Ingredient name with a capitalized first letter (e.g., "Flour", "Onion (finely chopped)")
    pub name: String,

    /// Free-text amount (e.g., "2 cups", "a pinch", "to taste"), possibly empty
    pub amount: String,
}

/// A single instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Opaque identifier, unique within one conversion result
    pub id: String,

    /// Instruction text with markdown emphasis removed
    pub instruction: String,
}

/// Normalized recipe difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Read-only view of the fields the caller has already filled in.
///
/// The importer never produces a title, description or cooking time when the
/// corresponding snapshot field is already set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub title: String,
    pub description: String,
    pub cooking_time_minutes: Option<u32>,
}

/// Structured output of one conversion call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub ingredients: Vec<Ingredient>,

    pub steps: Vec<Step>,

    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl Ingredient {
    /// Create an ingredient from its parts
    pub fn new(id: &str, name: &str, amount: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Check if this ingredient carries any amount text
    pub fn has_amount(&self) -> bool {
        !self.amount.is_empty()
    }
}

impl Step {
    /// Create a step from its parts
    pub fn new(id: &str, instruction: &str) -> Self {
        Self {
            id: id.to_string(),
            instruction: instruction.to_string(),
        }
    }
}

impl Difficulty {
    /// Difficulty words and the level each one normalizes to
    pub const SYNONYMS: &'static [(&'static str, Difficulty)] = &[
        ("easy", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("hard", Difficulty::Hard),
        ("simple", Difficulty::Easy),
        ("intermediate", Difficulty::Medium),
        ("advanced", Difficulty::Hard),
        ("beginner", Difficulty::Easy),
    ];

    /// Map a difficulty word or one of its synonyms to a normalized level
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        Self::SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == word)
            .map(|(_, level)| *level)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FormSnapshot {
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

impl ConversionResult {
    /// True when the conversion detected nothing worth merging
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.tags.is_empty()
            && self.difficulty.is_none()
            && self.cooking_time_minutes.is_none()
            && self.servings.is_none()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_amount() {
            write!(f, "{} {}", self.amount, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instruction)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
