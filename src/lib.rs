//! # Recipe Importer
//!
//! Turns free-form recipe text (pasted from a web page, a chat message or a
//! markdown note) into a structured recipe: title, description, ingredients
//! with amounts, instruction steps, tags, difficulty, cooking time and
//! servings. The conversion is pure and never fails; anything the heuristics
//! do not recognize simply yields empty fields.

pub mod id_generator;
pub mod importer;
pub mod importer_config;
pub mod importer_errors;
pub mod ingredient_parser;
pub mod line_classifier;
pub mod measurement_patterns;
pub mod metadata;
pub mod recipe_draft;
pub mod recipe_model;
pub mod section_router;
pub mod step_parser;
pub mod text_utils;

pub use importer::{convert, RecipeImporter};
pub use importer_errors::ImportError;
pub use recipe_draft::{RecipeDraft, RecipeSubmission};
pub use recipe_model::{ConversionResult, Difficulty, FormSnapshot, Ingredient, Step};
