//! # Raw-Text Importer
//!
//! Entry point of the crate: converts a block of pasted recipe text into a
//! [`ConversionResult`] the recipe form can merge into its editable state.
//!
//! ## Features
//!
//! - One routing pass over the lines (see [`crate::section_router`])
//! - Title, difficulty and tag extraction over the collected text
//! - Respects fields the user already filled in (title, description, cooking time)
//! - Never fails: unrecognized input yields empty or default fields
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::importer::RecipeImporter;
//! use recipe_importer::recipe_model::FormSnapshot;
//!
//! let importer = RecipeImporter::new();
//! let text = "Pancakes\n\nIngredients:\n- 2 cups flour\n- 2 eggs\n\nSteps:\n1. Whisk\n2. Fry";
//! let result = importer.convert(text, &FormSnapshot::default());
//!
//! assert_eq!(result.title.as_deref(), Some("Pancakes"));
//! assert_eq!(result.ingredients.len(), 2);
//! assert_eq!(result.steps.len(), 2);
//! ```

use crate::id_generator::{IdGenerator, TimestampIds};
use crate::importer_config::ImporterConfig;
use crate::importer_errors::ImportError;
use crate::metadata::{extract_difficulty, extract_tags, extract_title};
use crate::recipe_model::{ConversionResult, FormSnapshot};
use crate::section_router::route_lines;
use crate::text_utils::strip_emphasis;
use std::path::Path;
use tracing::{debug, info};

/// Free-text recipe importer
#[derive(Debug, Clone, Default)]
pub struct RecipeImporter {
    config: ImporterConfig,
}

impl RecipeImporter {
    /// Create an importer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with a custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_importer::importer::RecipeImporter;
    /// use recipe_importer::importer_config::{ImporterConfig, TitleRules};
    ///
    /// let config = ImporterConfig {
    ///     title: TitleRules { scan_lines: 2, ..Default::default() },
    ///     ..Default::default()
    /// };
    /// let importer = RecipeImporter::with_config(config)?;
    /// # Ok::<(), recipe_importer::importer_errors::ImportError>(())
    /// ```
    pub fn with_config(config: ImporterConfig) -> Result<Self, ImportError> {
        config.validate()?;
        debug!(
            scan_lines = config.title.scan_lines,
            min_len = config.title.min_len,
            max_len = config.title.max_len,
            "Creating RecipeImporter with custom config"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Convert raw text using timestamp-based ids
    pub fn convert(&self, raw: &str, snapshot: &FormSnapshot) -> ConversionResult {
        let mut ids = TimestampIds::new();
        self.convert_with_ids(raw, snapshot, &mut ids)
    }

    /// Convert raw text, drawing ingredient and step ids from `ids`
    pub fn convert_with_ids(
        &self,
        raw: &str,
        snapshot: &FormSnapshot,
        ids: &mut dyn IdGenerator,
    ) -> ConversionResult {
        debug!(lines = raw.lines().count(), "Converting raw recipe text");

        let state = route_lines(raw, ids);

        let difficulty = extract_difficulty(&state.description_parts);
        let detected_title = extract_title(raw, &self.config.title);

        let description = if snapshot.has_description() {
            None
        } else {
            build_description(&state.description_parts, detected_title.as_deref())
        };
        let title = detected_title.filter(|_| !snapshot.has_title());
        let cooking_time_minutes = state
            .cooking_time_minutes
            .filter(|_| snapshot.cooking_time_minutes.is_none());

        let result = ConversionResult {
            title,
            description,
            ingredients: state.ingredients,
            steps: state.steps,
            tags: extract_tags(raw),
            difficulty,
            cooking_time_minutes,
            servings: state.servings,
        };

        info!(
            ingredients = result.ingredients.len(),
            steps = result.steps.len(),
            tags = result.tags.len(),
            has_title = result.title.is_some(),
            "Converted raw recipe text"
        );
        result
    }
}

/// Convert raw text with the default configuration
pub fn convert(raw: &str, snapshot: &FormSnapshot) -> ConversionResult {
    RecipeImporter::new().convert(raw, snapshot)
}

/// Read raw recipe text from a file
pub fn load_raw_text<P: AsRef<Path>>(path: P) -> Result<String, ImportError> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|err| ImportError::Input(format!("{}: {err}", path.display())))
}

/// Join description paragraphs, dropping the line that was picked as the title
fn build_description(parts: &[String], title: Option<&str>) -> Option<String> {
    let mut pending_title = title;
    let mut paragraphs = Vec::new();

    for part in parts {
        let mut lines = Vec::new();
        for line in part.lines() {
            if pending_title.is_some_and(|title| strip_emphasis(line) == title) {
                pending_title = None;
                continue;
            }
            lines.push(line);
        }
        if !lines.is_empty() {
            paragraphs.push(lines.join("\n"));
        }
    }

    let description = paragraphs.join("\n\n");
    (!description.trim().is_empty()).then_some(description)
}
