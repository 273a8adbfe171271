//! # Recipe Draft
//!
//! Caller-side editable form state. A [`ConversionResult`] is merged into the
//! draft with [`RecipeDraft::apply`], and the finished draft is turned into the
//! payload the persistence API accepts with [`RecipeDraft::to_submission`].
//!
//! ## Usage
//!
//! ```rust
//! use recipe_importer::importer::convert;
//! use recipe_importer::recipe_draft::RecipeDraft;
//!
//! let mut draft = RecipeDraft::default();
//! let result = convert("Toast\n\nIngredients:\n- 2 slices bread\n\nSteps:\n1. Toast it", &draft.snapshot());
//! draft.apply(result);
//!
//! let submission = draft.to_submission()?;
//! assert_eq!(submission.title, "Toast");
//! # Ok::<(), recipe_importer::importer_errors::ImportError>(())
//! ```

use crate::importer_errors::ImportError;
use crate::recipe_model::{ConversionResult, Difficulty, FormSnapshot, Ingredient, Step};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Editable recipe form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub tags: Vec<String>,
    pub category: String,
    pub cooking_time_minutes: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub servings: Option<u32>,
    pub is_public: bool,
    /// Date the recipe was last cooked
    pub cooked_on: Option<NaiveDate>,
}

/// Payload sent to the recipe persistence API
///
/// Ingredient and step lists travel as JSON-encoded strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSubmission {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: Vec<String>,
    pub category: String,
    pub cooking_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub is_public: bool,
    /// Serialized as `YYYY-MM-DD`
    pub cooked_on: Option<NaiveDate>,
}

impl RecipeDraft {
    /// Fields the importer must not overwrite
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            title: self.title.clone(),
            description: self.description.clone(),
            cooking_time_minutes: self.cooking_time_minutes,
        }
    }

    /// Merge a conversion result into the draft
    ///
    /// Returns the names of the fields that changed, in form order.
    pub fn apply(&mut self, result: ConversionResult) -> Vec<&'static str> {
        let mut updated = Vec::new();

        if let Some(title) = result.title {
            self.title = title;
            updated.push("title");
        }
        if let Some(description) = result.description {
            self.description = description;
            updated.push("description");
        }
        if !result.ingredients.is_empty() {
            self.ingredients = result.ingredients;
            updated.push("ingredients");
        }
        if !result.steps.is_empty() {
            self.steps = result.steps;
            updated.push("steps");
        }

        let before = self.tags.len();
        for tag in result.tags {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        if self.tags.len() > before {
            updated.push("tags");
        }

        if let Some(minutes) = result.cooking_time_minutes {
            self.cooking_time_minutes = Some(minutes);
            updated.push("cooking_time_minutes");
        }
        if let Some(difficulty) = result.difficulty {
            self.difficulty = Some(difficulty);
            updated.push("difficulty");
        }
        if let Some(servings) = result.servings {
            self.servings = Some(servings);
            updated.push("servings");
        }

        debug!("Applied conversion result, updated fields: {:?}", updated);
        updated
    }

    /// Validate the draft and build the API payload
    pub fn to_submission(&self) -> Result<RecipeSubmission, ImportError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ImportError::Validation("title is required".to_string()));
        }
        if self.ingredients.is_empty() {
            return Err(ImportError::Validation(
                "at least one ingredient is required".to_string(),
            ));
        }
        if self.steps.is_empty() {
            return Err(ImportError::Validation(
                "at least one step is required".to_string(),
            ));
        }

        let submission = RecipeSubmission {
            title: title.to_string(),
            description: self.description.clone(),
            ingredients: serde_json::to_string(&self.ingredients)?,
            steps: serde_json::to_string(&self.steps)?,
            tags: self.tags.clone(),
            category: self.category.clone(),
            cooking_time: self.cooking_time_minutes,
            difficulty: self.difficulty,
            is_public: self.is_public,
            cooked_on: self.cooked_on,
        };

        info!(
            "Prepared submission '{}' with {} ingredients and {} steps",
            submission.title,
            self.ingredients.len(),
            self.steps.len()
        );
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Omelette".to_string(),
            ingredients: vec![Ingredient::new("i1", "Eggs", "3")],
            steps: vec![Step::new("s1", "Whisk the eggs")],
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_mirrors_user_fields() {
        let draft = RecipeDraft {
            title: "Soup".to_string(),
            cooking_time_minutes: Some(30),
            ..Default::default()
        };
        let snapshot = draft.snapshot();
        assert_eq!(snapshot.title, "Soup");
        assert!(!snapshot.has_description());
        assert_eq!(snapshot.cooking_time_minutes, Some(30));
    }

    #[test]
    fn test_apply_keeps_existing_lists_when_result_is_empty() {
        let mut draft = complete_draft();
        let updated = draft.apply(ConversionResult {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        });

        assert_eq!(updated, vec!["difficulty"]);
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(draft.steps.len(), 1);
        assert_eq!(draft.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_apply_merges_tags_without_duplicates() {
        let mut draft = RecipeDraft {
            tags: vec!["dinner".to_string(), "quick".to_string()],
            ..Default::default()
        };
        let updated = draft.apply(ConversionResult {
            tags: vec!["quick".to_string(), "vegan".to_string()],
            ..Default::default()
        });

        assert_eq!(draft.tags, vec!["dinner", "quick", "vegan"]);
        assert_eq!(updated, vec!["tags"]);

        let updated = draft.apply(ConversionResult {
            tags: vec!["dinner".to_string()],
            ..Default::default()
        });
        assert!(updated.is_empty());
    }

    #[test]
    fn test_submission_validation() {
        let mut draft = complete_draft();
        draft.title = "  ".to_string();
        assert!(matches!(draft.to_submission(), Err(ImportError::Validation(_))));

        let mut draft = complete_draft();
        draft.ingredients.clear();
        assert!(matches!(draft.to_submission(), Err(ImportError::Validation(_))));

        let mut draft = complete_draft();
        draft.steps.clear();
        assert!(matches!(draft.to_submission(), Err(ImportError::Validation(_))));
    }

    #[test]
    fn test_submission_payload_shape() {
        let mut draft = complete_draft();
        draft.cooking_time_minutes = Some(10);
        draft.is_public = true;
        draft.cooked_on = NaiveDate::from_ymd_opt(2024, 3, 9);

        let submission = draft.to_submission().unwrap();
        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(value["cookingTime"], 10);
        assert_eq!(value["isPublic"], true);
        assert_eq!(value["cookedOn"], "2024-03-09");

        let ingredients: Vec<Ingredient> =
            serde_json::from_str(value["ingredients"].as_str().unwrap()).unwrap();
        assert_eq!(ingredients, draft.ingredients);
    }
}
