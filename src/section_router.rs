//! # Section Router
//!
//! Single-pass state machine over the lines of a pasted recipe. Each line is
//! classified, run through [`transition`] to decide the next section and the
//! action to take, and then folded into a fresh [`ParseState`]. The pass never
//! backtracks: a misclassified heading is not corrected later in the same run.
//!
//! ```text
//! Description --"ingredient"--> Ingredients --"step"/"method"/...--> Steps
//! ```
//!
//! Any section heading jumps straight to its section; nothing returns to
//! Description.

use crate::id_generator::IdGenerator;
use crate::ingredient_parser::parse_ingredient;
use crate::line_classifier::{classify, LineKind};
use crate::metadata::{detect_line_metadata, is_servings_line, strip_hashtags, LineMetadata};
use crate::recipe_model::{Ingredient, Step};
use crate::step_parser::parse_step;
use crate::text_utils::strip_emphasis;
use log::{debug, trace};

/// Deepest heading level rendered as a bold sub-heading in the description
pub const MAX_SUBHEADING_LEVEL: usize = 3;

/// Parsing mode during the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Description,
    Ingredients,
    Steps,
}

/// Heading keywords and the section they open, checked in order
const SECTION_KEYWORDS: &[(&[&str], Section)] = &[
    (&["ingredient"], Section::Ingredients),
    (&["instruction", "step", "method", "direction"], Section::Steps),
];

/// Words a label may carry besides the keyword and still name a section ("For the ingredients:")
const SECTION_FILLER_WORDS: &[&str] = &["the", "for", "and", "list", "of", "your", "recipe"];

/// What the router does with a line besides (possibly) changing section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Section heading: close the current description paragraph
    Flush,
    /// Generic heading: close the paragraph and start a new one with the bolded text
    SubHeading(String),
    /// Deep heading: append its text to the current paragraph
    AppendText(String),
    /// No structural meaning: hand the line to the current section's handler
    Route,
}

/// Section named by a heading or label text, if any
pub fn section_for(text: &str) -> Option<Section> {
    let lower = text.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, section)| *section)
}

/// Section named by a label, only when the label is nothing but the section name
///
/// "Ingredients:" and "For the method:" qualify; "Combine the dry ingredients:"
/// is an instruction that happens to mention a keyword.
pub fn section_label(text: &str) -> Option<Section> {
    let section = section_for(text)?;
    let lower = text.to_lowercase();
    let name_only = lower
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|word| !word.is_empty())
        .all(|word| {
            SECTION_FILLER_WORDS.contains(&word)
                || SECTION_KEYWORDS
                    .iter()
                    .any(|(keywords, _)| keywords.iter().any(|keyword| word.contains(keyword)))
        });
    name_only.then_some(section)
}

/// Transition table of the router
///
/// Returns the section in effect after the line and the action to apply.
pub fn transition(current: Section, line: &LineKind) -> (Section, Action) {
    match line {
        LineKind::Heading { level, text } => match section_for(text) {
            Some(next) => (next, Action::Flush),
            None if *level <= MAX_SUBHEADING_LEVEL => {
                (current, Action::SubHeading(text.clone()))
            }
            None => (current, Action::AppendText(text.clone())),
        },
        LineKind::Label(text) => match section_label(text) {
            Some(next) => (next, Action::Flush),
            // "Whisk together:" is an instruction
            None if current == Section::Steps => (current, Action::Route),
            None => (current, Action::SubHeading(text.clone())),
        },
        LineKind::Blank | LineKind::Item(_) | LineKind::Plain(_) => (current, Action::Route),
    }
}

/// Accumulated state of one routing pass
///
/// Each line consumes the state and yields the next one; nothing is shared
/// between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub section: Section,
    /// Lines of the description paragraph being built
    pub buffer: Vec<String>,
    /// Completed description paragraphs
    pub description_parts: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub cooking_time_minutes: Option<u32>,
    pub servings: Option<u32>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line into the state
    pub fn advance(self, line: &str, ids: &mut dyn IdGenerator) -> Self {
        let kind = classify(line);
        let (section, action) = transition(self.section, &kind);

        if section != self.section {
            debug!("Section change {:?} -> {:?} at '{}'", self.section, section, line.trim());
        }

        match action {
            Action::Flush => Self { section, ..self.flush() },
            Action::SubHeading(text) => {
                let text = strip_emphasis(&text);
                if text.is_empty() {
                    self.flush()
                } else {
                    self.flush().push_line(format!("**{text}**"))
                }
            }
            Action::AppendText(text) if text.is_empty() => self,
            Action::AppendText(text) => self.push_line(text),
            Action::Route => self.route(line, kind, ids),
        }
    }

    /// Close the pass, flushing any buffered description text
    pub fn finish(self) -> Self {
        self.flush()
    }

    fn route(self, line: &str, kind: LineKind, ids: &mut dyn IdGenerator) -> Self {
        let line = line.trim();

        if kind == LineKind::Blank {
            return match self.section {
                Section::Description => self.flush(),
                Section::Ingredients | Section::Steps => self,
            };
        }

        // Labels reach here only as step text; keep their colon
        let text = match &kind {
            LineKind::Label(_) => line,
            other => other.text(),
        };

        match detect_line_metadata(line) {
            None => self.dispatch(line, text, ids),
            Some(metadata) if self.section == Section::Description => self.record_metadata(metadata),
            Some(metadata) => self.record_list_metadata(metadata, &kind, text, ids),
        }
    }

    /// Hand a content line to the current section's handler
    fn dispatch(self, line: &str, text: &str, ids: &mut dyn IdGenerator) -> Self {
        match self.section {
            Section::Description => self.push_line(line.to_string()),
            Section::Ingredients => {
                let mut state = self;
                state.ingredients.push(parse_ingredient(text, ids));
                state
            }
            Section::Steps => {
                let mut state = self;
                let step = parse_step(text, ids);
                if step.instruction.is_empty() {
                    trace!("Dropped empty step from '{}'", line);
                } else {
                    state.steps.push(step);
                }
                state
            }
        }
    }

    /// Metadata inside an ingredient or step list; content is never dropped
    fn record_list_metadata(
        self,
        metadata: LineMetadata,
        kind: &LineKind,
        text: &str,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        match metadata {
            LineMetadata::Servings(servings) if !is_servings_line(text) => {
                let state = Self {
                    servings: self.servings.or(Some(servings)),
                    ..self
                };
                state.dispatch(text, text, ids)
            }
            LineMetadata::Hashtags(_) if matches!(kind, LineKind::Item(_)) => {
                let rest = strip_hashtags(text);
                if rest.is_empty() {
                    self
                } else {
                    self.dispatch(&rest, &rest, ids)
                }
            }
            other => self.record_metadata(other),
        }
    }

    fn record_metadata(self, metadata: LineMetadata) -> Self {
        match metadata {
            LineMetadata::Servings(servings) => Self {
                servings: self.servings.or(Some(servings)),
                ..self
            },
            LineMetadata::CookingTime(minutes) => Self {
                cooking_time_minutes: self.cooking_time_minutes.or(Some(minutes)),
                ..self
            },
            LineMetadata::Hashtags(prose)
                if self.section == Section::Description && !prose.is_empty() =>
            {
                self.push_line(prose)
            }
            LineMetadata::Hashtags(_) => self,
        }
    }

    fn push_line(mut self, line: String) -> Self {
        self.buffer.push(line);
        self
    }

    fn flush(mut self) -> Self {
        if !self.buffer.is_empty() {
            let paragraph = self.buffer.join("\n");
            self.buffer.clear();
            self.description_parts.push(paragraph);
        }
        self
    }
}

/// Run the routing pass over the whole text
pub fn route_lines(text: &str, ids: &mut dyn IdGenerator) -> ParseState {
    let state = text
        .lines()
        .fold(ParseState::new(), |state, line| state.advance(line, ids))
        .finish();

    debug!(
        "Routing pass done: {} description parts, {} ingredients, {} steps",
        state.description_parts.len(),
        state.ingredients.len(),
        state.steps.len()
    );
    state
}
