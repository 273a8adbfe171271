//! # Step Parser
//!
//! Turns one line of an instructions section into a [`Step`]. Bullet and
//! numbered items arrive here with their markers already removed, so items and
//! plain prose are treated the same way.

use crate::id_generator::IdGenerator;
use crate::recipe_model::Step;
use crate::text_utils::{capitalize_first, strip_emphasis};
use log::trace;

/// Parse a single instruction line
///
/// All `*` characters are removed, the text is trimmed and the first letter
/// capitalized. The instruction may end up empty (e.g. for a `***` divider);
/// callers that accumulate steps drop those.
///
/// # Examples
///
/// ```rust
/// use recipe_importer::id_generator::SequentialIds;
/// use recipe_importer::step_parser::parse_step;
///
/// let mut ids = SequentialIds::new("step");
/// let step = parse_step("**Boil** water", &mut ids);
/// assert_eq!(step.instruction, "Boil water");
/// ```
pub fn parse_step(line: &str, ids: &mut dyn IdGenerator) -> Step {
    let instruction = capitalize_first(&strip_emphasis(line));
    trace!("Parsed step line '{}' -> '{}'", line, instruction);

    Step {
        id: ids.next_id(),
        instruction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIds;

    #[test]
    fn test_strips_emphasis() {
        let mut ids = SequentialIds::new("step");
        assert_eq!(parse_step("**Boil** water", &mut ids).instruction, "Boil water");
        assert_eq!(
            parse_step("stir *gently* for 2 minutes", &mut ids).instruction,
            "Stir gently for 2 minutes"
        );
    }

    #[test]
    fn test_capitalizes_and_trims() {
        let mut ids = SequentialIds::new("step");
        let step = parse_step("   add pasta  ", &mut ids);
        assert_eq!(step.instruction, "Add pasta");
        assert_eq!(step.id, "step-1");
    }

    #[test]
    fn test_divider_becomes_empty_instruction() {
        let mut ids = SequentialIds::new("step");
        assert!(parse_step("***", &mut ids).instruction.is_empty());
    }
}
