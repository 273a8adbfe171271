//! Small string helpers shared by the parsers.

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip markdown emphasis markers (`*`) and surrounding whitespace
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}
