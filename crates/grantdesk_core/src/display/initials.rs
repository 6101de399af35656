//! Avatar initials from display names.
//!
//! The first of three or more name parts is treated as a title and skipped
//! ("Dr. Jane Smith" -> "JS"). Two-part names use the first two characters
//! of the second part ("Mr. Einstein" -> "EI").

/// Placeholder returned for absent or empty names.
pub const UNKNOWN_INITIALS: &str = "?";

/// Returns a two-character abbreviation of `name`.
pub fn initials(name: Option<&str>) -> String {
    let Some(name) = name.filter(|value| !value.is_empty()) else {
        return UNKNOWN_INITIALS.to_string();
    };

    let parts: Vec<&str> = name.split_whitespace().collect();
    let picked: String = match parts.as_slice() {
        [_, second, third, ..] => first_chars(second, 1) + &first_chars(third, 1),
        [_, second] => first_chars(second, 2),
        [only] => first_chars(only, 2),
        [] => first_chars(name, 2),
    };
    picked.to_uppercase()
}

fn first_chars(value: &str, count: usize) -> String {
    value.chars().take(count).collect()
}
