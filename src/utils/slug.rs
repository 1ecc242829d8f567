// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn user-facing titles into filesystem-safe file name stems.

/// Produce a lowercase ASCII slug suitable as a suggested file name stem.
///
/// Transliterates Unicode to ASCII with `deunicode` (e.g. "Crème" → "Creme"),
/// maps anything outside `[a-z0-9-]` to `_`, collapses runs of `_`, and trims
/// leading/trailing separators. Falls back to `recipe_draft` when nothing
/// printable survives.
pub fn slugify(value: &str) -> String {
    let transliterated = deunicode::deunicode(value).to_ascii_lowercase();
    let mut out = String::with_capacity(transliterated.len());
    let mut last_was_separator = true;

    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }

    while out.ends_with('_') {
        out.pop();
    }

    if out.is_empty() {
        return "recipe_draft".to_string();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::slugify;

    // Accents transliterate and separators collapse to single underscores.
    #[test]
    fn slugify_transliterates_and_collapses_separators() {
        assert_eq!(slugify("Crème brûlée  (v2)"), "creme_brulee_v2");
    }

    #[test]
    fn slugify_keeps_hyphens_and_digits() {
        assert_eq!(slugify("5-minute Toast"), "5-minute_toast");
    }

    #[test]
    fn slugify_falls_back_for_unprintable_titles() {
        assert_eq!(slugify("!!!"), "recipe_draft");
        assert_eq!(slugify(""), "recipe_draft");
    }
}
