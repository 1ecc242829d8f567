// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic for building recipe form submissions.
//!
//! Responsibilities:
//! - Flatten a validated draft into ordered form pairs using the server's
//!   collection-binding names.
//! - Encode the pairs as an `application/x-www-form-urlencoded` body and
//!   write it to disk.
//! - Provide filename helpers for the export dialog.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use url::form_urlencoded;

use crate::models::ingredient::IngredientRow;
use crate::utils::slugify;

/// File extension for exported submission bodies.
pub const SUBMISSION_EXTENSION: &str = "form";

/// Difficulty levels accepted by the server's recipe binder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire token the server enum binds by name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// Display caption for the segmented control.
    pub fn caption(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Lenient parser for imported drafts; unknown tokens yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "EASY" => Some(Difficulty::Easy),
            "MEDIUM" => Some(Difficulty::Medium),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Captured, validated data for export.
pub struct SubmissionPayload {
    /// Final body path on disk (with the submission extension enforced).
    pub output: PathBuf,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub serving_size: u32,
    pub difficulty: Difficulty,
    pub image_url: String,
    pub is_public: bool,
    /// Normalized category names, one pair each.
    pub category_names: Vec<String>,
    /// Surviving rows in container order, carrying their creation-time names.
    pub ingredient_rows: Vec<IngredientRow>,
    /// Hidden rating value; `None` when the hidden field is not attached.
    pub rating: Option<String>,
}

/// Suggest a submission filename from a user-facing title.
///
/// Slugs the title via [`crate::utils::slugify()`] and appends the
/// submission extension. Falls back to `recipe_draft.form`.
pub fn suggested_submission_name(title: &str) -> String {
    format!("{}.{}", slugify(title), SUBMISSION_EXTENSION)
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

/// Flatten the payload into ordered `(name, value)` pairs.
///
/// Scalar fields come first in the server DTO's order, all of them emitted
/// even when empty, the way a browser submits every named control. Then one
/// `categoryNames` pair per category, the four `recipeIngredients[<i>].*`
/// pairs per surviving row using each row's creation-time index, and the
/// `rating` hidden value last when attached.
pub fn build_form_pairs(payload: &SubmissionPayload) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = vec![
        ("title".into(), payload.title.clone()),
        ("description".into(), payload.description.clone()),
        ("instructions".into(), payload.instructions.clone()),
        (
            "prepTimeMinutes".into(),
            payload.prep_time_minutes.to_string(),
        ),
        (
            "cookTimeMinutes".into(),
            payload.cook_time_minutes.to_string(),
        ),
        ("servingSize".into(), payload.serving_size.to_string()),
        ("difficultyLevel".into(), payload.difficulty.as_str().into()),
        ("imageUrl".into(), payload.image_url.clone()),
        ("isPublic".into(), payload.is_public.to_string()),
    ];

    for name in &payload.category_names {
        pairs.push(("categoryNames".into(), name.clone()));
    }

    for row in &payload.ingredient_rows {
        for field in row.fields() {
            pairs.push((field.name().to_string(), field.value.clone()));
        }
    }

    if let Some(rating) = &payload.rating {
        pairs.push(("rating".into(), rating.clone()));
    }

    pairs
}

/// Encode pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_form(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Write the encoded submission body for `payload` to its output path.
///
/// Parent directories are created if missing. The body is a single
/// urlencoded line, replayable against the server's form binder.
pub fn write_submission(payload: &SubmissionPayload) -> Result<()> {
    if let Some(parent) = payload.output.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let body = encode_form(&build_form_pairs(payload));
    fs::write(&payload.output, body)
        .with_context(|| format!("Failed to write submission file {:?}", payload.output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ingredient::{IngredientRow, RowSeed, RowTemplate};
    use tempfile::TempDir;

    fn payload(output: PathBuf) -> SubmissionPayload {
        let template = RowTemplate::default();
        let seed = RowSeed {
            ingredient_name: "Tomato".into(),
            quantity: "1/2".into(),
            unit: "cup".into(),
            notes: "".into(),
        };
        SubmissionPayload {
            output,
            title: "Toast & Eggs".into(),
            description: "Breakfast".into(),
            instructions: "Toast the bread.".into(),
            prep_time_minutes: 5,
            cook_time_minutes: 10,
            serving_size: 2,
            difficulty: Difficulty::Easy,
            image_url: String::new(),
            is_public: true,
            category_names: vec!["Breakfast".into()],
            ingredient_rows: vec![IngredientRow::from_template(&template, 0, Some(&seed))],
            rating: Some("0".into()),
        }
    }

    #[test]
    fn pairs_follow_server_binding_order() {
        let payload = payload(PathBuf::from("/tmp/ignored.form"));
        let pairs = build_form_pairs(&payload);

        let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "description",
                "instructions",
                "prepTimeMinutes",
                "cookTimeMinutes",
                "servingSize",
                "difficultyLevel",
                "imageUrl",
                "isPublic",
                "categoryNames",
                "recipeIngredients[0].ingredientName",
                "recipeIngredients[0].quantity",
                "recipeIngredients[0].unit",
                "recipeIngredients[0].notes",
                "rating",
            ]
        );
        assert_eq!(pairs[3].1, "5");
        assert_eq!(pairs[6].1, "EASY");
        assert_eq!(pairs[7].1, "");
        assert_eq!(pairs[8].1, "true");
    }

    #[test]
    fn rows_keep_their_creation_time_indices() {
        let template = RowTemplate::default();
        let mut payload = payload(PathBuf::from("/tmp/ignored.form"));
        // Rows 0 and 2 survive after row 1 was removed; names must not shift.
        payload.ingredient_rows = vec![
            IngredientRow::from_template(&template, 0, None),
            IngredientRow::from_template(&template, 2, None),
        ];

        let pairs = build_form_pairs(&payload);
        let row_names: Vec<&str> = pairs
            .iter()
            .map(|(n, _)| n.as_str())
            .filter(|n| n.starts_with("recipeIngredients"))
            .collect();

        assert_eq!(
            row_names,
            vec![
                "recipeIngredients[0].ingredientName",
                "recipeIngredients[0].quantity",
                "recipeIngredients[0].unit",
                "recipeIngredients[0].notes",
                "recipeIngredients[2].ingredientName",
                "recipeIngredients[2].quantity",
                "recipeIngredients[2].unit",
                "recipeIngredients[2].notes",
            ]
        );
    }

    #[test]
    fn rating_pair_is_absent_without_a_hidden_field() {
        let mut payload = payload(PathBuf::from("/tmp/ignored.form"));
        payload.rating = None;

        let pairs = build_form_pairs(&payload);
        assert!(pairs.iter().all(|(n, _)| n != "rating"));
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let pairs = vec![("recipeIngredients[0].quantity".to_string(), "1/2 cup".to_string())];
        assert_eq!(
            encode_form(&pairs),
            "recipeIngredients%5B0%5D.quantity=1%2F2+cup"
        );
    }

    #[test]
    fn suggested_submission_name_slugs_the_title() {
        assert_eq!(suggested_submission_name("Crème brûlée"), "creme_brulee.form");
        assert_eq!(suggested_submission_name(""), "recipe_draft.form");
    }

    #[test]
    fn ensure_extension_replaces_only_when_needed() {
        assert_eq!(
            ensure_extension(PathBuf::from("a/draft"), "form"),
            PathBuf::from("a/draft.form")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("a/draft.FORM"), "form"),
            PathBuf::from("a/draft.FORM")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("a/draft.txt"), "form"),
            PathBuf::from("a/draft.form")
        );
    }

    #[test]
    fn write_submission_creates_parents_and_round_trips() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("nested/dir/toast.form");
        let payload = payload(output.clone());

        write_submission(&payload).unwrap();

        let body = std::fs::read_to_string(&output).unwrap();
        assert_eq!(body, encode_form(&build_form_pairs(&payload)));
        assert!(body.contains("title=Toast+%26+Eggs"));
    }

    #[test]
    fn difficulty_parses_leniently_and_emits_server_tokens() {
        assert_eq!(Difficulty::parse(" easy "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("MEDIUM"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("unknown"), None);
        assert_eq!(Difficulty::Hard.as_str(), "HARD");
    }
}
