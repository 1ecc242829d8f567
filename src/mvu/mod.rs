// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::logic::submission::{self, Difficulty, SubmissionPayload};
use crate::models::ingredient::RowTemplate;
use crate::models::recipe_doc::{RecipeDocument, parse_recipe_document};
use crate::models::category::Categories;
use crate::ui::components::categories::{self, CategoriesModel, CategoriesMsg};
use crate::ui::components::ingredients::{self, IngredientsModel, IngredientsMsg};
use crate::ui::components::rating::{self, RatingModel, RatingMsg};

/// Star count of the rating widget on the recipe page.
pub const RATING_STARS: usize = 5;

/// Top-level application state.
pub struct AppModel {
    /// User-facing recipe title.
    pub title: String,
    pub description: String,
    pub instructions: String,
    /// Numeric form fields kept as strings and validated at export time.
    pub prep_minutes: String,
    pub cook_minutes: String,
    pub servings: String,
    pub difficulty: Difficulty,
    pub image_url: String,
    pub is_public: bool,
    /// Category chips editor state.
    pub categories: CategoriesModel,
    /// Repeatable ingredient-row controller state.
    pub ingredients: IngredientsModel,
    /// Star-rating controller state.
    pub rating: RatingModel,
    /// Page URL carried by the imported draft, used by the share actions.
    pub source_url: Option<String>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Destructive action awaiting the user's confirmation.
    pub pending_confirm: Option<DestructiveAction>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl Default for AppModel {
    /// A blank draft: empty container with an add trigger, unset rating.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructions: String::new(),
            prep_minutes: String::new(),
            cook_minutes: String::new(),
            servings: String::new(),
            difficulty: Difficulty::default(),
            image_url: String::new(),
            is_public: true,
            categories: CategoriesModel::default(),
            ingredients: IngredientsModel::attach(Some(Vec::new()), Some(RowTemplate::default())),
            rating: RatingModel::attach(RATING_STARS, Some("0"), true),
            source_url: None,
            status: None,
            error: None,
            pending_confirm: None,
            pending_commands: 0,
        }
    }
}

/// Actions that go through the confirm guard before running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestructiveAction {
    ClearIngredients,
    ResetDraft,
}

impl DestructiveAction {
    /// Prompt shown in the confirmation modal.
    pub fn prompt(&self) -> &'static str {
        match self {
            DestructiveAction::ClearIngredients => "Remove all ingredient rows?",
            DestructiveAction::ResetDraft => "Discard the entire draft? This cannot be undone.",
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    TitleChanged(String),
    DescriptionChanged(String),
    InstructionsChanged(String),
    PrepMinutesChanged(String),
    CookMinutesChanged(String),
    ServingsChanged(String),
    SetDifficulty(Difficulty),
    ImageUrlChanged(String),
    SetPublic(bool),
    Categories(CategoriesMsg),
    Ingredients(IngredientsMsg),
    Rating(RatingMsg),
    ImportRequested,
    ImportCancelled,
    ImportFailed(String),
    ImportLoaded {
        doc: RecipeDocument,
        source: PathBuf,
    },
    ExportRequested(PathBuf),
    ExportCancelled,
    ExportCompleted(Result<PathBuf, String>),
    ShareCopyRequested,
    ShareOpenRequested,
    ShareCompleted(Result<String, String>),
    ConfirmRequested(DestructiveAction),
    ConfirmAccepted,
    ConfirmDismissed,
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    PickDraftFile,
    ExportSubmission(SubmissionPayload),
    CopyShareLink(String),
    OpenShareLink(String),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::TitleChanged(text) => model.title = text,
        Msg::DescriptionChanged(text) => model.description = text,
        Msg::InstructionsChanged(text) => model.instructions = text,
        Msg::PrepMinutesChanged(text) => model.prep_minutes = text,
        Msg::CookMinutesChanged(text) => model.cook_minutes = text,
        Msg::ServingsChanged(text) => model.servings = text,
        Msg::SetDifficulty(level) => model.difficulty = level,
        Msg::ImageUrlChanged(text) => model.image_url = text,
        Msg::SetPublic(public) => model.is_public = public,
        Msg::DismissError => model.error = None,
        // "Clear all" is destructive; it only reaches the controller after
        // the user confirms.
        Msg::Ingredients(IngredientsMsg::ClearRequested) => {
            model.pending_confirm = Some(DestructiveAction::ClearIngredients);
        }
        Msg::Ingredients(m) => {
            if let Some(event) = ingredients::update(&mut model.ingredients, m) {
                surface_event(model, event.message, false);
            }
        }
        Msg::Rating(m) => rating::update(&mut model.rating, m),
        Msg::Categories(m) => {
            if let Some(event) = categories::update(&mut model.categories, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::ImportRequested => cmds.push(Command::PickDraftFile),
        Msg::ImportCancelled => surface_event(model, "Import cancelled.".to_string(), false),
        Msg::ImportFailed(err) => surface_event(model, err, true),
        Msg::ImportLoaded { doc, source } => {
            let row_count = doc.ingredients.as_ref().map(|rows| rows.len()).unwrap_or(0);
            apply_document(model, doc);
            surface_event(
                model,
                format!(
                    "Loaded draft from {} ({} ingredient row(s))",
                    source.display(),
                    row_count
                ),
                false,
            );
        }
        Msg::ExportRequested(output_path) => match validate_for_export(model, output_path) {
            Ok(payload) => cmds.push(Command::ExportSubmission(payload)),
            Err(err) => surface_event(model, err, true),
        },
        Msg::ExportCancelled => surface_event(model, "Export cancelled.".to_string(), false),
        Msg::ExportCompleted(result) => match result {
            Ok(path) => {
                surface_event(model, format!("Submission exported: {}", path.display()), false)
            }
            Err(err) => {
                surface_event(model, format!("Failed to export submission:\n\n{err}"), true)
            }
        },
        Msg::ShareCopyRequested => match &model.source_url {
            Some(url) => cmds.push(Command::CopyShareLink(url.clone())),
            None => surface_event(
                model,
                "No share link available for this draft.".to_string(),
                true,
            ),
        },
        Msg::ShareOpenRequested => match &model.source_url {
            Some(url) => cmds.push(Command::OpenShareLink(url.clone())),
            None => surface_event(
                model,
                "No share link available for this draft.".to_string(),
                true,
            ),
        },
        // Share failures degrade to a status line carrying the link itself;
        // they never raise the error modal.
        Msg::ShareCompleted(result) => match result {
            Ok(message) | Err(message) => surface_event(model, message, false),
        },
        Msg::ConfirmRequested(action) => model.pending_confirm = Some(action),
        Msg::ConfirmDismissed => {
            model.pending_confirm = None;
            surface_event(model, "Cancelled.".to_string(), false);
        }
        Msg::ConfirmAccepted => match model.pending_confirm.take() {
            Some(DestructiveAction::ClearIngredients) => {
                if let Some(event) =
                    ingredients::update(&mut model.ingredients, IngredientsMsg::ClearRows)
                {
                    surface_event(model, event.message, false);
                }
            }
            Some(DestructiveAction::ResetDraft) => {
                *model = AppModel::default();
                surface_event(model, "Draft reset.".to_string(), false);
            }
            None => {}
        },
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickDraftFile => {
            let file = rfd::FileDialog::new()
                .set_title("Open recipe draft")
                .add_filter("Recipe draft", &["json"])
                .pick_file();

            match file {
                Some(path) => match std::fs::read_to_string(&path) {
                    Ok(content) => match parse_recipe_document(&content) {
                        Ok(doc) => {
                            info!(path = %path.display(), "draft imported");
                            Msg::ImportLoaded { doc, source: path }
                        }
                        Err(err) => Msg::ImportFailed(err.to_string()),
                    },
                    Err(err) => Msg::ImportFailed(format!("Failed to read draft file: {err}")),
                },
                None => Msg::ImportCancelled,
            }
        }
        Command::ExportSubmission(payload) => {
            let res = submission::write_submission(&payload).map(|_| payload.output.clone());
            if let Ok(path) = &res {
                info!(path = %path.display(), "submission exported");
            }
            Msg::ExportCompleted(res.map_err(|e| e.to_string()))
        }
        Command::CopyShareLink(url) => {
            match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url.clone()))
            {
                Ok(()) => Msg::ShareCompleted(Ok(format!("Share link copied: {url}"))),
                Err(err) => {
                    warn!(%err, "clipboard unavailable, falling back to status line");
                    Msg::ShareCompleted(Err(format!(
                        "Could not copy to clipboard ({err}); share link: {url}"
                    )))
                }
            }
        }
        Command::OpenShareLink(url) => match open::that(&url) {
            Ok(()) => Msg::ShareCompleted(Ok("Opened share link in browser.".to_string())),
            Err(err) => {
                warn!(%err, "browser launch failed");
                Msg::ShareCompleted(Err(format!(
                    "Could not open a browser ({err}); share link: {url}"
                )))
            }
        },
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Apply an imported draft to the model, re-attaching both controllers.
/// A new draft is a new page lifetime: the row index counter restarts at
/// the imported row count.
fn apply_document(model: &mut AppModel, doc: RecipeDocument) {
    model.title = doc.title;
    model.description = doc.description;
    model.instructions = doc.instructions;
    model.prep_minutes = doc.prep_time_minutes.map(|v| v.to_string()).unwrap_or_default();
    model.cook_minutes = doc.cook_time_minutes.map(|v| v.to_string()).unwrap_or_default();
    model.servings = doc.serving_size.map(|v| v.to_string()).unwrap_or_default();
    model.difficulty = doc
        .difficulty_level
        .as_deref()
        .and_then(Difficulty::parse)
        .unwrap_or_default();
    model.image_url = doc.image_url;
    model.is_public = doc.is_public.unwrap_or(true);
    model.categories = CategoriesModel::from_names(Categories::new(doc.category_names).into_vec());
    model.ingredients = IngredientsModel::attach(doc.ingredients, Some(RowTemplate::default()));
    let hidden = doc.rating.unwrap_or(0).to_string();
    model.rating = RatingModel::attach(RATING_STARS, Some(&hidden), true);
    model.source_url = doc.source_url;
}

/// Validate model state and build the payload required to export a submission.
fn validate_for_export(model: &AppModel, output_path: PathBuf) -> Result<SubmissionPayload, String> {
    let title = model.title.trim().to_string();
    if title.is_empty() {
        return Err("Please enter a title.".into());
    }
    if title.len() > 255 {
        return Err("Title must not exceed 255 characters.".into());
    }

    let description = model.description.trim().to_string();
    if description.is_empty() {
        return Err("Please enter a description.".into());
    }

    let instructions = model.instructions.trim().to_string();
    if instructions.is_empty() {
        return Err("Please enter the instructions.".into());
    }

    let prep_time_minutes = parse_count(&model.prep_minutes, "Preparation time")?;
    if prep_time_minutes < 1 {
        return Err("Preparation time must be at least 1 minute.".into());
    }
    let cook_time_minutes = parse_count(&model.cook_minutes, "Cooking time")?;
    let serving_size = parse_count(&model.servings, "Serving size")?;
    if serving_size < 1 {
        return Err("Serving size must be at least 1.".into());
    }

    let image_url = model.image_url.trim().to_string();
    if !image_url.is_empty() {
        if image_url.len() > 500 {
            return Err("Image URL must not exceed 500 characters.".into());
        }
        let valid = Url::parse(&image_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
            .unwrap_or(false);
        if !valid {
            return Err("Image URL must be a valid http/https URL.".into());
        }
    }

    let category_names = Categories::new(model.categories.categories().to_vec()).into_vec();

    Ok(SubmissionPayload {
        output: output_path,
        title,
        description,
        instructions,
        prep_time_minutes,
        cook_time_minutes,
        serving_size,
        difficulty: model.difficulty,
        image_url,
        is_public: model.is_public,
        category_names,
        ingredient_rows: model.ingredients.rows().to_vec(),
        rating: model.rating.submitted_value().map(str::to_string),
    })
}

fn parse_count(raw: &str, what: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{what} must be a whole non-negative number."))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;
    use crate::models::ingredient::{FieldRole, RowSeed};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn valid_model() -> AppModel {
        let mut model = AppModel::default();
        model.title = "Shakshuka".into();
        model.description = "Eggs in tomato sauce".into();
        model.instructions = "Simmer, crack, cover.".into();
        model.prep_minutes = "10".into();
        model.cook_minutes = "20".into();
        model.servings = "2".into();
        model
    }

    #[test]
    fn export_request_enqueues_and_completes() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("shakshuka.form");

        let mut model = valid_model();
        let mut cmds = Vec::new();
        update(&mut model, Msg::ExportRequested(output.clone()), &mut cmds);

        assert_eq!(cmds.len(), 1, "export should enqueue command");

        let msg = run_command(cmds.pop().unwrap());
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(model.error.is_none());
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("Submission exported"))
                .unwrap_or(false)
        );
        assert!(output.exists());
    }

    #[test]
    fn export_request_with_empty_title_sets_error() {
        let mut model = valid_model();
        model.title = "   ".into();

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::ExportRequested(PathBuf::from("/tmp/ignored.form")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(model.error.is_some());
    }

    #[test]
    fn export_request_with_unparsable_prep_time_sets_error() {
        let mut model = valid_model();
        model.prep_minutes = "soon".into();

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::ExportRequested(PathBuf::from("/tmp/ignored.form")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(
            model
                .error
                .as_deref()
                .map(|e| e.contains("Preparation time"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn export_request_with_invalid_image_url_sets_error() {
        let mut model = valid_model();
        model.image_url = "ftp://example.com/pic.jpg".into();

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::ExportRequested(PathBuf::from("/tmp/ignored.form")),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(
            model
                .error
                .as_deref()
                .map(|e| e.contains("valid http/https URL"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn import_loaded_reattaches_rows_and_rating() {
        let mut model = AppModel::default();
        let doc = RecipeDocument {
            title: "Toast".into(),
            ingredients: Some(vec![RowSeed::default(), RowSeed::default()]),
            rating: Some(4),
            difficulty_level: Some("hard".into()),
            ..Default::default()
        };

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::ImportLoaded {
                doc,
                source: PathBuf::from("toast.json"),
            },
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert_eq!(model.ingredients.indices(), vec![0, 1]);
        assert_eq!(model.ingredients.next_index(), 2);
        assert_eq!(model.rating.submitted_value(), Some("4"));
        assert_eq!(model.difficulty, Difficulty::Hard);

        // Rows added after the import continue past the imported rows.
        update(&mut model, Msg::Ingredients(IngredientsMsg::AddRow), &mut Vec::new());
        assert_eq!(model.ingredients.indices(), vec![0, 1, 2]);
    }

    #[test]
    fn clear_all_goes_through_the_confirm_guard() {
        let mut model = valid_model();
        update(&mut model, Msg::Ingredients(IngredientsMsg::AddRow), &mut Vec::new());
        assert_eq!(model.ingredients.rows().len(), 1);

        update(
            &mut model,
            Msg::Ingredients(IngredientsMsg::ClearRequested),
            &mut Vec::new(),
        );
        assert_eq!(
            model.pending_confirm,
            Some(DestructiveAction::ClearIngredients)
        );
        assert_eq!(model.ingredients.rows().len(), 1, "nothing removed before confirm");

        update(&mut model, Msg::ConfirmDismissed, &mut Vec::new());
        assert_eq!(model.pending_confirm, None);
        assert_eq!(model.ingredients.rows().len(), 1);

        update(
            &mut model,
            Msg::ConfirmRequested(DestructiveAction::ClearIngredients),
            &mut Vec::new(),
        );
        update(&mut model, Msg::ConfirmAccepted, &mut Vec::new());
        assert!(model.ingredients.rows().is_empty());
        assert_eq!(model.ingredients.next_index(), 1, "counter survives clearing");
    }

    #[test]
    fn reset_draft_restores_defaults_after_confirm() {
        let mut model = valid_model();
        model.source_url = Some("https://recipes.example.com/recipes/7".into());

        update(
            &mut model,
            Msg::ConfirmRequested(DestructiveAction::ResetDraft),
            &mut Vec::new(),
        );
        update(&mut model, Msg::ConfirmAccepted, &mut Vec::new());

        assert_eq!(model.title, "");
        assert_eq!(model.source_url, None);
        assert_eq!(model.ingredients.next_index(), 0);
        assert_eq!(model.status.as_deref(), Some("Draft reset."));
    }

    #[test]
    fn share_without_a_source_url_sets_error() {
        let mut model = valid_model();

        let mut cmds = Vec::new();
        update(&mut model, Msg::ShareCopyRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.error.is_some());
    }

    #[test]
    fn share_failure_degrades_to_a_status_line() {
        let mut model = valid_model();

        update(
            &mut model,
            Msg::ShareCompleted(Err(
                "Could not copy to clipboard (no display); share link: https://x".into(),
            )),
            &mut Vec::new(),
        );

        assert!(model.error.is_none(), "fallback must not raise the modal");
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("share link"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn rating_clicks_flow_through_the_kernel() {
        let mut model = AppModel::default();

        update(&mut model, Msg::Rating(RatingMsg::StarClicked(2)), &mut Vec::new());

        assert_eq!(model.rating.submitted_value(), Some("3"));
        assert_eq!(model.rating.label_text(), Some("Good"));
    }

    #[test]
    fn ingredient_edits_flow_through_the_kernel() {
        let mut model = AppModel::default();
        update(&mut model, Msg::Ingredients(IngredientsMsg::AddRow), &mut Vec::new());

        update(
            &mut model,
            Msg::Ingredients(IngredientsMsg::EditField {
                index: 0,
                role: FieldRole::IngredientName,
                value: "Egg".into(),
            }),
            &mut Vec::new(),
        );

        assert_eq!(
            model
                .ingredients
                .row(0)
                .unwrap()
                .field(FieldRole::IngredientName)
                .unwrap()
                .value,
            "Egg"
        );
    }
}
