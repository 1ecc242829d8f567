// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Recipe draft documents exported by the recipe server.
//! Parsing is kept pure so it can be reused by the UI and the tests;
//! the command runner handles file dialogs and disk reads.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::ingredient::RowSeed;

/// A server-exported recipe draft. Everything except the title is optional:
/// the importer degrades section by section, the way the page enhancement
/// degrades when a container or hidden field is missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub serving_size: Option<u32>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub category_names: Vec<String>,
    /// Server-rendered ingredient rows. `None` means the draft has no
    /// ingredients container at all, not an empty one.
    #[serde(default)]
    pub ingredients: Option<Vec<RowSeed>>,
    /// Initial value of the rating's hidden field.
    #[serde(default)]
    pub rating: Option<u8>,
    /// Page URL of the recipe, used by the share actions.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Parse a draft document from its JSON text.
pub fn parse_recipe_document(content: &str) -> Result<RecipeDocument> {
    let doc: RecipeDocument =
        serde_json::from_str(content).context("Draft is not a valid recipe document")?;
    Ok(doc)
}
