// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Category chips editor for the recipe form.

use eframe::egui;

/// UI model for category names, kept free of side effects.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CategoriesModel {
    categories: Vec<String>,
    modal_open: bool,
    modal_input: String,
    editing_index: Option<usize>,
    editing_buffer: String,
}

/// Messages emitted by the categories view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoriesMsg {
    OpenModal,
    CloseModal,
    ModalInputChanged(String),
    AddFromModal,
    StartEdit(usize),
    EditInputChanged(String),
    CommitEdit,
    CancelEdit,
    Remove(usize),
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoriesEvent {
    pub message: String,
    pub is_error: bool,
}

impl CategoriesModel {
    /// Current category names as a slice.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Build a model holding these names, e.g. when importing a draft.
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            categories: names,
            ..Default::default()
        }
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(model: &mut CategoriesModel, msg: CategoriesMsg) -> Option<CategoriesEvent> {
    match msg {
        CategoriesMsg::OpenModal => {
            model.modal_open = true;
            model.modal_input.clear();
            None
        }
        CategoriesMsg::CloseModal => {
            model.modal_open = false;
            model.modal_input.clear();
            None
        }
        CategoriesMsg::ModalInputChanged(text) => {
            model.modal_input = text;
            None
        }
        CategoriesMsg::AddFromModal => {
            let (message, added_any) = process_modal_input(model);
            if added_any {
                model.modal_open = false;
                model.modal_input.clear();
            }
            Some(CategoriesEvent {
                message,
                is_error: false,
            })
        }
        CategoriesMsg::StartEdit(index) => {
            model.editing_index = Some(index);
            model.editing_buffer = model.categories.get(index).cloned().unwrap_or_default();
            None
        }
        CategoriesMsg::EditInputChanged(text) => {
            model.editing_buffer = text;
            None
        }
        CategoriesMsg::CommitEdit => commit_edit(model),
        CategoriesMsg::CancelEdit => {
            model.editing_index = None;
            model.editing_buffer.clear();
            None
        }
        CategoriesMsg::Remove(index) => {
            if index < model.categories.len() {
                model.categories.remove(index);
                if model.editing_index == Some(index) {
                    model.editing_index = None;
                    model.editing_buffer.clear();
                }
                return Some(CategoriesEvent {
                    message: "Category removed".to_string(),
                    is_error: false,
                });
            }
            None
        }
    }
}

/// Render the categories UI and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, ctx: &egui::Context, model: &CategoriesModel) -> Vec<CategoriesMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Categories")
        .default_open(true)
        .show(ui, |ui| {
            if ui
                .add(egui::Button::new(format!(
                    "{} Add categories",
                    egui_phosphor::regular::PLUS
                )))
                .clicked()
            {
                msgs.push(CategoriesMsg::OpenModal);
            }

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Tip: paste comma-separated names; duplicates are skipped.")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );

            ui.add_space(8.0);
            render_chips(ui, model, &mut msgs);
        });

    if model.modal_open {
        render_modal(ctx, model, &mut msgs);
    }

    msgs
}

/// Render category chips in a wrapping row, wiring chip actions into messages.
fn render_chips(ui: &mut egui::Ui, model: &CategoriesModel, msgs: &mut Vec<CategoriesMsg>) {
    if model.categories.is_empty() {
        ui.label(
            egui::RichText::new("No categories yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for (i, name) in model.categories.iter().enumerate() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if model.editing_index == Some(i) {
                        render_editing_chip(ui, model, msgs);
                    } else {
                        render_chip(ui, i, name, msgs);
                    }
                });
            });
        }
    });
}

fn render_chip(ui: &mut egui::Ui, index: usize, name: &str, msgs: &mut Vec<CategoriesMsg>) {
    if ui.add(egui::Button::new(name).wrap()).clicked() {
        msgs.push(CategoriesMsg::StartEdit(index));
    }

    if ui
        .button(
            egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                .color(egui::Color32::from_gray(140)),
        )
        .on_hover_text("Remove category")
        .clicked()
    {
        msgs.push(CategoriesMsg::Remove(index));
    }
}

fn render_editing_chip(ui: &mut egui::Ui, model: &CategoriesModel, msgs: &mut Vec<CategoriesMsg>) {
    let mut buffer = model.editing_buffer.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text("Edit category")
            .desired_width(140.0),
    );

    if response.changed() {
        msgs.push(CategoriesMsg::EditInputChanged(buffer.clone()));
    }

    if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(CategoriesMsg::CommitEdit);
        return;
    }

    if ui
        .button(egui_phosphor::regular::CHECK)
        .on_hover_text("Save")
        .clicked()
    {
        msgs.push(CategoriesMsg::CommitEdit);
    }

    if ui
        .button(egui_phosphor::regular::X)
        .on_hover_text("Cancel")
        .clicked()
    {
        msgs.push(CategoriesMsg::CancelEdit);
    }
}

/// Show the add-categories modal window when requested.
fn render_modal(ctx: &egui::Context, model: &CategoriesModel, msgs: &mut Vec<CategoriesMsg>) {
    let mut input = model.modal_input.clone();

    egui::Window::new("Add categories")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Category name(s)");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut input).hint_text("e.g., Dinner or Dinner, Vegan"),
            );

            if resp.changed() {
                msgs.push(CategoriesMsg::ModalInputChanged(input.clone()));
            }

            if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                msgs.push(CategoriesMsg::AddFromModal);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    msgs.push(CategoriesMsg::AddFromModal);
                }

                if ui.button("Cancel").clicked() {
                    msgs.push(CategoriesMsg::CloseModal);
                }
            });
        });
}

/// Split modal input on commas, add unique names, and return a status message plus added flag.
fn process_modal_input(model: &mut CategoriesModel) -> (String, bool) {
    let mut added_count = 0usize;
    let mut dup_count = 0usize;
    let mut empty_count = 0usize;

    for part in model.modal_input.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            empty_count += 1;
            continue;
        }

        let exists = model
            .categories
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(trimmed));
        if exists {
            dup_count += 1;
            continue;
        }

        model.categories.push(trimmed.to_string());
        added_count += 1;
    }

    let mut skipped_parts = Vec::new();
    if dup_count > 0 {
        skipped_parts.push(format!("{dup_count} duplicate(s)"));
    }
    if empty_count > 0 {
        skipped_parts.push(format!("{empty_count} empty entry/entries"));
    }

    let message = match (added_count, skipped_parts.is_empty()) {
        (a, false) if a > 0 => {
            format!("Added {a} category(ies); skipped {}.", skipped_parts.join(" and "))
        }
        (a, true) if a > 0 => format!("Added {a} category(ies)."),
        (_, _) => "No categories added; skipped duplicates or empty entries.".to_string(),
    };

    (message, added_count > 0)
}

/// Validate and commit an inline category edit, returning a feedback event on error.
fn commit_edit(model: &mut CategoriesModel) -> Option<CategoriesEvent> {
    let index = model.editing_index?;
    let new_name = model.editing_buffer.trim();
    if new_name.is_empty() {
        return Some(CategoriesEvent {
            message: "Category name cannot be empty.".into(),
            is_error: true,
        });
    }

    let duplicate = model
        .categories
        .iter()
        .enumerate()
        .any(|(i, existing)| i != index && existing.eq_ignore_ascii_case(new_name));
    if duplicate {
        return Some(CategoriesEvent {
            message: "Category already exists.".into(),
            is_error: true,
        });
    }

    if let Some(slot) = model.categories.get_mut(index) {
        *slot = new_name.to_string();
    }
    model.editing_index = None;
    model.editing_buffer.clear();

    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;

    #[test]
    fn add_from_modal_adds_and_flags_duplicates() {
        let mut model = CategoriesModel::default();
        model.modal_open = true;
        model.modal_input = "Dinner, dinner, , Vegan".into();

        let event = update(&mut model, CategoriesMsg::AddFromModal).expect("event expected");

        assert_eq!(model.categories, vec!["Dinner", "Vegan"]);
        assert!(!event.is_error);
        assert!(!model.modal_open);
    }

    #[test]
    fn commit_edit_rejects_duplicates() {
        let mut model = CategoriesModel {
            categories: vec!["Dinner".into(), "Vegan".into()],
            modal_open: false,
            modal_input: String::new(),
            editing_index: Some(0),
            editing_buffer: "vegan".into(),
        };

        let event = commit_edit(&mut model).expect("should return error event");

        assert!(event.is_error);
        assert_eq!(event.message, "Category already exists.");
        assert_eq!(model.categories, vec!["Dinner", "Vegan"]);
    }

    #[test]
    fn remove_category_updates_model() {
        let mut model = CategoriesModel {
            categories: vec!["Dinner".into(), "Vegan".into()],
            ..Default::default()
        };

        let event = update(&mut model, CategoriesMsg::Remove(0)).expect("event expected");

        assert_eq!(model.categories, vec!["Vegan"]);
        assert_eq!(event.message, "Category removed");
    }
}
