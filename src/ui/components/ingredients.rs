// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Repeatable ingredient-row editor.
//!
//! Rows carry server-bindable names generated at creation time. The index
//! counter only ever moves forward: removing a row never renumbers the
//! survivors and never frees its index, so a row the user already filled in
//! can never collide with a later one — not even with rows the server
//! rendered before the controller attached.

use eframe::egui;

use crate::models::ingredient::{FieldRole, IngredientRow, RowSeed, RowTemplate};

/// UI state for the ingredient rows, kept free of side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientsModel {
    rows: Vec<IngredientRow>,
    /// Captions and unit options used to render rows.
    chrome: RowTemplate,
    /// Next index to assign; strictly increasing for the page lifetime.
    next_index: usize,
    /// Whether a container was present at attach time.
    attached: bool,
    /// Whether the add trigger was inserted (container and template present).
    can_add: bool,
}

impl Default for IngredientsModel {
    /// Detached model: no container was found, every operation no-ops.
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            chrome: RowTemplate::default(),
            next_index: 0,
            attached: false,
            can_add: false,
        }
    }
}

/// Messages produced by the ingredients view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngredientsMsg {
    AddRow,
    /// Remove the row that was assigned this index at creation.
    RemoveRow {
        index: usize,
    },
    EditField {
        index: usize,
        role: FieldRole,
        value: String,
    },
    /// Routed through the destructive-action guard before it reaches
    /// [`update`] as `ClearRows`.
    ClearRequested,
    ClearRows,
}

/// Feedback surfaced to the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientsEvent {
    pub message: String,
}

impl IngredientsModel {
    /// Bind the controller to its container and template.
    ///
    /// `container` holds the server-rendered rows (indices `0..K-1`, counter
    /// starts at `K`); `None` means the page has no ingredient section and
    /// the model stays inert. A missing `template` only disables adding —
    /// the server's rows remain editable and removable.
    pub fn attach(container: Option<Vec<RowSeed>>, template: Option<RowTemplate>) -> Self {
        let Some(seeds) = container else {
            return Self::default();
        };

        let can_add = template.is_some();
        let chrome = template.unwrap_or_default();
        let rows: Vec<IngredientRow> = seeds
            .iter()
            .enumerate()
            .map(|(index, seed)| IngredientRow::from_template(&chrome, index, Some(seed)))
            .collect();

        Self {
            next_index: rows.len(),
            rows,
            chrome,
            attached: true,
            can_add,
        }
    }

    pub fn rows(&self) -> &[IngredientRow] {
        &self.rows
    }

    /// Assigned indices of the surviving rows, in container order.
    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.index()).collect()
    }

    pub fn row(&self, index: usize) -> Option<&IngredientRow> {
        self.rows.iter().find(|row| row.index() == index)
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn can_add(&self) -> bool {
        self.can_add
    }

    fn add_row(&mut self) {
        if !self.can_add {
            return;
        }
        self.rows
            .push(IngredientRow::from_template(&self.chrome, self.next_index, None));
        self.next_index += 1;
    }

    fn remove_row(&mut self, index: usize) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.index() != index);
        self.rows.len() != before
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(model: &mut IngredientsModel, msg: IngredientsMsg) -> Option<IngredientsEvent> {
    match msg {
        IngredientsMsg::AddRow => {
            model.add_row();
            None
        }
        IngredientsMsg::RemoveRow { index } => {
            if model.remove_row(index) {
                return Some(IngredientsEvent {
                    message: "Ingredient row removed.".to_string(),
                });
            }
            None
        }
        IngredientsMsg::EditField { index, role, value } => {
            if let Some(row) = model.rows.iter_mut().find(|row| row.index() == index)
                && let Some(field) = row.field_mut(role)
            {
                field.value = value;
            }
            None
        }
        // Intercepted by the confirm guard; reaching here means no-op.
        IngredientsMsg::ClearRequested => None,
        IngredientsMsg::ClearRows => {
            if model.rows.is_empty() {
                return None;
            }
            // Bulk removal: the counter stays put, indices are never freed.
            model.rows.clear();
            Some(IngredientsEvent {
                message: "All ingredient rows removed.".to_string(),
            })
        }
    }
}

/// Render the rows, help annotation, and add trigger, returning triggered messages.
pub fn view(ui: &mut egui::Ui, model: &IngredientsModel) -> Vec<IngredientsMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Ingredients")
        .default_open(true)
        .show(ui, |ui| {
            if !model.is_attached() {
                ui.label(
                    egui::RichText::new("This draft has no ingredient section.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
                return;
            }

            if model.rows().is_empty() {
                ui.label(
                    egui::RichText::new("No ingredients yet.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
            }

            for row in model.rows() {
                render_row(ui, row, &model.chrome, &mut msgs);
                ui.add_space(6.0);
            }

            // The help annotation sits between the rows and the add trigger,
            // matching the page layout.
            if let Some(help) = &model.chrome.help_text {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(help)
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
            }

            if model.can_add() {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(format!(
                            "{} {}",
                            egui_phosphor::regular::PLUS,
                            model.chrome.add_label
                        )))
                        .clicked()
                    {
                        msgs.push(IngredientsMsg::AddRow);
                    }

                    if !model.rows().is_empty()
                        && ui
                            .button(format!("{} Clear all", egui_phosphor::regular::TRASH_SIMPLE))
                            .clicked()
                    {
                        msgs.push(IngredientsMsg::ClearRequested);
                    }
                });
            }
        });

    msgs
}

fn render_row(
    ui: &mut egui::Ui,
    row: &IngredientRow,
    chrome: &RowTemplate,
    msgs: &mut Vec<IngredientsMsg>,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            for (pos, field) in row.fields().iter().enumerate() {
                ui.vertical(|ui| {
                    let caption = row
                        .label_for(pos)
                        .map(|label| label.text.as_str())
                        .unwrap_or(field.role().as_str());
                    ui.label(
                        egui::RichText::new(caption)
                            .small()
                            .color(egui::Color32::from_gray(140)),
                    );

                    match field.role() {
                        FieldRole::Unit => {
                            let mut current = field.value.clone();
                            egui::ComboBox::from_id_salt(field.id())
                                .width(90.0)
                                .selected_text(if current.is_empty() {
                                    "Unit"
                                } else {
                                    &current
                                })
                                .show_ui(ui, |ui| {
                                    for unit in &chrome.unit_options {
                                        if ui
                                            .selectable_value(&mut current, unit.clone(), unit)
                                            .clicked()
                                        {
                                            msgs.push(IngredientsMsg::EditField {
                                                index: row.index(),
                                                role: field.role(),
                                                value: unit.clone(),
                                            });
                                        }
                                    }
                                });
                        }
                        role => {
                            let width = match role {
                                FieldRole::Quantity => 70.0,
                                _ => 150.0,
                            };
                            let mut value = field.value.clone();
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut value)
                                        .desired_width(width)
                                        .hint_text(field_hint(role)),
                                )
                                .changed()
                            {
                                msgs.push(IngredientsMsg::EditField {
                                    index: row.index(),
                                    role,
                                    value,
                                });
                            }
                        }
                    }
                });
            }

            if ui
                .button(
                    egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                        .color(egui::Color32::from_gray(140)),
                )
                .on_hover_text("Remove ingredient")
                .clicked()
            {
                msgs.push(IngredientsMsg::RemoveRow { index: row.index() });
            }
        });
    });
}

fn field_hint(role: FieldRole) -> &'static str {
    match role {
        FieldRole::IngredientName => "e.g. Tomato",
        FieldRole::Quantity => "1/2",
        FieldRole::Notes => "finely chopped",
        FieldRole::Unit => "",
    }
}
