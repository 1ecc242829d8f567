// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for composing a recipe draft.
//! Handles layout, form controls, and wiring to submission export.

pub mod components;

use eframe::egui;

use crate::logic::submission::{Difficulty, SUBMISSION_EXTENSION, ensure_extension, suggested_submission_name};
use crate::mvu::{self, AppModel, Command, DestructiveAction, Msg};
use crate::ui::components::{categories, ingredients, rating};

/// Stateful egui application for building and exporting recipe drafts.
pub struct RecipePadApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for RecipePadApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for RecipePadApp {
    /// Required entry point for this eframe version; delegates to the
    /// context-based frame driver below.
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        #[allow(deprecated)]
        self.update(ui.ctx(), frame);
    }

    /// Drives a single UI frame: drains worker messages, applies the MVU
    /// update loop, and renders the top bar, modals, status, and form body.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Recipe Draft");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_export_button(ui);
                    ui.separator();
                    self.render_share_buttons(ui);
                    ui.separator();
                    self.render_draft_buttons(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_confirm_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_title_input(ui);
                ui.add_space(12.0);

                self.render_meta_group(ui);
                ui.add_space(12.0);

                self.render_description_input(ui);
                ui.add_space(12.0);

                self.render_instructions_input(ui);
                ui.add_space(12.0);

                let cat_msgs = categories::view(ui, ctx, &self.model.categories);
                self.inbox.extend(cat_msgs.into_iter().map(Msg::Categories));
                ui.add_space(12.0);

                let ing_msgs = ingredients::view(ui, &self.model.ingredients);
                self.inbox.extend(ing_msgs.into_iter().map(Msg::Ingredients));
                ui.add_space(12.0);

                self.render_rating_section(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl RecipePadApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the export button and handle the save-file dialog interaction.
    ///
    /// The button is enabled only when the title is non-empty; full
    /// validation runs in the update path and surfaces through the modal.
    fn render_export_button(&mut self, ui: &mut egui::Ui) {
        let export_enabled = !self.model.title.trim().is_empty();
        let button = egui::Button::new(format!(
            "{} Export submission",
            egui_phosphor::regular::EXPORT
        ));

        if ui
            .add_enabled(export_enabled, button)
            .on_disabled_hover_text("Please enter a title first")
            .clicked()
        {
            let default_name = suggested_submission_name(&self.model.title);
            let dialog = rfd::FileDialog::new()
                .set_title("Export form submission")
                .add_filter("Form submission", &[SUBMISSION_EXTENSION])
                .set_file_name(&default_name);

            if let Some(path) = dialog.save_file() {
                let output_path = ensure_extension(path, SUBMISSION_EXTENSION);
                self.inbox.push(Msg::ExportRequested(output_path));
            } else {
                self.inbox.push(Msg::ExportCancelled);
            }
        }
    }

    /// Copy/open buttons for the imported draft's page URL.
    fn render_share_buttons(&mut self, ui: &mut egui::Ui) {
        let has_link = self.model.source_url.is_some();

        if ui
            .add_enabled(
                has_link,
                egui::Button::new(format!("{} Copy link", egui_phosphor::regular::LINK_SIMPLE)),
            )
            .on_disabled_hover_text("Import a draft with a page URL to share it")
            .clicked()
        {
            self.inbox.push(Msg::ShareCopyRequested);
        }

        if ui
            .add_enabled(
                has_link,
                egui::Button::new(egui_phosphor::regular::ARROW_SQUARE_OUT),
            )
            .on_hover_text("Open in browser")
            .clicked()
        {
            self.inbox.push(Msg::ShareOpenRequested);
        }
    }

    /// Open-draft and reset-draft triggers.
    fn render_draft_buttons(&mut self, ui: &mut egui::Ui) {
        if ui
            .add(egui::Button::new(format!(
                "{} Open draft",
                egui_phosphor::regular::FOLDER_OPEN
            )))
            .clicked()
        {
            self.inbox.push(Msg::ImportRequested);
        }

        if ui
            .button(format!(
                "{} Reset",
                egui_phosphor::regular::ARROWS_COUNTER_CLOCKWISE
            ))
            .on_hover_text("Discard the draft and start over")
            .clicked()
        {
            self.inbox.push(Msg::ConfirmRequested(DestructiveAction::ResetDraft));
        }
    }

    /// Render the recipe title field.
    fn render_title_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Title");
        ui.add_space(4.0);
        let mut title = self.model.title.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut title).hint_text("e.g., One-pan shakshuka"))
            .changed()
        {
            self.inbox.push(Msg::TitleChanged(title));
        }
    }

    /// Grouped metadata block with times, servings, difficulty, and visibility.
    fn render_meta_group(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("meta_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 10.0))
                .min_col_width(140.0)
                .show(ui, |ui| {
                    ui.label("Prep time (min)");
                    self.render_count_input(ui, CountField::Prep);
                    ui.end_row();

                    ui.label("Cook time (min)");
                    self.render_count_input(ui, CountField::Cook);
                    ui.end_row();

                    ui.label("Servings");
                    self.render_count_input(ui, CountField::Servings);
                    ui.end_row();

                    ui.label("Difficulty");
                    self.render_difficulty(ui);
                    ui.end_row();

                    ui.label("Image URL");
                    self.render_image_url_input(ui);
                    ui.end_row();

                    ui.label("Visibility");
                    self.render_visibility(ui);
                    ui.end_row();
                });
        });
    }

    fn render_count_input(&mut self, ui: &mut egui::Ui, which: CountField) {
        let current = match which {
            CountField::Prep => &self.model.prep_minutes,
            CountField::Cook => &self.model.cook_minutes,
            CountField::Servings => &self.model.servings,
        };
        let mut value = current.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut value).desired_width(70.0))
            .changed()
        {
            self.inbox.push(match which {
                CountField::Prep => Msg::PrepMinutesChanged(value),
                CountField::Cook => Msg::CookMinutesChanged(value),
                CountField::Servings => Msg::ServingsChanged(value),
            });
        }
    }

    /// Render segmented controls to choose the recipe's difficulty level.
    fn render_difficulty(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for level in Difficulty::ALL {
                let button =
                    egui::Button::new(level.caption()).selected(self.model.difficulty == level);
                if ui.add(button).clicked() {
                    self.inbox.push(Msg::SetDifficulty(level));
                }
            }
        });
    }

    fn render_image_url_input(&mut self, ui: &mut egui::Ui) {
        let mut url = self.model.image_url.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut url)
                    .hint_text("https://example.com/photo.jpg")
                    .desired_width(320.0),
            )
            .changed()
        {
            self.inbox.push(Msg::ImageUrlChanged(url));
        }
    }

    fn render_visibility(&mut self, ui: &mut egui::Ui) {
        let mut public = self.model.is_public;
        if ui.checkbox(&mut public, "Public recipe").changed() {
            self.inbox.push(Msg::SetPublic(public));
        }
    }

    /// Render the short description field.
    fn render_description_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Description");
        ui.add_space(4.0);
        let mut description = self.model.description.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut description)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY)
                    .hint_text("What makes this recipe worth cooking?"),
            )
            .changed()
        {
            self.inbox.push(Msg::DescriptionChanged(description));
        }
    }

    /// Render the step-by-step instructions field.
    fn render_instructions_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Instructions");
        ui.label(
            egui::RichText::new("One step per line works best.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
        let mut instructions = self.model.instructions.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut instructions)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::InstructionsChanged(instructions));
        }
    }

    /// Renders the rating section and forwards widget messages into the inbox.
    fn render_rating_section(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Your rating")
            .default_open(true)
            .show(ui, |ui| {
                let msgs = rating::view(ui, &self.model.rating);
                self.inbox.extend(msgs.into_iter().map(Msg::Rating));
            });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Validation error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render the confirmation modal guarding destructive actions.
    fn render_confirm_modal(&mut self, ctx: &egui::Context) {
        if let Some(action) = self.model.pending_confirm {
            egui::Window::new("Please confirm")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(action.prompt());
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            self.inbox.push(Msg::ConfirmAccepted);
                        }
                        if ui.button("Cancel").clicked() {
                            self.inbox.push(Msg::ConfirmDismissed);
                        }
                    });
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} task(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}

enum CountField {
    Prep,
    Cook,
    Servings,
}
