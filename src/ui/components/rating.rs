// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Star-rating widget bound to a hidden numeric form value.
//!
//! The committed rating is held redundantly: the hidden field's string value
//! is the submission source of truth, the per-star fill states drive the
//! visuals, and the label text is derived from the fixed lookup table. The
//! update path keeps the three in lockstep.

use eframe::egui;

use crate::models::rating::rating_label;
use crate::ui::components::star_button;

/// UI state for the rating widget, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingModel {
    /// One fill flag per star; empty means the widget is absent.
    filled: Vec<bool>,
    /// Hidden field value; `None` when the page carries no hidden field.
    hidden_value: Option<String>,
    /// Whether the page carries a label element for the caption.
    has_label: bool,
}

/// Messages emitted by the rating view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingMsg {
    /// Star at this 0-based position was clicked.
    StarClicked(usize),
}

impl RatingModel {
    /// Bind the widget to its star row, hidden field, and label.
    ///
    /// `stars == 0` yields an inert model: every operation no-ops and
    /// nothing is submitted. The initial rating is read from the hidden
    /// field's current value; absent, unparsable, or out-of-range values
    /// fall back to 0 (the pre-interaction default).
    pub fn attach(stars: usize, hidden_value: Option<&str>, has_label: bool) -> Self {
        if stars == 0 {
            return Self::default();
        }

        let initial = hidden_value
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value <= stars)
            .unwrap_or(0);

        Self {
            filled: (0..stars).map(|pos| pos < initial).collect(),
            hidden_value: hidden_value.map(|_| initial.to_string()),
            has_label,
        }
    }

    /// Commit a rating in `[1, stars]`; anything else is ignored.
    ///
    /// Selecting the same rating twice is observably identical to selecting
    /// it once. There is no way back to 0 once a rating is committed.
    pub fn select(&mut self, rating: usize) {
        if rating == 0 || rating > self.filled.len() {
            return;
        }

        for (pos, fill) in self.filled.iter_mut().enumerate() {
            *fill = pos < rating;
        }
        if let Some(hidden) = &mut self.hidden_value {
            *hidden = rating.to_string();
        }
    }

    /// Whether the widget was attached to any stars.
    pub fn is_active(&self) -> bool {
        !self.filled.is_empty()
    }

    pub fn star_count(&self) -> usize {
        self.filled.len()
    }

    /// Committed rating as shown by the stars.
    pub fn value(&self) -> u8 {
        self.filled.iter().filter(|fill| **fill).count() as u8
    }

    pub fn is_filled(&self, pos: usize) -> bool {
        self.filled.get(pos).copied().unwrap_or(false)
    }

    /// Hidden field value to submit; `None` when no hidden field is attached.
    pub fn submitted_value(&self) -> Option<&str> {
        self.hidden_value.as_deref()
    }

    /// Caption for the label element, when one is attached and a rating is set.
    pub fn label_text(&self) -> Option<&'static str> {
        if !self.has_label {
            return None;
        }
        rating_label(self.value())
    }
}

/// Apply a message to the model.
pub fn update(model: &mut RatingModel, msg: RatingMsg) {
    match msg {
        RatingMsg::StarClicked(pos) => model.select(pos + 1),
    }
}

/// Render the star row and caption, returning triggered messages.
pub fn view(ui: &mut egui::Ui, model: &RatingModel) -> Vec<RatingMsg> {
    let mut msgs = Vec::new();

    if !model.is_active() {
        return msgs;
    }

    ui.horizontal(|ui| {
        for pos in 0..model.star_count() {
            let response = star_button(ui, model.is_filled(pos))
                .on_hover_text(format!("Rate {} of {}", pos + 1, model.star_count()));
            if response.clicked() {
                msgs.push(RatingMsg::StarClicked(pos));
            }
        }

        if let Some(caption) = model.label_text() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(caption).color(egui::Color32::from_gray(110)));
        }
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_third_star_commits_three() {
        let mut model = RatingModel::attach(5, Some("0"), true);

        update(&mut model, RatingMsg::StarClicked(2));

        assert_eq!(model.submitted_value(), Some("3"));
        assert_eq!(model.label_text(), Some("Good"));
        let fills: Vec<bool> = (0..5).map(|p| model.is_filled(p)).collect();
        assert_eq!(fills, vec![true, true, true, false, false]);
    }

    #[test]
    fn select_is_idempotent() {
        let mut model = RatingModel::attach(5, Some("0"), true);

        model.select(4);
        let once = model.clone();
        model.select(4);

        assert_eq!(model, once);
        assert_eq!(model.submitted_value(), Some("4"));
    }

    #[test]
    fn attach_with_no_stars_is_inert() {
        let mut model = RatingModel::attach(0, Some("3"), true);

        assert!(!model.is_active());
        model.select(1);
        assert_eq!(model.value(), 0);
        assert_eq!(model.submitted_value(), None);
        assert_eq!(model.label_text(), None);
    }

    #[test]
    fn attach_reads_the_hidden_fields_current_value() {
        let model = RatingModel::attach(5, Some("4"), true);

        assert_eq!(model.value(), 4);
        assert_eq!(model.submitted_value(), Some("4"));
        assert_eq!(model.label_text(), Some("Very Good"));
    }

    #[test]
    fn attach_treats_garbage_and_out_of_range_values_as_unset() {
        assert_eq!(RatingModel::attach(5, Some("nope"), false).value(), 0);
        assert_eq!(RatingModel::attach(5, Some("9"), false).value(), 0);
        assert_eq!(RatingModel::attach(5, None, false).value(), 0);
    }

    #[test]
    fn out_of_range_selections_are_ignored() {
        let mut model = RatingModel::attach(5, Some("2"), true);

        model.select(0);
        model.select(6);

        assert_eq!(model.value(), 2);
        assert_eq!(model.submitted_value(), Some("2"));
    }

    #[test]
    fn missing_hidden_field_still_tracks_visual_state() {
        let mut model = RatingModel::attach(5, None, true);

        update(&mut model, RatingMsg::StarClicked(4));

        assert_eq!(model.value(), 5);
        assert_eq!(model.label_text(), Some("Excellent"));
        assert_eq!(model.submitted_value(), None);
    }

    #[test]
    fn missing_label_element_produces_no_caption() {
        let mut model = RatingModel::attach(5, Some("0"), false);

        model.select(3);

        assert_eq!(model.label_text(), None);
        assert_eq!(model.submitted_value(), Some("3"));
    }
}
