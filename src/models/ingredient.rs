// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Ingredient row domain types and the server form-binding naming contract.
//! Kept pure so the UI controller and the submission builder share one
//! source of truth for generated names and ids.

use serde::Deserialize;

/// Collection prefix the server's form binder reconstructs an ordered
/// ingredient list from. Must match the server template byte for byte.
pub const COLLECTION_NAME: &str = "recipeIngredients";

/// Semantic role of one field inside an ingredient row, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    IngredientName,
    Quantity,
    Unit,
    Notes,
}

/// Fixed field order inside a row; label binding is positional against this.
pub const ROLE_ORDER: [FieldRole; 4] = [
    FieldRole::IngredientName,
    FieldRole::Quantity,
    FieldRole::Unit,
    FieldRole::Notes,
];

impl FieldRole {
    /// Wire token used in both generated names and ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IngredientName => "ingredientName",
            Self::Quantity => "quantity",
            Self::Unit => "unit",
            Self::Notes => "notes",
        }
    }
}

/// Generated form-binding name for a row field: `recipeIngredients[<i>].<role>`.
pub fn binding_name(index: usize, role: FieldRole) -> String {
    format!("{}[{}].{}", COLLECTION_NAME, index, role.as_str())
}

/// Generated element id for a row field: `<role><i>`.
pub fn field_id(index: usize, role: FieldRole) -> String {
    format!("{}{}", role.as_str(), index)
}

/// One form field inside a row, carrying its generated name/id and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundField {
    role: FieldRole,
    name: String,
    id: String,
    pub value: String,
}

impl BoundField {
    pub fn role(&self) -> FieldRole {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Label caption plus its `for` reference to a field id. A label past the
/// end of the field list stays unbound rather than mis-binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLabel {
    pub text: String,
    pub for_id: Option<String>,
}

/// Structured template descriptor for new rows. Named slots replace the
/// original page's positional DOM queries, so a malformed template cannot
/// silently bind one field's name to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowTemplate {
    /// Label captions in field order; surplus captions stay unbound.
    pub labels: Vec<String>,
    /// Options offered by the unit selector.
    pub unit_options: Vec<String>,
    /// Caption of the add trigger inserted after the container.
    pub add_label: String,
    /// Help annotation rendered between the rows and the add trigger.
    pub help_text: Option<String>,
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self {
            labels: vec![
                "Ingredient".to_string(),
                "Quantity".to_string(),
                "Unit".to_string(),
                "Notes".to_string(),
            ],
            unit_options: [
                "cup", "tbsp", "tsp", "piece", "g", "kg", "ml", "l", "pinch",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            add_label: "Add ingredient".to_string(),
            help_text: Some(
                "Quantities like \"1/2\" or \"3.5\" are fine; notes are optional.".to_string(),
            ),
        }
    }
}

/// Values of one server-rendered row, as found in an imported draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowSeed {
    pub ingredient_name: String,
    pub quantity: String,
    pub unit: String,
    pub notes: String,
}

impl RowSeed {
    fn value_for(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::IngredientName => &self.ingredient_name,
            FieldRole::Quantity => &self.quantity,
            FieldRole::Unit => &self.unit,
            FieldRole::Notes => &self.notes,
        }
    }
}

/// One repeatable field group with its assigned index, bound fields, and
/// positionally bound labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientRow {
    index: usize,
    fields: Vec<BoundField>,
    labels: Vec<RowLabel>,
}

impl IngredientRow {
    /// Structural clone of the template into a fresh row. Names and ids are
    /// generated from `index`; labels bind first label → first field.
    pub fn from_template(template: &RowTemplate, index: usize, seed: Option<&RowSeed>) -> Self {
        let fields = ROLE_ORDER
            .iter()
            .map(|&role| BoundField {
                role,
                name: binding_name(index, role),
                id: field_id(index, role),
                value: seed.map(|s| s.value_for(role).to_string()).unwrap_or_default(),
            })
            .collect();

        let labels = template
            .labels
            .iter()
            .enumerate()
            .map(|(pos, text)| RowLabel {
                text: text.clone(),
                for_id: ROLE_ORDER.get(pos).map(|&role| field_id(index, role)),
            })
            .collect();

        Self {
            index,
            fields,
            labels,
        }
    }

    /// Index assigned at creation time; never changes afterwards.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    pub fn labels(&self) -> &[RowLabel] {
        &self.labels
    }

    pub fn field(&self, role: FieldRole) -> Option<&BoundField> {
        self.fields.iter().find(|f| f.role == role)
    }

    pub fn field_mut(&mut self, role: FieldRole) -> Option<&mut BoundField> {
        self.fields.iter_mut().find(|f| f.role == role)
    }

    /// Label caption for a field position, used by the row renderer.
    pub fn label_for(&self, pos: usize) -> Option<&RowLabel> {
        self.labels.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_name_and_id_follow_server_contract() {
        assert_eq!(
            binding_name(2, FieldRole::IngredientName),
            "recipeIngredients[2].ingredientName"
        );
        assert_eq!(binding_name(0, FieldRole::Quantity), "recipeIngredients[0].quantity");
        assert_eq!(binding_name(11, FieldRole::Unit), "recipeIngredients[11].unit");
        assert_eq!(field_id(2, FieldRole::Notes), "notes2");
        assert_eq!(field_id(0, FieldRole::IngredientName), "ingredientName0");
    }

    #[test]
    fn from_template_binds_labels_positionally() {
        let row = IngredientRow::from_template(&RowTemplate::default(), 3, None);

        let expected: Vec<Option<String>> = vec![
            Some("ingredientName3".into()),
            Some("quantity3".into()),
            Some("unit3".into()),
            Some("notes3".into()),
        ];
        let bound: Vec<Option<String>> =
            row.labels().iter().map(|l| l.for_id.clone()).collect();
        assert_eq!(bound, expected);
    }

    #[test]
    fn surplus_template_labels_stay_unbound() {
        let mut template = RowTemplate::default();
        template.labels.push("Stray".to_string());

        let row = IngredientRow::from_template(&template, 0, None);

        assert_eq!(row.labels().len(), 5);
        assert_eq!(row.labels()[4].text, "Stray");
        assert_eq!(row.labels()[4].for_id, None);
    }

    #[test]
    fn from_template_is_a_structural_clone() {
        let template = RowTemplate::default();
        let mut row = IngredientRow::from_template(&template, 0, None);

        row.field_mut(FieldRole::Quantity).unwrap().value = "2".into();
        let sibling = IngredientRow::from_template(&template, 1, None);

        assert_eq!(sibling.field(FieldRole::Quantity).unwrap().value, "");
        assert_eq!(template, RowTemplate::default());
    }

    #[test]
    fn seed_values_land_on_matching_roles() {
        let seed = RowSeed {
            ingredient_name: "Tomato".into(),
            quantity: "1/2".into(),
            unit: "cup".into(),
            notes: "diced".into(),
        };

        let row = IngredientRow::from_template(&RowTemplate::default(), 0, Some(&seed));

        assert_eq!(row.field(FieldRole::IngredientName).unwrap().value, "Tomato");
        assert_eq!(row.field(FieldRole::Quantity).unwrap().value, "1/2");
        assert_eq!(row.field(FieldRole::Unit).unwrap().value, "cup");
        assert_eq!(row.field(FieldRole::Notes).unwrap().value, "diced");
    }
}
