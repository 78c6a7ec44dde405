//! The recipe draft edited by the new-recipe form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::normalize_tag;
use crate::error::{CoreError, Result};
use crate::field::Field;

/// One line of the ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,

    /// Free-form quantity ("2 xícaras", "200 g").
    pub quantity: String,
}

impl Ingredient {
    /// Create a new ingredient line.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// A file selected for the recipe photo but not uploaded anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedImage {
    /// Original file name.
    pub file_name: String,

    /// MIME type reported by the browser.
    pub mime_type: String,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Object URL referencing the file, usable as an `<img>` source.
    pub object_url: String,
}

impl StagedImage {
    /// Create a new staged image handle.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        object_url: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            object_url: object_url.into(),
        }
    }
}

/// In-memory recipe being edited.
///
/// A fresh draft holds one empty ingredient and one empty step; neither list
/// can be emptied through the remove operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub preparation_time: String,
    pub steps: Vec<String>,
    pub categories: BTreeSet<String>,
    pub image: Option<StagedImage>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: vec![Ingredient::default()],
            preparation_time: String::new(),
            steps: vec![String::new()],
            categories: BTreeSet::new(),
            image: None,
        }
    }
}

impl RecipeDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a text field.
    pub fn text(&self, field: Field) -> Result<&str> {
        match field {
            Field::Title => Ok(&self.title),
            Field::Description => Ok(&self.description),
            Field::PreparationTime => Ok(&self.preparation_time),
            Field::IngredientName(i) => self.ingredient(field, i).map(|ing| ing.name.as_str()),
            Field::IngredientQuantity(i) => {
                self.ingredient(field, i).map(|ing| ing.quantity.as_str())
            }
            Field::Step(i) => self
                .steps
                .get(i)
                .map(String::as_str)
                .ok_or(CoreError::IndexOutOfRange {
                    field,
                    index: i,
                    len: self.steps.len(),
                }),
            other => Err(CoreError::NotEditable(other)),
        }
    }

    /// Replace the text of one text field.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::PreparationTime => &mut self.preparation_time,
            Field::IngredientName(i) => &mut self.ingredient_mut(field, i)?.name,
            Field::IngredientQuantity(i) => &mut self.ingredient_mut(field, i)?.quantity,
            Field::Step(i) => {
                let len = self.steps.len();
                self.steps.get_mut(i).ok_or(CoreError::IndexOutOfRange {
                    field,
                    index: i,
                    len,
                })?
            }
            other => return Err(CoreError::NotEditable(other)),
        };
        *slot = value;
        Ok(())
    }

    /// Append an empty ingredient line.
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::default());
    }

    /// Remove the ingredient at `index`.
    ///
    /// The first line is never removed. Returns whether a line was removed.
    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.ingredients.len() {
            return false;
        }
        self.ingredients.remove(index);
        true
    }

    /// Append an empty step.
    pub fn add_step(&mut self) {
        self.steps.push(String::new());
    }

    /// Remove the step at `index`.
    ///
    /// The first step is never removed. Returns whether a step was removed.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        true
    }

    /// Replace the category set. Blank tags are dropped.
    pub fn set_categories<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = tags
            .into_iter()
            .filter_map(|tag| normalize_tag(tag.as_ref()))
            .collect();
    }

    /// Select a tag. Returns whether it was newly added.
    pub fn add_category(&mut self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.categories.insert(tag))
    }

    /// Add the tag if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle_category(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if self.categories.remove(&tag) {
            false
        } else {
            self.categories.insert(tag);
            true
        }
    }

    /// Remove a tag. Returns whether it was selected.
    pub fn remove_category(&mut self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.categories.remove(&tag))
    }

    /// Whether a tag is selected.
    pub fn has_category(&self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.categories.contains(&tag))
    }

    /// Tags for the collapsed picker: at most `max` tags plus the number hidden.
    pub fn collapsed_categories(&self, max: usize) -> (Vec<&str>, usize) {
        let shown: Vec<&str> = self.categories.iter().take(max).map(String::as_str).collect();
        let hidden = self.categories.len() - shown.len();
        (shown, hidden)
    }

    /// Stage an image, replacing any previous one.
    pub fn attach_image(&mut self, image: StagedImage) -> Option<StagedImage> {
        self.image.replace(image)
    }

    /// Unstage the image.
    pub fn clear_image(&mut self) -> Option<StagedImage> {
        self.image.take()
    }

    fn ingredient(&self, field: Field, index: usize) -> Result<&Ingredient> {
        self.ingredients
            .get(index)
            .ok_or(CoreError::IndexOutOfRange {
                field,
                index,
                len: self.ingredients.len(),
            })
    }

    fn ingredient_mut(&mut self, field: Field, index: usize) -> Result<&mut Ingredient> {
        let len = self.ingredients.len();
        self.ingredients
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { field, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_placeholders() {
        let draft = RecipeDraft::new();
        assert_eq!(draft.ingredients, vec![Ingredient::default()]);
        assert_eq!(draft.steps, vec![String::new()]);
        assert!(draft.categories.is_empty());
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_update_text_fields() {
        let mut draft = RecipeDraft::new();
        draft.update_field(Field::Title, "Bolo").unwrap();
        draft.update_field(Field::IngredientName(0), "Farinha").unwrap();
        draft.update_field(Field::IngredientQuantity(0), "2 xícaras").unwrap();
        draft.update_field(Field::Step(0), "Misture tudo").unwrap();

        assert_eq!(draft.title, "Bolo");
        assert_eq!(draft.ingredients[0], Ingredient::new("Farinha", "2 xícaras"));
        assert_eq!(draft.text(Field::Step(0)).unwrap(), "Misture tudo");
    }

    #[test]
    fn test_update_rejects_non_text_and_out_of_range() {
        let mut draft = RecipeDraft::new();
        assert!(matches!(
            draft.update_field(Field::Categories, "doce"),
            Err(CoreError::NotEditable(Field::Categories))
        ));
        assert!(matches!(
            draft.update_field(Field::IngredientName(3), "Sal"),
            Err(CoreError::IndexOutOfRange { index: 3, len: 1, .. })
        ));
        assert!(draft.text(Field::Step(1)).is_err());
    }

    #[test]
    fn test_remove_first_ingredient_is_noop() {
        let mut draft = RecipeDraft::new();
        draft.add_ingredient();
        assert!(!draft.remove_ingredient(0));
        assert_eq!(draft.ingredients.len(), 2);
        assert!(draft.remove_ingredient(1));
        assert_eq!(draft.ingredients.len(), 1);
        assert!(!draft.remove_ingredient(5));
    }

    #[test]
    fn test_remove_step_keeps_order() {
        let mut draft = RecipeDraft::new();
        draft.add_step();
        draft.add_step();
        for (i, text) in ["a", "b", "c"].into_iter().enumerate() {
            draft.update_field(Field::Step(i), text).unwrap();
        }
        assert!(draft.remove_step(1));
        assert_eq!(draft.steps, vec!["a".to_string(), "c".to_string()]);
        assert!(!draft.remove_step(0));
    }

    #[test]
    fn test_categories_normalized_and_deduplicated() {
        let mut draft = RecipeDraft::new();
        draft.set_categories(["Doce", "doce", " ", "Picante"]);
        assert_eq!(draft.categories.len(), 2);
        assert!(draft.has_category("DOCE"));
        assert!(draft.has_category("Picante"));

        assert!(!draft.add_category("Doce"));
        assert!(!draft.add_category("  "));
        assert!(!draft.toggle_category("doce"));
        assert!(draft.toggle_category("vegano"));
        assert!(draft.remove_category("Picante"));
        assert!(!draft.remove_category("Picante"));
        assert_eq!(draft.categories.iter().collect::<Vec<_>>(), vec!["vegano"]);
    }

    #[test]
    fn test_collapsed_categories() {
        let mut draft = RecipeDraft::new();
        draft.set_categories(["doce", "vegano", "low-carb", "Picante"]);
        let (shown, hidden) = draft.collapsed_categories(2);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 2);
        assert_eq!(draft.categories.len(), 4);

        draft.set_categories(["doce"]);
        assert_eq!(draft.collapsed_categories(2), (vec!["doce"], 0));
    }

    #[test]
    fn test_attach_and_clear_image() {
        let mut draft = RecipeDraft::new();
        let first = StagedImage::new("bolo.png", "image/png", 1024, "blob:a");
        let second = StagedImage::new("bolo.jpg", "image/jpeg", 2048, "blob:b");
        assert!(draft.attach_image(first.clone()).is_none());
        assert_eq!(draft.attach_image(second.clone()), Some(first));
        assert_eq!(draft.clear_image(), Some(second));
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = RecipeDraft::new();
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"preparationTime\":\"\""));
        assert!(json.contains("\"image\":null"));
    }
}
