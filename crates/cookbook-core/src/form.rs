//! Form state container for the new-recipe form.
//!
//! [`DraftForm`] owns a [`RecipeDraft`] plus the bookkeeping a form needs to
//! show errors: which fields the user has touched, whether a submit was
//! attempted, and the errors of the last validation run.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::draft::{RecipeDraft, StagedImage};
use crate::error::Result;
use crate::field::Field;
use crate::validation::{ValidationErrors, validate};

/// Editing state of one recipe draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    draft: RecipeDraft,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
    submit_attempted: bool,
}

impl DraftForm {
    /// Create a form around an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft being edited.
    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Errors of the last validation run.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether `submit` has been called on this draft.
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Whether the user has left the field or a submit was attempted.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Message to display next to a field: its error, if it is touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Mark a field as touched.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Replace the text of one field.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.draft.update_field(field, value)?;
        self.revalidate();
        Ok(())
    }

    /// Replace the text of the field named by a form path such as `ingredients[1].name`.
    pub fn update_path(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        self.update_field(path.parse()?, value)
    }

    pub fn add_ingredient(&mut self) {
        self.draft.add_ingredient();
        debug!("ingredient added, {} lines", self.draft.ingredients.len());
        self.revalidate();
    }

    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        let removed = self.draft.remove_ingredient(index);
        if removed {
            debug!("ingredient {index} removed");
            self.shift_touched(Field::Ingredients, index);
            self.revalidate();
        }
        removed
    }

    pub fn add_step(&mut self) {
        self.draft.add_step();
        debug!("step added, {} steps", self.draft.steps.len());
        self.revalidate();
    }

    pub fn remove_step(&mut self, index: usize) -> bool {
        let removed = self.draft.remove_step(index);
        if removed {
            debug!("step {index} removed");
            self.shift_touched(Field::Steps, index);
            self.revalidate();
        }
        removed
    }

    pub fn set_categories<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.draft.set_categories(tags);
        self.touch(Field::Categories);
        self.revalidate();
    }

    pub fn add_category(&mut self, tag: &str) -> bool {
        let added = self.draft.add_category(tag);
        self.touch(Field::Categories);
        self.revalidate();
        added
    }

    pub fn toggle_category(&mut self, tag: &str) -> bool {
        let selected = self.draft.toggle_category(tag);
        self.touch(Field::Categories);
        self.revalidate();
        selected
    }

    pub fn remove_category(&mut self, tag: &str) -> bool {
        let removed = self.draft.remove_category(tag);
        self.touch(Field::Categories);
        self.revalidate();
        removed
    }

    /// Stage an image, returning the one it replaces.
    pub fn attach_image(&mut self, image: StagedImage) -> Option<StagedImage> {
        debug!(
            "image staged: {} ({}, {} bytes)",
            image.file_name, image.mime_type, image.size_bytes
        );
        let previous = self.draft.attach_image(image);
        self.touch(Field::Image);
        self.revalidate();
        previous
    }

    pub fn clear_image(&mut self) -> Option<StagedImage> {
        let image = self.draft.clear_image();
        self.touch(Field::Image);
        self.revalidate();
        image
    }

    /// Validate the draft and hand it to `on_complete` if it passes.
    ///
    /// On success the callback runs exactly once and the form starts over
    /// with an empty draft. On failure every field is marked touched, the
    /// errors are kept for display and the draft is left as it was.
    pub fn submit<F>(&mut self, on_complete: F) -> std::result::Result<(), ValidationErrors>
    where
        F: FnOnce(RecipeDraft),
    {
        self.submit_attempted = true;
        self.touch_all();

        if let Err(errors) = validate(&self.draft) {
            warn!("recipe draft rejected: {errors}");
            self.errors = errors.clone();
            return Err(errors);
        }

        let draft = std::mem::take(self).draft;
        info!("recipe draft submitted: {}", draft.title);
        on_complete(draft);
        Ok(())
    }

    /// Discard the draft and all bookkeeping.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self) {
        if self.submit_attempted {
            self.errors = validate(&self.draft).err().unwrap_or_default();
        }
    }

    fn touch_all(&mut self) {
        self.touched.extend(Field::TOP_LEVEL);
        for i in 0..self.draft.ingredients.len() {
            self.touched.insert(Field::IngredientName(i));
            self.touched.insert(Field::IngredientQuantity(i));
        }
        for i in 0..self.draft.steps.len() {
            self.touched.insert(Field::Step(i));
        }
    }

    /// Keep touched marks aligned with list entries after `removed` left `list`.
    fn shift_touched(&mut self, list: Field, removed: usize) {
        self.touched = std::mem::take(&mut self.touched)
            .into_iter()
            .filter_map(|field| match field.index() {
                Some(i) if field.parent() == list => match i.cmp(&removed) {
                    std::cmp::Ordering::Less => Some(field),
                    std::cmp::Ordering::Equal => None,
                    std::cmp::Ordering::Greater => Some(field.with_index(i - 1)),
                },
                _ => Some(field),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{IMAGE_REQUIRED, TITLE_REQUIRED};

    fn image() -> StagedImage {
        StagedImage::new("bolo.png", "image/png", 512, "blob:bolo")
    }

    fn filled_form() -> DraftForm {
        let mut form = DraftForm::new();
        form.update_field(Field::Title, "Bolo").unwrap();
        form.update_field(Field::Description, "Bolo de chocolate").unwrap();
        form.update_path("ingredients[0].name", "Farinha").unwrap();
        form.update_path("ingredients[0].quantity", "2 xícaras").unwrap();
        form.update_field(Field::PreparationTime, "01:30").unwrap();
        form.update_path("steps[0]", "Misture tudo").unwrap();
        form.set_categories(["doce"]);
        form.attach_image(image());
        form
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = DraftForm::new();
        assert!(form.errors().is_empty());
        assert_eq!(form.visible_error(Field::Title), None);

        assert!(form.submit(|_| panic!("must not complete")).is_err());
        assert_eq!(form.visible_error(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(form.visible_error(Field::Image), Some(IMAGE_REQUIRED));
    }

    #[test]
    fn test_edits_after_failed_submit_clear_errors() {
        let mut form = DraftForm::new();
        let _ = form.submit(|_| {});
        assert!(form.errors().get(Field::Title).is_some());

        form.update_field(Field::Title, "Bolo").unwrap();
        assert_eq!(form.errors().get(Field::Title), None);

        form.attach_image(image());
        assert_eq!(form.visible_error(Field::Image), None);
    }

    #[test]
    fn test_edits_before_submit_do_not_validate() {
        let mut form = DraftForm::new();
        form.touch(Field::Title);
        form.update_field(Field::Description, "x").unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(form.visible_error(Field::Title), None);
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut form = filled_form();
        let mut submitted = None;
        form.submit(|draft| submitted = Some(draft)).unwrap();

        let draft = submitted.unwrap();
        assert_eq!(draft.title, "Bolo");
        assert_eq!(form, DraftForm::new());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled_form();
        form.clear_image();
        let before = form.draft().clone();
        let errors = form.submit(|_| panic!("must not complete")).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Image]);
        assert_eq!(form.draft(), &before);
        assert!(form.submit_attempted());
    }

    #[test]
    fn test_update_path_rejects_unknown_paths() {
        let mut form = DraftForm::new();
        assert!(form.update_path("ingredients[0].weight", "1").is_err());
        assert!(form.update_path("steps[3]", "x").is_err());
    }

    #[test]
    fn test_remove_shifts_touched_marks() {
        let mut form = DraftForm::new();
        form.add_step();
        form.add_step();
        form.touch(Field::Step(1));
        form.touch(Field::Step(2));

        assert!(form.remove_step(1));
        assert!(form.is_touched(Field::Step(1)));
        assert!(!form.is_touched(Field::Step(2)));
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form.draft(), &RecipeDraft::new());
        assert!(!form.submit_attempted());
    }
}
