//! Submission-time validation of a recipe draft.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::draft::RecipeDraft;
use crate::field::Field;

/// One invalid field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// All field errors of a rejected draft, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Invalid fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.errors
            .iter()
            .map(|(&field, &message)| FieldValidationError { field, message })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub const TITLE_REQUIRED: &str = "Título é obrigatório";
pub const DESCRIPTION_REQUIRED: &str = "Descrição é obrigatória";
pub const INGREDIENTS_MIN: &str = "Adicione pelo menos 1 ingrediente";
pub const INGREDIENT_NAME_REQUIRED: &str = "Nome do ingrediente é obrigatório";
pub const INGREDIENT_QUANTITY_REQUIRED: &str = "Quantidade é obrigatória";
pub const PREPARATION_TIME_REQUIRED: &str = "Informe o tempo de preparo";
pub const STEPS_MIN: &str = "Adicione pelo menos 1 etapa";
pub const STEP_REQUIRED: &str = "Etapa é obrigatória";
pub const CATEGORIES_MIN: &str = "Selecione pelo menos 1 categoria";
pub const IMAGE_REQUIRED: &str = "Adicione uma foto";

/// Check a draft against the recipe schema.
///
/// Whitespace-only text counts as filled in.
pub fn validate(draft: &RecipeDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.title.is_empty() {
        errors.push(Field::Title, TITLE_REQUIRED);
    }
    if draft.description.is_empty() {
        errors.push(Field::Description, DESCRIPTION_REQUIRED);
    }

    if draft.ingredients.is_empty() {
        errors.push(Field::Ingredients, INGREDIENTS_MIN);
    }
    for (i, ingredient) in draft.ingredients.iter().enumerate() {
        if ingredient.name.is_empty() {
            errors.push(Field::IngredientName(i), INGREDIENT_NAME_REQUIRED);
        }
        if ingredient.quantity.is_empty() {
            errors.push(Field::IngredientQuantity(i), INGREDIENT_QUANTITY_REQUIRED);
        }
    }

    if draft.preparation_time.is_empty() {
        errors.push(Field::PreparationTime, PREPARATION_TIME_REQUIRED);
    }

    if draft.steps.is_empty() {
        errors.push(Field::Steps, STEPS_MIN);
    }
    for (i, step) in draft.steps.iter().enumerate() {
        if step.is_empty() {
            errors.push(Field::Step(i), STEP_REQUIRED);
        }
    }

    if draft.categories.is_empty() {
        errors.push(Field::Categories, CATEGORIES_MIN);
    }
    if draft.image.is_none() {
        errors.push(Field::Image, IMAGE_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
