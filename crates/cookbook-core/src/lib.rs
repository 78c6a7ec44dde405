//! Cookbook Core Library
//!
//! Recipe draft model, validation, form state and configuration for the
//! Cookbook front-end. Nothing here depends on the browser, so the whole
//! editing contract can be exercised on the host.

pub mod category;
pub mod config;
pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod search;
pub mod summary;
pub mod validation;

pub use category::{Category, normalize_tag, tag_label};
pub use config::AppConfig;
pub use draft::{Ingredient, RecipeDraft, StagedImage};
pub use error::{CoreError, Result};
pub use field::Field;
pub use form::DraftForm;
pub use search::{SearchAffordance, SearchBuffer};
pub use summary::{RecipeSummary, duration_label};
pub use validation::{FieldValidationError, ValidationErrors, validate};
