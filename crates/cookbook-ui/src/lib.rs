//! Cookbook UI Components
//!
//! Leptos components for the Cookbook frontend.
//!
//! # Components
//!
//! - [`Button`] - Clickable control with optional icon and variants
//! - [`Icon`] - Decorative glyph icon
//! - [`RecipeCard`] - Summary card of one recipe
//! - [`Modal`] - Overlay dialog controlled by its parent
//! - [`SearchBar`] - Query input emitting search/clear events
//! - [`FormRecipe`] - New-recipe form with validation
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use cookbook_ui::{FormRecipe, Modal};
//!
//! #[component]
//! fn NewRecipe() -> impl IntoView {
//!     let open = RwSignal::new(true);
//!     let close = Callback::new(move |_| open.set(false));
//!     let submit = Callback::new(move |_draft| open.set(false));
//!
//!     view! {
//!         <Modal open=open title="Nova Receita" on_close=close>
//!             <FormRecipe on_submit=submit />
//!         </Modal>
//!     }
//! }
//! ```

pub mod button;
pub mod card;
pub mod form_recipe;
pub mod icon;
pub mod modal;
pub mod search_bar;

pub use button::{Button, ButtonType, ButtonVariant};
pub use card::{RecipeCard, category_icon};
pub use form_recipe::{FormRecipe, RECIPE_FORM_ID};
pub use icon::{Icon, IconKind};
pub use modal::Modal;
pub use search_bar::SearchBar;
