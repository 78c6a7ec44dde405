//! Recipe card component.

use cookbook_core::{Category, RecipeSummary};
use leptos::prelude::*;

use crate::icon::{Icon, IconKind};

/// Icon shown in front of a category chip.
pub fn category_icon(category: &str) -> Option<IconKind> {
    match Category::lookup(category)? {
        Category::Salgado => Some(IconKind::SaltShaker),
        Category::Doce => Some(IconKind::Cupcake),
        _ => None,
    }
}

/// Card summarizing one recipe.
///
/// Chips for duration and portions are only rendered when the summary has
/// the data for them.
#[component]
pub fn RecipeCard(
    /// The recipe to display.
    recipe: RecipeSummary,
    /// Fired when the favorite button is pressed.
    #[prop(optional, into)]
    on_toggle_favorite: Option<Callback<()>>,
) -> impl IntoView {
    let duration = recipe.duration_label();
    let RecipeSummary {
        title,
        description,
        image,
        categories,
        portion,
        is_favorite,
        ..
    } = recipe;

    let favorite_icon = if is_favorite {
        IconKind::Heart
    } else {
        IconKind::HeartOutline
    };
    let favorite_label = if is_favorite {
        "Remover dos favoritos"
    } else {
        "Adicionar aos favoritos"
    };
    let image_alt = title.clone();

    view! {
      <article class="cookbook-card">
        <div class="cookbook-card-media">
          {image.map(|src| view! { <img src=src alt=image_alt class="cookbook-card-image" /> })}
          <div class="cookbook-card-actions">
            <button
              type="button"
              class="cookbook-card-favorite"
              aria-pressed=is_favorite.to_string()
              aria-label=favorite_label
              on:click=move |_| {
                if let Some(callback) = on_toggle_favorite {
                  callback.run(());
                }
              }
            >
              <Icon kind=favorite_icon />
            </button>
          </div>
        </div>

        <h3 class="cookbook-card-title">{title}</h3>
        <p class="cookbook-card-description">{description}</p>

        <div class="cookbook-card-chips">
          {duration
            .map(|label| {
              view! {
                <span class="cookbook-chip cookbook-chip-duration">
                  <Icon kind=IconKind::Clock />
                  <span>{label}</span>
                </span>
              }
            })}
          {portion
            .map(|portion| {
              view! {
                <span class="cookbook-chip cookbook-chip-portion">
                  <Icon kind=IconKind::Person />
                  {portion}
                </span>
              }
            })}
        </div>

        <div class="cookbook-card-categories">
          {categories
            .into_iter()
            .map(|category| {
              let icon = category_icon(&category);
              view! {
                <span class="cookbook-chip cookbook-chip-category">
                  {icon.map(|kind| view! { <Icon kind=kind /> })}
                  {category}
                </span>
              }
            })
            .collect_view()}
        </div>
      </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon("Salgado"), Some(IconKind::SaltShaker));
        assert_eq!(category_icon("doce"), Some(IconKind::Cupcake));
        assert_eq!(category_icon("Vegano"), None);
        assert_eq!(category_icon("Picante"), None);
    }
}
