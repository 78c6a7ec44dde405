use cookbook_core::{AppConfig, RecipeDraft, RecipeSummary};
use cookbook_ui::{Button, ButtonVariant, FormRecipe, IconKind, Modal, RECIPE_FORM_ID, RecipeCard, SearchBar};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::{Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use log::{debug, info};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = config.theme.css_variables();
    let title = config.site.title.clone();
    let config = StoredValue::new(config);

    view! {
      <Title text=title />
      <Style id="cookbook-theme">{theme}</Style>

      <Router>
        <main class="cookbook-main">
          <Routes fallback=|| "Página não encontrada.".into_view()>
            <Route
              path=StaticSegment("")
              view=move || view! { <HomePage config=config.get_value() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

/// Landing page: greeting, search toolbar, recipe grid and the new-recipe modal.
#[component]
fn HomePage(config: AppConfig) -> impl IntoView {
    let form_open = RwSignal::new(false);
    let max_visible_categories = config.form.max_visible_categories;
    let site = config.site;

    let open_form = move |_: MouseEvent| form_open.set(true);
    let close_form = Callback::new(move |_: ()| form_open.set(false));
    let recipe_submitted = Callback::new(move |draft: RecipeDraft| {
        info!(
            "Recipe \"{}\" submitted with {} ingredients, {} steps and {} categories",
            draft.title,
            draft.ingredients.len(),
            draft.steps.len(),
            draft.categories.len()
        );
        form_open.set(false);
    });

    view! {
      <Modal
        open=form_open
        title="Nova Receita"
        on_close=close_form
        on_confirm=|_: ()| debug!("Confirm pressed on recipe form")
        confirm_label="Salvar"
        confirm_form=RECIPE_FORM_ID
      >
        <FormRecipe on_submit=recipe_submitted max_visible_categories=max_visible_categories />
      </Modal>

      <header class="cookbook-hero">
        <h1 class="cookbook-hero-title">{site.title}</h1>
        <p class="cookbook-hero-greeting">"Bem-vindo, " <b>{site.user_name}</b></p>

        <div class="cookbook-toolbar">
          <SearchBar
            placeholder=site.search_placeholder
            on_search=|query: String| info!("Search requested: {query:?}")
            on_clear=|_: ()| info!("Search cleared")
          />
          <Button
            icon=IconKind::Sliders
            variant=ButtonVariant::Secondary
            title="Filtros"
            on_click=|_: MouseEvent| info!("Open filters")
          />
          <Button icon=IconKind::Plus title="Nova receita" on_click=open_form />
        </div>
      </header>

      <section class="cookbook-grid">
        <RecipeCard
          recipe=example_recipe()
          on_toggle_favorite=|_: ()| info!("Favorite toggled")
        />
      </section>
    }
}

/// The single card shown on the landing page.
pub fn example_recipe() -> RecipeSummary {
    RecipeSummary::new(
        "Lasanha Bolonhesa",
        "Camadas de massa fresca, molho bolonhesa e queijo gratinado.",
    )
    .with_image(
        "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=400&q=80",
    )
    .with_duration(Some(2), Some(30))
    .with_categories(["Salgado", "Vegano"])
    .with_portion("4")
    .with_favorite(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_recipe() {
        let recipe = example_recipe();

        assert_eq!(recipe.title, "Lasanha Bolonhesa");
        assert_eq!(recipe.duration_label().as_deref(), Some("2 hr 30 min"));
        assert_eq!(recipe.categories, vec!["Salgado", "Vegano"]);
        assert_eq!(recipe.portion.as_deref(), Some("4"));
        assert!(recipe.is_favorite);
    }
}
