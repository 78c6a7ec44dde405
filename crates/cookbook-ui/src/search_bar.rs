//! Search bar component.
//!
//! Holds the query locally and only notifies its parent; no search is run here.

use cookbook_core::{SearchAffordance, SearchBuffer};
use leptos::prelude::*;

use crate::icon::{Icon, IconKind};

/// Text input with a trailing search/clear control.
#[component]
pub fn SearchBar(
    /// Placeholder text for the input.
    #[prop(into, default = "Search...".to_string())]
    placeholder: String,
    /// Fired with the current query by the search control or Enter.
    #[prop(optional, into)]
    on_search: Option<Callback<String>>,
    /// Fired after the clear control empties the query.
    #[prop(optional, into)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let buffer = RwSignal::new(SearchBuffer::new());

    let search = move || {
        if let Some(callback) = on_search {
            callback.run(buffer.with_untracked(|b| b.query().to_string()));
        }
    };

    let clear = move || {
        buffer.update(|b| {
            b.clear();
        });
        if let Some(callback) = on_clear {
            callback.run(());
        }
    };

    view! {
      <div class="cookbook-search-bar">
        <input
          type="text"
          class="cookbook-search-input"
          placeholder=placeholder
          prop:value=move || buffer.with(|b| b.query().to_string())
          on:input=move |ev| {
            let value = event_target_value(&ev);
            buffer.update(|b| b.set(value));
          }
          on:keydown=move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
              search();
            }
          }
        />
        <div class="cookbook-search-action">
          {move || match buffer.with(SearchBuffer::affordance) {
            SearchAffordance::Search => {
              view! {
                <button type="button" aria-label="Pesquisar" on:click=move |_| search()>
                  <Icon kind=IconKind::Search />
                </button>
              }
                .into_any()
            }
            SearchAffordance::Clear => {
              view! {
                <button type="button" aria-label="Limpar pesquisa" on:click=move |_| clear()>
                  <Icon kind=IconKind::Close />
                </button>
              }
                .into_any()
            }
          }}
        </div>
      </div>
    }
}
