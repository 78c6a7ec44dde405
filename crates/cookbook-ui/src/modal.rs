//! Modal dialog component.
//!
//! The modal keeps no state: the parent owns the `open` signal and decides
//! what close and confirm mean.

use leptos::prelude::*;

use crate::icon::{Icon, IconKind};

/// Overlay dialog with a title, arbitrary content and close/confirm buttons.
#[component]
pub fn Modal(
    /// Whether the modal is shown.
    #[prop(into)]
    open: Signal<bool>,
    /// Heading text.
    #[prop(into, optional)]
    title: Option<String>,
    /// Fired by the close icon, the close button, Escape and backdrop clicks.
    on_close: Callback<()>,
    /// Fired by the confirm button. The button is only rendered when set.
    #[prop(optional, into)]
    on_confirm: Option<Callback<()>>,
    /// Confirm button text.
    #[prop(into, default = "Confirmar".to_string())]
    confirm_label: String,
    /// Close button text.
    #[prop(into, default = "Fechar".to_string())]
    close_label: String,
    /// Id of a form the confirm button submits.
    #[prop(into, optional)]
    confirm_form: Option<String>,
    /// Dialog content.
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let confirm_label = StoredValue::new(confirm_label);
    let close_label = StoredValue::new(close_label);
    let confirm_form = StoredValue::new(confirm_form);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
      <Show when=move || open.get()>
        <div
          class="cookbook-modal-overlay"
          tabindex="-1"
          on:click=move |_| on_close.run(())
          on:keydown=on_keydown
        >
          <div
            class="cookbook-modal-content"
            role="dialog"
            aria-modal="true"
            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
          >
            <button
              type="button"
              class="cookbook-modal-close-icon"
              aria-label=move || close_label.get_value()
              on:click=move |_| on_close.run(())
            >
              <Icon kind=IconKind::Close />
            </button>

            {move || {
              title.get_value().map(|title| view! { <h2 class="cookbook-modal-title">{title}</h2> })
            }}

            <div class="cookbook-modal-body">{children()}</div>

            <div class="cookbook-modal-footer">
              <button
                type="button"
                class="cookbook-modal-close"
                on:click=move |_| on_close.run(())
              >
                {move || close_label.get_value()}
              </button>
              {move || {
                on_confirm
                  .map(|confirm| {
                    let form = confirm_form.get_value();
                    let button_type = if form.is_some() { "submit" } else { "button" };
                    view! {
                      <button
                        type=button_type
                        form=form
                        class="cookbook-modal-confirm"
                        on:click=move |_| confirm.run(())
                      >
                        {confirm_label.get_value()}
                      </button>
                    }
                  })
              }}
            </div>
          </div>
        </div>
      </Show>
    }
}
