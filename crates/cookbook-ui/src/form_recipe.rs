//! New-recipe form.
//!
//! The component owns a [`DraftForm`] in a signal. Every widget writes into
//! the draft through the `DraftForm` operations, and the submit handler hands
//! the validated draft to the caller.

use cookbook_core::{Category, DraftForm, Field, RecipeDraft, StagedImage, tag_label};
use leptos::ev::{DragEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{File, HtmlInputElement, Url};

use crate::button::{Button, ButtonVariant};
use crate::icon::{Icon, IconKind};

/// Default id of the `<form>` element, for buttons outside the form.
pub const RECIPE_FORM_ID: &str = "recipe-form";

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn field_text(form: RwSignal<DraftForm>, field: Field) -> String {
    form.with(|f| f.draft().text(field).map(str::to_string).unwrap_or_default())
}

fn set_field(form: RwSignal<DraftForm>, field: Field, value: String) {
    form.update(|f| {
        if let Err(err) = f.update_field(field, value) {
            warn!("ignored edit: {err}");
        }
    });
}

fn touch(form: RwSignal<DraftForm>, field: Field) {
    form.update(|f| f.touch(field));
}

fn error_id(field: Field) -> String {
    format!("{field}-error")
}

/// Inline error message for a field, rendered only while the field shows one.
fn field_error(form: RwSignal<DraftForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(field)).map(|message| {
            view! {
              <p class="cookbook-field-error" id=error_id(field) role="alert">
                {message}
              </p>
            }
        })
    }
}

/// Labelled wrapper around one form control plus its error.
#[component]
fn FormItem(
    label: &'static str,
    field: Field,
    form: RwSignal<DraftForm>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
      <div
        class=format!("cookbook-form-item {class}")
        class:cookbook-form-item-error=move || form.with(|f| f.visible_error(field).is_some())
      >
        <label class="cookbook-form-label" for=field.to_string()>{label}</label>
        {children()}
        {field_error(form, field)}
      </div>
    }
}

/// Single-line text input bound to a draft field.
#[component]
fn TextInput(
    field: Field,
    form: RwSignal<DraftForm>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
      <input
        type=input_type
        id=field.to_string()
        name=field.to_string()
        class="cookbook-input"
        placeholder=placeholder
        aria-describedby=error_id(field)
        prop:value=move || field_text(form, field)
        on:input=move |ev| set_field(form, field, event_target_value(&ev))
        on:blur=move |_| touch(form, field)
      />
    }
}

/// Multi-line text input bound to a draft field.
#[component]
fn TextArea(
    field: Field,
    form: RwSignal<DraftForm>,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
      <textarea
        id=field.to_string()
        name=field.to_string()
        class="cookbook-textarea"
        rows=rows.to_string()
        placeholder=placeholder
        aria-describedby=error_id(field)
        prop:value=move || field_text(form, field)
        on:input=move |ev| set_field(form, field, event_target_value(&ev))
        on:blur=move |_| touch(form, field)
      ></textarea>
    }
}

/// Tag picker over the category vocabulary plus free-form tags.
#[component]
fn CategoryPicker(form: RwSignal<DraftForm>, max_visible: usize) -> impl IntoView {
    let tag_input = RwSignal::new(String::new());

    let add_typed_tag = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        // Enter must not submit the surrounding form.
        ev.prevent_default();
        let tag = tag_input.get_untracked();
        form.update(|f| {
            if f.add_category(&tag) {
                debug!("category tag added: {tag}");
            }
        });
        tag_input.set(String::new());
    };

    let selected = move || {
        let (shown, hidden) = form.with(|f| {
            let (shown, hidden) = f.draft().collapsed_categories(max_visible);
            (
                shown.into_iter().map(str::to_string).collect::<Vec<_>>(),
                hidden,
            )
        });
        let chips = shown
            .into_iter()
            .map(|tag| {
                let label = tag_label(&tag);
                view! {
                  <span class="cookbook-tag">
                    {label}
                    <button
                      type="button"
                      class="cookbook-tag-remove"
                      title="Remover categoria"
                      on:click=move |_| {
                        form.update(|f| {
                          f.remove_category(&tag);
                        });
                      }
                    >
                      "×"
                    </button>
                  </span>
                }
            })
            .collect_view();
        let more = (hidden > 0)
            .then(|| view! { <span class="cookbook-tag cookbook-tag-more">{format!("+{hidden}")}</span> });
        view! {
          {chips}
          {more}
        }
    };

    view! {
      <div class="cookbook-category-picker">
        <div class="cookbook-category-selected">{selected}</div>
        <div class="cookbook-category-options">
          {Category::ALL
            .into_iter()
            .map(|category| {
              view! {
                <label class="cookbook-category-option">
                  <input
                    type="checkbox"
                    value=category.value()
                    prop:checked=move || form.with(|f| f.draft().has_category(category.value()))
                    on:change=move |_| {
                      form.update(|f| {
                        f.toggle_category(category.value());
                      });
                    }
                  />
                  {category.label()}
                </label>
              }
            })
            .collect_view()}
        </div>
        <input
          type="text"
          id=Field::Categories.to_string()
          class="cookbook-input"
          placeholder="Adicione categorias"
          prop:value=move || tag_input.get()
          on:input=move |ev| tag_input.set(event_target_value(&ev))
          on:keydown=add_typed_tag
          on:blur=move |_| touch(form, Field::Categories)
        />
      </div>
    }
}

/// Drop zone and file picker for the recipe photo.
#[component]
fn ImagePicker(form: RwSignal<DraftForm>) -> impl IntoView {
    let stage_file = move |file: File| match Url::create_object_url_with_blob(&file) {
        Ok(object_url) => {
            let image = StagedImage::new(file.name(), file.type_(), file.size() as u64, object_url);
            let previous = form.try_update(|f| f.attach_image(image)).flatten();
            if let Some(previous) = previous {
                let _ = Url::revoke_object_url(&previous.object_url);
            }
        }
        Err(err) => warn!("could not stage image {}: {}", file.name(), js_error(&err)),
    };

    let clear_image = move |_: MouseEvent| {
        if let Some(image) = form.try_update(|f| f.clear_image()).flatten() {
            let _ = Url::revoke_object_url(&image.object_url);
        }
    };

    // A cancelled draft still owns its object URL.
    on_cleanup(move || {
        let staged = form
            .try_with_untracked(|f| f.draft().image.as_ref().map(|image| image.object_url.clone()))
            .flatten();
        if let Some(object_url) = staged {
            let _ = Url::revoke_object_url(&object_url);
        }
    });

    let preview = move || {
        form.with(|f| f.draft().image.clone()).map(|image| {
            let StagedImage {
                file_name,
                object_url,
                ..
            } = image;
            let alt = file_name.clone();
            view! {
              <figure class="cookbook-image-preview">
                <img src=object_url alt=alt />
                <figcaption>{file_name}</figcaption>
                <Button
                  label="Remover"
                  variant=ButtonVariant::Secondary
                  on_click=clear_image
                />
              </figure>
            }
        })
    };

    view! {
      <label
        class="cookbook-dropzone"
        on:dragover=|ev: DragEvent| ev.prevent_default()
        on:drop=move |ev: DragEvent| {
          ev.prevent_default();
          if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
            stage_file(file);
          }
        }
      >
        <input
          type="file"
          id=Field::Image.to_string()
          class="cookbook-file-input"
          accept="image/*"
          on:change=move |ev| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
              stage_file(file);
            }
          }
        />
        <p class="cookbook-dropzone-icon">
          <Icon kind=IconKind::Image />
        </p>
        <p class="cookbook-dropzone-text">"Arraste uma imagem ou clique para selecionar"</p>
        <p class="cookbook-dropzone-hint">"Apenas imagens são permitidas"</p>
      </label>
      {preview}
    }
}

/// Form collecting a new recipe.
///
/// `on_submit` runs once per successful submission with the validated draft;
/// the form then starts over with an empty draft. A rejected submission
/// shows the errors inline and keeps the draft.
#[component]
pub fn FormRecipe(
    /// Receives the validated draft.
    on_submit: Callback<RecipeDraft>,
    /// Id of the `<form>` element.
    #[prop(into, default = RECIPE_FORM_ID.to_string())]
    form_id: String,
    /// Category tags shown before collapsing into "+N".
    #[prop(default = 2)]
    max_visible_categories: usize,
) -> impl IntoView {
    let form = RwSignal::new(DraftForm::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        form.update(|f| {
            if f.submit(|draft| submitted = Some(draft)).is_err() {
                debug!("recipe form kept open with errors");
            }
        });
        // Run the callback outside the update so the caller may touch the form.
        if let Some(draft) = submitted {
            on_submit.run(draft);
        }
    };

    let ingredient_rows = move || 0..form.with(|f| f.draft().ingredients.len());
    let step_rows = move || 0..form.with(|f| f.draft().steps.len());

    view! {
      <form id=form_id class="cookbook-form" novalidate=true on:submit=handle_submit>
        <FormItem label="Título" field=Field::Title form=form>
          <TextInput field=Field::Title form=form />
        </FormItem>

        <FormItem label="Descrição" field=Field::Description form=form>
          <TextArea field=Field::Description form=form />
        </FormItem>

        <div class="cookbook-form-row">
          <FormItem
            label="Tempo de Preparo"
            field=Field::PreparationTime
            form=form
            class="cookbook-form-item-grow"
          >
            <TextInput field=Field::PreparationTime form=form input_type="time" />
          </FormItem>
          <FormItem
            label="Categorias"
            field=Field::Categories
            form=form
            class="cookbook-form-item-grow"
          >
            <CategoryPicker form=form max_visible=max_visible_categories />
          </FormItem>
        </div>

        <FormItem label="Ingredientes" field=Field::Ingredients form=form>
          <div class="cookbook-list">
            <For
              each=ingredient_rows
              key=|idx| *idx
              children=move |idx| {
                let name = Field::IngredientName(idx);
                let quantity = Field::IngredientQuantity(idx);
                view! {
                  <div class="cookbook-list-row">
                    <TextInput field=name form=form placeholder="Nome" />
                    <TextInput field=quantity form=form placeholder="Quantidade" />
                    {(idx > 0)
                      .then(|| {
                        view! {
                          <button
                            type="button"
                            class="cookbook-list-remove"
                            title="Remover ingrediente"
                            on:click=move |_| {
                              form.update(|f| {
                                f.remove_ingredient(idx);
                              });
                            }
                          >
                            "×"
                          </button>
                        }
                      })}
                  </div>
                  {field_error(form, name)}
                  {field_error(form, quantity)}
                }
              }
            />
          </div>
          <Button
            label="Adicionar Ingrediente"
            icon=IconKind::Plus
            full_width=true
            on_click=move |_: MouseEvent| form.update(|f| f.add_ingredient())
          />
        </FormItem>

        <FormItem label="Etapas" field=Field::Steps form=form>
          <div class="cookbook-list">
            <For
              each=step_rows
              key=|idx| *idx
              children=move |idx| {
                let step = Field::Step(idx);
                view! {
                  <div class="cookbook-list-row">
                    <TextArea
                      field=step
                      form=form
                      placeholder=format!("Descreva etapa {}", idx + 1)
                      rows=2
                    />
                    {(idx > 0)
                      .then(|| {
                        view! {
                          <button
                            type="button"
                            class="cookbook-list-remove"
                            title="Remover etapa"
                            on:click=move |_| {
                              form.update(|f| {
                                f.remove_step(idx);
                              });
                            }
                          >
                            "×"
                          </button>
                        }
                      })}
                  </div>
                  {field_error(form, step)}
                }
              }
            />
          </div>
          <Button
            label="Adicionar Etapa"
            icon=IconKind::Plus
            full_width=true
            on_click=move |_: MouseEvent| form.update(|f| f.add_step())
          />
        </FormItem>

        <FormItem label="Imagem" field=Field::Image form=form>
          <ImagePicker form=form />
        </FormItem>
      </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_ids_follow_field_paths() {
        assert_eq!(error_id(Field::Title), "title-error");
        assert_eq!(
            error_id(Field::IngredientQuantity(2)),
            "ingredients[2].quantity-error"
        );
        assert_eq!(error_id(Field::Step(0)), "steps[0]-error");
    }
}
