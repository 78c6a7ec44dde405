//! Button component.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::icon::{Icon, IconKind};

/// Visual style of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Muted button for secondary actions.
    Secondary,
    /// Borderless icon button.
    Ghost,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cookbook-button-primary",
            ButtonVariant::Secondary => "cookbook-button-secondary",
            ButtonVariant::Ghost => "cookbook-button-ghost",
            ButtonVariant::Danger => "cookbook-button-danger",
        }
    }
}

/// HTML `type` of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Class list for a button.
pub fn button_class(variant: ButtonVariant, full_width: bool, disabled: bool, extra: &str) -> String {
    let mut class = format!("cookbook-button {}", variant.class());
    if full_width {
        class.push_str(" cookbook-button-full");
    }
    if disabled {
        class.push_str(" cookbook-button-disabled");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Clickable control with an optional leading icon and label.
#[component]
pub fn Button(
    /// Button text.
    #[prop(into, optional)]
    label: Option<String>,
    /// Icon shown before the label.
    #[prop(optional)]
    icon: Option<IconKind>,
    /// Visual style.
    #[prop(optional)]
    variant: ButtonVariant,
    /// HTML button type.
    #[prop(optional)]
    button_type: ButtonType,
    /// Whether the button is disabled.
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Stretch to the container width.
    #[prop(optional)]
    full_width: bool,
    /// Tooltip text.
    #[prop(into, optional)]
    title: Option<String>,
    /// Element id.
    #[prop(into, optional)]
    id: Option<String>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Click handler.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label = if label.is_none() { title.clone() } else { None };

    view! {
      <button
        id=id
        type=button_type.as_str()
        title=title
        aria-label=aria_label
        class=move || button_class(variant, full_width, disabled.get(), &class)
        disabled=move || disabled.get()
        on:click=move |ev| {
          if let Some(callback) = on_click {
            callback.run(ev);
          }
        }
      >
        {icon.map(|kind| view! { <Icon kind=kind class="cookbook-button-icon" /> })}
        {label}
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), false, false, ""),
            "cookbook-button cookbook-button-primary"
        );
    }

    #[test]
    fn test_button_class_modifiers() {
        let class = button_class(ButtonVariant::Ghost, true, true, "w-full");
        assert!(class.contains("cookbook-button-ghost"));
        assert!(class.contains("cookbook-button-full"));
        assert!(class.contains("cookbook-button-disabled"));
        assert!(class.ends_with(" w-full"));
    }

    #[test]
    fn test_button_type() {
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }
}
