//! Inline glyph icons.

use leptos::prelude::*;

/// Icons used across the Cookbook components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Plus,
    Sliders,
    Search,
    Close,
    Clock,
    Person,
    Heart,
    HeartOutline,
    SaltShaker,
    Cupcake,
    Image,
}

impl IconKind {
    /// CSS modifier name.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Plus => "plus",
            IconKind::Sliders => "sliders",
            IconKind::Search => "search",
            IconKind::Close => "close",
            IconKind::Clock => "clock",
            IconKind::Person => "person",
            IconKind::Heart => "heart",
            IconKind::HeartOutline => "heart-outline",
            IconKind::SaltShaker => "salt-shaker",
            IconKind::Cupcake => "cupcake",
            IconKind::Image => "image",
        }
    }

    /// Text glyph rendered inside the icon span.
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Plus => "+",
            IconKind::Sliders => "☰",
            IconKind::Search => "⌕",
            IconKind::Close => "×",
            IconKind::Clock => "◷",
            IconKind::Person => "👤",
            IconKind::Heart => "♥",
            IconKind::HeartOutline => "♡",
            IconKind::SaltShaker => "🧂",
            IconKind::Cupcake => "🧁",
            IconKind::Image => "🖼",
        }
    }
}

/// Decorative icon. Hidden from assistive technology.
#[component]
pub fn Icon(
    /// Which icon to draw.
    kind: IconKind,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let classes = format!("cookbook-icon cookbook-icon-{} {class}", kind.name());

    view! {
      <span class=classes.trim_end().to_string() aria-hidden="true">
        {kind.glyph()}
      </span>
    }
}
