//! Recipe category vocabulary.

use serde::{Deserialize, Serialize};

/// Built-in recipe categories offered by the category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Doce,
    Salgado,
    Vegetariano,
    Vegano,
    GlutenFree,
    LowCarb,
    Agridoce,
}

impl Category {
    /// All categories, in picker order.
    pub const ALL: [Category; 7] = [
        Category::Doce,
        Category::Salgado,
        Category::Vegetariano,
        Category::Vegano,
        Category::GlutenFree,
        Category::LowCarb,
        Category::Agridoce,
    ];

    /// Stored tag value.
    pub fn value(self) -> &'static str {
        match self {
            Category::Doce => "doce",
            Category::Salgado => "salgado",
            Category::Vegetariano => "vegetariano",
            Category::Vegano => "vegano",
            Category::GlutenFree => "gluten-free",
            Category::LowCarb => "low-carb",
            Category::Agridoce => "agridoce",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Doce => "Doce",
            Category::Salgado => "Salgado",
            Category::Vegetariano => "Vegetariano",
            Category::Vegano => "Vegano",
            Category::GlutenFree => "Gluten-Free",
            Category::LowCarb => "Low-Carb",
            Category::Agridoce => "Agridoce",
        }
    }

    /// Match a tag against the vocabulary by value or label, ignoring case.
    pub fn lookup(tag: &str) -> Option<Category> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(tag) || c.label().eq_ignore_ascii_case(tag))
    }
}

/// Canonical stored form of a category tag.
///
/// Known categories collapse to their vocabulary value; free-form tags are
/// kept as typed, minus surrounding whitespace. Blank tags yield `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        Category::lookup(trimmed)
            .map(|c| c.value().to_string())
            .unwrap_or_else(|| trimmed.to_string()),
    )
}

/// Label to show for a stored tag.
pub fn tag_label(tag: &str) -> String {
    Category::lookup(tag)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_value_and_label() {
        assert_eq!(Category::lookup("doce"), Some(Category::Doce));
        assert_eq!(Category::lookup("Gluten-Free"), Some(Category::GlutenFree));
        assert_eq!(Category::lookup("  LOW-CARB "), Some(Category::LowCarb));
        assert_eq!(Category::lookup("picante"), None);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("Salgado").as_deref(), Some("salgado"));
        assert_eq!(normalize_tag(" Picante ").as_deref(), Some("Picante"));
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("vegano"), "Vegano");
        assert_eq!(tag_label("Picante"), "Picante");
    }

    #[test]
    fn test_serialization_uses_tag_value() {
        let json = serde_json::to_string(&Category::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");
    }
}
