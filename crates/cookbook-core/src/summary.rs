//! Read-only recipe summaries shown as cards.

use serde::{Deserialize, Serialize};

/// A recipe as displayed on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe title.
    pub title: String,

    /// Short description.
    pub description: String,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Preparation hours.
    #[serde(default)]
    pub hour: Option<u32>,

    /// Preparation minutes.
    #[serde(default)]
    pub minute: Option<u32>,

    /// Category names, shown in order.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Number of portions.
    #[serde(default)]
    pub portion: Option<String>,

    /// Whether the recipe is marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

impl RecipeSummary {
    /// Create a new summary with only title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the preparation duration.
    pub fn with_duration(mut self, hour: Option<u32>, minute: Option<u32>) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    /// Set the categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the portion count.
    pub fn with_portion(mut self, portion: impl Into<String>) -> Self {
        self.portion = Some(portion.into());
        self
    }

    /// Set the favorite flag.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Duration chip text, or `None` when no chip should be shown.
    pub fn duration_label(&self) -> Option<String> {
        duration_label(self.hour, self.minute)
    }
}

/// Format an hour/minute pair as "2 hr 30 min", "2 hr" or "30 min".
///
/// Zero counts as absent, so `(Some(0), Some(0))` has no label.
pub fn duration_label(hour: Option<u32>, minute: Option<u32>) -> Option<String> {
    match (hour.filter(|h| *h > 0), minute.filter(|m| *m > 0)) {
        (Some(h), Some(m)) => Some(format!("{h} hr {m} min")),
        (Some(h), None) => Some(format!("{h} hr")),
        (None, Some(m)) => Some(format!("{m} min")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_label() {
        assert_eq!(duration_label(Some(2), Some(30)).as_deref(), Some("2 hr 30 min"));
        assert_eq!(duration_label(Some(2), None).as_deref(), Some("2 hr"));
        assert_eq!(duration_label(None, Some(45)).as_deref(), Some("45 min"));
        assert_eq!(duration_label(None, None), None);
    }

    #[test]
    fn test_duration_label_zero_is_absent() {
        assert_eq!(duration_label(Some(0), Some(15)).as_deref(), Some("15 min"));
        assert_eq!(duration_label(Some(1), Some(0)).as_deref(), Some("1 hr"));
        assert_eq!(duration_label(Some(0), Some(0)), None);
    }

    #[test]
    fn test_builder() {
        let recipe = RecipeSummary::new("Lasanha Bolonhesa", "Massa ao forno.")
            .with_image("https://example.com/lasanha.jpg")
            .with_duration(Some(2), Some(30))
            .with_categories(["Salgado", "Vegano"])
            .with_portion("4")
            .with_favorite(true);

        assert_eq!(recipe.duration_label().as_deref(), Some("2 hr 30 min"));
        assert_eq!(recipe.categories, vec!["Salgado", "Vegano"]);
        assert_eq!(recipe.portion.as_deref(), Some("4"));
        assert!(recipe.is_favorite);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"title":"Pão","description":"Caseiro"}"#).unwrap();
        assert_eq!(recipe.title, "Pão");
        assert!(recipe.categories.is_empty());
        assert!(recipe.duration_label().is_none());
        assert!(!recipe.is_favorite);
    }
}
