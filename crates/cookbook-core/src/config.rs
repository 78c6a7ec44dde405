//! Application configuration: site text and theme.
//!
//! Loaded once at start-up from a TOML document and handed to the
//! application shell. Every field has a default, so an empty document is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Configuration document compiled into the binary.
pub const EMBEDDED_CONFIG: &str = include_str!("../cookbook.toml");

/// Main configuration structure for Cookbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site-wide text.
    #[serde(default)]
    pub site: SiteConfig,

    /// Colors and fonts.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Recipe form settings.
    #[serde(default)]
    pub form: FormConfig,
}

/// Site-wide text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Heading and document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Name in the welcome line.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Search bar placeholder.
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

/// Theme colors and fonts, exposed to CSS as custom properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: ColorConfig,

    #[serde(default)]
    pub fonts: FontConfig,
}

/// Theme color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_background_100")]
    pub background_100: String,

    #[serde(default = "default_background_200")]
    pub background_200: String,

    #[serde(default = "default_title_light")]
    pub title_light: String,

    #[serde(default = "default_button_light")]
    pub button_light: String,

    #[serde(default = "default_button_dark")]
    pub button_dark: String,

    #[serde(default = "default_hover_button_light")]
    pub hover_button_light: String,
}

/// Theme font stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Body text.
    #[serde(default = "default_body_font")]
    pub body: String,

    /// Display headings.
    #[serde(default = "default_display_font")]
    pub display: String,
}

/// Recipe form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Category tags shown before collapsing into a "+N" chip.
    #[serde(default = "default_max_visible_categories")]
    pub max_visible_categories: usize,
}

// Default value functions
fn default_title() -> String {
    "Cookbook".to_string()
}

fn default_user_name() -> String {
    "Yasmin".to_string()
}

fn default_search_placeholder() -> String {
    "Pesquise sua receita...".to_string()
}

fn default_background_100() -> String {
    "#FDE493".to_string()
}

fn default_background_200() -> String {
    "#FCEFCD".to_string()
}

fn default_title_light() -> String {
    "#60B895".to_string()
}

fn default_button_light() -> String {
    "#ED5964".to_string()
}

fn default_button_dark() -> String {
    "#60B895".to_string()
}

fn default_hover_button_light() -> String {
    "#C94953".to_string()
}

fn default_body_font() -> String {
    "\"Josefin Sans\", sans-serif".to_string()
}

fn default_display_font() -> String {
    "\"Modak\", cursive".to_string()
}

fn default_max_visible_categories() -> usize {
    2
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            user_name: default_user_name(),
            search_placeholder: default_search_placeholder(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background_100: default_background_100(),
            background_200: default_background_200(),
            title_light: default_title_light(),
            button_light: default_button_light(),
            button_dark: default_button_dark(),
            hover_button_light: default_hover_button_light(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            body: default_body_font(),
            display: default_display_font(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_visible_categories: default_max_visible_categories(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
            .map_err(|e| CoreError::config_with_source("embedded cookbook.toml", e))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.theme.colors.tokens() {
            if !is_hex_color(value) {
                return Err(CoreError::config(format!(
                    "theme.colors.{name} must be #RGB or #RRGGBB, got {value:?}"
                )));
            }
        }
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title must not be empty"));
        }
        if self.form.max_visible_categories == 0 {
            return Err(CoreError::config(
                "form.max_visible_categories must be at least 1",
            ));
        }
        Ok(())
    }
}

impl ColorConfig {
    /// Color tokens as (name, value) pairs.
    pub fn tokens(&self) -> [(&'static str, &str); 6] {
        [
            ("background_100", self.background_100.as_str()),
            ("background_200", self.background_200.as_str()),
            ("title_light", self.title_light.as_str()),
            ("button_light", self.button_light.as_str()),
            ("button_dark", self.button_dark.as_str()),
            ("hover_button_light", self.hover_button_light.as_str()),
        ]
    }
}

impl ThemeConfig {
    /// Render the theme as a `:root` block of CSS custom properties.
    ///
    /// Token `button_light` becomes `--color-button-light`.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.colors.tokens() {
            css.push_str(&format!("  --color-{}: {};\n", name.replace('_', "-"), value));
        }
        css.push_str(&format!("  --font-body: {};\n", self.fonts.body));
        css.push_str(&format!("  --font-display: {};\n", self.fonts.display));
        css.push('}');
        css
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
