use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub foreground: String,
    pub background: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThemeSpec {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
}

impl ThemeSpec {
    fn preset(id: &str, name: &str, foreground: &str, background: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            colors: ThemeColors {
                foreground: foreground.to_string(),
                background: background.to_string(),
            },
        }
    }

    /// Default black-on-white theme.
    pub fn classic() -> Self {
        Self::preset("classic", "Classic", "#000000", "#FFFFFF")
    }
}

/// The fixed theme palette offered by the generator.
pub fn builtin_themes() -> Vec<ThemeSpec> {
    vec![
        ThemeSpec::classic(),
        ThemeSpec::preset("minimal", "Minimal", "#374151", "#f9fafb"),
        ThemeSpec::preset("inverse", "Dark", "#ffffff", "#000000"),
        ThemeSpec::preset("blue", "Blue", "#1e40af", "#eff6ff"),
        ThemeSpec::preset("green", "Green", "#166534", "#f0fdf4"),
        ThemeSpec::preset("purple", "Purple", "#7c3aed", "#f3f4f6"),
        ThemeSpec::preset("red", "Red", "#dc2626", "#fef2f2"),
        ThemeSpec::preset("orange", "Orange", "#ea580c", "#fff7ed"),
    ]
}

pub fn find_theme(id: &str) -> Option<ThemeSpec> {
    builtin_themes().into_iter().find(|theme| theme.id == id)
}

/// Resolve a theme id against the palette (unknown ids fall back to classic)
/// and apply any explicit color overrides on top.
pub fn resolve_theme(
    id: Option<&str>,
    foreground: Option<&str>,
    background: Option<&str>,
) -> ThemeSpec {
    let mut theme = id
        .and_then(find_theme)
        .unwrap_or_else(ThemeSpec::classic);

    if let Some(foreground) = foreground {
        theme.colors.foreground = foreground.to_string();
    }
    if let Some(background) = background {
        theme.colors.background = background.to_string();
    }

    theme
}
