use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Stores user preferences that persist across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

/// Display theme toggled by the presentation layer. Light unless the user
/// chose otherwise.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

// Stale or hand-edited theme values fall back to the default instead of
// failing the whole config load.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}
