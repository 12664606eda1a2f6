//! Colour theme.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::store::THEME_KEY;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Decodes the stored value, falling back to `default` when it is
    /// missing or unrecognised.
    pub fn decode(raw: Option<&str>, default: Theme) -> Self {
        match raw {
            None => default,
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unrecognised {} value {:?}", THEME_KEY, value);
                default
            }),
        }
    }

    /// Stored form: the plain lowercase name.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}
