use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::color::{Color, Palette};
use crate::foundation::error::{AvatarError, AvatarResult};

/// Which part of a full name becomes the avatar label.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum LabelStrategy {
    /// First space-separated token (Latin) or everything after the first character (wide-script).
    FirstName,
    /// Last space-separated token (Latin) or the final character (wide-script).
    #[default]
    LastName,
    /// Upper-cased first letter of every token (Latin) or the first character (wide-script).
    Initials,
}

/// Complete avatar configuration.
///
/// Every field has a default (see [`Options::default`]); JSON documents may specify any subset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Label selection strategy.
    #[serde(alias = "nameType")]
    pub label_strategy: LabelStrategy,
    /// CSS font family list, passed through to renderers.
    pub font_family: String,
    /// Candidate background colors.
    #[serde(alias = "backgroundColors")]
    pub palette: Palette,
    /// Fixed background color; bypasses palette selection when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Foreground text color.
    pub text_color: Color,
    /// Lower font size bound (px).
    pub min_font_size: f64,
    /// Upper font size bound (px).
    pub max_font_size: f64,
    /// Target avatar width (px). Also the width available for the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Target avatar height (px); defaults to `width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            label_strategy: LabelStrategy::LastName,
            font_family: "Verdana, Geneva, sans-serif".to_owned(),
            palette: Palette::material(),
            background_color: None,
            text_color: Color::new("#FFF"),
            min_font_size: 8.0,
            max_font_size: 16.0,
            width: None,
            height: None,
        }
    }
}

impl Options {
    /// Parse options from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> AvatarResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AvatarError::validation(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AvatarError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Shallow field-by-field override: every `Some` in `overrides` replaces the value here.
    pub fn merged(&self, overrides: &OptionsOverrides) -> Self {
        let mut out = self.clone();
        if let Some(v) = overrides.label_strategy {
            out.label_strategy = v;
        }
        if let Some(v) = &overrides.font_family {
            out.font_family = v.clone();
        }
        if let Some(v) = &overrides.palette {
            out.palette = v.clone();
        }
        if let Some(v) = &overrides.background_color {
            out.background_color = Some(v.clone());
        }
        if let Some(v) = &overrides.text_color {
            out.text_color = v.clone();
        }
        if let Some(v) = overrides.min_font_size {
            out.min_font_size = v;
        }
        if let Some(v) = overrides.max_font_size {
            out.max_font_size = v;
        }
        if let Some(v) = overrides.width {
            out.width = Some(v);
        }
        if let Some(v) = overrides.height {
            out.height = Some(v);
        }
        out
    }

    /// Check the numeric invariants, and that there is a palette to pick from unless a fixed
    /// background color is set.
    pub fn validate(&self) -> AvatarResult<()> {
        fn positive(name: &str, v: f64) -> AvatarResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(AvatarError::validation(format!(
                    "{name} must be a positive finite number, got {v}"
                )));
            }
            Ok(())
        }

        positive("minFontSize", self.min_font_size)?;
        positive("maxFontSize", self.max_font_size)?;
        if self.min_font_size > self.max_font_size {
            return Err(AvatarError::validation(format!(
                "minFontSize ({}) must be <= maxFontSize ({})",
                self.min_font_size, self.max_font_size
            )));
        }
        if let Some(w) = self.width {
            positive("width", w)?;
        }
        if let Some(h) = self.height {
            positive("height", h)?;
        }
        if self.palette.is_empty() && self.background_color.is_none() {
            return Err(AvatarError::validation(
                "palette must contain at least one color unless backgroundColor is set",
            ));
        }
        Ok(())
    }
}

/// Per-call or configuration overrides; `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsOverrides {
    /// See [`Options::label_strategy`].
    #[serde(alias = "nameType", skip_serializing_if = "Option::is_none")]
    pub label_strategy: Option<LabelStrategy>,
    /// See [`Options::font_family`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// See [`Options::palette`].
    #[serde(alias = "backgroundColors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    /// See [`Options::background_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// See [`Options::text_color`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// See [`Options::min_font_size`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_font_size: Option<f64>,
    /// See [`Options::max_font_size`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_font_size: Option<f64>,
    /// See [`Options::width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// See [`Options::height`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl OptionsOverrides {
    /// Parse overrides from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AvatarResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AvatarError::validation(format!("parse options JSON: {e}")))
    }

    /// Parse overrides from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AvatarError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/model.rs"]
mod tests;
