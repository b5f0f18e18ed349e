use crate::avatar::name::{is_latin_extended, upper_initial};

/// Available width (px) assumed when none is configured.
pub const DEFAULT_AVAILABLE_WIDTH: f64 = 32.0;

const NARROW_GLYPH_WEIGHT: f64 = 0.75;
const WIDE_GLYPH_WEIGHT: f64 = 1.5;

/// A label together with the font size it is drawn at.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FittedLabel {
    /// Text to draw; may be shorter than the label passed to [`fit_label`].
    pub label: String,
    /// Font size in px.
    pub font_size: f64,
}

/// Fit `label` into `available_width` within `[min_font_size, max_font_size]`.
///
/// When the label does not fit even at `min_font_size` it collapses to its upper-cased first
/// character and is drawn at `max_font_size`. Returns `None` for an empty label.
pub fn fit_label(
    label: &str,
    available_width: Option<f64>,
    min_font_size: f64,
    max_font_size: f64,
) -> Option<FittedLabel> {
    if label.is_empty() {
        return None;
    }

    let weight = if is_latin_extended(label) {
        NARROW_GLYPH_WEIGHT
    } else {
        WIDE_GLYPH_WEIGHT
    };
    let text_width = label.chars().count() as f64 * weight;
    let available_width = available_width
        .filter(|w| *w != 0.0 && !w.is_nan())
        .unwrap_or(DEFAULT_AVAILABLE_WIDTH);

    // Half-up rounding.
    let font_size = (available_width / text_width + 0.5).floor();

    let fitted = if font_size < min_font_size {
        tracing::debug!(label, font_size, min_font_size, "label does not fit, collapsing");
        FittedLabel {
            label: upper_initial(label),
            font_size: max_font_size,
        }
    } else if font_size > max_font_size {
        FittedLabel {
            label: label.to_owned(),
            font_size: max_font_size,
        }
    } else {
        FittedLabel {
            label: label.to_owned(),
            font_size,
        }
    };
    Some(fitted)
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/fit.rs"]
mod tests;
