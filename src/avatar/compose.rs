use crate::avatar::color::assign_color;
use crate::avatar::fit::{FittedLabel, fit_label};
use crate::avatar::name::{NameInput, select_label};
use crate::foundation::color::Color;
use crate::foundation::rng::{RandomSource, Rng64};
use crate::options::model::Options;

/// Renderer-agnostic description of a placeholder avatar.
///
/// Produced by [`compose`]; consumed by [`crate::to_svg`], [`crate::rasterize`] or any other
/// renderer. `text` is `None` when the name produced no label, in which case the avatar is a plain
/// colored block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDescriptor {
    /// Fill color of the whole avatar.
    pub background_color: Color,
    /// Foreground color for the label.
    pub text_color: Color,
    /// CSS font family list for the label.
    pub font_family: String,
    /// Label and its size; absent for nameless avatars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FittedLabel>,
    /// Avatar width (px), when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Avatar height (px); equals `width` unless configured separately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl AvatarDescriptor {
    /// The drawn label, or `""` when there is none.
    pub fn label(&self) -> &str {
        self.text.as_ref().map_or("", |t| t.label.as_str())
    }
}

/// Build the avatar descriptor for `name`.
///
/// Deterministic for any name that yields a label. Nameless avatars get a random palette color.
pub fn compose<'a>(name: impl Into<NameInput<'a>>, options: &Options) -> AvatarDescriptor {
    compose_with_rng(name.into(), options, &mut Rng64::from_entropy())
}

/// [`compose`] with an explicit random source for the nameless case.
#[tracing::instrument(level = "debug", skip(options, rng))]
pub fn compose_with_rng<R: RandomSource + ?Sized>(
    name: NameInput<'_>,
    options: &Options,
    rng: &mut R,
) -> AvatarDescriptor {
    let label = select_label(name, options.label_strategy);

    let text = fit_label(
        &label,
        options.width,
        options.min_font_size,
        options.max_font_size,
    );

    // The fitted label decides the slot, not the selected one.
    let fitted_label = text.as_ref().map_or("", |t| t.label.as_str());
    let background_color = assign_color(
        fitted_label,
        &options.palette,
        options.background_color.as_ref(),
        rng,
    );

    // Dimensions are only emitted when a width is configured.
    let (width, height) = match options.width {
        Some(w) => (Some(w), Some(options.height.unwrap_or(w))),
        None => (None, None),
    };

    AvatarDescriptor {
        background_color,
        text_color: options.text_color.clone(),
        font_family: options.font_family.clone(),
        text,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/compose.rs"]
mod tests;
