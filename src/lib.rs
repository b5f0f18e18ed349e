//! namedavatar derives placeholder avatars from people's names.
//!
//! A full name goes in, an [`AvatarDescriptor`] comes out: a short label, a font size that fits
//! it, a background color from a palette, plus pass-through styling. Descriptors are plain data;
//! the crate ships an SVG serializer and a CPU rasterizer, but any renderer can consume them.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `name + LabelStrategy -> label` ([`select_label`])
//! 2. **Fit**: `label + width + size bounds -> (label, font size)` ([`fit_label`])
//! 3. **Color**: `fitted label + palette -> background` ([`assign_color`])
//! 4. **Render** (optional): `descriptor -> SVG / data URI / RGBA8 / PNG`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same name and options always give the same avatar. The only
//!   exception is a nameless avatar, whose color is drawn from a [`RandomSource`].
//! - **Total**: composing never fails; errors only come from options validation and rendering.
//!
//! # Example
//!
//! ```
//! use namedavatar::{LabelStrategy, Options, compose};
//!
//! let opts = Options {
//!     label_strategy: LabelStrategy::LastName,
//!     width: Some(32.0),
//!     ..Options::default()
//! };
//! let avatar = compose("John Smith", &opts);
//! assert_eq!(avatar.label(), "Smith");
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod avatar;
mod foundation;
mod options;
mod render;

pub use avatar::color::assign_color;
pub use avatar::compose::{AvatarDescriptor, compose, compose_with_rng};
pub use avatar::fit::{DEFAULT_AVAILABLE_WIDTH, FittedLabel, fit_label};
pub use avatar::name::{NameInput, select_label};
pub use foundation::color::{Color, Palette};
pub use foundation::error::{AvatarError, AvatarResult};
pub use foundation::rng::{RandomSource, Rng64};
pub use options::global::{compose_with_defaults, configure, defaults, reset_defaults};
pub use options::model::{LabelStrategy, Options, OptionsOverrides};
pub use render::raster::{AvatarBitmap, rasterize};
pub use render::svg::{TextBaseline, to_data_uri, to_svg};
