//! Process-wide default options.
//!
//! Defaults start out as [`Options::default`] and change only through [`configure`] or
//! [`reset_defaults`], normally once at startup. Readers always get a snapshot, so a composition
//! never observes a half-applied configuration.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::avatar::compose::{AvatarDescriptor, compose};
use crate::avatar::name::NameInput;
use crate::foundation::error::AvatarResult;
use crate::options::model::{Options, OptionsOverrides};

static DEFAULTS: LazyLock<RwLock<Options>> = LazyLock::new(|| RwLock::new(Options::default()));

/// Snapshot of the current process-wide defaults.
pub fn defaults() -> Options {
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Merge `overrides` into the process-wide defaults.
///
/// The merged result is validated first; on error the defaults are left untouched.
pub fn configure(overrides: &OptionsOverrides) -> AvatarResult<()> {
    let mut guard = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    let next = guard.merged(overrides);
    next.validate()?;
    tracing::debug!(?overrides, "default avatar options updated");
    *guard = next;
    Ok(())
}

/// Restore the built-in defaults.
pub fn reset_defaults() {
    *DEFAULTS.write().unwrap_or_else(PoisonError::into_inner) = Options::default();
}

/// Compose against the process-wide defaults with per-call `overrides` on top.
pub fn compose_with_defaults<'a>(
    name: impl Into<NameInput<'a>>,
    overrides: &OptionsOverrides,
) -> AvatarResult<AvatarDescriptor> {
    let options = defaults().merged(overrides);
    options.validate()?;
    Ok(compose(name, &options))
}

#[cfg(test)]
#[path = "../../tests/unit/options/global.rs"]
mod tests;
