use crate::foundation::color::{Color, Palette};
use crate::foundation::rng::RandomSource;

/// Pick the background color for `label`.
///
/// - `explicit` wins unconditionally.
/// - A non-empty label maps its first code point onto the palette (`cp mod len`), so a given
///   leading character always lands on the same slot.
/// - An empty label draws a uniformly random slot from `rng`. This is the only place `rng` is
///   consulted.
///
/// An empty palette without `explicit` is rejected by [`crate::Options::validate`]; should one
/// reach this point anyway the result is `transparent`.
pub fn assign_color<R: RandomSource + ?Sized>(
    label: &str,
    palette: &Palette,
    explicit: Option<&Color>,
    rng: &mut R,
) -> Color {
    if let Some(c) = explicit {
        return c.clone();
    }

    let slot = match label.chars().next() {
        Some(first) => palette.get_wrapped(u32::from(first) as usize),
        None if palette.is_empty() => None,
        None => {
            let len = palette.len();
            let idx = ((rng.next_f64_01() * len as f64).floor() as usize).min(len - 1);
            tracing::trace!(idx, "no label, random palette slot");
            palette.get_wrapped(idx)
        }
    };

    slot.cloned().unwrap_or_else(|| {
        tracing::warn!("empty palette and no background color");
        Color::new("transparent")
    })
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/color.rs"]
mod tests;
