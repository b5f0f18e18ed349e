use crate::options::model::LabelStrategy;

/// Labels longer than this (in chars) collapse to their upper-cased first character.
const MAX_LABEL_CHARS: usize = 6;

/// A full name as handed over by the caller.
///
/// `Absent` covers "no name at all" as well as values that are not text (see the
/// `serde_json::Value` conversion). `Present("")` selects the same empty label as `Absent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameInput<'a> {
    /// A name string, possibly empty.
    Present(&'a str),
    /// No usable name.
    Absent,
}

impl<'a> From<&'a str> for NameInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Present(s)
    }
}

impl<'a> From<&'a String> for NameInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Present(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for NameInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Self::Absent, Self::Present)
    }
}

impl<'a> From<&'a serde_json::Value> for NameInput<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        v.as_str().map_or(Self::Absent, Self::Present)
    }
}

/// `true` when the first char sits in the Latin-1 range, i.e. the string is treated as
/// space-separated tokens with narrow glyphs.
pub(crate) fn is_latin_extended(s: &str) -> bool {
    s.chars().next().is_some_and(|c| u32::from(c) < 256)
}

/// First char of `s`, upper-cased. Full case mapping, so the result may be longer than one char.
pub(crate) fn upper_initial(s: &str) -> String {
    s.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Pick the display label for `name` under `strategy`.
///
/// Returns an empty string when there is nothing to draw.
pub fn select_label<'a>(name: impl Into<NameInput<'a>>, strategy: LabelStrategy) -> String {
    let full = match name.into() {
        NameInput::Present(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    if is_latin_extended(full) {
        select_latin(full, strategy)
    } else {
        select_wide(full, strategy)
    }
}

fn select_latin(full: &str, strategy: LabelStrategy) -> String {
    let label = match strategy {
        LabelStrategy::FirstName => full.split(' ').next().unwrap_or_default().to_owned(),
        LabelStrategy::LastName => full.split(' ').next_back().unwrap_or_default().to_owned(),
        LabelStrategy::Initials => full.split(' ').map(upper_initial).collect(),
    };

    if label.chars().count() > MAX_LABEL_CHARS {
        tracing::debug!(%label, "label too long, collapsing to initial");
        return upper_initial(&label);
    }
    label
}

fn select_wide(full: &str, strategy: LabelStrategy) -> String {
    let mut chars = full.chars();
    match strategy {
        LabelStrategy::LastName => chars.next_back().map(String::from).unwrap_or_default(),
        LabelStrategy::Initials => chars.next().map(String::from).unwrap_or_default(),
        LabelStrategy::FirstName => {
            chars.next();
            chars.as_str().to_owned()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/name.rs"]
mod tests;
