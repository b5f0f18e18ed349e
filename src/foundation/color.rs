use std::fmt;

/// A CSS color value (`"#1D8FE1"`, `"#FFF"`, `"rebeccapurple"`, ...).
///
/// Colors are opaque to the avatar transform: they are picked and passed through verbatim to
/// whichever renderer consumes the descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a CSS color string.
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// The CSS text of this color.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered set of candidate background colors.
///
/// May be empty only when a fixed background color makes it unused; [`crate::Options::validate`]
/// enforces that.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Build a palette.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Build a palette from CSS color strings.
    pub fn from_css<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(colors.into_iter().map(Color::new).collect())
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there is nothing to pick from.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `index` modulo the palette length; `None` for an empty palette.
    pub fn get_wrapped(&self, index: usize) -> Option<&Color> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(index % self.0.len())
    }

    /// All colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// The built-in palette: picks from the Material color tool.
    pub fn material() -> Self {
        Self::from_css(["#1D8FE1", "#E8A010", "#0BA194", "#E8541E"])
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
