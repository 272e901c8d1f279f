//! Series palettes. Defaults are named constants carried through
//! configuration, never module-level mutable state.

use serde::{Deserialize, Serialize};

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
pub const OFFICE10: [&str; 10] = [
    "#4472C4", // blue
    "#ED7D31", // orange
    "#A5A5A5", // gray
    "#FFC000", // gold
    "#5B9BD5", // light blue
    "#70AD47", // green
    "#264478", // dark blue
    "#9E480E", // dark orange
    "#636363", // dark gray
    "#997300", // brownish gold
];

/// Color used for single-series points that carry no color of their own.
pub const PRIMARY_COLOR: &str = OFFICE10[0];

/// An ordered list of series colors (CSS hex strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Build a palette from colors. An empty list falls back to the default.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            Self::default()
        } else {
            Self(colors)
        }
    }

    /// First palette color; used for uncolored single-series points.
    pub fn primary(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or(PRIMARY_COLOR)
    }

    /// Color for series `idx`, cycling when there are more series than colors.
    #[inline]
    pub fn color(&self, idx: usize) -> &str {
        if self.0.is_empty() {
            return OFFICE10[idx % OFFICE10.len()];
        }
        &self.0[idx % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(OFFICE10.iter().map(|c| c.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle() {
        let p = Palette::new(["#111", "#222"]);
        assert_eq!(p.primary(), "#111");
        assert_eq!(p.color(1), "#222");
        assert_eq!(p.color(2), "#111");
    }

    #[test]
    fn empty_palette_is_default() {
        let p = Palette::new(Vec::<String>::new());
        assert_eq!(p, Palette::default());
        assert_eq!(p.primary(), PRIMARY_COLOR);
        assert_eq!(p.len(), 10);
    }
}
