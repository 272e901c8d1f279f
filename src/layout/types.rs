//! Public types and constants for the layout module.

use serde::{Deserialize, Serialize};

/// Bar orientation. Horizontal charts put category labels on the left axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Discrete density bucket derived from surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    VerySmall,
    Small,
    Normal,
    Large,
    ExtraLarge,
}

impl SizeTier {
    /// Position in the per-tier tables (0 = very small).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Threshold flags, each evaluated on its own. A surface can be wide enough
/// to be `large` and still `very_small` because it is very short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeClass {
    pub very_small: bool,
    pub small: bool,
    pub large: bool,
    pub extra_large: bool,
}

/// Below this width (or [`VERY_SMALL_HEIGHT`] height) a chart is very small.
pub const VERY_SMALL_WIDTH: f64 = 180.0;
pub const VERY_SMALL_HEIGHT: f64 = 140.0;
pub const SMALL_WIDTH: f64 = 250.0;
pub const SMALL_HEIGHT: f64 = 180.0;
/// Above this width a chart is large.
pub const LARGE_WIDTH: f64 = 400.0;
pub const EXTRA_LARGE_WIDTH: f64 = 600.0;

impl SizeClass {
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        Self {
            very_small: width < VERY_SMALL_WIDTH || height < VERY_SMALL_HEIGHT,
            small: width < SMALL_WIDTH || height < SMALL_HEIGHT,
            large: width > LARGE_WIDTH,
            extra_large: width > EXTRA_LARGE_WIDTH,
        }
    }

    /// Effective tier. The tighter-space flags dominate the roomier ones.
    pub fn tier(self) -> SizeTier {
        if self.very_small {
            SizeTier::VerySmall
        } else if self.small {
            SizeTier::Small
        } else if self.extra_large {
            SizeTier::ExtraLarge
        } else if self.large {
            SizeTier::Large
        } else {
            SizeTier::Normal
        }
    }
}

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Typography and density of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisParams {
    pub tick_count: usize,
    pub font_size: f64,
    /// Labels longer than this many characters are truncated with `…`.
    /// `None` for numeric axes.
    pub label_max_chars: Option<usize>,
    /// Label rotation in degrees (0 = horizontal text).
    pub label_rotation: f64,
}

/// Legend band below the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendParams {
    pub height: f64,
    pub font_size: f64,
    pub marker_size: f64,
}

/// Point marker and line geometry for line-style charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerParams {
    pub radius: f64,
    pub active_radius: f64,
    pub stroke_width: f64,
}

/// Inputs of a layout pass besides the surface size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub orientation: Orientation,
    pub show_legend: bool,
    pub series_count: usize,
    /// Number of category rows; 0 when unknown.
    pub category_count: usize,
    /// Length in characters of the longest category label; 0 when unknown.
    pub longest_label_chars: usize,
}

/// Everything a renderer needs to size a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    pub size_class: SizeClass,
    pub tier: SizeTier,
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
    pub x_axis: AxisParams,
    pub y_axis: AxisParams,
    pub legend: Option<LegendParams>,
    pub marker: MarkerParams,
    pub show_value_labels: bool,
    pub value_label_font_size: f64,
}

impl LayoutParams {
    /// Axis carrying the category labels.
    pub fn category_axis(&self) -> &AxisParams {
        match self.orientation {
            Orientation::Vertical => &self.x_axis,
            Orientation::Horizontal => &self.y_axis,
        }
    }

    /// Axis carrying the numeric scale.
    pub fn value_axis(&self) -> &AxisParams {
        match self.orientation {
            Orientation::Vertical => &self.y_axis,
            Orientation::Horizontal => &self.x_axis,
        }
    }
}
