//! Adaptive layout: derive margins, typography, tick density, label
//! truncation and marker geometry from the rendering surface size.
//!
//! - Size tiers: very small / small / normal / large / extra large
//! - Every per-tier parameter is non-decreasing from very small to extra large
//! - Legend band is added to the bottom margin, never carved out of it
//! - Inner plot area never drops below [`MIN_INNER_PX`] on either axis

pub mod legend;
pub mod text;
pub mod types;

pub use legend::{fit_legend_labels, legend_needed, legend_params};
pub use text::{estimate_text_width_px, truncate_label, truncate_to_width};
pub use types::{
    AxisParams, LayoutOptions, LayoutParams, LegendParams, Margins, MarkerParams, Orientation,
    SizeClass, SizeTier,
};

use log::trace;
use text::estimate_chars_width_px;

/// Hard floor for the inner plotting area on each axis.
pub const MIN_INNER_PX: f64 = 40.0;

/// Below this inner span (either axis) value labels are not drawn.
pub const MIN_VALUE_LABEL_SPAN_PX: f64 = 150.0;

// Per-tier tables, indexed by `SizeTier::index()` (very small .. extra large).
const MARGIN_TOP: [f64; 5] = [4.0, 6.0, 10.0, 12.0, 16.0];
const MARGIN_RIGHT: [f64; 5] = [4.0, 8.0, 12.0, 16.0, 20.0];
const MARGIN_BOTTOM_VERTICAL: [f64; 5] = [16.0, 22.0, 30.0, 36.0, 40.0];
const MARGIN_LEFT_VERTICAL: [f64; 5] = [22.0, 28.0, 36.0, 44.0, 52.0];
const MARGIN_BOTTOM_HORIZONTAL: [f64; 5] = [14.0, 18.0, 24.0, 28.0, 32.0];
// Horizontal bars carry category labels on the left, not numeric ticks.
const MARGIN_LEFT_HORIZONTAL: [f64; 5] = [36.0, 50.0, 70.0, 90.0, 110.0];

const VALUE_TICKS: [usize; 5] = [2, 3, 5, 6, 8];
const CATEGORY_TICK_CAP: [usize; 5] = [3, 4, 6, 10, 12];

const VALUE_FONT_VERTICAL: [f64; 5] = [7.0, 8.0, 10.0, 11.0, 12.0];
const CATEGORY_FONT_VERTICAL: [f64; 5] = [6.0, 8.0, 10.0, 12.0, 14.0];
const CATEGORY_FONT_HORIZONTAL: [f64; 5] = [7.0, 9.0, 10.0, 12.0, 13.0];
const VALUE_FONT_HORIZONTAL: [f64; 5] = [6.0, 8.0, 10.0, 11.0, 12.0];
const VALUE_LABEL_FONT: [f64; 5] = [6.0, 7.0, 9.0, 10.0, 11.0];

const LABEL_MAX_CHARS: [usize; 5] = [2, 5, 8, 12, 15];

const MARKER_RADIUS: [f64; 5] = [1.5, 2.0, 3.0, 4.0, 5.0];
const STROKE_WIDTH: [f64; 5] = [1.0, 1.5, 2.0, 2.0, 2.5];

/// Upper bound on the extra bottom margin rotated labels may claim.
const ROTATED_LABEL_EXTRA_CAP: [f64; 5] = [8.0, 14.0, 24.0, 32.0, 40.0];
const ROTATED_LABEL_DEGREES: f64 = -45.0;

/// Size tier for a surface.
pub fn size_tier(width: f64, height: f64) -> SizeTier {
    SizeClass::from_dimensions(sanitize(width), sanitize(height)).tier()
}

/// Negative, NaN and infinite dimensions are treated as zero.
fn sanitize(px: f64) -> f64 {
    if px.is_finite() { px.max(0.0) } else { 0.0 }
}

/// Compute every layout parameter for a `width` × `height` surface.
pub fn compute_layout(width: f64, height: f64, options: &LayoutOptions) -> LayoutParams {
    let width = sanitize(width);
    let height = sanitize(height);
    let size_class = SizeClass::from_dimensions(width, height);
    let tier = size_class.tier();
    let i = tier.index();
    let vertical = options.orientation == Orientation::Vertical;

    let mut margins = if vertical {
        Margins {
            top: MARGIN_TOP[i],
            right: MARGIN_RIGHT[i],
            bottom: MARGIN_BOTTOM_VERTICAL[i],
            left: MARGIN_LEFT_VERTICAL[i],
        }
    } else {
        Margins {
            top: MARGIN_TOP[i],
            right: MARGIN_RIGHT[i],
            bottom: MARGIN_BOTTOM_HORIZONTAL[i],
            left: MARGIN_LEFT_HORIZONTAL[i],
        }
    };

    let legend =
        legend_needed(options.show_legend, options.series_count).then(|| legend_params(tier));
    if let Some(l) = legend {
        margins.bottom += l.height;
    }

    let (category_font, value_font) = if vertical {
        (CATEGORY_FONT_VERTICAL[i], VALUE_FONT_VERTICAL[i])
    } else {
        (CATEGORY_FONT_HORIZONTAL[i], VALUE_FONT_HORIZONTAL[i])
    };
    let label_max_chars = LABEL_MAX_CHARS[i];

    // Vertical bars: tilt category labels that would collide with their neighbours.
    let mut label_rotation = 0.0;
    if vertical && options.category_count > 0 && options.longest_label_chars > 0 {
        let band = inner_span(width, margins.horizontal()) / options.category_count as f64;
        let shown_chars = if options.longest_label_chars > label_max_chars {
            label_max_chars + 1
        } else {
            options.longest_label_chars
        };
        let label_px = estimate_chars_width_px(shown_chars, category_font);
        if label_px > band {
            label_rotation = ROTATED_LABEL_DEGREES;
            let extra = (label_px * std::f64::consts::FRAC_1_SQRT_2).ceil();
            margins.bottom += extra.min(ROTATED_LABEL_EXTRA_CAP[i]);
        }
    }

    let inner_width = inner_span(width, margins.horizontal());
    let inner_height = inner_span(height, margins.vertical());

    let category_ticks = if options.category_count > 0 {
        options.category_count.min(CATEGORY_TICK_CAP[i])
    } else {
        CATEGORY_TICK_CAP[i]
    };
    let category_axis = AxisParams {
        tick_count: category_ticks,
        font_size: category_font,
        label_max_chars: Some(label_max_chars),
        label_rotation,
    };
    let value_axis = AxisParams {
        tick_count: VALUE_TICKS[i],
        font_size: value_font,
        label_max_chars: None,
        label_rotation: 0.0,
    };
    let (x_axis, y_axis) = if vertical {
        (category_axis, value_axis)
    } else {
        (value_axis, category_axis)
    };

    let marker = MarkerParams {
        radius: MARKER_RADIUS[i],
        active_radius: MARKER_RADIUS[i] + 2.0,
        stroke_width: STROKE_WIDTH[i],
    };

    let show_value_labels =
        inner_width >= MIN_VALUE_LABEL_SPAN_PX && inner_height >= MIN_VALUE_LABEL_SPAN_PX;

    trace!(
        "layout {width}x{height} -> {tier:?}, inner {inner_width}x{inner_height}, \
         value labels: {show_value_labels}"
    );

    LayoutParams {
        width,
        height,
        orientation: options.orientation,
        size_class,
        tier,
        margins,
        inner_width,
        inner_height,
        x_axis,
        y_axis,
        legend,
        marker,
        show_value_labels,
        value_label_font_size: VALUE_LABEL_FONT[i],
    }
}

fn inner_span(outer: f64, margins: f64) -> f64 {
    (outer - margins).max(MIN_INNER_PX)
}
