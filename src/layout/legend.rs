//! Legend band sizing and label fitting for the band below the plot.

use super::text::{estimate_text_width_px, truncate_to_width};
use super::types::{LegendParams, SizeTier};

/// Band height per tier (very small .. extra large).
const LEGEND_BAND_PX: [f64; 5] = [18.0, 18.0, 22.0, 26.0, 26.0];
const LEGEND_FONT_PX: [f64; 5] = [8.0, 9.0, 10.0, 11.0, 12.0];
const LEGEND_MARKER_PX: [f64; 5] = [6.0, 7.0, 8.0, 10.0, 10.0];

/// Horizontal space per legend item that is not label text (marker + gaps).
const ITEM_CHROME_PX: f64 = 20.0;

/// A legend is only worth its space for two or more series.
pub fn legend_needed(show_legend: bool, series_count: usize) -> bool {
    show_legend && series_count >= 2
}

/// Tiered legend band. The height is added to the bottom margin.
pub fn legend_params(tier: SizeTier) -> LegendParams {
    let i = tier.index();
    LegendParams {
        height: LEGEND_BAND_PX[i],
        font_size: LEGEND_FONT_PX[i],
        marker_size: LEGEND_MARKER_PX[i],
    }
}

/// Fit legend labels into a single row of equal slots spanning `band_width_px`,
/// truncating labels that do not fit their slot.
pub fn fit_legend_labels(labels: &[&str], band_width_px: f64, font_px: f64) -> Vec<String> {
    if labels.is_empty() {
        return Vec::new();
    }
    let slot = band_width_px.max(0.0) / labels.len() as f64;
    let text_cap = (slot - ITEM_CHROME_PX).max(0.0);
    labels
        .iter()
        .map(|label| {
            if estimate_text_width_px(label, font_px) <= text_cap {
                label.to_string()
            } else {
                truncate_to_width(label, font_px, text_cap)
            }
        })
        .collect()
}
