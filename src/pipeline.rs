//! End-to-end preparation: classify → normalize → sort, plus layout.
//!
//! ### Example
//! ```
//! use dashchart::{DataPoint, PipelineConfig, pipeline};
//!
//! let points = vec![
//!     DataPoint::new("31-60 days", 4.0),
//!     DataPoint::new("Current", 9.0),
//!     DataPoint::new("0-30 days", 6.0),
//! ];
//! let config = PipelineConfig { sort_type: None, ..Default::default() };
//! let chart = pipeline::prepare_chart(&points, &config, 640.0, 360.0);
//! assert_eq!(chart.dataset.categories(), vec!["Current", "0-30 days", "31-60 days"]);
//! ```

use crate::classify::{CategoryKind, classify};
use crate::config::PipelineConfig;
use crate::layout::{LayoutOptions, LayoutParams, compute_layout, fit_legend_labels};
use crate::models::DataPoint;
use crate::normalize::{NormalizedDataset, normalize_with_palette};
use crate::sort::{SortStrategy, sort_dataset};
use log::debug;
use serde::{Deserialize, Serialize};

/// Sorted dataset plus what the pipeline decided about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedData {
    pub category_kind: CategoryKind,
    /// Strategy that was requested; `None` means the category kind decided.
    pub sort_type: Option<SortStrategy>,
    pub is_multi_series: bool,
    pub dataset: NormalizedDataset,
}

/// One legend item, label already fitted to the legend band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
}

/// Everything the rendering layer receives for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    pub category_kind: CategoryKind,
    pub sort_type: Option<SortStrategy>,
    pub is_multi_series: bool,
    pub dataset: NormalizedDataset,
    pub layout: LayoutParams,
    pub legend: Vec<LegendEntry>,
}

/// Category kind from the caller's hint, or by classifying the points.
pub fn resolve_kind(points: &[DataPoint], config: &PipelineConfig) -> CategoryKind {
    config.data_type_hint.unwrap_or_else(|| classify(points))
}

/// Normalize and sort `points` according to `config`.
pub fn prepare(points: &[DataPoint], config: &PipelineConfig) -> PreparedData {
    let kind = resolve_kind(points, config);
    let normalized = normalize_with_palette(points, &config.palette);
    let dataset = sort_dataset(&normalized, config.sort_type, kind);
    debug!(
        "prepared {} points: kind={kind:?}, multi-series={}, rows={}",
        points.len(),
        dataset.is_multi_series(),
        dataset.len()
    );
    PreparedData {
        category_kind: kind,
        sort_type: config.sort_type,
        is_multi_series: dataset.is_multi_series(),
        dataset,
    }
}

/// Layout options for a prepared dataset. An explicit `series_count` in
/// the config wins over the count found in the data.
pub fn layout_options(dataset: &NormalizedDataset, config: &PipelineConfig) -> LayoutOptions {
    let series_count = if config.series_count > 0 {
        config.series_count
    } else {
        dataset.series().len().max(1)
    };
    let categories = dataset.categories();
    LayoutOptions {
        orientation: config.orientation,
        show_legend: config.show_legend,
        series_count,
        category_count: categories.len(),
        longest_label_chars: categories
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0),
    }
}

/// Prepare data and compute its layout for a `width` × `height` surface.
pub fn prepare_chart(
    points: &[DataPoint],
    config: &PipelineConfig,
    width: f64,
    height: f64,
) -> ChartDescription {
    let prepared = prepare(points, config);
    let options = layout_options(&prepared.dataset, config);
    let layout = compute_layout(width, height, &options);

    let legend = match layout.legend {
        Some(band) => {
            let series = prepared.dataset.series();
            let names: Vec<&str> = series.iter().map(|s| s.display_name.as_str()).collect();
            let labels = fit_legend_labels(&names, layout.inner_width, band.font_size);
            series
                .iter()
                .zip(labels)
                .map(|(s, label)| LegendEntry {
                    key: s.key.clone(),
                    label,
                    color: s.color.clone(),
                })
                .collect()
        }
        None => Vec::new(),
    };

    ChartDescription {
        category_kind: prepared.category_kind,
        sort_type: prepared.sort_type,
        is_multi_series: prepared.is_multi_series,
        dataset: prepared.dataset,
        layout,
        legend,
    }
}
