//! Series normalization: detect multi-series input and reshape it into
//! either a flat list or a wide (pivoted) table plus a series registry.
//!
//! Normalization never reorders categories; ordering is the sort engine's job.

use crate::models::DataPoint;
use crate::palette::Palette;
use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name given to points that belong to a multi-series dataset but carry no series name.
pub const DEFAULT_SERIES_NAME: &str = "Series 1";

/// One entry of a single-series dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleEntry {
    pub category: String,
    pub value: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_order: Option<i64>,
}

/// One series of a wide table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    /// Synthetic, stable key (`series_0`, `series_1`, ...) in first-seen order.
    pub key: String,
    pub display_name: String,
    pub color: String,
}

/// One category row of a wide table. Series without a value for this
/// category are absent from `values`, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WideRow {
    pub category: String,
    pub values: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_order: Option<i64>,
}

impl WideRow {
    pub fn get(&self, series_key: &str) -> Option<f64> {
        self.values.get(series_key).copied()
    }

    /// Sum over the series present in this row.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum NormalizedDataset {
    Simple {
        entries: Vec<SimpleEntry>,
    },
    Wide {
        rows: Vec<WideRow>,
        series: Vec<SeriesDescriptor>,
    },
}

impl NormalizedDataset {
    pub fn is_multi_series(&self) -> bool {
        matches!(self, NormalizedDataset::Wide { .. })
    }

    /// Number of rows (simple entries or wide rows).
    pub fn len(&self) -> usize {
        match self {
            NormalizedDataset::Simple { entries } => entries.len(),
            NormalizedDataset::Wide { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Series registry; empty for single-series data.
    pub fn series(&self) -> &[SeriesDescriptor] {
        match self {
            NormalizedDataset::Simple { .. } => &[],
            NormalizedDataset::Wide { series, .. } => series,
        }
    }

    /// Category labels in row order.
    pub fn categories(&self) -> Vec<&str> {
        match self {
            NormalizedDataset::Simple { entries } => {
                entries.iter().map(|e| e.category.as_str()).collect()
            }
            NormalizedDataset::Wide { rows, .. } => {
                rows.iter().map(|r| r.category.as_str()).collect()
            }
        }
    }
}

/// Normalize with the default palette.
pub fn normalize(points: &[DataPoint]) -> NormalizedDataset {
    normalize_with_palette(points, &Palette::default())
}

/// Normalize, taking default colors from `palette`.
pub fn normalize_with_palette(points: &[DataPoint], palette: &Palette) -> NormalizedDataset {
    if !is_multi_series(points) {
        let entries = points
            .iter()
            .map(|p| SimpleEntry {
                category: p.category.clone(),
                value: p.value,
                color: p
                    .color
                    .clone()
                    .unwrap_or_else(|| palette.primary().to_string()),
                original_order: p.original_order,
            })
            .collect();
        return NormalizedDataset::Simple { entries };
    }

    // Series registry in first-seen order.
    let mut series: Vec<SeriesDescriptor> = Vec::new();
    let mut key_by_name: AHashMap<&str, usize> = AHashMap::new();
    // Rows in first-seen category order.
    let mut rows: Vec<WideRow> = Vec::new();
    let mut row_by_category: AHashMap<&str, usize> = AHashMap::new();

    for p in points {
        let name = p.series_name.as_deref().unwrap_or(DEFAULT_SERIES_NAME);
        let series_idx = *key_by_name.entry(name).or_insert_with(|| {
            let idx = series.len();
            series.push(SeriesDescriptor {
                key: format!("series_{idx}"),
                display_name: name.to_string(),
                color: p
                    .color
                    .clone()
                    .unwrap_or_else(|| palette.color(idx).to_string()),
            });
            idx
        });

        let row_idx = *row_by_category
            .entry(p.category.as_str())
            .or_insert_with(|| {
                rows.push(WideRow {
                    category: p.category.clone(),
                    values: BTreeMap::new(),
                    original_order: None,
                });
                rows.len() - 1
            });
        let row = &mut rows[row_idx];
        if row.original_order.is_none() {
            row.original_order = p.original_order;
        }
        row.values.insert(series[series_idx].key.clone(), p.value);
    }

    debug!(
        "normalized {} points into {} wide rows across {} series",
        points.len(),
        rows.len(),
        series.len()
    );
    NormalizedDataset::Wide { rows, series }
}

/// A dataset is multi-series when some category holds more than one
/// distinct series name, or a single series name but several distinct
/// explicit colors.
pub fn is_multi_series(points: &[DataPoint]) -> bool {
    #[derive(Default)]
    struct Group<'a> {
        names: AHashSet<Option<&'a str>>,
        colors: AHashSet<&'a str>,
    }

    let mut groups: AHashMap<&str, Group<'_>> = AHashMap::new();
    for p in points {
        let g = groups.entry(p.category.as_str()).or_default();
        g.names.insert(p.series_name.as_deref());
        if let Some(c) = p.color.as_deref() {
            g.colors.insert(c);
        }
    }
    groups
        .values()
        .any(|g| g.names.len() > 1 || g.colors.len() > 1)
}
