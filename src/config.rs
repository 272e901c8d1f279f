//! Pipeline configuration surface.
//!
//! Deserialized from camelCase JSON; every field has a default so partial
//! documents work. An unrecognized `sortType` is kept as "no strategy",
//! which makes the sort engine fall back to the category-driven order.

use crate::classify::CategoryKind;
use crate::error::PipelineResult;
use crate::layout::Orientation;
use crate::palette::Palette;
use crate::sort::SortStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// `None` when absent or unrecognized.
    #[serde(deserialize_with = "de_lenient_strategy")]
    pub sort_type: Option<SortStrategy>,
    /// Offer chronological strategies in sort menus.
    pub show_time_options: bool,
    /// Offer aging/priority strategies in sort menus.
    pub show_business_options: bool,
    /// Skip classification and use this kind.
    pub data_type_hint: Option<CategoryKind>,
    pub orientation: Orientation,
    /// Series count for layout; `0` means "take it from the data".
    pub series_count: usize,
    pub show_legend: bool,
    pub palette: Palette,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sort_type: Some(SortStrategy::Default),
            show_time_options: false,
            show_business_options: false,
            data_type_hint: None,
            orientation: Orientation::Vertical,
            series_count: 0,
            show_legend: true,
            palette: Palette::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(s: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Serde helper: unknown or non-string strategy names become `None`.
fn de_lenient_strategy<'de, D>(deserializer: D) -> Result<Option<SortStrategy>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(SortStrategy::parse_lenient))
}

/// Strategies a sort menu should offer for this configuration.
pub fn available_strategies(config: &PipelineConfig) -> Vec<SortStrategy> {
    let mut out = vec![
        SortStrategy::Default,
        SortStrategy::Alphabetical,
        SortStrategy::ReverseAlphabetical,
        SortStrategy::ValueAscending,
        SortStrategy::ValueDescending,
    ];
    if config.show_time_options {
        out.extend([
            SortStrategy::Chronological,
            SortStrategy::ReverseChronological,
        ]);
    }
    if config.show_business_options {
        out.extend([SortStrategy::AgingLogical, SortStrategy::PriorityLogical]);
    }
    out
}
