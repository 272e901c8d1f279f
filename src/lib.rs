//! dashchart
//!
//! Data preparation and adaptive layout for dashboard bar/line charts.
//! Pairs with the `dashchart` CLI.
//!
//! ### Features
//! - Classify category labels (aging buckets, priorities, dates, numbers, text)
//! - Normalize flat records into single-series entries or a wide multi-series table
//! - Sort with nine strategies, including chronological parsing of loose date labels
//! - Compute size-tiered chart layout (margins, ticks, fonts, legend, markers)
//! - Coalesce resize bursts into one layout recomputation per frame
//!
//! ### Example
//! ```
//! use dashchart::{DataPoint, PipelineConfig, SortStrategy, pipeline};
//!
//! let points = vec![
//!     DataPoint::new("Q1", 10.0).with_series("North"),
//!     DataPoint::new("Q1", 7.0).with_series("South"),
//!     DataPoint::new("Q2", 12.0).with_series("North"),
//! ];
//! let config = PipelineConfig {
//!     sort_type: Some(SortStrategy::ValueDescending),
//!     ..Default::default()
//! };
//! let chart = pipeline::prepare_chart(&points, &config, 640.0, 360.0);
//! assert!(chart.is_multi_series);
//! assert_eq!(chart.dataset.categories(), vec!["Q1", "Q2"]);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod palette;
pub mod pipeline;
pub mod resize;
pub mod sort;

pub use classify::{CategoryKind, classify};
pub use config::{PipelineConfig, available_strategies};
pub use error::{PipelineError, PipelineResult};
pub use layout::{LayoutOptions, LayoutParams, Orientation, SizeTier, compute_layout};
pub use models::DataPoint;
pub use normalize::{NormalizedDataset, normalize};
pub use palette::Palette;
pub use pipeline::{ChartDescription, PreparedData};
pub use resize::{Dimensions, FrameScheduler, ResizeCoordinator};
pub use sort::{SortStrategy, sort_dataset, sort_rows};
