//! Sort engine: deterministic ordering of normalized chart rows under a
//! selected strategy.
//!
//! - Every strategy is stable: rows the comparator cannot tell apart keep
//!   their input order.
//! - "Reverse" strategies are the literal reversal of their forward result.
//! - Unknown strategies (`None`) dispatch on the dataset's [`CategoryKind`].

pub mod collate;
pub mod date;

use crate::classify::CategoryKind;
use crate::models::{DataPoint, finite_or_zero};
use crate::normalize::{NormalizedDataset, SimpleEntry, WideRow};
use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use collate::{natural_cmp, parse_float_prefix};
pub use date::parse_time_string;

/// Ordering strategies a chart can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// Explicit `original_order` when every row has one, else kind-driven.
    Default,
    Alphabetical,
    ReverseAlphabetical,
    ValueAscending,
    ValueDescending,
    Chronological,
    ReverseChronological,
    AgingLogical,
    PriorityLogical,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 9] = [
        SortStrategy::Default,
        SortStrategy::Alphabetical,
        SortStrategy::ReverseAlphabetical,
        SortStrategy::ValueAscending,
        SortStrategy::ValueDescending,
        SortStrategy::Chronological,
        SortStrategy::ReverseChronological,
        SortStrategy::AgingLogical,
        SortStrategy::PriorityLogical,
    ];

    /// Wire name, e.g. `"value-ascending"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortStrategy::Default => "default",
            SortStrategy::Alphabetical => "alphabetical",
            SortStrategy::ReverseAlphabetical => "reverse-alphabetical",
            SortStrategy::ValueAscending => "value-ascending",
            SortStrategy::ValueDescending => "value-descending",
            SortStrategy::Chronological => "chronological",
            SortStrategy::ReverseChronological => "reverse-chronological",
            SortStrategy::AgingLogical => "aging-logical",
            SortStrategy::PriorityLogical => "priority-logical",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            SortStrategy::Default => "Default order",
            SortStrategy::Alphabetical => "A → Z",
            SortStrategy::ReverseAlphabetical => "Z → A",
            SortStrategy::ValueAscending => "Value (low to high)",
            SortStrategy::ValueDescending => "Value (high to low)",
            SortStrategy::Chronological => "Oldest first",
            SortStrategy::ReverseChronological => "Newest first",
            SortStrategy::AgingLogical => "Aging buckets",
            SortStrategy::PriorityLogical => "Priority level",
        }
    }

    /// Parse a wire name, mapping anything unknown to `None`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `SortStrategy::from_str` for names that are not strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for SortStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SortStrategy::ALL
            .into_iter()
            .find(|st| st.as_str() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// What the sort engine needs to know about a row.
pub trait SortRow {
    fn category(&self) -> &str;
    /// Numeric value used by value-based strategies.
    fn sort_value(&self) -> f64;
    fn original_order(&self) -> Option<i64>;
}

impl SortRow for SimpleEntry {
    fn category(&self) -> &str {
        &self.category
    }
    fn sort_value(&self) -> f64 {
        self.value
    }
    fn original_order(&self) -> Option<i64> {
        self.original_order
    }
}

impl SortRow for WideRow {
    fn category(&self) -> &str {
        &self.category
    }
    /// Wide rows sort by the total across their series.
    fn sort_value(&self) -> f64 {
        self.total()
    }
    fn original_order(&self) -> Option<i64> {
        self.original_order
    }
}

impl SortRow for DataPoint {
    fn category(&self) -> &str {
        &self.category
    }
    fn sort_value(&self) -> f64 {
        self.value
    }
    fn original_order(&self) -> Option<i64> {
        self.original_order
    }
}

/// Canonical aging sequence. Each bucket lists the substrings that select it.
pub const AGING_SEQUENCE: [&[&str]; 8] = [
    &["current"],
    &["0-30"],
    &["31-60"],
    &["61-90"],
    &["91-120"],
    &["over 90", "over-90", "90+"],
    &["over 120", "over-120", "120+"],
    &["past due"],
];

/// Canonical priority sequence.
pub const PRIORITY_SEQUENCE: [&[&str]; 6] = [
    &["critical"],
    &["high"],
    &["urgent"],
    &["medium"],
    &["normal"],
    &["low"],
];

/// Index of the first bucket whose token occurs in `label` (case-insensitive).
pub fn logical_index(label: &str, sequence: &[&[&str]]) -> Option<usize> {
    let lower = label.to_lowercase();
    sequence
        .iter()
        .position(|tokens| tokens.iter().any(|t| lower.contains(t)))
}

fn value_of<T: SortRow>(row: &T) -> f64 {
    finite_or_zero(row.sort_value())
}

fn sort_logical<T: SortRow>(rows: &mut [T], sequence: &[&[&str]]) {
    rows.sort_by_cached_key(|r| LogicalKey {
        index: logical_index(r.category(), sequence),
        label: r.category().to_string(),
    });
}

/// Matched labels by sequence index first, unmatched ones after, alphabetically.
struct LogicalKey {
    index: Option<usize>,
    label: String,
}

impl PartialEq for LogicalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LogicalKey {}

impl Ord for LogicalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.index, other.index) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => natural_cmp(&self.label, &other.label),
        }
    }
}

impl PartialOrd for LogicalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn sort_chronological<T: SortRow>(rows: &mut [T], today: NaiveDate) {
    // Labels resolving to the same instant keep their input order.
    rows.sort_by_cached_key(|r| parse_time_string(r.category(), today));
}

/// Numeric label order for `number` datasets; unparseable labels go last.
fn sort_numeric_labels<T: SortRow>(rows: &mut [T]) {
    rows.sort_by(|a, b| {
        match (
            parse_float_prefix(a.category()),
            parse_float_prefix(b.category()),
        ) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn sort_by_kind<T: SortRow>(rows: &mut [T], kind: CategoryKind, today: NaiveDate) {
    match kind {
        CategoryKind::Aging => sort_logical(rows, &AGING_SEQUENCE),
        CategoryKind::Priority => sort_logical(rows, &PRIORITY_SEQUENCE),
        CategoryKind::Date => sort_chronological(rows, today),
        CategoryKind::Number => sort_numeric_labels(rows),
        CategoryKind::Text => {}
    }
}

/// Sort rows, using the local calendar date for labels that fall back to "now".
pub fn sort_rows<T: SortRow + Clone>(
    rows: &[T],
    strategy: Option<SortStrategy>,
    kind: CategoryKind,
) -> Vec<T> {
    sort_rows_at(rows, strategy, kind, Local::now().date_naive())
}

/// Sort rows with an explicit `today`, captured once so the comparator is consistent.
pub fn sort_rows_at<T: SortRow + Clone>(
    rows: &[T],
    strategy: Option<SortStrategy>,
    kind: CategoryKind,
    today: NaiveDate,
) -> Vec<T> {
    let mut out = rows.to_vec();
    match strategy {
        Some(SortStrategy::Default) => {
            if out.iter().all(|r| r.original_order().is_some()) {
                out.sort_by_key(|r| r.original_order());
            } else {
                sort_by_kind(&mut out, kind, today);
            }
        }
        Some(SortStrategy::Alphabetical) => {
            out.sort_by(|a, b| natural_cmp(a.category(), b.category()));
        }
        Some(SortStrategy::ReverseAlphabetical) => {
            out.sort_by(|a, b| natural_cmp(a.category(), b.category()));
            out.reverse();
        }
        Some(SortStrategy::ValueAscending) => {
            out.sort_by(|a, b| value_of(a).partial_cmp(&value_of(b)).unwrap_or(Ordering::Equal));
        }
        Some(SortStrategy::ValueDescending) => {
            out.sort_by(|a, b| value_of(b).partial_cmp(&value_of(a)).unwrap_or(Ordering::Equal));
        }
        Some(SortStrategy::Chronological) => sort_chronological(&mut out, today),
        Some(SortStrategy::ReverseChronological) => {
            sort_chronological(&mut out, today);
            out.reverse();
        }
        Some(SortStrategy::AgingLogical) => sort_logical(&mut out, &AGING_SEQUENCE),
        Some(SortStrategy::PriorityLogical) => sort_logical(&mut out, &PRIORITY_SEQUENCE),
        None => sort_by_kind(&mut out, kind, today),
    }
    debug!(
        "sorted {} rows by {} ({kind:?} labels)",
        out.len(),
        strategy.map_or("kind dispatch", SortStrategy::as_str)
    );
    out
}

/// Sort a normalized dataset, keeping its shape and series registry.
pub fn sort_dataset(
    dataset: &NormalizedDataset,
    strategy: Option<SortStrategy>,
    kind: CategoryKind,
) -> NormalizedDataset {
    sort_dataset_at(dataset, strategy, kind, Local::now().date_naive())
}

pub fn sort_dataset_at(
    dataset: &NormalizedDataset,
    strategy: Option<SortStrategy>,
    kind: CategoryKind,
    today: NaiveDate,
) -> NormalizedDataset {
    match dataset {
        NormalizedDataset::Simple { entries } => NormalizedDataset::Simple {
            entries: sort_rows_at(entries, strategy, kind, today),
        },
        NormalizedDataset::Wide { rows, series } => NormalizedDataset::Wide {
            rows: sort_rows_at(rows, strategy, kind, today),
            series: series.clone(),
        },
    }
}
