//! Category classification: infer what kind of labels a dataset carries
//! (aging buckets, priority levels, dates, numbers, or free text).
//!
//! Labels are matched against an ordered rule table. The first rule that
//! matches a label decides that label's kind; the dataset's kind is then a
//! majority vote over a small sample taken from the front.

use crate::models::DataPoint;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How many labels (from the front) take part in the vote.
pub const SAMPLE_SIZE: usize = 5;

/// Semantic category of a dataset's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    /// Receivables/inventory age ranges ("0-30 days", "Current", "Past due").
    Aging,
    /// Priority levels ("High", "P1", "Priority 3").
    Priority,
    /// Calendar-like labels ("2024", "Q3 2024", "Jan 2024", "Week 5").
    Date,
    /// Labels that are numbers themselves.
    Number,
    /// Anything else.
    Text,
}

/// How a single rule tests a lower-cased, trimmed label.
#[derive(Debug)]
pub enum Matcher {
    Pattern(Regex),
    /// The whole label parses as a finite number.
    Numeric,
}

impl Matcher {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(label),
            Matcher::Numeric => label.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }
}

/// One entry of the classifier table.
#[derive(Debug)]
pub struct ClassifierRule {
    pub name: &'static str,
    pub kind: CategoryKind,
    pub matcher: Matcher,
}

const MONTH_ALTERNATION: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec|\
january|february|march|april|june|july|august|september|october|november|december";

fn rule(name: &'static str, kind: CategoryKind, pattern: &str) -> ClassifierRule {
    ClassifierRule {
        name,
        kind,
        // Patterns are compile-time constants; a failure here is a programming error.
        matcher: Matcher::Pattern(Regex::new(pattern).expect("valid classifier pattern")),
    }
}

/// Rule table in priority order. Domain buckets come before generic
/// date/number rules because their patterns are more specific.
pub static CLASSIFIER_RULES: LazyLock<Vec<ClassifierRule>> = LazyLock::new(|| {
    use CategoryKind::*;
    let month_year = format!(r"^({MONTH_ALTERNATION})\.?\s+(\d{{2}}|\d{{4}})$");
    vec![
        rule("aging-day-range", Aging, r"^\d+\s*-\s*\d+\s*days?$"),
        rule("aging-current", Aging, r"^current$"),
        rule("aging-over", Aging, r"^over[\s-]+\d+(\s*days?)?$"),
        rule("aging-plus", Aging, r"^\d+\s*\+(\s*days?)?$"),
        rule("aging-past-due", Aging, r"^past\s*due$"),
        rule(
            "priority-level",
            Priority,
            r"^(low|medium|high|critical|urgent|normal)$",
        ),
        rule("priority-numbered", Priority, r"^priority\s*[1-5]$"),
        rule("priority-short", Priority, r"^p[1-5]$"),
        rule("date-year", Date, r"^\d{4}$"),
        rule("date-quarter", Date, r"^q[1-4]\s+\d{4}$"),
        rule("date-month-year", Date, &month_year),
        rule("date-month-slash-year", Date, r"^\d{1,2}/\d{4}$"),
        rule("date-year-month", Date, r"^\d{4}-\d{1,2}$"),
        rule("date-iso-day", Date, r"^\d{4}-\d{1,2}-\d{1,2}$"),
        rule("date-week", Date, r"^week\s+\d+$"),
        rule("date-day-range", Date, r"^\d{1,2}-\d{1,2}$"),
        ClassifierRule {
            name: "number",
            kind: Number,
            matcher: Matcher::Numeric,
        },
    ]
});

/// Kind of a single label, or `None` when no rule matches.
pub fn match_label(label: &str) -> Option<CategoryKind> {
    let normalized = label.trim().to_lowercase();
    CLASSIFIER_RULES
        .iter()
        .find(|r| r.matcher.matches(&normalized))
        .map(|r| r.kind)
}

/// Classify a dataset by majority vote over its first [`SAMPLE_SIZE`] labels.
pub fn classify(points: &[DataPoint]) -> CategoryKind {
    classify_labels(points.iter().map(|p| p.category.as_str()))
}

/// Same as [`classify`] for bare labels.
pub fn classify_labels<'a, I>(labels: I) -> CategoryKind
where
    I: IntoIterator<Item = &'a str>,
{
    let (mut aging, mut priority, mut date, mut number) = (0usize, 0usize, 0usize, 0usize);
    let mut sampled = 0usize;
    for label in labels.into_iter().take(SAMPLE_SIZE) {
        sampled += 1;
        match match_label(label) {
            Some(CategoryKind::Aging) => aging += 1,
            Some(CategoryKind::Priority) => priority += 1,
            Some(CategoryKind::Date) => date += 1,
            Some(CategoryKind::Number) => number += 1,
            Some(CategoryKind::Text) | None => {}
        }
    }
    if sampled == 0 {
        return CategoryKind::Text;
    }

    // Strict majority: count * 2 > sample size.
    let verdict = [
        (aging, CategoryKind::Aging),
        (priority, CategoryKind::Priority),
        (date, CategoryKind::Date),
        (number, CategoryKind::Number),
    ]
    .into_iter()
    .find(|(count, _)| count * 2 > sampled)
    .map(|(_, kind)| kind)
    .unwrap_or(CategoryKind::Text);

    debug!(
        "classified {sampled} sampled labels as {verdict:?} \
         (aging={aging}, priority={priority}, date={date}, number={number})"
    );
    verdict
}
