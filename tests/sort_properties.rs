use chrono::{Datelike, Local, NaiveDate};
use dashchart::classify::CategoryKind;
use dashchart::models::DataPoint;
use dashchart::normalize::normalize;
use dashchart::sort::{SortStrategy, parse_time_string, sort_dataset, sort_rows, sort_rows_at};
use proptest::prelude::*;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn cats(rows: &[DataPoint]) -> Vec<String> {
    rows.iter().map(|r| r.category.clone()).collect()
}

// Labels drawn from a small pool so duplicates are common.
fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Item 2".to_string()),
        Just("Item 10".to_string()),
        Just("item 2".to_string()),
        Just("Current".to_string()),
        Just("31-60 days".to_string()),
        Just("High".to_string()),
        Just("Q3 2024".to_string()),
        Just("2024".to_string()),
        Just("Jan 2024".to_string()),
        Just("Week 5".to_string()),
        "[a-zA-Z0-9 ]{0,8}",
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(
        (label(), -100i32..100).prop_map(|(l, v)| DataPoint::new(l, f64::from(v))),
        0..24,
    )
}

fn strategy() -> impl Strategy<Value = SortStrategy> {
    prop::sample::select(SortStrategy::ALL.to_vec())
}

fn forward(st: SortStrategy) -> bool {
    !matches!(
        st,
        SortStrategy::ReverseAlphabetical | SortStrategy::ReverseChronological
    )
}

proptest! {
    #[test]
    fn reverse_alphabetical_is_literal_reversal(data in rows_strategy()) {
        let mut fwd = sort_rows_at(&data, Some(SortStrategy::Alphabetical), CategoryKind::Text, fixed_today());
        fwd.reverse();
        let rev = sort_rows_at(&data, Some(SortStrategy::ReverseAlphabetical), CategoryKind::Text, fixed_today());
        prop_assert_eq!(rev, fwd);
    }

    #[test]
    fn reverse_chronological_is_literal_reversal(data in rows_strategy()) {
        let mut fwd = sort_rows_at(&data, Some(SortStrategy::Chronological), CategoryKind::Date, fixed_today());
        fwd.reverse();
        let rev = sort_rows_at(&data, Some(SortStrategy::ReverseChronological), CategoryKind::Date, fixed_today());
        prop_assert_eq!(rev, fwd);
    }

    // Reverse-chronological is left out: distinct labels resolving to the
    // same instant flip on every pass of a literal reversal.
    #[test]
    fn category_order_is_idempotent(data in rows_strategy(), st in strategy()) {
        prop_assume!(st != SortStrategy::ReverseChronological);
        let once = sort_rows_at(&data, Some(st), CategoryKind::Text, fixed_today());
        let twice = sort_rows_at(&once, Some(st), CategoryKind::Text, fixed_today());
        prop_assert_eq!(cats(&twice), cats(&once));
    }

    #[test]
    fn forward_strategies_are_idempotent_row_for_row(data in rows_strategy(), st in strategy()) {
        prop_assume!(forward(st));
        let once = sort_rows_at(&data, Some(st), CategoryKind::Text, fixed_today());
        let twice = sort_rows_at(&once, Some(st), CategoryKind::Text, fixed_today());
        prop_assert_eq!(
            serde_json::to_string(&twice).unwrap(),
            serde_json::to_string(&once).unwrap()
        );
    }

    #[test]
    fn sorting_is_a_permutation(data in rows_strategy(), st in strategy()) {
        let out = sort_rows_at(&data, Some(st), CategoryKind::Text, fixed_today());
        let mut a = cats(&data);
        let mut b = cats(&out);
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn aging_dataset_sorts_by_bucket_order() {
    let pts: Vec<DataPoint> = ["Over 120 days", "31-60 days", "Current", "0-30 days", "61-90 days"]
        .into_iter()
        .map(|c| DataPoint::new(c, 1.0))
        .collect();
    let out = sort_rows(&pts, None, CategoryKind::Aging);
    assert_eq!(
        cats(&out),
        vec!["Current", "0-30 days", "31-60 days", "61-90 days", "Over 120 days"]
    );
}

#[test]
fn aging_example_under_default_dispatch() {
    let pts: Vec<DataPoint> = ["91-120 days", "Current", "31-60 days", "0-30 days"]
        .into_iter()
        .map(|c| DataPoint::new(c, 1.0))
        .collect();
    let out = sort_rows(&pts, Some(SortStrategy::Default), CategoryKind::Aging);
    assert_eq!(cats(&out), vec!["Current", "0-30 days", "31-60 days", "91-120 days"]);
    let out = sort_rows(&pts, Some(SortStrategy::AgingLogical), CategoryKind::Text);
    assert_eq!(cats(&out), vec!["Current", "0-30 days", "31-60 days", "91-120 days"]);
}

#[test]
fn default_sort_keeps_normalized_text_order() {
    let pts: Vec<DataPoint> = ["A", "C", "B"]
        .into_iter()
        .map(|c| DataPoint::new(c, 1.0))
        .collect();
    let ds = normalize(&pts);
    let sorted = sort_dataset(&ds, Some(SortStrategy::Default), CategoryKind::Text);
    assert_eq!(sorted.categories(), vec!["A", "C", "B"]);
    assert_eq!(sorted, ds);
}

#[test]
fn chronological_ties_keep_input_order() {
    let pts: Vec<DataPoint> = ["zeta", "alpha", "Jan 2024", "2024"]
        .into_iter()
        .map(|c| DataPoint::new(c, 1.0))
        .collect();
    let out = sort_rows_at(&pts, Some(SortStrategy::Chronological), CategoryKind::Date, fixed_today());
    assert_eq!(cats(&out), vec!["Jan 2024", "2024", "zeta", "alpha"]);
}

#[test]
fn wide_rows_sort_by_their_total() {
    let pts = vec![
        DataPoint::new("A", 1.0).with_series("X"),
        DataPoint::new("A", 1.0).with_series("Y"),
        DataPoint::new("B", 5.0).with_series("X"),
        DataPoint::new("C", 3.0).with_series("Y"),
    ];
    let ds = sort_dataset(
        &normalize(&pts),
        Some(SortStrategy::ValueDescending),
        CategoryKind::Text,
    );
    assert!(ds.is_multi_series());
    assert_eq!(ds.categories(), vec!["B", "C", "A"]);
    assert_eq!(ds.series().len(), 2);
}

#[test]
fn quarter_and_week_labels_land_where_expected() {
    let q3 = parse_time_string("Q3 2024", fixed_today());
    assert_eq!(q3.year(), 2024);
    assert_eq!(q3.month0(), 6);

    let today = Local::now().date_naive();
    let week5 = parse_time_string("Week 5", today);
    let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
    let days = (week5.date() - jan1).num_days();
    assert!((0..35).contains(&days), "week 5 is {days} days into the year");
}

#[test]
fn unparseable_labels_fall_back_to_today() {
    let at = parse_time_string("no date here", fixed_today());
    assert_eq!(at.date(), fixed_today());
}
