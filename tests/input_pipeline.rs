use dashchart::classify::CategoryKind;
use dashchart::sort::SortStrategy;
use dashchart::{PipelineConfig, input, pipeline};
use std::fs;

#[test]
fn csv_file_through_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monthly.csv");
    fs::write(
        &path,
        "category,value,seriesName\n\
         Mar 2024,3,Web\n\
         Jan 2024,1,Web\n\
         Jan 2024,4,Store\n\
         Feb 2024,2,Web\n",
    )
    .unwrap();

    let points = input::load_records(&path).unwrap();
    assert_eq!(points.len(), 4);

    let prepared = pipeline::prepare(&points, &PipelineConfig::default());
    assert_eq!(prepared.category_kind, CategoryKind::Date);
    assert!(prepared.is_multi_series);
    assert_eq!(
        prepared.dataset.categories(),
        vec!["Jan 2024", "Feb 2024", "Mar 2024"]
    );
}

#[test]
fn original_order_wins_under_default() {
    let points = input::parse_json(
        r#"[
            {"category": "Zulu", "value": 1, "originalOrder": 2},
            {"category": "Alpha", "value": 2, "originalOrder": 3},
            {"category": "Mike", "value": 3, "originalOrder": 1}
        ]"#,
    )
    .unwrap();
    let prepared = pipeline::prepare(&points, &PipelineConfig::default());
    assert_eq!(prepared.dataset.categories(), vec!["Mike", "Zulu", "Alpha"]);

    let config = PipelineConfig {
        sort_type: Some(SortStrategy::Alphabetical),
        ..Default::default()
    };
    let prepared = pipeline::prepare(&points, &config);
    assert_eq!(prepared.dataset.categories(), vec!["Alpha", "Mike", "Zulu"]);
}
