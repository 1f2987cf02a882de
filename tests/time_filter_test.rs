use chrono::{DateTime, Utc};
use clip_sync::{ClipRecord, ProjectIndex, SubtitleTimeRange, TimeRangeFilter};

fn clip(name: &str, start_ms: i64, end_ms: i64) -> ClipRecord {
    let range = SubtitleTimeRange::new(
        DateTime::<Utc>::from_timestamp_millis(start_ms).unwrap(),
        DateTime::<Utc>::from_timestamp_millis(end_ms).unwrap(),
    );
    ClipRecord::new(format!("/{}.mp4", name), format!("/{}.srt", name), &range).unwrap()
}

#[test]
fn test_filter_returns_all_overlapping_clips() {
    // Клипы [0, 1000] и [2000, 3000], запрос [500, 2500]: оба пересекаются
    let index = ProjectIndex::new(
        "recordings",
        vec![clip("a", 0, 1000), clip("b", 2000, 3000)],
    );

    let filtered = TimeRangeFilter::filter(&index, 500, 2500);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].video_path, "/a.mp4");
    assert_eq!(filtered[1].video_path, "/b.mp4");
}

#[test]
fn test_filter_predicate_matches_interval_overlap() {
    // Клип входит в результат тогда и только тогда, когда
    // start <= end_запроса и end >= start_запроса
    let index = ProjectIndex::new(
        "recordings",
        vec![
            clip("before", 0, 900),
            clip("inside", 1500, 1600),
            clip("after", 2100, 3000),
        ],
    );

    let filtered = TimeRangeFilter::filter(&index, 1000, 2000);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].video_path, "/inside.mp4");
}

#[test]
fn test_filter_boundary_touch_is_overlap() {
    let index = ProjectIndex::new(
        "recordings",
        vec![clip("left", 0, 1000), clip("right", 2000, 3000)],
    );

    // Запрос касается конца первого и начала второго клипа
    let filtered = TimeRangeFilter::filter(&index, 1000, 2000);
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_filter_preserves_relative_order() {
    let index = ProjectIndex::new(
        "recordings",
        vec![
            clip("a", 0, 5000),
            clip("b", 1000, 1500),
            clip("c", 2000, 2500),
            clip("d", 9000, 9500),
        ],
    );

    let filtered = TimeRangeFilter::filter(&index, 1200, 2200);
    let names: Vec<&str> = filtered.iter().map(|c| c.video_path.as_str()).collect();

    // Порядок следования клипов индекса сохраняется
    assert_eq!(names, vec!["/a.mp4", "/b.mp4", "/c.mp4"]);
}

#[test]
fn test_filter_empty_result_is_normal() {
    let index = ProjectIndex::new("recordings", vec![clip("a", 0, 1000)]);

    let filtered = TimeRangeFilter::filter(&index, 5000, 6000);
    assert!(filtered.is_empty());

    let empty_index = ProjectIndex::new("recordings", Vec::new());
    assert!(TimeRangeFilter::filter(&empty_index, 0, 1000).is_empty());
}

#[test]
fn test_filter_optional_absent_range() {
    let index = ProjectIndex::new("recordings", vec![clip("a", 0, 1000)]);

    assert!(TimeRangeFilter::filter_optional(&index, None).is_empty());
    assert_eq!(
        TimeRangeFilter::filter_optional(&index, Some((0, 500))).len(),
        1
    );
}
