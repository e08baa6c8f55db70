//! Query engine scenarios over real files.

use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{entry, write_log_file};
use tracelog_core::LogLevel;
use tracelog_query::{query, LogFilter, QueryError, QueryParams};

fn level_filter(level: &str) -> LogFilter {
    LogFilter {
        level: Some(level.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn missing_file_surfaces_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-written.log");

    let err = query(&missing, QueryParams::default()).await.unwrap_err();
    assert!(matches!(err, QueryError::FileNotFound(path) if path == missing));
}

#[tokio::test]
async fn aba_scenario_filters_and_pages() {
    // Three lines for correlation ids A, B, A at INFO, ERROR, INFO with
    // increasing timestamps.
    let (_dir, path) = write_log_file(&[
        entry(LogLevel::Info, "A", "2024-06-01T09:00:00.000Z", "first"),
        entry(LogLevel::Error, "B", "2024-06-01T09:00:01.000Z", "second"),
        entry(LogLevel::Info, "A", "2024-06-01T09:00:02.000Z", "third"),
    ])
    .await;

    // level=info returns exactly the two A entries.
    let info = query(&path, QueryParams::new(1, 10).with_filter(level_filter("info")))
        .await
        .unwrap();
    assert_eq!(info.total, 2);
    assert!(info
        .entries
        .iter()
        .all(|e| e.correlation_id.as_deref() == Some("A")));

    // correlationId=B returns exactly one entry.
    let b_only = query(
        &path,
        QueryParams::new(1, 10).with_filter(LogFilter {
            correlation_id: Some("B".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    assert_eq!(b_only.total, 1);
    assert_eq!(b_only.entries[0].message, "second");

    // Unit pages cover all three entries with no duplicates, each page
    // trivially ordered by the page-local descending-timestamp rule.
    let mut messages = Vec::new();
    for page in 1..=3 {
        let result = query(&path, QueryParams::new(page, 1)).await.unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.entries.len(), 1);
        messages.push(result.entries[0].message.clone());
    }
    messages.sort();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn filter_composition_is_intersection() {
    let (_dir, path) = write_log_file(&[
        entry(LogLevel::Error, "a", "2024-06-01T10:00:00.000Z", "timeout"),
        entry(LogLevel::Error, "b", "2024-06-01T10:00:01.000Z", "refused"),
        entry(LogLevel::Info, "c", "2024-06-01T10:00:02.000Z", "timeout"),
        entry(LogLevel::Warn, "d", "2024-06-01T10:00:03.000Z", "slow"),
    ])
    .await;

    let errors = query(&path, QueryParams::new(1, 10).with_filter(level_filter("error")))
        .await
        .unwrap();
    let timeouts = query(
        &path,
        QueryParams::new(1, 10).with_filter(LogFilter {
            message: Some("timeout".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    let both = query(
        &path,
        QueryParams::new(1, 10).with_filter(LogFilter {
            level: Some("error".to_string()),
            message: Some("timeout".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(errors.total, 2);
    assert_eq!(timeouts.total, 2);
    // Exactly the entries satisfying both predicates.
    assert_eq!(both.total, 1);
    assert_eq!(both.entries[0].correlation_id.as_deref(), Some("a"));
}

#[tokio::test]
async fn pagination_length_arithmetic_holds() {
    let entries: Vec<_> = (0..11u32)
        .map(|i| {
            entry(
                LogLevel::Info,
                &format!("id-{i}"),
                &format!("2024-06-01T11:{i:02}:00.000Z"),
                "msg",
            )
        })
        .collect();
    let (_dir, path) = write_log_file(&entries).await;

    // entries.len() == max(0, min(limit, total - (page-1)*limit))
    for (page, expected) in [(1, 4), (2, 4), (3, 3), (4, 0)] {
        let result = query(&path, QueryParams::new(page, 4)).await.unwrap();
        assert_eq!(result.total, 11);
        assert_eq!(result.entries.len(), expected, "page {page}");
    }
}

#[tokio::test]
async fn sentinel_entries_round_trip_and_dodge_payload_filters() {
    let bare = entry(LogLevel::Info, "bare", "2024-06-01T12:00:00.000Z", "plain");
    let rich = entry(LogLevel::Info, "rich", "2024-06-01T12:00:01.000Z", "decorated")
        .with_payload(json!({"user": "ada"}))
        .with_execution("fetch", 3.25);
    let (_dir, path) = write_log_file(&[bare.clone(), rich.clone()]).await;

    let all = query(&path, QueryParams::new(1, 10)).await.unwrap();
    assert_eq!(all.total, 2);

    let decoded_bare = all
        .entries
        .iter()
        .find(|e| e.correlation_id.as_deref() == Some("bare"))
        .unwrap();
    assert_eq!(decoded_bare, &bare);
    assert_eq!(decoded_bare.payload, None);
    assert_eq!(decoded_bare.execution_name, None);
    assert_eq!(decoded_bare.execution_time_ms, None);

    let decoded_rich = all
        .entries
        .iter()
        .find(|e| e.correlation_id.as_deref() == Some("rich"))
        .unwrap();
    assert_eq!(decoded_rich, &rich);

    // A payload filter never matches the sentinel entry.
    let filtered = query(
        &path,
        QueryParams::new(1, 10).with_filter(LogFilter {
            payload: Some("ada".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();
    assert_eq!(filtered.total, 1);
    assert_eq!(filtered.entries[0].correlation_id.as_deref(), Some("rich"));
}

#[tokio::test]
async fn page_is_sorted_by_timestamp_descending() {
    let entries: Vec<_> = (0..5u32)
        .map(|i| {
            entry(
                LogLevel::Info,
                &format!("id-{i}"),
                &format!("2024-06-01T13:00:0{i}.000Z"),
                "msg",
            )
        })
        .collect();
    let (_dir, path) = write_log_file(&entries).await;

    let result = query(&path, QueryParams::new(1, 5)).await.unwrap();
    let ids: Vec<_> = result
        .entries
        .iter()
        .filter_map(|e| e.correlation_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["id-4", "id-3", "id-2", "id-1", "id-0"]);
}

#[tokio::test]
async fn corrupt_lines_are_skipped_without_aborting() {
    tests::init_tracing();
    let good_a = entry(LogLevel::Info, "a", "2024-06-01T14:00:00.000Z", "fine");
    let good_b = entry(LogLevel::Info, "b", "2024-06-01T14:00:01.000Z", "also fine");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.log");
    let content = format!(
        "{}\nnot a log line at all\n[2024-06-01T14:00:00.500Z][INFO][APP][x][bad payload][{{oops][N/A][N/A]\n{}\n",
        good_a.encode(),
        good_b.encode()
    );
    tokio::fs::write(&path, content).await.unwrap();

    let result = query(&path, QueryParams::new(1, 10)).await.unwrap();
    assert_eq!(result.total, 2);
    let ids: Vec<_> = result
        .entries
        .iter()
        .filter_map(|e| e.correlation_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}
