use exchange_tracker::{CsvAppender, RateFetcher, Tracker};
use httpmock::prelude::*;
use std::io::Cursor;
use std::time::Duration;
use tempfile::TempDir;

fn success_body() -> serde_json::Value {
    serde_json::json!({
        "result": "success",
        "rates": {"TRY": 32.1, "EUR": 0.92, "GBP": 0.79},
        "base_code": "USD",
        "time_last_update_utc": "2024-01-01 00:00+00"
    })
}

#[tokio::test]
async fn test_end_to_end_session_with_save() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("kur_kayitlari.csv");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/USD");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(success_body());
    });

    let fetcher = RateFetcher::new(server.url(""), Duration::from_secs(5)).unwrap();
    let tracker = Tracker::new(fetcher, CsvAppender::new(&csv_path));

    let mut input = Cursor::new(&b"usd\ntry,eur\ne\n"[..]);
    let mut output = Vec::new();
    tracker.run(&mut input, &mut output).await.unwrap();

    api_mock.assert();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Tarih: 2024-01-01 00:00+00 | Baz: USD"));
    assert!(transcript.contains("  1 USD = 32.1000 TRY"));
    assert!(transcript.contains("  1 USD = 0.9200 EUR"));
    assert!(!transcript.contains("= 0.7900 GBP"));
    assert!(transcript.contains("Kaydedildi"));

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "timestamp,base,symbol,rate,asof_date");
    assert!(lines[1].ends_with(",USD,TRY,32.1,2024-01-01 00:00+00"));
    assert!(lines[2].ends_with(",USD,EUR,0.92,2024-01-01 00:00+00"));
}

#[tokio::test]
async fn test_end_to_end_defaults_and_declined_save() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("kur_kayitlari.csv");

    let server = MockServer::start();
    // Blank input must resolve to base USD and target TRY.
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/USD");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(success_body());
    });

    let fetcher = RateFetcher::new(server.url(""), Duration::from_secs(5)).unwrap();
    let tracker = Tracker::new(fetcher, CsvAppender::new(&csv_path));

    let mut input = Cursor::new(&b"\n\nh\n"[..]);
    let mut output = Vec::new();
    tracker.run(&mut input, &mut output).await.unwrap();

    api_mock.assert();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("  1 USD = 32.1000 TRY"));
    assert!(!transcript.contains("= 0.9200 EUR"));
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_end_to_end_api_failure_prints_single_error_line() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("kur_kayitlari.csv");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/XXX");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"result": "error", "error-type": "unknown-code"}));
    });

    let fetcher = RateFetcher::new(server.url(""), Duration::from_secs(5)).unwrap();
    let tracker = Tracker::new(fetcher, CsvAppender::new(&csv_path));

    let mut input = Cursor::new(&b"xxx\ntry\n"[..]);
    let mut output = Vec::new();
    let result = tracker.run(&mut input, &mut output).await;

    // A failed fetch never crashes the run.
    result.unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Hata:"));
    assert!(transcript.contains("unknown-code"));
    assert!(!csv_path.exists());
}
