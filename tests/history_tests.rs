// Unit tests for the bounded calculation history

use voice_calc::{History, HISTORY_CAPACITY};

#[test]
fn test_starts_empty() {
    let history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.entries().len(), 0);
}

#[test]
fn test_newest_first_ordering() {
    let mut history = History::new();
    history.push("1+1", 2.0);
    history.push("2+2", 4.0);
    history.push("3+3", 6.0);

    let entries = history.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].expression, "3+3");
    assert_eq!(entries[1].expression, "2+2");
    assert_eq!(entries[2].expression, "1+1");
}

#[test]
fn test_eleventh_entry_evicts_the_first() {
    let mut history = History::new();
    for i in 0..11 {
        history.push(format!("{}+0", i), i as f64);
    }

    assert_eq!(history.len(), HISTORY_CAPACITY);
    // Newest entry present at the front, oldest gone
    assert_eq!(history.entries()[0].expression, "10+0");
    assert!(history.entries().iter().all(|e| e.expression != "0+0"));
}

#[test]
fn test_capacity_never_exceeded() {
    let mut history = History::new();
    for _ in 0..100 {
        history.push("1+1", 2.0);
        assert!(history.len() <= HISTORY_CAPACITY);
    }
}

#[test]
fn test_entries_carry_results_and_timestamps() {
    let mut history = History::new();
    history.push("5 + 3", 8.0);

    let entry = &history.entries()[0];
    assert_eq!(entry.expression, "5 + 3");
    assert_eq!(entry.result, 8.0);
    assert!(!entry.timestamp.is_empty());
}

#[test]
fn test_entry_serialization() {
    let mut history = History::new();
    history.push("5 + 3", 8.0);

    let json = serde_json::to_string(history.entries()).unwrap();
    assert!(json.contains("\"expression\":\"5 + 3\""));
    assert!(json.contains("\"result\":8.0"));
    assert!(json.contains("\"timestamp\""));
}
