use super::*;
use crate::proto::{Position, Segment};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(Position::new(x0, y0), Position::new(x1, y1))
}

fn stroke(color: &str, n: usize) -> Stroke {
    let paths = (0..n)
        .map(|i| {
            let t = i as f64 / 10.0;
            seg(t, t, t + 0.1, t + 0.1)
        })
        .collect();
    Stroke::new(color, paths)
}

// =============================================================
// Recording and compaction
// =============================================================

#[test]
fn new_log_is_empty() {
    let log = HistoryLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.snapshot().is_empty());
}

#[test]
fn record_appends_first_entry() {
    let mut log = HistoryLog::new();
    log.record(stroke("black", 2));
    assert_eq!(log.len(), 1);
    assert_eq!(log.snapshot()[0].paths.len(), 2);
}

#[test]
fn same_color_merges_into_tail() {
    let mut log = HistoryLog::new();
    log.record(stroke("black", 2));
    log.record(stroke("black", 3));
    assert_eq!(log.len(), 1);
    assert_eq!(log.snapshot()[0].paths.len(), 5);
}

#[test]
fn different_color_starts_new_entry() {
    let mut log = HistoryLog::new();
    log.record(stroke("black", 1));
    log.record(stroke("red", 1));
    assert_eq!(log.len(), 2);
    assert_eq!(log.snapshot()[0].color, "black");
    assert_eq!(log.snapshot()[1].color, "red");
}

#[test]
fn compaction_red_red_blue_blue_blue_yields_two_entries() {
    let mut log = HistoryLog::new();
    log.record(stroke("red", 1));
    log.record(stroke("red", 2));
    log.record(stroke("blue", 1));
    log.record(stroke("blue", 1));
    log.record(stroke("blue", 3));

    let entries = log.snapshot();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].color, "red");
    assert_eq!(entries[0].paths.len(), 3);
    assert_eq!(entries[1].color, "blue");
    assert_eq!(entries[1].paths.len(), 5);
}

#[test]
fn merge_preserves_segment_order() {
    let mut log = HistoryLog::new();
    let first = seg(0.1, 0.1, 0.2, 0.2);
    let second = seg(0.2, 0.2, 0.3, 0.3);
    log.record(Stroke::new("black", vec![first]));
    log.record(Stroke::new("black", vec![second]));

    let paths = &log.snapshot()[0].paths;
    assert_eq!(paths[0], first);
    assert_eq!(paths[1], second);
}

#[test]
fn alternating_colors_never_merge() {
    let mut log = HistoryLog::new();
    log.record(stroke("red", 1));
    log.record(stroke("blue", 1));
    log.record(stroke("red", 1));
    assert_eq!(log.len(), 3);
}

#[test]
fn no_adjacent_entries_share_a_color() {
    let mut log = HistoryLog::new();
    for color in ["red", "red", "blue", "red", "red", "blue", "blue"] {
        log.record(stroke(color, 1));
    }
    let entries = log.snapshot();
    for pair in entries.windows(2) {
        assert_ne!(pair[0].color, pair[1].color);
    }
}

#[test]
fn earlier_entries_are_never_touched() {
    let mut log = HistoryLog::new();
    log.record(stroke("red", 2));
    log.record(stroke("blue", 1));
    log.record(stroke("red", 4));

    // The first red entry stays at 2 segments; the later red stroke lands in
    // a fresh tail entry.
    assert_eq!(log.len(), 3);
    assert_eq!(log.snapshot()[0].paths.len(), 2);
    assert_eq!(log.snapshot()[2].paths.len(), 4);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_empties_the_log() {
    let mut log = HistoryLog::new();
    log.record(stroke("black", 3));
    log.record(stroke("red", 1));
    log.reset();
    assert!(log.is_empty());
}

#[test]
fn record_after_reset_starts_fresh() {
    let mut log = HistoryLog::new();
    log.record(stroke("black", 1));
    log.reset();
    log.record(stroke("black", 1));
    assert_eq!(log.len(), 1);
    assert_eq!(log.snapshot()[0].paths.len(), 1);
}
