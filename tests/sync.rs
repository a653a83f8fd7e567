//! Clock validation and playback window tests.

use clocksync::{ClockStamp, ClockSyncError, compute_window};

fn stamp(text: &str) -> ClockStamp {
    ClockStamp::new(text).expect("test clock is pattern-valid")
}

// ── Clock stamps ─────────────────────────────────────────────────

#[test]
fn stamp_requires_two_digit_groups() {
    assert!(ClockStamp::new("09:15:00").is_some());
    assert!(ClockStamp::new("9:15:00").is_none());
    assert!(ClockStamp::new("09:15").is_none());
    assert!(ClockStamp::new("09:15:00 ").is_none());
    assert!(ClockStamp::new("").is_none());
}

#[test]
fn stamp_shape_check_is_not_range_check() {
    // Pattern-valid but not a real time of day; rejected only at use.
    let stamp = ClockStamp::new("99:99:99").expect("shape is valid");
    assert!(matches!(
        stamp.as_naive_time(),
        Err(ClockSyncError::InvalidClock { .. })
    ));
}

#[test]
fn stamp_parses_from_manual_entry() {
    let stamp: ClockStamp = "08:12:00".parse().expect("well-formed entry");
    assert_eq!(stamp.as_str(), "08:12:00");

    let error = "8h12".parse::<ClockStamp>().unwrap_err();
    assert!(matches!(error, ClockSyncError::InvalidClock { .. }));
}

#[test]
fn find_first_scans_left_to_right() {
    let found = ClockStamp::find_first("a 11:22:33 b 44:55:01").expect("match");
    assert_eq!(found.as_str(), "11:22:33");
    assert!(ClockStamp::find_first("no clocks here").is_none());
}

// ── Window computation ───────────────────────────────────────────

#[test]
fn window_offsets_relative_to_video_start() {
    let window = compute_window(&stamp("09:00:00"), &stamp("09:05:00"), &stamp("09:10:00"))
        .expect("valid window");
    assert_eq!(window.start_offset, 300.0);
    assert_eq!(window.end_offset, 600.0);
}

#[test]
fn window_start_at_video_start_is_zero() {
    let window = compute_window(&stamp("09:00:00"), &stamp("09:00:00"), &stamp("09:00:30"))
        .expect("valid window");
    assert_eq!(window.start_offset, 0.0);
    assert_eq!(window.end_offset, 30.0);
}

#[test]
fn end_before_start_is_rejected() {
    let error =
        compute_window(&stamp("09:00:00"), &stamp("09:10:00"), &stamp("09:05:00")).unwrap_err();
    assert!(
        matches!(&error, ClockSyncError::EndNotAfterStart { start, end }
            if start == "09:10:00" && end == "09:05:00"),
        "expected EndNotAfterStart, got: {error}",
    );
}

#[test]
fn equal_start_and_end_are_rejected() {
    let error =
        compute_window(&stamp("09:00:00"), &stamp("09:05:00"), &stamp("09:05:00")).unwrap_err();
    assert!(matches!(error, ClockSyncError::EndNotAfterStart { .. }));
}

#[test]
fn clock_before_video_start_yields_negative_offset() {
    // A recording spanning midnight: the chosen clock is numerically
    // smaller than the video-start clock and the offset goes negative.
    // That value is surfaced unchanged, not wrapped around the day.
    let window = compute_window(&stamp("23:50:00"), &stamp("00:05:00"), &stamp("00:10:00"))
        .expect("ordering of the chosen times is still valid");
    assert_eq!(window.start_offset, -85_500.0);
    assert_eq!(window.end_offset, -85_200.0);
}

#[test]
fn out_of_range_clock_is_a_typed_error() {
    let error =
        compute_window(&stamp("99:99:99"), &stamp("09:05:00"), &stamp("09:10:00")).unwrap_err();
    assert!(matches!(error, ClockSyncError::InvalidClock { .. }));
}
