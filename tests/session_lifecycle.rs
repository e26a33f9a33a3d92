use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone};

use session_timer::{
    state::{ManualClock, SessionClock, SESSION_DURATION_SECS},
    SessionView,
};

fn at(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, hour, min, sec).unwrap()
}

#[tokio::test]
async fn end_is_always_five_minutes_after_start() {
    let manual = Arc::new(ManualClock::new(at(7, 13, 41)));
    let clock = SessionClock::create(manual.clone());

    for offset in [0, 17, 299, 3_600] {
        manual.advance(Duration::seconds(offset));
        let session = clock.start();
        assert_eq!(session.end_time() - session.start_time(), Duration::seconds(300));
    }
}

#[tokio::test]
async fn restart_mid_session_only_reflects_new_session() {
    let manual = Arc::new(ManualClock::new(at(10, 0, 0)));
    let clock = SessionClock::create(manual.clone());
    let view = SessionView::new(Arc::clone(&clock));

    let first = view.on_restart_requested();
    assert_eq!((first.start_time.as_str(), first.end_time.as_str()), ("10:00", "10:05"));

    manual.set(at(10, 2, 0));
    let second = view.on_restart_requested();
    assert_eq!((second.start_time.as_str(), second.end_time.as_str()), ("10:02", "10:07"));

    let mut last = SESSION_DURATION_SECS;
    for _ in 0..6 {
        manual.advance(Duration::seconds(60));
        let session = clock.tick().unwrap();
        assert_eq!(session.start_time(), at(10, 2, 0));
        assert!(session.time_left() <= last);
        last = session.time_left();
    }

    assert_eq!(last, 0);
    assert_eq!(clock.current_progress(), 100);
    assert_eq!(SessionView::render(clock.current().as_ref()).progress, 100);
}

#[tokio::test]
async fn restart_after_expiry_begins_again_from_zero_progress() {
    let manual = Arc::new(ManualClock::new(at(12, 0, 0)));
    let clock = SessionClock::create(manual.clone());
    clock.start();

    manual.advance(Duration::seconds(500));
    assert_eq!(clock.tick().unwrap().time_left(), 0);
    assert!(!clock.is_ticking());

    let session = clock.start();
    assert_eq!(session.start_time(), at(12, 8, 20));
    assert_eq!(clock.current_progress(), 0);
    assert!(clock.is_ticking());
}
