//! Session structure and remaining-time computation

use chrono::{DateTime, Duration, Local};

/// Length of every session in seconds
pub const SESSION_DURATION_SECS: u64 = 300;

/// One countdown cycle from a start instant to a fixed end instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
    time_left: u64,
}

impl Session {
    /// Begin a new session at `now` with the full duration remaining
    pub fn begin(now: DateTime<Local>) -> Self {
        Self {
            start_time: now,
            end_time: now + session_duration(),
            time_left: SESSION_DURATION_SECS,
        }
    }

    /// Wall-clock instant the session began
    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    /// Wall-clock instant the session ends, always `start_time + 300s`
    pub fn end_time(&self) -> DateTime<Local> {
        self.end_time
    }

    /// Remaining whole seconds as of the last recomputation
    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    /// Check if the countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.time_left == 0
    }

    /// Progress percentage derived from the remaining time
    pub fn progress(&self) -> u8 {
        progress_for(self.time_left)
    }

    /// Remaining time formatted as MM:SS
    pub fn remaining_display(&self) -> String {
        format!("{:02}:{:02}", self.time_left / 60, self.time_left % 60)
    }

    /// Recompute the remaining time against the absolute end time.
    ///
    /// The result is rounded half-up to whole seconds and clamped to
    /// `[0, SESSION_DURATION_SECS]`. It never exceeds the current value, so a
    /// clock jumping backwards cannot make the countdown climb again.
    pub fn recompute(&self, now: DateTime<Local>) -> Self {
        let remaining_ms = (self.end_time - now).num_milliseconds();
        let rounded = remaining_ms.saturating_add(500).div_euclid(1000);
        let clamped = rounded.clamp(0, SESSION_DURATION_SECS as i64) as u64;

        Self {
            time_left: clamped.min(self.time_left),
            ..*self
        }
    }
}

/// Fixed session duration as a chrono duration
pub fn session_duration() -> Duration {
    Duration::seconds(SESSION_DURATION_SECS as i64)
}

/// Percentage of the fixed duration elapsed, rounded half-up and capped at 100
pub fn progress_for(time_left: u64) -> u8 {
    let elapsed = SESSION_DURATION_SECS.saturating_sub(time_left);
    let percent = (elapsed * 100 + SESSION_DURATION_SECS / 2) / SESSION_DURATION_SECS;
    percent.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ten_o_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn begin_sets_fixed_end_time() {
        let session = Session::begin(ten_o_clock());
        assert_eq!(session.end_time() - session.start_time(), Duration::seconds(300));
        assert_eq!(session.time_left(), SESSION_DURATION_SECS);
        assert_eq!(session.progress(), 0);
        assert!(!session.is_expired());
    }

    #[test]
    fn recompute_rounds_half_up() {
        let session = Session::begin(ten_o_clock());

        let at = ten_o_clock() + Duration::milliseconds(10_400);
        assert_eq!(session.recompute(at).time_left(), 290);

        // 289.5s remaining rounds up to 290
        let at = ten_o_clock() + Duration::milliseconds(10_500);
        assert_eq!(session.recompute(at).time_left(), 290);

        let at = ten_o_clock() + Duration::milliseconds(10_600);
        assert_eq!(session.recompute(at).time_left(), 289);
    }

    #[test]
    fn recompute_after_end_clamps_to_zero() {
        let session = Session::begin(ten_o_clock());
        let late = session.recompute(ten_o_clock() + Duration::seconds(301));
        assert_eq!(late.time_left(), 0);
        assert!(late.is_expired());
        assert_eq!(late.progress(), 100);
    }

    #[test]
    fn recompute_keeps_start_and_end() {
        let session = Session::begin(ten_o_clock());
        let later = session.recompute(ten_o_clock() + Duration::seconds(42));
        assert_eq!(later.start_time(), session.start_time());
        assert_eq!(later.end_time(), session.end_time());
        assert_eq!(later.time_left(), 258);
    }

    #[test]
    fn backward_clock_jump_does_not_raise_time_left() {
        let session = Session::begin(ten_o_clock()).recompute(ten_o_clock() + Duration::seconds(100));
        assert_eq!(session.time_left(), 200);

        let skewed = session.recompute(ten_o_clock() - Duration::seconds(3600));
        assert_eq!(skewed.time_left(), 200);
    }

    #[test]
    fn progress_boundaries_and_rounding() {
        assert_eq!(progress_for(300), 0);
        assert_eq!(progress_for(299), 0);
        assert_eq!(progress_for(298), 1);
        assert_eq!(progress_for(150), 50);
        assert_eq!(progress_for(0), 100);
        // Out-of-range input still stays within bounds
        assert_eq!(progress_for(1_000), 0);
    }

    #[test]
    fn remaining_display_formats_minutes_and_seconds() {
        let session = Session::begin(ten_o_clock()).recompute(ten_o_clock() + Duration::seconds(55));
        assert_eq!(session.remaining_display(), "04:05");
    }
}
