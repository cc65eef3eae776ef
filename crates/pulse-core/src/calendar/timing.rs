//! Posting-time recommendation.

use chrono::Weekday;

/// Picks the time of day a post should go out on a given weekday.
///
/// The default implementation is a fixed heuristic; an analytics-backed
/// implementation slots in here once audience data exists.
pub trait PostingTimeStrategy: Send + Sync {
    /// Recommended posting time as an HH:MM string.
    fn time_for(&self, weekday: Weekday) -> &'static str;
}

/// Static engagement heuristic: lunchtime on Mon/Wed/Fri, late afternoon
/// on Tue/Thu, late morning Saturday, mid afternoon Sunday.
pub struct WeekdayHeuristic;

impl PostingTimeStrategy for WeekdayHeuristic {
    fn time_for(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Sun => "15:00",
            Weekday::Mon | Weekday::Wed | Weekday::Fri => "12:00",
            Weekday::Tue | Weekday::Thu => "17:00",
            Weekday::Sat => "11:00",
        }
    }
}
