use chrono::{DateTime, Utc};

const DAY_MS: i64 = 86_400_000;

/// Whole days left until `target`, rounded up and never negative.
///
/// Computed once when the artifact loads; it does not tick.
pub fn days_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff = target.timestamp_millis() - now.timestamp_millis();
    if diff <= 0 {
        0
    } else {
        (diff + DAY_MS - 1) / DAY_MS
    }
}
