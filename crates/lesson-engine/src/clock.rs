//! Wall-clock time utilities — `HH:mm` strings to comparable minute offsets.
//!
//! This is the foundation of every overlap and duration computation. Parsing
//! is deliberately forgiving: the engine runs against live form state, and a
//! half-typed time field must degrade to zero minutes instead of failing.

/// Convert an `HH:mm` string to minutes from midnight.
///
/// Malformed or empty input yields `0` — never an error. Components outside
/// the wall-clock range (hours past 23, minutes past 59) are malformed too,
/// so the result is always below 1440. `"09:30"` → 570.
pub fn to_minutes(time: &str) -> u32 {
    let mut parts = time.splitn(2, ':');
    let hours = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let minutes = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    match (hours, minutes) {
        (Some(h), Some(m)) if h <= 23 && m <= 59 => h * 60 + m,
        _ => 0,
    }
}

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && s2 < e1`.
///
/// Adjacent intervals (one ends exactly when the other starts) do not
/// overlap, and a zero-length interval (`s == e`) never overlaps anything.
pub fn intervals_overlap(s1: u32, e1: u32, s2: u32, e2: u32) -> bool {
    s1 < e2 && s2 < e1
}

/// Minutes of intersection between two overlapping intervals.
///
/// Only meaningful when [`intervals_overlap`] holds; saturates to 0 otherwise.
pub fn overlap_minutes(s1: u32, e1: u32, s2: u32, e2: u32) -> u32 {
    e1.min(e2).saturating_sub(s1.max(s2))
}

/// Duration of a `start`..`end` time range in minutes, clamped to zero.
///
/// A record whose end precedes its start contributes exactly 0, never a
/// negative value that would pull an aggregate down.
pub fn clamped_duration(start: &str, end: &str) -> u32 {
    to_minutes(end).saturating_sub(to_minutes(start))
}
