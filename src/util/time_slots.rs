//! Bookable slot generation from a doctor's working window.

#[cfg(test)]
#[path = "time_slots_test.rs"]
mod time_slots_test;

pub const DEFAULT_SLOT_MINUTES: u32 = 60;

/// Minutes since midnight for `HH:MM` (a trailing `:SS` is ignored).
pub fn parse_clock(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if let Some(seconds) = parts.next() {
        seconds.parse::<u32>().ok().filter(|s| *s < 60)?;
    }
    if parts.next().is_some() || hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Zero-padded `HH:MM` for minutes since midnight.
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60 % 24, minutes % 60)
}

/// Slot start times from `start` in `duration_minutes` steps. A slot is
/// only offered when it also finishes by `end`.
///
/// Empty when `start >= end`, either bound is malformed, or the duration is
/// zero.
pub fn generate_time_slots(start: &str, end: &str, duration_minutes: u32) -> Vec<String> {
    let (Some(start), Some(end)) = (parse_clock(start), parse_clock(end)) else {
        return Vec::new();
    };
    if duration_minutes == 0 || start >= end {
        return Vec::new();
    }
    let Some(last_start) = end.checked_sub(duration_minutes) else {
        return Vec::new();
    };
    (start..=last_start)
        .step_by(duration_minutes as usize)
        .map(format_clock)
        .collect()
}
