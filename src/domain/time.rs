use chrono::{DateTime, Local};

/// Human readable "time ago" label for activity feeds.
#[must_use]
pub fn format_relative_time(date: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(date);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} hour{} ago", if hours > 1 { "s" } else { "" })
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        date.format("%-m/%-d/%Y").to_string()
    }
}

#[must_use]
pub fn format_session_date(date: DateTime<Local>) -> String {
    date.format("%a, %b %-d, %-I:%M %p").to_string()
}
