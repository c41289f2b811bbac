//! Human-readable labels for day counts and ordinals.

/// Format a day count relative to today.
///
/// ```
/// use dooit_recurrence::display::format_days_until;
///
/// assert_eq!(format_days_until(0), "Today!");
/// assert_eq!(format_days_until(1), "Tomorrow");
/// assert_eq!(format_days_until(12), "12 days");
/// assert_eq!(format_days_until(-3), "3 days ago");
/// ```
pub fn format_days_until(days: i64) -> String {
    match days {
        0 => "Today!".to_string(),
        1 => "Tomorrow".to_string(),
        n if n < 0 => format!("{} days ago", n.unsigned_abs()),
        n => format!("{n} days"),
    }
}

/// English ordinal: 1 → "1st", 12 → "12th", 22 → "22nd".
pub fn format_ordinal(n: i32) -> String {
    let suffix = match (n.unsigned_abs() % 10, n.unsigned_abs() % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
