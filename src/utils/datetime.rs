use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Current local wall-clock time. The bot reasons in the host's local time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Date segment used by the prayer-times API path, e.g. `19-02-2026`.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Date shown to users, e.g. `19.02.2026`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Normalizes an API time value such as `"05:10"` or `"05:10 (+05)"` to `HH:MM`.
pub fn normalize_clock_time(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    NaiveTime::parse_from_str(token, "%H:%M")
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}
