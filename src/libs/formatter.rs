use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// `HH:MM` for a minute count.
pub fn format_minutes(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Due date in local time, `YYYY-MM-DD HH:MM`.
pub fn format_due(due: &DateTime<Utc>) -> String {
    due.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Reads `YYYY-MM-DD HH:MM` or `YYYY-MM-DD` (end of day) as local time.
pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
            Some(date.and_time(NaiveTime::from_hms_opt(23, 59, 0)?))
        })?;
    Local.from_local_datetime(&naive).earliest().map(|local| local.with_timezone(&Utc))
}
