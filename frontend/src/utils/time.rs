use chrono::{DateTime, Local, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `HH:MM` in the browser's zone, `-` when absent.
pub fn format_clock(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn format_hours(value: Option<f64>) -> String {
    value
        .map(|hours| format!("{:.2}", hours))
        .unwrap_or_else(|| "-".to_string())
}

/// Parses the value of an `<input type="date">`.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
