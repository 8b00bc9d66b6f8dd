use chrono::{Local, SecondsFormat, Utc};

/// Human-readable local timestamp, as written into vault records.
pub fn timestamp_local() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// ISO-8601 timestamp for the webhook payload.
pub fn timestamp_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
