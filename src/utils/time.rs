use chrono::{DateTime, Utc};

/// ISO-8601 em UTC sem offset, com o `Z` anexado manualmente
/// (ex: `2026-10-17T12:34:56.123456Z`)
pub fn utc_timestamp() -> String {
    format_utc(Utc::now())
}

pub fn format_utc(at: DateTime<Utc>) -> String {
    format!("{}Z", at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f"))
}
