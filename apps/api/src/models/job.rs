//! The unified job listing shape every provider response is mapped into.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_LOCATION: &str = "Location not specified";
pub const UNKNOWN_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_SALARY: &str = "Salary not specified";
pub const RECENTLY: &str = "Recently";

const POSTED_FORMAT: &str = "%d/%m/%Y";

/// One job listing in the unified response shape.
///
/// Invariant: every field is always a non-empty string. Missing provider
/// data is replaced with fixed placeholders at mapping time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub url: String,
    pub posted: String,
    pub source: String,
}

/// Which market a provider serves; decides the currency symbol in the
/// salary display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Market {
    Uk,
    Us,
}

impl Market {
    pub fn currency_symbol(self) -> &'static str {
        match self {
            Market::Uk => "£",
            Market::Us => "$",
        }
    }
}

/// Renders a salary range as `{sym}{min} - {sym}{max}`.
///
/// An absent bound renders as the bare symbol but the separator is always
/// kept, so a one-sided range still reads as a range. Both bounds absent
/// yields the placeholder.
pub fn format_salary(market: Market, min: Option<f64>, max: Option<f64>) -> String {
    if min.is_none() && max.is_none() {
        return UNKNOWN_SALARY.to_string();
    }
    let sym = market.currency_symbol();
    let min = min.map(format_amount).unwrap_or_default();
    let max = max.map(format_amount).unwrap_or_default();
    format!("{sym}{min} - {sym}{max}")
}

/// Whole-valued amounts drop the fractional part (providers report salaries
/// as floats like `45000.0`).
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Converts a provider-supplied timestamp into the short `DD/MM/YYYY`
/// display string. Providers disagree on format (RFC 3339, naive datetime,
/// bare date), so each is tried in turn; anything unparseable becomes
/// "Recently" rather than leaking the raw value.
pub fn format_posted(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return RECENTLY.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(POSTED_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(POSTED_FORMAT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(POSTED_FORMAT).to_string();
    }
    RECENTLY.to_string()
}

/// Applies a placeholder when a mapped field is missing or empty, keeping
/// the every-field-non-empty invariant.
pub fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}
