//! Codec for the per-line measure payloads.
//!
//! Payloads are `line=value` entries joined with semicolons, for example
//! `1=jane;2=joe`. Line numbers are 1-based and unique; values keep any
//! `=` characters after the first one.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

/// Timestamp layout inside datetime payloads, e.g. `2013-01-31T12:12:12-0800`.
const LINE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parses a payload into line -> string entries. Empty fields are
/// skipped, so a trailing separator is harmless.
pub fn parse_by_line(data: &str) -> Result<BTreeMap<usize, String>, String> {
    let mut map = BTreeMap::new();
    for field in data.split(';') {
        if field.is_empty() {
            continue;
        }
        let (line, value) = split_entry(field)?;
        map.insert(line, value.to_string());
    }
    Ok(map)
}

/// Parses a payload into line -> timestamp entries.
pub fn parse_datetimes_by_line(
    data: &str,
) -> Result<BTreeMap<usize, DateTime<FixedOffset>>, String> {
    let mut map = BTreeMap::new();
    for field in data.split(';') {
        if field.is_empty() {
            continue;
        }
        let (line, value) = split_entry(field)?;
        let datetime = DateTime::parse_from_str(value, LINE_DATETIME_FORMAT)
            .map_err(|e| format!("invalid datetime [{value}]: {e}"))?;
        map.insert(line, datetime);
    }
    Ok(map)
}

/// Renders entries back into payload form. The inverse of
/// [`parse_by_line`] for well-formed input.
#[allow(dead_code)]
pub fn format_by_line(map: &BTreeMap<usize, String>) -> String {
    let entries: Vec<String> = map.iter().map(|(line, value)| format!("{line}={value}")).collect();
    entries.join(";")
}

fn split_entry(field: &str) -> Result<(usize, &str), String> {
    let (key, value) = field
        .split_once('=')
        .ok_or_else(|| format!("invalid entry [{field}]"))?;
    let line: usize = key
        .parse()
        .map_err(|_| format!("invalid line number [{key}]"))?;
    Ok((line, value))
}

#[cfg(test)]
#[path = "keyvalue_test.rs"]
mod tests;
