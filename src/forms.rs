//! Coercion from submitted form fields to typed request inputs. Forms
//! arrive as optional strings; these helpers decide required-vs-absent and
//! normalize the awkward encodings (checkboxes, embedded JSON, datetimes).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is not valid JSON")]
    Json(&'static str),
    #[error("{0} is not a valid id")]
    Id(&'static str),
    #[error("{0} is not a recognized date/time")]
    Timestamp(&'static str),
    #[error("{0} is not a number")]
    Number(&'static str),
}

/// Timestamps are sent upstream in this canonical shape.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A required field must be submitted and non-empty; browsers send empty
/// strings for untouched inputs.
pub fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, FormError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FormError::Missing(name)),
    }
}

/// Checkbox semantics: present with a non-empty value means checked,
/// absent means unchecked.
pub fn checkbox(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some(v) if !v.trim().is_empty())
}

pub fn parse_json(value: &str, name: &'static str) -> Result<Value, FormError> {
    serde_json::from_str(value).map_err(|_| FormError::Json(name))
}

pub fn parse_id(value: &str, name: &'static str) -> Result<Uuid, FormError> {
    Uuid::parse_str(value.trim()).map_err(|_| FormError::Id(name))
}

pub fn opt_id(value: &Option<String>, name: &'static str) -> Result<Option<Uuid>, FormError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => parse_id(v, name).map(Some),
        _ => Ok(None),
    }
}

/// Number inputs also submit empty strings when untouched, so they come in
/// as strings and are coerced here.
pub fn opt_number(value: &Option<String>, name: &'static str) -> Result<Option<i32>, FormError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.parse().map(Some).map_err(|_| FormError::Number(name)),
        _ => Ok(None),
    }
}

/// Parse a submitted date/time and reformat it canonically. Accepts what
/// browser `datetime-local` inputs and the API itself produce; offset forms
/// are converted to UTC so the instant is preserved.
pub fn normalize_timestamp(raw: &str, name: &'static str) -> Result<String, FormError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc().format(CANONICAL_FORMAT).to_string());
    }
    for format in [CANONICAL_FORMAT, "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.format(CANONICAL_FORMAT).to_string());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.format(CANONICAL_FORMAT).to_string());
        }
    }

    Err(FormError::Timestamp(name))
}

pub fn opt_timestamp(
    value: &Option<String>,
    name: &'static str,
) -> Result<Option<String>, FormError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => normalize_timestamp(v, name).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_empty() {
        assert!(matches!(
            require(&None, "title"),
            Err(FormError::Missing("title"))
        ));
        assert!(matches!(
            require(&Some("  ".into()), "title"),
            Err(FormError::Missing("title"))
        ));
        assert_eq!(require(&Some("Hello".into()), "title").unwrap(), "Hello");
    }

    #[test]
    fn checkbox_is_true_only_when_present_and_truthy() {
        assert!(!checkbox(&None));
        assert!(!checkbox(&Some("".into())));
        assert!(checkbox(&Some("on".into())));
        assert!(checkbox(&Some("true".into())));
    }

    #[test]
    fn normalize_accepts_datetime_local_input() {
        assert_eq!(
            normalize_timestamp("2024-03-01T09:30", "published_at").unwrap(),
            "2024-03-01T09:30:00"
        );
    }

    #[test]
    fn normalize_round_trip_preserves_the_instant() {
        let canonical = normalize_timestamp("2024-03-01T09:30:15", "published_at").unwrap();
        assert_eq!(
            normalize_timestamp(&canonical, "published_at").unwrap(),
            canonical
        );
    }

    #[test]
    fn normalize_converts_offsets_to_utc() {
        assert_eq!(
            normalize_timestamp("2024-03-01T09:30:00+02:00", "published_at").unwrap(),
            "2024-03-01T07:30:00"
        );
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert!(matches!(
            normalize_timestamp("yesterday", "published_at"),
            Err(FormError::Timestamp("published_at"))
        ));
    }

    #[test]
    fn opt_number_treats_empty_as_absent() {
        assert_eq!(opt_number(&None, "reading_time_minutes").unwrap(), None);
        assert_eq!(opt_number(&Some("".into()), "reading_time_minutes").unwrap(), None);
        assert_eq!(opt_number(&Some(" 7 ".into()), "reading_time_minutes").unwrap(), Some(7));
        assert!(matches!(
            opt_number(&Some("soon".into()), "reading_time_minutes"),
            Err(FormError::Number("reading_time_minutes"))
        ));
    }

    #[test]
    fn opt_id_treats_empty_as_absent() {
        assert_eq!(opt_id(&Some("".into()), "category_id").unwrap(), None);
        assert!(opt_id(&Some("not-a-uuid".into()), "category_id").is_err());
    }
}
