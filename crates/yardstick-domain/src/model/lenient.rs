//! Forgiving deserializers for CMS-authored content
//!
//! The admin form stores whatever the editor typed, so numbers may arrive as
//! strings and ids as numbers. Values that cannot be interpreted become `None`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::dimensions::parse_number;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Integer(i64),
    Number(f64),
    Other(IgnoredAny),
}

/// Number, numeric string, or null
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => parse_number(&s),
        Some(RawNumber::Other(_)) | None => None,
    })
}

/// Like [`number`], but any string that is present counts: blank or
/// non-numeric text is 0. Only null or a missing field stays `None`.
pub fn percent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => Some(parse_number(&s).unwrap_or(0.0)),
        Some(RawNumber::Other(_)) | None => None,
    })
}

/// String or number, rendered as a string; empty strings become `None`
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawText>::deserialize(deserializer)? {
        Some(RawText::Text(s)) if !s.is_empty() => Some(s),
        Some(RawText::Integer(n)) => Some(n.to_string()),
        Some(RawText::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Treat an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Flag(bool),
    Other(IgnoredAny),
}

/// Boolean or null; anything else counts as unset
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Flag(b)) => Some(b),
        Some(RawFlag::Other(_)) | None => None,
    })
}
