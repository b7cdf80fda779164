//! Serde helpers for HTML form fields.
//!
//! Browsers submit untouched inputs as empty strings, so an empty date or
//! select must read as "absent" rather than fail to parse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

/// Empty or whitespace-only strings become `None`; anything else is parsed with `FromStr`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Like [`empty_string_as_none`] for free text, but keeps the text as submitted.
pub fn blank_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Accepts an id sent either as a JSON number or as form text; blank text is `None`.
pub fn optional_id<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdField {
        Number(i64),
        Text(String),
    }

    match Option::<IdField>::deserialize(de)? {
        None => Ok(None),
        Some(IdField::Number(n)) => Ok(Some(n)),
        Some(IdField::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(IdField::Text(s)) => s.trim().parse::<i64>().map(Some).map_err(de::Error::custom),
    }
}
