//! Conversion of raw user input into typed store arguments.
//!
//! Every function here either yields a well-formed value or a [`PlantError`];
//! nothing is silently coerced.

use std::{num::NonZeroU32, str::FromStr};

use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{
    error::{PlantError, PlantResult},
    models::{Filter, NewPlant, PlantEdit},
};

/// Parse a watering interval in days. Zero, negative and non-numeric input is rejected.
pub fn parse_interval(input: &str) -> PlantResult<NonZeroU32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| PlantError::InvalidInterval(trimmed.to_string()))
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(input: &str) -> PlantResult<OffsetDateTime> {
    let trimmed = input.trim();
    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(timestamp);
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| PlantError::InvalidDate(trimmed.to_string()))
}

impl FromStr for Filter {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "thirsty" => Ok(Filter::Thirsty),
            "watered" => Ok(Filter::Watered),
            _ => Err(PlantError::UnknownFilter(s.trim().to_string())),
        }
    }
}

impl NewPlant {
    /// Build a plant from form input. A missing or blank date means `now`.
    pub fn parse(
        name: &str,
        interval: &str,
        last_watered: Option<&str>,
        now: OffsetDateTime,
    ) -> PlantResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlantError::EmptyValue("plant name"));
        }
        let watering_interval = parse_interval(interval)?;
        let last_watered = match last_watered.map(str::trim) {
            Some(date) if !date.is_empty() => parse_date(date)?,
            _ => now,
        };
        Ok(Self {
            name: name.to_string(),
            watering_interval,
            last_watered,
        })
    }
}

impl PlantEdit {
    /// Build an edit from a field name and its new value.
    ///
    /// Accepts `text`, `recommendedWatering` and `lastWatered`, plus their
    /// snake_case spellings and the short forms `name` and `interval`.
    pub fn parse(field: &str, value: &str) -> PlantResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PlantError::EmptyValue("edit value"));
        }
        match field.trim() {
            "text" | "name" => Ok(PlantEdit::Text(value.to_string())),
            "recommendedWatering" | "recommended_watering" | "interval" => {
                parse_interval(value).map(PlantEdit::RecommendedWatering)
            }
            "lastWatered" | "last_watered" => parse_date(value).map(PlantEdit::LastWatered),
            other => Err(PlantError::UnknownField(other.to_string())),
        }
    }
}
