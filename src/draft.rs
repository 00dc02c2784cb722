//! Activity Draft Builder
//!
//! Validates a form snapshot and assembles the create payload.

use crate::clock::server_timezone_offset;
use crate::error::ValidationError;
use crate::models::{ActivityDraft, Category};

/// Form values read at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub category: String,
    pub name: String,
    pub favorite: bool,
    pub description: String,
    pub ingredients: String,
    pub date: String,
    pub time: String,
}

/// Split the ingredients text area into items, dropping blank lines
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate `form` and build the payload.
///
/// `offset_minutes` is the client's east-positive UTC offset; the payload
/// carries it negated.
pub fn build_draft(form: &FormSnapshot, offset_minutes: i32) -> Result<ActivityDraft, ValidationError> {
    let category = match Category::parse(&form.category) {
        Some(category) if !form.name.is_empty() => category,
        _ => return Err(ValidationError::MissingRequired),
    };

    let mut draft = ActivityDraft {
        category: category.as_str().to_string(),
        name: form.name.clone(),
        favorite: form.favorite,
        description: None,
        ingredients: None,
        date: None,
        time: None,
        timezone_offset_minutes: None,
    };

    if category.is_consume() {
        if form.date.is_empty() || form.time.is_empty() {
            return Err(ValidationError::MissingDateTime);
        }
        draft.description = Some(form.description.clone());
        draft.ingredients = Some(parse_ingredients(&form.ingredients));
        draft.date = Some(form.date.clone());
        draft.time = Some(form.time.clone());
        draft.timezone_offset_minutes = Some(server_timezone_offset(offset_minutes));
    }

    Ok(draft)
}
