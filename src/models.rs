//! Frontend Models
//!
//! Data structures matching the activity endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category value with specialized field behavior
pub const CONSUME: &str = "consume";

/// Activity category selected in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Consume,
    Other(String),
}

impl Category {
    /// Parse a selector value. The empty string means no category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            CONSUME => Some(Category::Consume),
            other => Some(Category::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Consume => CONSUME,
            Category::Other(slug) => slug,
        }
    }

    pub fn is_consume(&self) -> bool {
        matches!(self, Category::Consume)
    }
}

/// Ingredients attached to a favorite
///
/// Stored favorites may carry a list, a JSON-encoded list as a string, or
/// nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Ingredients {
    #[default]
    Missing,
    List(Vec<String>),
    Malformed,
}

impl Ingredients {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Ingredients::Missing,
            Value::String(raw) if raw.is_empty() => Ingredients::Missing,
            Value::String(raw) => serde_json::from_str::<Vec<Value>>(&raw)
                .ok()
                .and_then(list_items)
                .map_or(Ingredients::Malformed, Ingredients::List),
            Value::Array(items) => list_items(items).map_or(Ingredients::Malformed, Ingredients::List),
            _ => Ingredients::Malformed,
        }
    }
}

/// Render scalar list items as text. Nested arrays or objects reject the list.
fn list_items(items: Vec<Value>) -> Option<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Some(text),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some(String::new()),
            _ => None,
        })
        .collect()
}

fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Ingredients, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Ingredients::from_value(Value::deserialize(deserializer)?))
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        // js numbers may arrive as floats
        Value::Number(id) => Ok(match id.as_f64() {
            Some(n) if id.is_f64() && n.fract() == 0.0 => format!("{}", n as i64),
            _ => id.to_string(),
        }),
        other => Err(serde::de::Error::custom(format!("unsupported favorite id: {}", other))),
    }
}

/// Saved favorite returned by the favorites endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FavoriteOption {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_ingredients")]
    pub ingredients: Ingredients,
}

/// Payload posted to the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDraft {
    pub category: String,
    pub name: String,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "timezone_offset", skip_serializing_if = "Option::is_none")]
    pub timezone_offset_minutes: Option<i32>,
}

/// Body returned by the create endpoint (success or failure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateActivityResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

impl CreateActivityResponse {
    /// Some server revisions report failures with a 2xx and `status: "error"`
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("consume"), Some(Category::Consume));
        assert_eq!(Category::parse("exercise"), Some(Category::Other("exercise".into())));
        assert_eq!(Category::parse("exercise").unwrap().as_str(), "exercise");
    }

    #[test]
    fn test_favorite_with_numeric_id_and_list() {
        let fav: FavoriteOption = serde_json::from_str(
            r#"{"id": 7, "name": "Oatmeal", "description": "Breakfast", "ingredients": ["oats", "milk"]}"#,
        )
        .unwrap();
        assert_eq!(fav.id, "7");
        let float_id: FavoriteOption = serde_json::from_str(r#"{"id": 7.0, "name": "Oatmeal"}"#).unwrap();
        assert_eq!(float_id.id, "7");
        assert_eq!(fav.description.as_deref(), Some("Breakfast"));
        assert_eq!(fav.ingredients, Ingredients::List(vec!["oats".into(), "milk".into()]));
    }

    #[test]
    fn test_favorite_without_optional_fields() {
        let fav: FavoriteOption = serde_json::from_str(r#"{"id": "a1", "name": "Run"}"#).unwrap();
        assert_eq!(fav.description, None);
        assert_eq!(fav.ingredients, Ingredients::Missing);
    }

    #[test]
    fn test_stored_json_ingredients() {
        let fav: FavoriteOption =
            serde_json::from_str(r#"{"id": 1, "name": "Tea", "ingredients": "[\"water\", \"leaves\"]"}"#).unwrap();
        assert_eq!(fav.ingredients, Ingredients::List(vec!["water".into(), "leaves".into()]));

        let fav: FavoriteOption =
            serde_json::from_str(r#"{"id": 1, "name": "Tea", "ingredients": "water, leaves"}"#).unwrap();
        assert_eq!(fav.ingredients, Ingredients::Malformed);
    }

    #[test]
    fn test_mixed_scalar_ingredients_are_kept() {
        let fav: FavoriteOption =
            serde_json::from_str(r#"{"id": 1, "name": "Soup", "ingredients": [1, "salt"]}"#).unwrap();
        assert_eq!(fav.ingredients, Ingredients::List(vec!["1".into(), "salt".into()]));

        let fav: FavoriteOption =
            serde_json::from_str(r#"{"id": 1, "name": "Soup", "ingredients": "[2.5, true, \"salt\"]"}"#).unwrap();
        assert_eq!(fav.ingredients, Ingredients::List(vec!["2.5".into(), "true".into(), "salt".into()]));

        let fav: FavoriteOption =
            serde_json::from_str(r#"{"id": 1, "name": "Soup", "ingredients": [["salt"], {"a": 1}]}"#).unwrap();
        assert_eq!(fav.ingredients, Ingredients::Malformed);
    }

    #[test]
    fn test_draft_skips_absent_fields() {
        let draft = ActivityDraft {
            category: "exercise".into(),
            name: "Run".into(),
            favorite: false,
            description: None,
            ingredients: None,
            date: None,
            time: None,
            timezone_offset_minutes: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"category": "exercise", "name": "Run", "favorite": false}));
    }

    #[test]
    fn test_error_status_in_success_body() {
        let body: CreateActivityResponse =
            serde_json::from_str(r#"{"status": "error", "message": "Nope"}"#).unwrap();
        assert!(body.is_error());
        let body: CreateActivityResponse = serde_json::from_str(r#"{"message": "Saved"}"#).unwrap();
        assert!(!body.is_error());
    }
}
