//! Widget Configuration
//!
//! Read once at startup from a JSON script element on the host page:
//!
//! ```html
//! <script type="application/json" id="activity-modal-config">
//!   {"categories": [{"slug": "consume", "name": "Consume"}], "default_category_on_open": "consume"}
//! </script>
//! ```

use serde::Deserialize;

use crate::logging;

/// Id of the script element carrying the configuration
pub const CONFIG_ELEMENT_ID: &str = "activity-modal-config";

/// Selectable category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryChoice {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Id of the modal container, also matched against `data-modal-toggle`
    pub modal_id: String,
    pub categories: Vec<CategoryChoice>,
    /// Category selected when the widget mounts
    pub initial_category: Option<String>,
    /// Category applied when the modal opens with none selected
    pub default_category_on_open: Option<String>,
    /// Prefix of `{favorites_endpoint}{category}/`
    pub favorites_endpoint: String,
    pub create_endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Delay before refreshing fields after the modal opens
    pub open_refresh_delay_ms: u32,
    /// How long a status message stays above the form
    pub status_ttl_ms: u32,
    pub verbose_logging: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "activityModal".to_string(),
            categories: vec![CategoryChoice { slug: "consume".to_string(), name: "Consume".to_string() }],
            initial_category: None,
            default_category_on_open: None,
            favorites_endpoint: "/activities/favorites/".to_string(),
            create_endpoint: "/activities/create/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            open_refresh_delay_ms: 100,
            status_ttl_ms: 5000,
            verbose_logging: false,
        }
    }
}

impl ModalConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from the host page, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                logging::warn(&format!("Invalid #{} ({}), using defaults", CONFIG_ELEMENT_ID, e));
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
