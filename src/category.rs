//! Category Field Layout
//!
//! Decides which field groups are visible for a category value.

use crate::models::Category;

/// Two-state visibility of a field group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Class list for an element following the `hidden` class convention
    pub fn class(self, base: &str) -> String {
        match self {
            Visibility::Visible => base.to_string(),
            Visibility::Hidden if base.is_empty() => "hidden".to_string(),
            Visibility::Hidden => format!("{} hidden", base),
        }
    }
}

/// Field layout derived from the selected category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLayout {
    pub dynamic_fields: Visibility,
    pub consume_fields: Visibility,
    pub favorites_enabled: bool,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    /// Consume date/time should be filled with the current local time
    pub prefill_now: bool,
}

impl Default for CategoryLayout {
    fn default() -> Self {
        Self::for_category("")
    }
}

impl CategoryLayout {
    pub fn for_category(value: &str) -> Self {
        match Category::parse(value) {
            None => Self {
                dynamic_fields: Visibility::Hidden,
                consume_fields: Visibility::Hidden,
                favorites_enabled: false,
                name_label: "Name",
                name_placeholder: "Activity name",
                prefill_now: false,
            },
            Some(Category::Consume) => Self {
                dynamic_fields: Visibility::Visible,
                consume_fields: Visibility::Visible,
                favorites_enabled: true,
                name_label: "Consume Name",
                name_placeholder: "What did you consume?",
                prefill_now: true,
            },
            Some(Category::Other(_)) => Self {
                dynamic_fields: Visibility::Visible,
                consume_fields: Visibility::Hidden,
                favorites_enabled: true,
                name_label: "Name",
                name_placeholder: "Activity name",
                prefill_now: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_hides_everything() {
        let layout = CategoryLayout::for_category("");
        assert_eq!(layout.dynamic_fields, Visibility::Hidden);
        assert!(!layout.favorites_enabled);
        assert!(!layout.prefill_now);
    }

    #[test]
    fn test_non_consume_categories_use_generic_name() {
        for category in ["exercise", "work", "Consume", "consumed", " consume"] {
            let layout = CategoryLayout::for_category(category);
            assert_eq!(layout.consume_fields, Visibility::Hidden, "{}", category);
            assert_eq!(layout.dynamic_fields, Visibility::Visible, "{}", category);
            assert_eq!(layout.name_label, "Name");
            assert_eq!(layout.name_placeholder, "Activity name");
            assert!(layout.favorites_enabled);
        }
    }

    #[test]
    fn test_consume_shows_consume_fields() {
        let layout = CategoryLayout::for_category("consume");
        assert_eq!(layout.dynamic_fields, Visibility::Visible);
        assert_eq!(layout.consume_fields, Visibility::Visible);
        assert_eq!(layout.name_label, "Consume Name");
        assert_eq!(layout.name_placeholder, "What did you consume?");
        assert!(layout.prefill_now);
    }

    #[test]
    fn test_layout_is_idempotent() {
        assert_eq!(CategoryLayout::for_category("consume"), CategoryLayout::for_category("consume"));
    }

    #[test]
    fn test_visibility_class() {
        assert_eq!(Visibility::Hidden.class("space-y-4"), "space-y-4 hidden");
        assert_eq!(Visibility::Visible.class("space-y-4"), "space-y-4");
        assert_eq!(Visibility::Hidden.class(""), "hidden");
    }
}
