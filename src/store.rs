//! Modal Form Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::category::{CategoryLayout, Visibility};
use crate::draft::FormSnapshot;
use crate::favorites::{FavoriteFill, FavoritesState};
use crate::sequence::Generation;
use crate::submit::{StatusKind, StatusMessage, SubmitPhase};

/// Form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Selected category slug ("" = none)
    pub category: String,
    pub name: String,
    pub description: String,
    /// Ingredients text area, one item per line
    pub ingredients: String,
    pub date: String,
    pub time: String,
    /// Save this activity as a favorite
    pub favorite: bool,

    /// Visibility of the category-specific group
    pub dynamic_fields: Visibility,
    /// Visibility of description/ingredients/date/time
    pub consume_fields: Visibility,
    pub favorites_enabled: bool,
    pub name_label: String,
    pub name_placeholder: String,

    pub favorites: FavoritesState,
    /// Id of the selected favorite ("" = placeholder)
    pub selected_favorite: String,
    /// Latest favorites request; older responses are dropped
    pub favorites_generation: Generation,

    pub phase: SubmitPhase,
    pub status: Option<StatusMessage>,
    pub status_generation: Generation,
}

impl FormState {
    pub fn new(initial_category: Option<&str>) -> Self {
        let layout = CategoryLayout::default();
        Self {
            category: initial_category.unwrap_or_default().to_string(),
            name_label: layout.name_label.to_string(),
            name_placeholder: layout.name_placeholder.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply the visibility flags and labels of a category layout
pub fn store_apply_layout(store: &FormStore, layout: &CategoryLayout) {
    store.dynamic_fields().set(layout.dynamic_fields);
    store.consume_fields().set(layout.consume_fields);
    store.favorites_enabled().set(layout.favorites_enabled);
    store.name_label().set(layout.name_label.to_string());
    store.name_placeholder().set(layout.name_placeholder.to_string());
}

/// Copy a favorite into the form fields it provides
pub fn store_fill_favorite(store: &FormStore, fill: FavoriteFill) {
    store.name().set(fill.name);
    if let Some(description) = fill.description {
        store.description().set(description);
    }
    if let Some(ingredients) = fill.ingredients {
        store.ingredients().set(ingredients);
    }
}

/// Reset the favorites selector and the fields a favorite fills
pub fn store_clear_favorite(store: &FormStore) {
    store.selected_favorite().set(String::new());
    store.name().set(String::new());
    store.description().set(String::new());
    store.ingredients().set(String::new());
}

/// Start a favorites load: drop the selection, show the loading option and
/// return the ticket the response must present
pub fn store_begin_favorites(store: &FormStore) -> u64 {
    let ticket = store.favorites_generation().write().advance();
    store.selected_favorite().set(String::new());
    store.favorites().set(FavoritesState::Loading);
    ticket
}

/// Apply a favorites response unless a newer load has started since.
/// Returns whether it was applied.
pub fn store_apply_favorites(store: &FormStore, ticket: u64, state: FavoritesState) -> bool {
    if !store.favorites_generation().with_untracked(|g| g.is_current(ticket)) {
        return false;
    }
    store.favorites().set(state);
    true
}

/// Replace the status message and return its id
pub fn store_show_status(store: &FormStore, kind: StatusKind, text: String) -> u64 {
    let id = store.status_generation().write().advance();
    store.status().set(Some(StatusMessage { id, kind, text }));
    id
}

/// Clear the status message `id` unless a newer one replaced it.
/// Returns whether it was cleared.
pub fn store_expire_status(store: &FormStore, id: u64) -> bool {
    if !store.status_generation().with_untracked(|g| g.is_current(id)) {
        return false;
    }
    store.status().set(None);
    true
}

/// Reset every input to its initial value, keeping request generations
pub fn store_reset_form(store: &FormStore, initial_category: Option<&str>) {
    let fresh = FormState::new(initial_category);
    store.category().set(fresh.category);
    store.name().set(fresh.name);
    store.description().set(fresh.description);
    store.ingredients().set(fresh.ingredients);
    store.date().set(fresh.date);
    store.time().set(fresh.time);
    store.favorite().set(fresh.favorite);
    store.selected_favorite().set(fresh.selected_favorite);
    store_apply_layout(store, &CategoryLayout::for_category(initial_category.unwrap_or_default()));
}

/// Read the values submitted with the form
pub fn store_snapshot(store: &FormStore) -> FormSnapshot {
    FormSnapshot {
        category: store.category().get_untracked(),
        name: store.name().get_untracked(),
        favorite: store.favorite().get_untracked(),
        description: store.description().get_untracked(),
        ingredients: store.ingredients().get_untracked(),
        date: store.date().get_untracked(),
        time: store.time().get_untracked(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FavoriteOption, Ingredients};

    fn make_store(initial_category: Option<&str>) -> (Owner, FormStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(FormState::new(initial_category)))
    }

    fn make_favorite(id: &str, name: &str) -> FavoriteOption {
        FavoriteOption {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            ingredients: Ingredients::Missing,
        }
    }

    #[test]
    fn test_clear_favorite_blanks_filled_fields() {
        let (_owner, store) = make_store(Some("consume"));
        store.selected_favorite().set("3".into());
        store.name().set("Oatmeal".into());
        store.description().set("Breakfast".into());
        store.ingredients().set("oats\nmilk".into());
        store.date().set("2024-05-01".into());

        store_clear_favorite(&store);

        assert_eq!(store.selected_favorite().get_untracked(), "");
        assert_eq!(store.name().get_untracked(), "");
        assert_eq!(store.description().get_untracked(), "");
        assert_eq!(store.ingredients().get_untracked(), "");
        assert_eq!(store.date().get_untracked(), "2024-05-01");
        assert_eq!(store.category().get_untracked(), "consume");
    }

    #[test]
    fn test_fill_favorite_keeps_fields_it_does_not_provide() {
        let (_owner, store) = make_store(None);
        store.description().set("typed by hand".into());
        store.ingredients().set("water".into());

        store_fill_favorite(
            &store,
            FavoriteFill { name: "Tea".into(), description: None, ingredients: Some("leaves".into()) },
        );

        assert_eq!(store.name().get_untracked(), "Tea");
        assert_eq!(store.description().get_untracked(), "typed by hand");
        assert_eq!(store.ingredients().get_untracked(), "leaves");
    }

    #[test]
    fn test_reset_restores_initial_category_layout() {
        let (_owner, store) = make_store(Some("consume"));
        store.category().set("exercise".into());
        store_apply_layout(&store, &CategoryLayout::for_category("exercise"));
        store.name().set("Run".into());

        store_reset_form(&store, Some("consume"));

        assert_eq!(store.category().get_untracked(), "consume");
        assert_eq!(store.name().get_untracked(), "");
        assert_eq!(store.consume_fields().get_untracked(), Visibility::Visible);
        assert_eq!(store.dynamic_fields().get_untracked(), Visibility::Visible);
        assert_eq!(store.name_label().get_untracked(), "Consume Name");

        store_reset_form(&store, None);
        assert_eq!(store.category().get_untracked(), "");
        assert_eq!(store.dynamic_fields().get_untracked(), Visibility::Hidden);
        assert_eq!(store.name_label().get_untracked(), "Name");
    }

    #[test]
    fn test_stale_favorites_response_is_dropped() {
        let (_owner, store) = make_store(None);
        store.selected_favorite().set("1".into());

        let first = store_begin_favorites(&store);
        assert_eq!(store.selected_favorite().get_untracked(), "");
        assert_eq!(store.favorites().get_untracked(), FavoritesState::Loading);
        let second = store_begin_favorites(&store);

        let stale = FavoritesState::Loaded(vec![make_favorite("1", "Old")]);
        assert!(!store_apply_favorites(&store, first, stale));
        assert_eq!(store.favorites().get_untracked(), FavoritesState::Loading);

        let fresh = FavoritesState::Loaded(vec![make_favorite("2", "New")]);
        assert!(store_apply_favorites(&store, second, fresh.clone()));
        assert_eq!(store.favorites().get_untracked(), fresh);
    }

    #[test]
    fn test_older_status_timer_keeps_newer_message() {
        let (_owner, store) = make_store(None);
        let first = store_show_status(&store, StatusKind::Error, "Failed to save activity".into());
        let second = store_show_status(&store, StatusKind::Success, "Saved".into());

        assert!(!store_expire_status(&store, first));
        let shown = store.status().get_untracked().map(|m| (m.id, m.text));
        assert_eq!(shown, Some((second, "Saved".to_string())));

        assert!(store_expire_status(&store, second));
        assert_eq!(store.status().get_untracked(), None);
    }
}
