//! Favorites List
//!
//! Selector options derived from the last favorites load, and the field
//! values copied into the form when a favorite is picked.

use crate::error::ApiError;
use crate::models::{FavoriteOption, Ingredients};

pub const PLACEHOLDER_LABEL: &str = "Select a favorite";
pub const EMPTY_LABEL: &str = "No favorites found";
pub const ERROR_LABEL: &str = "Error loading favorites";

/// State of the favorites selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FavoritesState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<FavoriteOption>),
    Failed,
}

impl FavoritesState {
    pub fn from_result(result: Result<Vec<FavoriteOption>, ApiError>) -> Self {
        match result {
            Ok(favorites) => FavoritesState::Loaded(favorites),
            Err(_) => FavoritesState::Failed,
        }
    }

    pub fn find(&self, id: &str) -> Option<&FavoriteOption> {
        match self {
            FavoritesState::Loaded(favorites) => favorites.iter().find(|fav| fav.id == id),
            _ => None,
        }
    }
}

/// One `<option>` of the favorites selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, disabled: bool) -> Self {
        Self { value: value.to_string(), label: label.to_string(), disabled }
    }
}

/// Options rendered for the given state, placeholder first
pub fn select_options(state: &FavoritesState) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", PLACEHOLDER_LABEL, false)];
    match state {
        FavoritesState::Idle | FavoritesState::Loading => {}
        FavoritesState::Loaded(favorites) if favorites.is_empty() => {
            options.push(SelectOption::new("", EMPTY_LABEL, true));
        }
        FavoritesState::Loaded(favorites) => {
            options.extend(favorites.iter().map(|fav| SelectOption::new(&fav.id, &fav.name, false)));
        }
        FavoritesState::Failed => {
            options.push(SelectOption::new("", ERROR_LABEL, true));
        }
    }
    options
}

/// Field values to copy into the form; `None` leaves a field untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteFill {
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
}

impl FavoriteFill {
    pub fn from_favorite(favorite: &FavoriteOption) -> Self {
        let description = favorite
            .description
            .as_ref()
            .filter(|text| !text.is_empty())
            .cloned();
        let ingredients = match &favorite.ingredients {
            Ingredients::Missing => None,
            Ingredients::List(items) => Some(items.join("\n")),
            Ingredients::Malformed => Some(String::new()),
        };
        Self { name: favorite.name.clone(), description, ingredients }
    }
}
