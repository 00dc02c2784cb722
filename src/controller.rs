//! Activity Modal Controller
//!
//! Operations behind the modal's event handlers. Built once at mount and
//! shared through context; every handle it holds is `Copy`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CsrfToken};
use crate::category::CategoryLayout;
use crate::clock::LocalStamp;
use crate::context::ModalContext;
use crate::dom;
use crate::draft::build_draft;
use crate::favorites::{FavoriteFill, FavoritesState};
use crate::logging;
use crate::store::{
    store_apply_favorites, store_apply_layout, store_begin_favorites, store_clear_favorite,
    store_expire_status, store_fill_favorite, store_reset_form, store_show_status, store_snapshot,
    FormStateStoreFields, FormStore,
};
use crate::submit::{StatusKind, SubmitOutcome};

#[derive(Clone, Copy)]
pub struct ActivityModalController {
    store: FormStore,
    ctx: ModalContext,
}

impl ActivityModalController {
    pub fn new(store: FormStore, ctx: ModalContext) -> Self {
        Self { store, ctx }
    }

    /// Run the category setup for a category already selected at mount
    pub fn init(&self) {
        let category = self.store.category().get_untracked();
        logging::debug(&format!("Initial category: {:?}", category));
        if !category.is_empty() {
            self.update_form_for_category(&category);
        }
    }

    /// Category selector changed
    pub fn change_category(&self, category: String) {
        logging::debug(&format!("Category changed to: {}", category));
        self.store.category().set(category.clone());
        self.update_form_for_category(&category);
    }

    /// Show the fields for `category`, prefill consume date/time and reload
    /// favorites
    pub fn update_form_for_category(&self, category: &str) {
        let layout = CategoryLayout::for_category(category);
        store_apply_layout(&self.store, &layout);

        if layout.prefill_now {
            let now = LocalStamp::now();
            logging::debug(&format!("Local date/time: {} {}", now.date, now.time));
            self.store.date().set(now.date);
            self.store.time().set(now.time);
        }

        if layout.favorites_enabled {
            self.load_favorites(category.to_string());
        }
    }

    /// Replace the favorites list with the server's list for `category`
    pub fn load_favorites(&self, category: String) {
        let store = self.store;
        let ticket = store_begin_favorites(&store);

        let endpoint = self.ctx.config.with_value(|c| c.favorites_endpoint.clone());
        spawn_local(async move {
            let result = api::fetch_favorites(&endpoint, &category).await;
            let summary = result.as_ref().map(Vec::len).map_err(|e| e.to_string());
            if !store_apply_favorites(&store, ticket, FavoritesState::from_result(result)) {
                logging::debug(&format!("Dropping stale favorites for {}", category));
                return;
            }
            match summary {
                Ok(count) => logging::debug(&format!("Loaded {} favorites for {}", count, category)),
                Err(e) => logging::error(&format!("Error loading favorites: {}", e)),
            }
        });
    }

    /// Favorites selector changed
    pub fn select_favorite(&self, id: String) {
        let fill = self
            .store
            .favorites()
            .with_untracked(|state| state.find(&id).map(FavoriteFill::from_favorite));
        self.store.selected_favorite().set(id);
        if let Some(fill) = fill {
            store_fill_favorite(&self.store, fill);
        }
    }

    pub fn clear_favorite(&self) {
        store_clear_favorite(&self.store);
    }

    /// Modal went from hidden to visible
    pub fn on_modal_opened(&self) {
        let current = self.store.category().get_untracked();
        logging::debug(&format!("Modal visible, category {:?}", current));
        let default = self.ctx.config.with_value(|c| c.default_category_on_open.clone());
        let Some(category) = category_on_open(&current, default.as_deref()) else {
            return;
        };
        if category != current {
            self.store.category().set(category.clone());
        }
        self.update_form_for_category(&category);
    }

    /// Validate and post the form
    pub fn submit(&self) {
        let store = self.store;
        let started = store.phase().write().begin();
        if !started {
            return;
        }

        let draft = match build_draft(&store_snapshot(&store), LocalStamp::now().offset_minutes) {
            Ok(draft) => draft,
            Err(e) => {
                dom::alert(&e.to_string());
                store.phase().write().finish();
                return;
            }
        };

        let this = *self;
        let (endpoint, csrf_cookie, csrf_header, initial_category) = self.ctx.config.with_value(|c| {
            (
                c.create_endpoint.clone(),
                c.csrf_cookie.clone(),
                c.csrf_header.clone(),
                c.initial_category.clone(),
            )
        });
        spawn_local(async move {
            let token = dom::read_cookie(&csrf_cookie);
            if token.is_none() {
                logging::warn(&format!("No {} cookie, posting without CSRF header", csrf_cookie));
            }
            let csrf = token.as_deref().map(|value| CsrfToken { header: &csrf_header, value });
            let result = api::create_activity(&endpoint, &draft, csrf).await;
            if let Err(e) = &result {
                logging::error(&format!("Save failed: {}", e));
            }

            let outcome = SubmitOutcome::from_result(result);
            this.show_status(outcome.kind, outcome.text);
            if let Some(action) = outcome.navigation {
                this.ctx.close();
                store_reset_form(&store, initial_category.as_deref());
                dom::navigate(&action);
            }
            store.phase().write().finish();
        });
    }

    /// Show a status message above the form until it expires
    pub fn show_status(&self, kind: StatusKind, text: String) {
        let store = self.store;
        let id = store_show_status(&store, kind, text);

        let ttl = self.ctx.config.with_value(|c| c.status_ttl_ms);
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store_expire_status(&store, id);
        });
    }
}

/// Get the controller from context
pub fn use_controller() -> ActivityModalController {
    expect_context::<ActivityModalController>()
}

/// Category to set up when the modal opens, if any. The configured default
/// only applies while no category is selected.
fn category_on_open(current: &str, default: Option<&str>) -> Option<String> {
    if !current.is_empty() {
        return Some(current.to_string());
    }
    default.filter(|d| !d.is_empty()).map(str::to_string)
}
