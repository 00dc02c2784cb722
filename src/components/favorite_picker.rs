//! Favorite Picker Component
//!
//! Favorites selector with a clear button.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::dom::ids;
use crate::favorites::select_options;
use crate::store::{use_form_store, FormStateStoreFields};

/// Favorites selector; options are derived from the last load
#[component]
pub fn FavoritePicker() -> impl IntoView {
    let controller = use_controller();
    let store = use_form_store();
    let disabled = move || !store.favorites_enabled().get();

    view! {
        <div>
            <label for=ids::FAVORITES class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                "Favorites"
            </label>
            <div class="flex gap-2">
                <select
                    id=ids::FAVORITES
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                    disabled=disabled
                    prop:value=move || store.selected_favorite().get()
                    on:change=move |ev| controller.select_favorite(event_target_value(&ev))
                >
                    {move || store.favorites().with(select_options).into_iter().map(|opt| view! {
                        <option value=opt.value disabled=opt.disabled>{opt.label}</option>
                    }).collect_view()}
                </select>
                <button
                    type="button"
                    id=ids::CLEAR_FAVORITE
                    class="px-3 text-sm rounded-lg border border-gray-300"
                    disabled=disabled
                    on:click=move |_| controller.clear_favorite()
                >
                    "Clear"
                </button>
            </div>
        </div>
    }
}
