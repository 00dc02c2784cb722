//! Activity Form Component
//!
//! Category selector, favorites, category-specific fields and submit.

use leptos::prelude::*;

use crate::components::{FavoritePicker, SubmitButton};
use crate::context::use_modal_context;
use crate::controller::use_controller;
use crate::dom::ids;
use crate::store::{use_form_store, FormStateStoreFields};

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5";

/// Form for logging an activity
#[component]
pub fn ActivityForm() -> impl IntoView {
    let ctx = use_modal_context();
    let controller = use_controller();
    let store = use_form_store();
    let categories = ctx.config.with_value(|c| c.categories.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        controller.submit();
    };

    view! {
        <form id=ids::FORM class="space-y-4" on:submit=on_submit>
            <div>
                <label for=ids::CATEGORY class=LABEL_CLASS>"Category"</label>
                <select
                    id=ids::CATEGORY
                    class=INPUT_CLASS
                    prop:value=move || store.category().get()
                    on:change=move |ev| controller.change_category(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {categories.into_iter().map(|choice| view! {
                        <option value=choice.slug>{choice.name}</option>
                    }).collect_view()}
                </select>
            </div>

            <FavoritePicker />

            <div id=ids::DYNAMIC_FIELDS class=move || store.dynamic_fields().get().class("space-y-4")>
                <div id=ids::BASIC_FIELDS class="space-y-4">
                    <div>
                        <label id=ids::NAME_LABEL for=ids::NAME class=LABEL_CLASS>
                            {move || store.name_label().get()}
                        </label>
                        <input
                            type="text"
                            id=ids::NAME
                            class=INPUT_CLASS
                            placeholder=move || store.name_placeholder().get()
                            prop:value=move || store.name().get()
                            on:input=move |ev| store.name().set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex items-center">
                        <input
                            type="checkbox"
                            id=ids::SAVE_FAVORITE
                            class="w-4 h-4 rounded"
                            prop:checked=move || store.favorite().get()
                            on:change=move |ev| store.favorite().set(event_target_checked(&ev))
                        />
                        <label for=ids::SAVE_FAVORITE class="ms-2 text-sm text-gray-900 dark:text-gray-300">
                            "Save as favorite"
                        </label>
                    </div>
                </div>

                <div id=ids::CONSUME_FIELDS class=move || store.consume_fields().get().class("space-y-4")>
                    <div>
                        <label for=ids::DESCRIPTION class=LABEL_CLASS>"Description"</label>
                        <textarea
                            id=ids::DESCRIPTION
                            rows="2"
                            class=INPUT_CLASS
                            prop:value=move || store.description().get()
                            on:input=move |ev| store.description().set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div>
                        <label for=ids::INGREDIENTS class=LABEL_CLASS>"Ingredients (one per line)"</label>
                        <textarea
                            id=ids::INGREDIENTS
                            rows="4"
                            class=INPUT_CLASS
                            prop:value=move || store.ingredients().get()
                            on:input=move |ev| store.ingredients().set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for=ids::CONSUME_DATE class=LABEL_CLASS>"Date"</label>
                            <input
                                type="date"
                                id=ids::CONSUME_DATE
                                class=INPUT_CLASS
                                prop:value=move || store.date().get()
                                on:input=move |ev| store.date().set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for=ids::CONSUME_TIME class=LABEL_CLASS>"Time"</label>
                            <input
                                type="time"
                                id=ids::CONSUME_TIME
                                class=INPUT_CLASS
                                prop:value=move || store.time().get()
                                on:input=move |ev| store.time().set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>
            </div>

            <SubmitButton />
        </form>
    }
}
