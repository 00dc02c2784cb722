//! Submit Button Component

use leptos::prelude::*;

use crate::category::Visibility;
use crate::dom::ids;
use crate::store::{use_form_store, FormStateStoreFields};

/// Save button; disabled with a spinner while a submission runs
#[component]
pub fn SubmitButton() -> impl IntoView {
    let store = use_form_store();
    let phase = move || store.phase().get();
    let spinner_class = move || {
        let visibility = if phase().is_busy() { Visibility::Visible } else { Visibility::Hidden };
        visibility.class("inline w-4 h-4 me-2 animate-spin")
    };

    view! {
        <button
            type="submit"
            id=ids::SUBMIT
            class="w-full text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm px-5 py-2.5"
            disabled=move || phase().is_busy()
        >
            <span id=ids::SPINNER class=spinner_class role="status">"⟳"</span>
            <span id=ids::SUBMIT_TEXT>{move || phase().button_label()}</span>
        </button>
    }
}
