//! Status Banner Component

use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

/// Success or error message shown above the form
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_form_store();

    move || {
        store.status().get().map(|message| {
            let class = message.class();
            view! { <div class=class role="alert">{message.text}</div> }
        })
    }
}
