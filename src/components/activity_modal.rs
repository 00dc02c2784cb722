//! Activity Modal Component
//!
//! Modal container: visibility, open triggers and the open-time refresh.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::category::Visibility;
use crate::components::{ActivityForm, StatusBanner};
use crate::context::use_modal_context;
use crate::controller::use_controller;
use crate::dom::{self, ClassObserver};
use crate::logging;

/// Modal dialog wrapping the activity form
#[component]
pub fn ActivityModal() -> impl IntoView {
    let ctx = use_modal_context();
    let controller = use_controller();
    let modal_id = ctx.config.with_value(|c| c.modal_id.clone());
    let modal_ref = NodeRef::<html::Div>::new();

    // Trigger clicks refresh after a short delay, on every click
    let refresh_after_delay = move || {
        let delay = ctx.config.with_value(|c| c.open_refresh_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            controller.on_modal_opened();
        });
    };

    // Open on clicks on `data-modal-toggle` triggers anywhere on the page.
    // A trigger inside the modal itself closes it.
    let trigger_id = modal_id.clone();
    let click_handle = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target() else { return };
        if !dom::is_modal_trigger(Some(target.clone()), &trigger_id) {
            return;
        }
        let inside = modal_ref.get_untracked().is_some_and(|modal| {
            target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| modal.contains(Some(node)))
        });
        if inside {
            ctx.close();
        } else {
            ctx.open();
            refresh_after_delay();
        }
    });
    on_cleanup(move || click_handle.remove());

    // Class changes made outside Leptos. The echo of our own render finds the
    // flag already set, so only external opens refresh here, right away.
    let observer = StoredValue::new_local(None::<ClassObserver>);
    Effect::new(move |_| {
        let Some(modal) = modal_ref.get() else { return };
        let watch = ClassObserver::observe(&modal, move |visible| {
            if ctx.sync_from_class(visible) {
                controller.on_modal_opened();
            }
        });
        match watch {
            Ok(watch) => observer.set_value(Some(watch)),
            Err(e) => logging::warn(&format!("Cannot observe modal class: {:?}", e)),
        }
    });

    let modal_class = move || {
        let visibility = if ctx.is_open.get() { Visibility::Visible } else { Visibility::Hidden };
        visibility.class("fixed inset-0 z-50 flex items-center justify-center w-full h-full bg-gray-900/50")
    };

    view! {
        <div
            id=modal_id
            node_ref=modal_ref
            tabindex="-1"
            aria-hidden=move || (!ctx.is_open.get()).to_string()
            class=modal_class
        >
            <div class="relative w-full max-w-md max-h-full p-4">
                <div class="relative bg-white rounded-lg shadow dark:bg-gray-700">
                    <div class="flex items-center justify-between p-4 border-b rounded-t dark:border-gray-600">
                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white">"Log Activity"</h3>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-900 rounded-lg text-sm w-8 h-8"
                            on:click=move |_| ctx.close()
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-4">
                        <StatusBanner />
                        <ActivityForm />
                    </div>
                </div>
            </div>
        </div>
    }
}
