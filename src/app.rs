//! Activity Modal App
//!
//! Root component: builds the store, context and controller once and
//! provides them to the modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ActivityModal;
use crate::config::ModalConfig;
use crate::context::ModalContext;
use crate::controller::ActivityModalController;
use crate::store::FormState;

#[component]
pub fn App(config: ModalConfig) -> impl IntoView {
    // State
    let store = Store::new(FormState::new(config.initial_category.as_deref()));
    let ctx = ModalContext::new(signal(false), config);
    let controller = ActivityModalController::new(store, ctx);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(controller);

    controller.init();

    view! { <ActivityModal /> }
}
