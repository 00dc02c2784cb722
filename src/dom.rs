//! Page Helpers
//!
//! Element ids of the modal, plus the few browser calls made outside the
//! Leptos view: alerts, navigation, cookies and class observation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};

use crate::cookie::find_cookie;
use crate::logging;
use crate::submit::PageAction;

/// Element ids rendered by the modal
pub mod ids {
    pub const FORM: &str = "activityForm";
    pub const CATEGORY: &str = "category";
    pub const FAVORITES: &str = "favorite-activities";
    pub const CLEAR_FAVORITE: &str = "clear-favorite";
    pub const DYNAMIC_FIELDS: &str = "dynamic-fields";
    pub const BASIC_FIELDS: &str = "basic-fields";
    pub const CONSUME_FIELDS: &str = "consume-fields";
    pub const NAME_LABEL: &str = "activity-name-label";
    pub const NAME: &str = "activity-name";
    pub const DESCRIPTION: &str = "description";
    pub const INGREDIENTS: &str = "ingredients";
    pub const CONSUME_DATE: &str = "consume-date";
    pub const CONSUME_TIME: &str = "consume-time";
    pub const SAVE_FAVORITE: &str = "save-favorite";
    pub const SUBMIT: &str = "save-activity-btn";
    pub const SUBMIT_TEXT: &str = "submit-text";
    pub const SPINNER: &str = "loading-spinner";
}

/// Attribute marking an element as an open trigger for a modal id
pub const TOGGLE_ATTR: &str = "data-modal-toggle";

pub const HIDDEN_CLASS: &str = "hidden";

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn navigate(action: &PageAction) {
    let Some(win) = web_sys::window() else { return };
    let location = win.location();
    let result = match action {
        PageAction::Reload => location.reload(),
        PageAction::Redirect(url) => location.assign(url),
    };
    if result.is_err() {
        logging::error(&format!("Navigation failed: {:?}", action));
    }
}

pub fn read_cookie(name: &str) -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    find_cookie(&cookies, name)
}

/// Whether a click landed on (or inside) a trigger for `modal_id`
pub fn is_modal_trigger(target: Option<web_sys::EventTarget>, modal_id: &str) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(&format!("[{}]", TOGGLE_ATTR)).ok().flatten())
        .and_then(|el| el.get_attribute(TOGGLE_ATTR))
        .is_some_and(|id| id == modal_id)
}

/// Watches the `class` attribute of an element and reports whether it is
/// visible. Disconnects when dropped.
pub struct ClassObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl ClassObserver {
    pub fn observe(element: &Element, on_change: impl Fn(bool) + 'static) -> Result<Self, JsValue> {
        let target = element.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                let class_changed = records.iter().any(|record| {
                    record
                        .dyn_into::<MutationRecord>()
                        .ok()
                        .and_then(|record| record.attribute_name())
                        .is_some_and(|name| name == "class")
                });
                if class_changed {
                    on_change(!target.class_list().contains(HIDDEN_CLASS));
                }
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
        observer.observe_with_options(element, &init)?;

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ClassObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
