//! Modal Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ModalConfig;

/// Modal-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ModalContext {
    /// Whether the modal is visible - read
    pub is_open: ReadSignal<bool>,
    /// Whether the modal is visible - write
    set_open: WriteSignal<bool>,
    /// Page configuration
    pub config: StoredValue<ModalConfig>,
}

impl ModalContext {
    pub fn new(open: (ReadSignal<bool>, WriteSignal<bool>), config: ModalConfig) -> Self {
        Self {
            is_open: open.0,
            set_open: open.1,
            config: StoredValue::new(config),
        }
    }

    pub fn open(&self) {
        self.set_visible(true);
    }

    pub fn close(&self) {
        self.set_visible(false);
    }

    /// Update visibility, skipping writes that would not change it.
    /// Returns whether the flag changed.
    pub fn set_visible(&self, visible: bool) -> bool {
        if self.is_open.get_untracked() == visible {
            return false;
        }
        self.set_open.set(visible);
        true
    }

    /// Fold a visibility change seen on the modal element into the flag.
    /// Returns true when it opened a modal that was closed.
    pub fn sync_from_class(&self, visible: bool) -> bool {
        self.set_visible(visible) && visible
    }
}

/// Get the modal context
pub fn use_modal_context() -> ModalContext {
    expect_context::<ModalContext>()
}
