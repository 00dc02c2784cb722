//! Console Logging
//!
//! Tagged console output. Debug lines are only printed when verbose logging
//! is enabled in the page configuration.

use std::sync::atomic::{AtomicBool, Ordering};

const TAG: &str = "[MODAL]";

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn debug(message: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        web_sys::console::log_1(&format!("{} {}", TAG, message).into());
    }
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{} {}", TAG, message).into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&format!("{} {}", TAG, message).into());
}
