//! Submission State
//!
//! Idle/Submitting phase of the save button and the outcome of a finished
//! create request.

use crate::error::ApiError;
use crate::models::CreateActivityResponse;

pub const SAVE_LABEL: &str = "Save Activity";
pub const SAVING_LABEL: &str = "Saving...";
pub const SAVED_MESSAGE: &str = "Activity saved successfully!";

/// Phase of the submit control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => SAVE_LABEL,
            SubmitPhase::Submitting => SAVING_LABEL,
        }
    }

    /// Move to Submitting. Returns false if a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = SubmitPhase::Submitting;
        true
    }

    pub fn finish(&mut self) {
        *self = SubmitPhase::Idle;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message shown above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "p-4 mb-4 text-sm rounded-lg bg-green-100 text-green-800 dark:bg-green-800 dark:text-green-100",
            StatusKind::Error => "p-4 mb-4 text-sm rounded-lg bg-red-100 text-red-800 dark:bg-red-800 dark:text-red-100",
        }
    }
}

/// Page navigation after a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Reload,
    Redirect(String),
}

/// What the modal does once the create request resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: StatusKind,
    pub text: String,
    /// Set only on success; the modal is closed and reset before navigating
    pub navigation: Option<PageAction>,
}

impl SubmitOutcome {
    pub fn from_result(result: Result<CreateActivityResponse, ApiError>) -> Self {
        match result {
            Ok(body) => {
                let text = body
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| SAVED_MESSAGE.to_string());
                let navigation = match body.redirect.filter(|url| !url.is_empty()) {
                    Some(url) => PageAction::Redirect(url),
                    None => PageAction::Reload,
                };
                Self { kind: StatusKind::Success, text, navigation: Some(navigation) }
            }
            Err(err) => Self { kind: StatusKind::Error, text: err.user_message(), navigation: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_blocks_duplicate_submissions() {
        let mut phase = SubmitPhase::default();
        assert!(phase.begin());
        assert_eq!(phase.button_label(), "Saving...");
        assert!(!phase.begin());
        phase.finish();
        assert_eq!(phase.button_label(), "Save Activity");
        assert!(!phase.is_busy());
        assert!(phase.begin());
    }

    #[test]
    fn test_success_reloads_exactly_once() {
        let outcome = SubmitOutcome::from_result(Ok(CreateActivityResponse {
            message: Some("Saved!".into()),
            ..Default::default()
        }));
        assert_eq!(outcome.kind, StatusKind::Success);
        assert_eq!(outcome.text, "Saved!");
        assert_eq!(outcome.navigation, Some(PageAction::Reload));
    }

    #[test]
    fn test_success_without_message_uses_default() {
        let outcome = SubmitOutcome::from_result(Ok(CreateActivityResponse::default()));
        assert_eq!(outcome.text, SAVED_MESSAGE);
    }

    #[test]
    fn test_success_with_redirect_navigates_there() {
        let outcome = SubmitOutcome::from_result(Ok(CreateActivityResponse {
            status: Some("success".into()),
            message: Some("Saved".into()),
            redirect: Some("/dashboard/".into()),
        }));
        assert_eq!(outcome.navigation, Some(PageAction::Redirect("/dashboard/".into())));
    }

    #[test]
    fn test_failure_never_navigates() {
        let outcome = SubmitOutcome::from_result(Err(ApiError::Server {
            status: 400,
            message: Some("Invalid category".into()),
        }));
        assert_eq!(outcome.kind, StatusKind::Error);
        assert_eq!(outcome.text, "Invalid category");
        assert_eq!(outcome.navigation, None);
    }
}
