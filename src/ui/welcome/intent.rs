use crate::config::ApiConfiguration;
use crate::ui::mvi::Intent;

use super::commit::SubmissionId;
use super::state::Focus;

#[derive(Debug, Clone, PartialEq)]
pub enum WelcomeIntent {
    /// Host answered the startup fetch. Ignored once something is already
    /// in memory, so a slow reply never overwrites an edit.
    ConfigurationLoaded {
        configuration: Option<ApiConfiguration>,
    },
    /// Whole-object replacement of the in-memory configuration. Both the
    /// credential form and the token flow write through here.
    ReplaceConfiguration { configuration: ApiConfiguration },
    /// Validation watcher result for a given configuration version.
    ValidationResolved {
        version: u64,
        result: Option<String>,
    },

    LoginStarted { submission: SubmissionId },
    LoginSucceeded { submission: SubmissionId },
    LoginFailed { submission: SubmissionId },

    /// Token field edited; carries the full new field value.
    TokenChanged { value: String },
    /// Optimistic step of the token flow: the candidate becomes the
    /// in-memory configuration and the field keeps the trimmed token.
    TokenSubmitStarted {
        submission: SubmissionId,
        token: String,
        configuration: ApiConfiguration,
    },
    TokenSubmitSucceeded { submission: SubmissionId },
    TokenSubmitFailed { submission: SubmissionId },

    /// "Use your own API key": reveal the credential form.
    ShowApiOptions,
    ManualSubmitStarted { submission: SubmissionId },
    ManualSubmitFinished { submission: SubmissionId },

    FocusNext,
    FocusPrev,
}

impl Intent for WelcomeIntent {}

impl WelcomeIntent {
    /// Focus target implied by an intent, if any.
    pub(super) fn focus_hint(&self) -> Option<Focus> {
        match self {
            WelcomeIntent::LoginSucceeded { .. } => Some(Focus::TokenField),
            WelcomeIntent::TokenSubmitSucceeded { .. } => Some(Focus::GetStarted),
            WelcomeIntent::ShowApiOptions => Some(Focus::Provider),
            _ => None,
        }
    }
}
