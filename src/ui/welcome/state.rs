use crate::config::{ApiConfiguration, CredentialField};
use crate::ui::mvi::{UiState, Versioned};

use super::commit::SubmissionId;

/// Visibility of the token-entry affordance.
///
/// `Hidden → Shown` on login success, `Shown → Hidden` on token submit
/// success. Nothing else moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenEntry {
    #[default]
    Hidden,
    Shown,
}

/// Whether a remote round trip for one flow is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    InFlight(SubmissionId),
}

impl Activity {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight(_))
    }

    /// True when `submission` is the one this activity is waiting on.
    pub fn is(&self, submission: SubmissionId) -> bool {
        matches!(self, Self::InFlight(current) if *current == submission)
    }
}

/// Focusable element of the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    GetStarted,
    TokenField,
    SubmitToken,
    UseOwnKey,
    Provider,
    Field(CredentialField),
    LetsGo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WelcomeState {
    /// In-memory configuration; `None` until loaded from the host or edited.
    pub configuration: Option<Versioned<ApiConfiguration>>,
    /// Latest validation result and the configuration version it belongs to.
    pub validation: Option<String>,
    pub validated_version: Option<u64>,
    pub token_entry: TokenEntry,
    pub token_input: String,
    pub api_options_visible: bool,
    pub login: Activity,
    pub token_submission: Activity,
    pub manual_submission: Activity,
    pub focus: Focus,
}

impl UiState for WelcomeState {}

impl WelcomeState {
    pub fn api_configuration(&self) -> Option<&ApiConfiguration> {
        self.configuration.as_ref().map(Versioned::value)
    }

    pub fn configuration_version(&self) -> Option<u64> {
        self.configuration.as_ref().map(Versioned::version)
    }

    pub fn is_token_entry_visible(&self) -> bool {
        self.token_entry == TokenEntry::Shown
    }

    pub fn trimmed_token(&self) -> &str {
        self.token_input.trim()
    }

    /// Token submit is offered while the affordance is shown, the trimmed
    /// field is non-empty and no earlier submission is outstanding.
    pub fn token_submit_enabled(&self) -> bool {
        self.is_token_entry_visible()
            && !self.trimmed_token().is_empty()
            && !self.token_submission.is_in_flight()
    }

    /// Manual submit is enabled iff a configuration exists and the
    /// validation result for the current version is "no problem".
    pub fn manual_submit_enabled(&self) -> bool {
        self.configuration.is_some()
            && self.validated_version == self.configuration_version()
            && self.validation.is_none()
    }

    /// Elements reachable with Tab, in screen order.
    pub fn focusables(&self) -> Vec<Focus> {
        let mut items = vec![Focus::GetStarted];
        if self.is_token_entry_visible() {
            items.push(Focus::TokenField);
            items.push(Focus::SubmitToken);
        }
        if self.api_options_visible {
            items.push(Focus::Provider);
            let provider = self
                .api_configuration()
                .map(|c| c.api_provider)
                .unwrap_or_default();
            items.extend(
                CredentialField::for_provider(provider)
                    .iter()
                    .copied()
                    .map(Focus::Field),
            );
            items.push(Focus::LetsGo);
        } else {
            items.push(Focus::UseOwnKey);
        }
        items
    }
}
