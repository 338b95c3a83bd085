//! Optimistic commit: apply locally, attempt remotely, never roll back.
//!
//! The token flow shows the merged configuration before the host confirms
//! it. If the host write fails the local value stays as it is; the screen
//! and the store may then disagree until the next successful write. That is
//! the accepted behavior of this flow, and it lives here so each step is
//! named at the call site.

use uuid::Uuid;

use crate::config::ApiConfiguration;
use crate::ipc::HostError;
use crate::wire::UpdateSettingsRequest;

use super::intent::WelcomeIntent;

/// Correlates a remote write with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One token submission, from local apply to remote outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimisticCommit {
    submission: SubmissionId,
    token: String,
    candidate: ApiConfiguration,
}

impl OptimisticCommit {
    /// Build the candidate by merging the trimmed token into a copy of the
    /// current configuration. Returns `None` for a blank token.
    pub fn begin(current: Option<&ApiConfiguration>, raw_token: &str) -> Option<Self> {
        let token = raw_token.trim();
        if token.is_empty() {
            return None;
        }
        let candidate = current.cloned().unwrap_or_default().with_user_token(token);
        Some(Self {
            submission: SubmissionId::new(),
            token: token.to_string(),
            candidate,
        })
    }

    pub fn submission(&self) -> SubmissionId {
        self.submission
    }

    pub fn candidate(&self) -> &ApiConfiguration {
        &self.candidate
    }

    /// Phase one: the intent that applies the candidate locally.
    pub fn apply_locally(&self) -> WelcomeIntent {
        WelcomeIntent::TokenSubmitStarted {
            submission: self.submission,
            token: self.token.clone(),
            configuration: self.candidate.clone(),
        }
    }

    /// Phase two: the remote write of the same candidate.
    pub fn remote_request(&self) -> UpdateSettingsRequest {
        UpdateSettingsRequest::from_configuration(&self.candidate)
    }

    /// Phase three: map the remote outcome to an intent. A failure carries
    /// no compensating change; the optimistic value is kept.
    pub fn settle(submission: SubmissionId, result: &Result<(), HostError>) -> WelcomeIntent {
        match result {
            Ok(()) => WelcomeIntent::TokenSubmitSucceeded { submission },
            Err(_) => WelcomeIntent::TokenSubmitFailed { submission },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::IpcError;

    #[test]
    fn blank_token_does_not_begin() {
        assert!(OptimisticCommit::begin(None, "").is_none());
        assert!(OptimisticCommit::begin(None, " \t\n").is_none());
    }

    #[test]
    fn begin_trims_and_merges() {
        let current = ApiConfiguration {
            api_key: Some("sk".into()),
            ..Default::default()
        };
        let commit = OptimisticCommit::begin(Some(&current), "  abc123  ").unwrap();
        assert_eq!(commit.candidate().user_token.as_deref(), Some("abc123"));
        assert_eq!(commit.candidate().api_key.as_deref(), Some("sk"));

        let wire = commit.remote_request().api_configuration.unwrap();
        assert_eq!(wire.user_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn begin_without_configuration_starts_from_default() {
        let commit = OptimisticCommit::begin(None, "tok").unwrap();
        assert_eq!(commit.candidate(), &ApiConfiguration::default().with_user_token("tok"));
    }

    #[test]
    fn settle_maps_outcome() {
        let id = SubmissionId::new();
        assert_eq!(
            OptimisticCommit::settle(id, &Ok(())),
            WelcomeIntent::TokenSubmitSucceeded { submission: id }
        );
        assert_eq!(
            OptimisticCommit::settle(id, &Err(HostError::Ipc(IpcError::Timeout))),
            WelcomeIntent::TokenSubmitFailed { submission: id }
        );
    }

    #[test]
    fn submissions_are_distinct() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }
}
