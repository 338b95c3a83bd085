use crate::config::ApiConfiguration;
use crate::ui::mvi::{Reducer, Versioned};

use super::intent::WelcomeIntent;
use super::state::{Activity, TokenEntry, WelcomeState};

pub struct WelcomeReducer;

impl Reducer for WelcomeReducer {
    type State = WelcomeState;
    type Intent = WelcomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let focus_hint = intent.focus_hint();
        let mut next = match intent {
            WelcomeIntent::ConfigurationLoaded { configuration } => match configuration {
                Some(configuration) if state.configuration.is_none() => {
                    replace_configuration(state, configuration)
                }
                _ => state,
            },
            WelcomeIntent::ReplaceConfiguration { configuration } => {
                replace_configuration(state, configuration)
            }
            WelcomeIntent::ValidationResolved { version, result } => {
                if state.configuration_version() == Some(version) {
                    WelcomeState {
                        validation: result,
                        validated_version: Some(version),
                        ..state
                    }
                } else {
                    // Result for a configuration that has since been replaced.
                    state
                }
            }

            WelcomeIntent::LoginStarted { submission } => WelcomeState {
                login: Activity::InFlight(submission),
                ..state
            },
            WelcomeIntent::LoginSucceeded { submission } => WelcomeState {
                token_entry: TokenEntry::Shown,
                login: settle(state.login, submission),
                ..state
            },
            WelcomeIntent::LoginFailed { submission } => WelcomeState {
                login: settle(state.login, submission),
                ..state
            },

            WelcomeIntent::TokenChanged { value } => {
                if state.is_token_entry_visible() {
                    WelcomeState {
                        token_input: value,
                        ..state
                    }
                } else {
                    state
                }
            }
            WelcomeIntent::TokenSubmitStarted {
                submission,
                token,
                configuration,
            } => {
                let state = replace_configuration(state, configuration);
                WelcomeState {
                    token_input: token,
                    token_submission: Activity::InFlight(submission),
                    ..state
                }
            }
            WelcomeIntent::TokenSubmitSucceeded { submission } => WelcomeState {
                token_entry: TokenEntry::Hidden,
                token_input: String::new(),
                token_submission: settle(state.token_submission, submission),
                ..state
            },
            WelcomeIntent::TokenSubmitFailed { submission } => WelcomeState {
                token_submission: settle(state.token_submission, submission),
                ..state
            },

            WelcomeIntent::ShowApiOptions => WelcomeState {
                api_options_visible: true,
                ..state
            },
            WelcomeIntent::ManualSubmitStarted { submission } => WelcomeState {
                manual_submission: Activity::InFlight(submission),
                ..state
            },
            WelcomeIntent::ManualSubmitFinished { submission } => WelcomeState {
                manual_submission: settle(state.manual_submission, submission),
                ..state
            },

            WelcomeIntent::FocusNext => move_focus(state, 1),
            WelcomeIntent::FocusPrev => move_focus(state, -1),
        };

        if let Some(focus) = focus_hint {
            next.focus = focus;
        }
        clamp_focus(next)
    }
}

fn replace_configuration(state: WelcomeState, configuration: ApiConfiguration) -> WelcomeState {
    let configuration = match state.configuration {
        Some(current) => current.replace(configuration),
        None => Versioned::initial(configuration),
    };
    WelcomeState {
        configuration: Some(configuration),
        ..state
    }
}

/// Back to idle only if the completion belongs to the outstanding request.
fn settle(activity: Activity, submission: super::commit::SubmissionId) -> Activity {
    if activity.is(submission) {
        Activity::Idle
    } else {
        activity
    }
}

fn move_focus(state: WelcomeState, direction: i32) -> WelcomeState {
    let items = state.focusables();
    let len = items.len();
    let current = items.iter().position(|f| *f == state.focus).unwrap_or(0);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    WelcomeState {
        focus: items[next],
        ..state
    }
}

/// Keep focus on something that is actually on screen.
fn clamp_focus(state: WelcomeState) -> WelcomeState {
    let items = state.focusables();
    if items.contains(&state.focus) {
        return state;
    }
    WelcomeState {
        focus: items[0],
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiProvider, CredentialField};
    use crate::ui::welcome::commit::SubmissionId;
    use crate::ui::welcome::state::Focus;

    fn reduce(state: WelcomeState, intent: WelcomeIntent) -> WelcomeState {
        WelcomeReducer::reduce(state, intent)
    }

    fn shown_with_input(input: &str) -> WelcomeState {
        WelcomeState {
            token_entry: TokenEntry::Shown,
            token_input: input.into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_success_shows_token_entry() {
        let id = SubmissionId::new();
        let state = reduce(WelcomeState::default(), WelcomeIntent::LoginStarted { submission: id });
        assert!(state.login.is_in_flight());

        let state = reduce(state, WelcomeIntent::LoginSucceeded { submission: id });
        assert!(state.is_token_entry_visible());
        assert_eq!(state.login, Activity::Idle);
        assert_eq!(state.focus, Focus::TokenField);
    }

    #[test]
    fn login_failure_changes_nothing_visible() {
        let id = SubmissionId::new();
        let state = reduce(WelcomeState::default(), WelcomeIntent::LoginStarted { submission: id });
        let state = reduce(state, WelcomeIntent::LoginFailed { submission: id });
        assert_eq!(state, WelcomeState::default());
    }

    #[test]
    fn token_changes_ignored_while_hidden() {
        let state = reduce(
            WelcomeState::default(),
            WelcomeIntent::TokenChanged { value: "abc".into() },
        );
        assert_eq!(state.token_input, "");
    }

    #[test]
    fn token_submit_applies_candidate_optimistically() {
        let id = SubmissionId::new();
        let candidate = ApiConfiguration::default().with_user_token("abc123");
        let state = reduce(
            shown_with_input("  abc123  "),
            WelcomeIntent::TokenSubmitStarted {
                submission: id,
                token: "abc123".into(),
                configuration: candidate.clone(),
            },
        );
        assert_eq!(state.api_configuration(), Some(&candidate));
        assert_eq!(state.token_input, "abc123");
        assert!(state.token_submission.is(id));
        assert!(!state.token_submit_enabled());
    }

    #[test]
    fn token_submit_success_clears_and_hides() {
        let id = SubmissionId::new();
        let state = WelcomeState {
            token_submission: Activity::InFlight(id),
            ..shown_with_input("abc123")
        };
        let state = reduce(state, WelcomeIntent::TokenSubmitSucceeded { submission: id });
        assert_eq!(state.token_input, "");
        assert_eq!(state.token_entry, TokenEntry::Hidden);
        assert_eq!(state.token_submission, Activity::Idle);
        assert_eq!(state.focus, Focus::GetStarted);
    }

    #[test]
    fn token_submit_success_clears_input_edited_while_in_flight() {
        let id = SubmissionId::new();
        let state = reduce(
            shown_with_input("abc123"),
            WelcomeIntent::TokenSubmitStarted {
                submission: id,
                token: "abc123".into(),
                configuration: ApiConfiguration::default().with_user_token("abc123"),
            },
        );
        let state = reduce(state, WelcomeIntent::TokenChanged { value: "abc123xyz".into() });
        assert_eq!(state.token_input, "abc123xyz");

        let state = reduce(state, WelcomeIntent::TokenSubmitSucceeded { submission: id });
        assert_eq!(state.token_input, "");
        assert_eq!(state.token_entry, TokenEntry::Hidden);
    }

    #[test]
    fn token_submit_failure_keeps_input_and_optimistic_value() {
        let id = SubmissionId::new();
        let candidate = ApiConfiguration::default().with_user_token("abc123");
        let state = reduce(
            shown_with_input(" abc123 "),
            WelcomeIntent::TokenSubmitStarted {
                submission: id,
                token: "abc123".into(),
                configuration: candidate.clone(),
            },
        );
        let state = reduce(state, WelcomeIntent::TokenSubmitFailed { submission: id });
        assert_eq!(state.token_input, "abc123");
        assert!(state.is_token_entry_visible());
        assert_eq!(state.api_configuration(), Some(&candidate));
        assert_eq!(state.token_submission, Activity::Idle);
    }

    #[test]
    fn stale_completion_does_not_clear_newer_submission() {
        let old = SubmissionId::new();
        let current = SubmissionId::new();
        let state = WelcomeState {
            token_submission: Activity::InFlight(current),
            ..shown_with_input("x")
        };
        let state = reduce(state, WelcomeIntent::TokenSubmitFailed { submission: old });
        assert!(state.token_submission.is(current));
    }

    #[test]
    fn replace_bumps_version_only_on_change() {
        let config = ApiConfiguration::default();
        let state = reduce(
            WelcomeState::default(),
            WelcomeIntent::ReplaceConfiguration {
                configuration: config.clone(),
            },
        );
        assert_eq!(state.configuration_version(), Some(1));
        let state = reduce(
            state,
            WelcomeIntent::ReplaceConfiguration {
                configuration: config.clone(),
            },
        );
        assert_eq!(state.configuration_version(), Some(1));
        let state = reduce(
            state,
            WelcomeIntent::ReplaceConfiguration {
                configuration: config.with_provider(ApiProvider::Gemini),
            },
        );
        assert_eq!(state.configuration_version(), Some(2));
    }

    #[test]
    fn late_load_does_not_overwrite_edit() {
        let edited = ApiConfiguration::default().with_field(CredentialField::ApiKey, "mine");
        let state = reduce(
            WelcomeState::default(),
            WelcomeIntent::ReplaceConfiguration {
                configuration: edited.clone(),
            },
        );
        let state = reduce(
            state,
            WelcomeIntent::ConfigurationLoaded {
                configuration: Some(ApiConfiguration::default()),
            },
        );
        assert_eq!(state.api_configuration(), Some(&edited));
    }

    #[test]
    fn stale_validation_is_dropped() {
        let state = reduce(
            WelcomeState::default(),
            WelcomeIntent::ReplaceConfiguration {
                configuration: ApiConfiguration::default(),
            },
        );
        let state = reduce(
            state,
            WelcomeIntent::ValidationResolved {
                version: 7,
                result: None,
            },
        );
        assert_eq!(state.validated_version, None);
        assert!(!state.manual_submit_enabled());
    }

    #[test]
    fn show_api_options_moves_focus_to_provider() {
        let state = reduce(WelcomeState::default(), WelcomeIntent::ShowApiOptions);
        assert!(state.api_options_visible);
        assert_eq!(state.focus, Focus::Provider);
        assert!(!state.focusables().contains(&Focus::UseOwnKey));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = WelcomeState::default();
        let state = reduce(state, WelcomeIntent::FocusNext);
        assert_eq!(state.focus, Focus::UseOwnKey);
        let state = reduce(state, WelcomeIntent::FocusNext);
        assert_eq!(state.focus, Focus::GetStarted);
        let state = reduce(state, WelcomeIntent::FocusPrev);
        assert_eq!(state.focus, Focus::UseOwnKey);
    }

    #[test]
    fn focus_on_removed_field_falls_back() {
        let config = ApiConfiguration::default().with_provider(ApiProvider::OpenAi);
        let state = WelcomeState {
            configuration: Some(Versioned::initial(config.clone())),
            api_options_visible: true,
            focus: Focus::Field(CredentialField::OpenAiModelId),
            ..Default::default()
        };
        let state = reduce(
            state,
            WelcomeIntent::ReplaceConfiguration {
                configuration: config.with_provider(ApiProvider::Anthropic),
            },
        );
        assert_eq!(state.focus, Focus::GetStarted);
    }
}
