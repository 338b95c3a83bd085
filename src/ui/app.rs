use crate::config::{ApiConfiguration, CredentialField};
use crate::ipc::HostError;
use crate::ui::api_options::{cycle_provider, edit_field, FieldEdit};
use crate::ui::commands::{HostEvent, UiCommand, UiCommandSender};
use crate::ui::mvi::Reducer;
use crate::ui::welcome::{
    Focus, OptimisticCommit, SubmissionId, ValidationWatcher, Validator, WelcomeIntent,
    WelcomeReducer, WelcomeState,
};
use crate::wire::UpdateApiConfigurationRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    welcome: WelcomeState,
    watcher: ValidationWatcher,
    command_sender: Option<UiCommandSender>,
    signup_url: String,
}

impl App {
    pub fn new(signup_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            welcome: WelcomeState::default(),
            watcher: ValidationWatcher::default(),
            command_sender: None,
            signup_url: signup_url.into(),
        }
    }

    /// Replace the validation function observed by the watcher.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.watcher = ValidationWatcher::new(validator);
        self
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn welcome(&self) -> &WelcomeState {
        &self.welcome
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply an intent, then let the watcher validate a new configuration
    /// version if the intent produced one.
    pub fn dispatch(&mut self, intent: WelcomeIntent) {
        dispatch_mvi!(self, welcome, WelcomeReducer, intent);
        if let Some(resolved) = self.watcher.observe(&self.welcome) {
            dispatch_mvi!(self, welcome, WelcomeReducer, resolved);
        }
    }

    pub fn load_configuration(&mut self) {
        if let Err(err) = self.send_command(UiCommand::LoadConfiguration) {
            tracing::warn!(error = %err, "failed to request api configuration");
        }
    }

    /// "Get Started for Free": open the sign-up page in the browser.
    pub fn login(&mut self) {
        if self.welcome.login.is_in_flight() {
            return;
        }
        let submission = SubmissionId::new();
        let command = UiCommand::OpenSignupPage {
            submission,
            url: self.signup_url.clone(),
        };
        self.dispatch(WelcomeIntent::LoginStarted { submission });
        if let Err(err) = self.send_command(command) {
            self.on_host_event(HostEvent::SignupPageOpened {
                submission,
                result: Err(err),
            });
        }
    }

    pub fn set_token_input(&mut self, value: impl Into<String>) {
        self.dispatch(WelcomeIntent::TokenChanged {
            value: value.into(),
        });
    }

    pub fn submit_token(&mut self) {
        if !self.welcome.token_submit_enabled() {
            return;
        }
        let Some(commit) =
            OptimisticCommit::begin(self.welcome.api_configuration(), &self.welcome.token_input)
        else {
            return;
        };

        self.dispatch(commit.apply_locally());
        let submission = commit.submission();
        let version = self.welcome.configuration_version().unwrap_or_default();
        let command = UiCommand::SubmitToken {
            submission,
            version,
            request: commit.remote_request(),
        };
        if let Err(err) = self.send_command(command) {
            self.on_host_event(HostEvent::TokenSubmitted {
                submission,
                version,
                result: Err(err),
            });
        }
    }

    pub fn show_api_options(&mut self) {
        self.dispatch(WelcomeIntent::ShowApiOptions);
    }

    pub fn replace_configuration(&mut self, configuration: ApiConfiguration) {
        self.dispatch(WelcomeIntent::ReplaceConfiguration { configuration });
    }

    pub fn cycle_provider(&mut self, forward: bool) {
        let next = cycle_provider(self.welcome.api_configuration(), forward);
        self.replace_configuration(next);
    }

    pub fn edit_field(&mut self, field: CredentialField, edit: FieldEdit) {
        let next = edit_field(self.welcome.api_configuration(), field, edit);
        self.replace_configuration(next);
    }

    /// "Let's go!": send the provider sub-configuration to the host. The
    /// in-memory configuration is left as it is.
    pub fn submit_api_configuration(&mut self) {
        if !self.welcome.manual_submit_enabled() {
            return;
        }
        let (Some(configuration), Some(version)) = (
            self.welcome.api_configuration(),
            self.welcome.configuration_version(),
        ) else {
            return;
        };
        let submission = SubmissionId::new();
        let command = UiCommand::SubmitApiConfiguration {
            submission,
            version,
            request: UpdateApiConfigurationRequest::from_configuration(configuration),
        };
        self.dispatch(WelcomeIntent::ManualSubmitStarted { submission });
        if let Err(err) = self.send_command(command) {
            self.on_host_event(HostEvent::ApiConfigurationSubmitted {
                submission,
                version,
                result: Err(err),
            });
        }
    }

    pub fn on_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::ConfigurationLoaded(Ok(configuration)) => {
                tracing::debug!(present = configuration.is_some(), "api configuration loaded");
                self.dispatch(WelcomeIntent::ConfigurationLoaded { configuration });
            }
            HostEvent::ConfigurationLoaded(Err(err)) => {
                tracing::warn!(error = %err, "failed to load api configuration");
            }
            HostEvent::SignupPageOpened { submission, result } => match result {
                Ok(()) => {
                    tracing::info!(%submission, "sign-up page opened");
                    self.dispatch(WelcomeIntent::LoginSucceeded { submission });
                }
                Err(err) => {
                    tracing::error!(%submission, error = %err, "failed to open sign-up page");
                    self.dispatch(WelcomeIntent::LoginFailed { submission });
                }
            },
            HostEvent::TokenSubmitted {
                submission,
                version,
                result,
            } => {
                match &result {
                    Ok(()) => tracing::info!(%submission, version, "user token saved"),
                    Err(err) => {
                        tracing::error!(%submission, version, error = %err, "settings update failed")
                    }
                }
                self.dispatch(OptimisticCommit::settle(submission, &result));
            }
            HostEvent::ApiConfigurationSubmitted {
                submission,
                version,
                result,
            } => {
                match result {
                    Ok(()) => tracing::info!(%submission, version, "provider configuration saved"),
                    Err(err) => tracing::error!(
                        %submission,
                        version,
                        error = %err,
                        "provider configuration update failed"
                    ),
                }
                self.dispatch(WelcomeIntent::ManualSubmitFinished { submission });
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => return self.dispatch(WelcomeIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => return self.dispatch(WelcomeIntent::FocusPrev),
            _ => {}
        }

        match self.welcome.focus {
            Focus::GetStarted => {
                if key.code == KeyCode::Enter {
                    self.login();
                }
            }
            Focus::TokenField => match key.code {
                KeyCode::Enter => self.submit_token(),
                KeyCode::Backspace => {
                    let mut value = self.welcome.token_input.clone();
                    value.pop();
                    self.set_token_input(value);
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut value = self.welcome.token_input.clone();
                    value.push(ch);
                    self.set_token_input(value);
                }
                _ => {}
            },
            Focus::SubmitToken => {
                if key.code == KeyCode::Enter {
                    self.submit_token();
                }
            }
            Focus::UseOwnKey => {
                if key.code == KeyCode::Enter {
                    self.show_api_options();
                }
            }
            Focus::Provider => match key.code {
                KeyCode::Right | KeyCode::Enter => self.cycle_provider(true),
                KeyCode::Left => self.cycle_provider(false),
                _ => {}
            },
            Focus::Field(field) => match key.code {
                KeyCode::Enter => self.dispatch(WelcomeIntent::FocusNext),
                KeyCode::Backspace => self.edit_field(field, FieldEdit::Backspace),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.edit_field(field, FieldEdit::Clear)
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.edit_field(field, FieldEdit::Insert(ch))
                }
                _ => {}
            },
            Focus::LetsGo => {
                if key.code == KeyCode::Enter {
                    self.submit_api_configuration();
                }
            }
        }
    }

    /// Pasted text goes to whichever text field has focus.
    pub fn on_paste(&mut self, text: &str) {
        match self.welcome.focus {
            Focus::TokenField => {
                let mut value = self.welcome.token_input.clone();
                value.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
                self.set_token_input(value);
            }
            Focus::Field(field) => self.edit_field(field, FieldEdit::Paste(text.to_string())),
            _ => {}
        }
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), HostError> {
        let Some(sender) = &self.command_sender else {
            return Err(HostError::Rejected("no host connection".into()));
        };
        sender
            .try_send(command)
            .map_err(|err| HostError::Rejected(format!("command queue: {err}")))
    }
}
