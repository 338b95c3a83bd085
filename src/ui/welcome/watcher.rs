use crate::config::ApiConfiguration;

use super::intent::WelcomeIntent;
use super::state::WelcomeState;

pub type Validator = Box<dyn Fn(&ApiConfiguration) -> Option<String> + Send>;

/// Runs the validator once per distinct configuration version.
///
/// Observing the same version twice is a no-op, so re-renders and unrelated
/// intents never re-validate. An absent configuration is not validated.
pub struct ValidationWatcher {
    validator: Validator,
    last_version: Option<u64>,
}

impl ValidationWatcher {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            last_version: None,
        }
    }

    pub fn observe(&mut self, state: &WelcomeState) -> Option<WelcomeIntent> {
        let configuration = state.configuration.as_ref()?;
        let version = configuration.version();
        if self.last_version == Some(version) {
            return None;
        }
        self.last_version = Some(version);
        let result = (self.validator)(configuration.value());
        tracing::debug!(version, valid = result.is_none(), "validated api configuration");
        Some(WelcomeIntent::ValidationResolved { version, result })
    }
}

impl Default for ValidationWatcher {
    fn default() -> Self {
        Self::new(Box::new(crate::config::validate_api_configuration))
    }
}
