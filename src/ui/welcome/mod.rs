//! Onboarding screen: browser sign-up with token paste-back, or
//! bring-your-own provider credentials.

mod commit;
mod intent;
mod reducer;
mod state;
mod view;
mod watcher;

pub use commit::{OptimisticCommit, SubmissionId};
pub use intent::WelcomeIntent;
pub use reducer::WelcomeReducer;
pub use state::{Activity, Focus, TokenEntry, WelcomeState};
pub use view::{draw_welcome, welcome_lines};
pub use watcher::{ValidationWatcher, Validator};
