//! Model-View-Intent (MVI) primitives for the welcome screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value representation of what is on screen
//! - **Intent**: user actions and host replies
//! - **Reducer**: the single writer; pure `(State, Intent) -> State`
//! - **Versioned**: a value plus a revision that only moves when the value
//!   actually changes, so observers can tell "replaced" from "same again"

mod intent;
mod reducer;
mod state;
mod versioned;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use versioned::Versioned;
