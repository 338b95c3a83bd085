//! Bring-your-own-key credential form.
//!
//! Every edit yields a whole new `ApiConfiguration`; the caller dispatches
//! it as a replacement, so the validation watcher sees each change as a new
//! version.

mod view;

pub use view::form_lines;

use crate::config::{ApiConfiguration, CredentialField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    /// Pasted text; line breaks are dropped since every field is one line.
    Paste(String),
    Clear,
}

/// Select the next (or previous) provider. Credentials of the previous
/// provider stay in place so switching back restores them.
pub fn cycle_provider(current: Option<&ApiConfiguration>, forward: bool) -> ApiConfiguration {
    let base = current.cloned().unwrap_or_default();
    let provider = if forward {
        base.api_provider.next()
    } else {
        base.api_provider.prev()
    };
    base.with_provider(provider)
}

pub fn edit_field(
    current: Option<&ApiConfiguration>,
    field: CredentialField,
    edit: FieldEdit,
) -> ApiConfiguration {
    let base = current.cloned().unwrap_or_default();
    let mut value = base.field(field).unwrap_or_default().to_string();
    match edit {
        FieldEdit::Insert(ch) => value.push(ch),
        FieldEdit::Backspace => {
            value.pop();
        }
        FieldEdit::Paste(text) => value.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n'))),
        FieldEdit::Clear => value.clear(),
    }
    base.with_field(field, &value)
}
