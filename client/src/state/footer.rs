//! Site footer forms: friend referral and listing import.
//!
//! DESIGN
//! ======
//! Validation and the button state machine are pure so the footer component
//! only wires inputs and timers. Submissions are logged; delivering them is
//! left to a backend this crate does not talk to.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use std::fmt;
use std::time::Duration;

pub const SHARE_LABEL: &str = "Share now";
pub const SHARE_SENT_LABEL: &str = "Sent!";
pub const IMPORT_LABEL: &str = "Submit";
pub const IMPORT_BUSY_LABEL: &str = "Importing...";
pub const IMPORT_DONE_LABEL: &str = "Submitted!";

/// How long "Sent!" stays on the share button.
pub const SHARE_CONFIRM_DELAY: Duration = Duration::from_secs(2);
/// How long "Importing..." shows before "Submitted!".
pub const IMPORT_BUSY_DELAY: Duration = Duration::from_secs(1);
/// How long "Submitted!" stays before the import form resets.
pub const IMPORT_CONFIRM_DELAY: Duration = Duration::from_secs(2);

/// Channel used to refer a friend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferralMethod {
    #[default]
    Email,
    Text,
}

impl ReferralMethod {
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "Your friend's email",
            Self::Text => "Your friend's phone number",
        }
    }

    /// HTML `type` attribute for the contact input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "tel",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "text",
        }
    }
}

/// Reasons a footer submission is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterFormError {
    MissingContact,
    InvalidEmail,
    InvalidPhone,
    MissingFields,
    InvalidUrl,
}

impl fmt::Display for FooterFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingContact => "Please enter a contact",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid phone number",
            Self::MissingFields => "Please fill in both fields",
            Self::InvalidUrl => "Please enter a valid URL starting with http:// or https://",
        })
    }
}

/// A referral that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Referral {
    pub method: ReferralMethod,
    pub contact: String,
}

/// A listing import request that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingImport {
    pub url: String,
    pub email: String,
}

/// Validate a referral contact for `method`.
///
/// # Errors
///
/// Returns the first rule the trimmed contact breaks.
pub fn validate_referral(method: ReferralMethod, contact: &str) -> Result<Referral, FooterFormError> {
    let contact = contact.trim();
    if contact.is_empty() {
        return Err(FooterFormError::MissingContact);
    }
    match method {
        ReferralMethod::Email if !looks_like_email(contact) => Err(FooterFormError::InvalidEmail),
        ReferralMethod::Text if !looks_like_phone(contact) => Err(FooterFormError::InvalidPhone),
        _ => Ok(Referral { method, contact: contact.to_owned() }),
    }
}

/// Validate a listing import request.
///
/// # Errors
///
/// Returns the first rule the trimmed inputs break.
pub fn validate_import(url: &str, email: &str) -> Result<ListingImport, FooterFormError> {
    let url = url.trim();
    let email = email.trim();
    if url.is_empty() || email.is_empty() {
        return Err(FooterFormError::MissingFields);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FooterFormError::InvalidUrl);
    }
    if !looks_like_email(email) {
        return Err(FooterFormError::InvalidEmail);
    }
    Ok(ListingImport { url: url.to_owned(), email: email.to_owned() })
}

fn looks_like_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

fn looks_like_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

// =============================================================================
// SUBMIT BUTTON PHASES
// =============================================================================

/// Lifecycle of a footer submit button after a valid submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Working,
    Done,
}

impl SubmitPhase {
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    #[must_use]
    pub fn share_label(self) -> &'static str {
        match self {
            Self::Idle => SHARE_LABEL,
            Self::Working | Self::Done => SHARE_SENT_LABEL,
        }
    }

    #[must_use]
    pub fn import_label(self) -> &'static str {
        match self {
            Self::Idle => IMPORT_LABEL,
            Self::Working => IMPORT_BUSY_LABEL,
            Self::Done => IMPORT_DONE_LABEL,
        }
    }
}
