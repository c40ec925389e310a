use super::*;

// =============================================================
// Referral
// =============================================================

#[test]
fn method_switch_changes_placeholder_and_input_type() {
    assert_eq!(ReferralMethod::default(), ReferralMethod::Email);
    assert_eq!(ReferralMethod::Email.placeholder(), "Your friend's email");
    assert_eq!(ReferralMethod::Email.input_type(), "email");
    assert_eq!(ReferralMethod::Text.placeholder(), "Your friend's phone number");
    assert_eq!(ReferralMethod::Text.input_type(), "tel");
}

#[test]
fn blank_contact_is_rejected_for_either_method() {
    assert_eq!(validate_referral(ReferralMethod::Email, "   "), Err(FooterFormError::MissingContact));
    assert_eq!(validate_referral(ReferralMethod::Text, ""), Err(FooterFormError::MissingContact));
}

#[test]
fn email_referral_requires_at_and_dot() {
    assert_eq!(validate_referral(ReferralMethod::Email, "friend"), Err(FooterFormError::InvalidEmail));
    assert_eq!(validate_referral(ReferralMethod::Email, "friend@home"), Err(FooterFormError::InvalidEmail));
    let ok = validate_referral(ReferralMethod::Email, "  friend@example.com ").unwrap();
    assert_eq!(ok.contact, "friend@example.com");
    assert_eq!(ok.method, ReferralMethod::Email);
}

#[test]
fn phone_referral_allows_digits_spaces_and_punctuation() {
    assert!(validate_referral(ReferralMethod::Text, "+1 (555) 010-9999").is_ok());
    assert_eq!(validate_referral(ReferralMethod::Text, "555-CALL"), Err(FooterFormError::InvalidPhone));
}

#[test]
fn error_messages_match_site_copy() {
    assert_eq!(FooterFormError::MissingContact.to_string(), "Please enter a contact");
    assert_eq!(FooterFormError::InvalidPhone.to_string(), "Please enter a valid phone number");
    assert_eq!(
        FooterFormError::InvalidUrl.to_string(),
        "Please enter a valid URL starting with http:// or https://"
    );
}

// =============================================================
// Listing import
// =============================================================

#[test]
fn import_requires_both_fields() {
    assert_eq!(validate_import("", "me@example.com"), Err(FooterFormError::MissingFields));
    assert_eq!(validate_import("https://x.test", " "), Err(FooterFormError::MissingFields));
}

#[test]
fn import_requires_http_scheme() {
    assert_eq!(validate_import("airbnb.com/rooms/1", "me@example.com"), Err(FooterFormError::InvalidUrl));
    assert_eq!(validate_import("ftp://x.test", "me@example.com"), Err(FooterFormError::InvalidUrl));
}

#[test]
fn import_checks_email_after_url() {
    assert_eq!(validate_import("https://x.test/1", "me"), Err(FooterFormError::InvalidEmail));
    let ok = validate_import(" http://x.test/1 ", "me@example.com").unwrap();
    assert_eq!(ok.url, "http://x.test/1");
}

// =============================================================
// Submit phases
// =============================================================

#[test]
fn share_button_labels() {
    assert_eq!(SubmitPhase::Idle.share_label(), "Share now");
    assert_eq!(SubmitPhase::Working.share_label(), "Sent!");
    assert!(!SubmitPhase::Idle.is_busy());
    assert!(SubmitPhase::Working.is_busy());
}

#[test]
fn import_button_walks_importing_then_submitted() {
    assert_eq!(SubmitPhase::Working.import_label(), "Importing...");
    assert_eq!(SubmitPhase::Done.import_label(), "Submitted!");
    assert!(SubmitPhase::Done.is_busy());
    assert_eq!(IMPORT_BUSY_DELAY + IMPORT_CONFIRM_DELAY, Duration::from_secs(3));
}
