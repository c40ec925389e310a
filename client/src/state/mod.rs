//! Client-side view models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `policies_page` adapts the shared viewer controller to Leptos signals,
//! `footer` holds the footer form rules, `proposal` models the
//! reservation figures shown by the price breakdown, and `signup` routes
//! the sign-up / log-in modal between its panels.

pub mod footer;
pub mod policies_page;
pub mod proposal;
pub mod signup;
