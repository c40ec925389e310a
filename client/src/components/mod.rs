//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, reservation figures, and the sign-up /
//! log-in modal; the state they display lives under `state`.

pub mod footer;
pub mod policy_nav;
pub mod price_breakdown;
pub mod signup_modal;
