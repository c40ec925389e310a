//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` reads the policy catalog from the server's REST endpoints; `auth`
//! answers the sign-up / log-in modal.

pub mod api;
pub mod auth;
