//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `policies` hosts the document viewer; `proposal_preview` shows the
//! reservation price breakdown against sample proposals.

pub mod policies;
pub mod proposal_preview;
