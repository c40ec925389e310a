//! Policies page view model and its `PolicyView` bindings.
//!
//! DESIGN
//! ======
//! `PoliciesPageState` is a plain struct that implements `PolicyView`, so the
//! viewer controller can be exercised against it without a browser.
//! `SignalView` wraps it in an `RwSignal` for the page and layers the
//! browser-only effects (container checks, delayed scrolling) on top.

#[cfg(test)]
#[path = "policies_page_test.rs"]
mod policies_page_test;

use std::time::Duration;

use leptos::prelude::*;
use policies::viewer::DEFAULT_SITE_NAME;
use policies::{NavEntry, PolicyDocument, PolicyView};

/// Element id of the sidebar navigation container.
pub const NAV_CONTAINER_ID: &str = "policyNav";
/// Element id of the embedded document viewer.
pub const VIEWER_CONTAINER_ID: &str = "pdfViewer";
/// Heading shown in place of a document name after a fatal error.
pub const ERROR_HEADING: &str = "Error";
/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// What the main viewer area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerPane {
    /// Nothing loaded yet.
    #[default]
    Blank,
    /// Embedded document at `url`.
    Document { url: String },
    /// Fatal message replacing the viewer.
    Error(String),
}

/// Render state for the policies page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoliciesPageState {
    pub heading: String,
    pub nav: Vec<NavEntry>,
    pub active_slug: Option<String>,
    pub pane: ViewerPane,
    pub download_href: Option<String>,
    /// Transient, non-fatal message (unknown slug and the like).
    pub notice: Option<String>,
    pub document_title: String,
    /// Delay of the most recent scroll-into-view request.
    pub last_scroll: Option<Duration>,
}

impl Default for PoliciesPageState {
    fn default() -> Self {
        Self {
            heading: String::new(),
            nav: Vec::new(),
            active_slug: None,
            pane: ViewerPane::Blank,
            download_href: None,
            notice: None,
            document_title: format!("Policies | {DEFAULT_SITE_NAME}"),
            last_scroll: None,
        }
    }
}

impl PoliciesPageState {
    #[must_use]
    pub fn is_active(&self, slug: &str) -> bool {
        self.active_slug.as_deref() == Some(slug)
    }

    #[must_use]
    pub fn document_url(&self) -> Option<&str> {
        match &self.pane {
            ViewerPane::Document { url } => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.pane {
            ViewerPane::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl PolicyView for PoliciesPageState {
    fn show_loading(&mut self, message: &str) {
        message.clone_into(&mut self.heading);
    }

    fn render_sidebar(&mut self, entries: &[NavEntry]) {
        self.nav = entries.to_vec();
    }

    fn show_document(&mut self, document: &PolicyDocument) {
        self.heading.clone_from(&document.name);
        self.pane = ViewerPane::Document { url: document.document_url.clone() };
        self.download_href = Some(document.document_url.clone());
        self.notice = None;
    }

    fn set_document_title(&mut self, title: &str) {
        title.clone_into(&mut self.document_title);
    }

    fn mark_active(&mut self, slug: &str) {
        self.active_slug = Some(slug.to_owned());
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_owned());
    }

    fn show_error(&mut self, message: &str) {
        ERROR_HEADING.clone_into(&mut self.heading);
        self.pane = ViewerPane::Error(message.to_owned());
        self.download_href = None;
    }

    fn scroll_viewer_into_view(&mut self, delay: Duration) {
        self.last_scroll = Some(delay);
    }
}

/// Whether the back-to-top button should show at vertical offset `scroll_y`.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

// =============================================================================
// SIGNAL VIEW
// =============================================================================

/// `PolicyView` over a page-owned signal.
#[derive(Clone, Copy)]
pub struct SignalView {
    state: RwSignal<PoliciesPageState>,
}

impl SignalView {
    #[must_use]
    pub fn new(state: RwSignal<PoliciesPageState>) -> Self {
        Self { state }
    }
}

impl PolicyView for SignalView {
    fn missing_container(&self) -> Option<&'static str> {
        crate::util::browser::first_missing_element(&[NAV_CONTAINER_ID, VIEWER_CONTAINER_ID])
    }

    fn show_loading(&mut self, message: &str) {
        self.state.update(|s| s.show_loading(message));
    }

    fn render_sidebar(&mut self, entries: &[NavEntry]) {
        self.state.update(|s| s.render_sidebar(entries));
    }

    fn show_document(&mut self, document: &PolicyDocument) {
        self.state.update(|s| s.show_document(document));
    }

    fn set_document_title(&mut self, title: &str) {
        self.state.update(|s| s.set_document_title(title));
    }

    fn mark_active(&mut self, slug: &str) {
        self.state.update(|s| s.mark_active(slug));
    }

    fn show_notice(&mut self, message: &str) {
        self.state.update(|s| s.show_notice(message));
    }

    fn show_error(&mut self, message: &str) {
        self.state.update(|s| s.show_error(message));
    }

    fn scroll_viewer_into_view(&mut self, delay: Duration) {
        self.state.update(|s| s.scroll_viewer_into_view(delay));
        crate::util::browser::scroll_into_view_after(VIEWER_CONTAINER_ID, delay);
    }
}
