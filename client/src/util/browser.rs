//! Window, location, and history access for the policies page.
//!
//! Every function degrades to a no-op (or an empty/zero answer) outside a
//! hydrated browser, so page code can call them unconditionally during SSR.

use std::time::Duration;

use policies::AddressBar;

/// Raw `location.hash`, including the leading `#` when present.
pub fn location_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Push a history entry whose fragment is `#slug`.
pub fn push_hash(slug: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let url = format!("#{slug}");
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("history push failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
    }
}

/// Current `innerWidth` in CSS pixels, or 0 when unavailable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn viewport_width() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(0, |w| w.max(0.0) as u32)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// First id in `ids` with no matching element in the document.
///
/// Always `None` outside the browser: server-rendered markup is checked on
/// hydration instead.
pub fn first_missing_element(ids: &[&'static str]) -> Option<&'static str> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window().and_then(|w| w.document())?;
        ids.iter().copied().find(|id| document.get_element_by_id(id).is_none())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        None
    }
}

/// Smooth-scroll element `id` to the top of the viewport after `delay`.
pub fn scroll_into_view_after(id: &'static str, delay: Duration) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, delay);
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Run `handler` on every `event` dispatched to `window` for the page lifetime.
pub fn on_window_event(event: &str, handler: impl FnMut() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(handler);
        if let Err(e) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("failed to listen for {event}: {e:?}");
        }
        closure.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event, handler);
    }
}

/// `AddressBar` over `window.location` and `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAddressBar;

impl AddressBar for BrowserAddressBar {
    fn fragment(&self) -> String {
        location_hash()
    }

    fn push_fragment(&mut self, slug: &str) {
        push_hash(slug);
    }
}
