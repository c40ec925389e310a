//! Sidebar list of policy documents.

use leptos::prelude::*;
use policies::NavEntry;

use crate::state::policies_page::{NAV_CONTAINER_ID, PoliciesPageState};

/// One link per catalog entry; the active entry carries the `active` class.
///
/// Clicks are intercepted and reported through `on_select` with the slug.
#[component]
pub fn PolicyNav(state: RwSignal<PoliciesPageState>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <nav id=NAV_CONTAINER_ID class="policy-nav">
            <For
                each=move || state.with(|s| s.nav.clone())
                key=|entry| entry.id.clone()
                children=move |entry: NavEntry| {
                    let slug = entry.slug.clone();
                    let active_slug = entry.slug.clone();
                    view! {
                        <a
                            href=format!("#{}", entry.slug)
                            class=move || {
                                if state.with(|s| s.is_active(&active_slug)) { "nav-item active" } else { "nav-item" }
                            }
                            data-slug=entry.slug.clone()
                            data-id=entry.id.clone()
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_select.run(slug.clone());
                            }
                        >
                            {entry.label}
                        </a>
                    }
                }
            />
        </nav>
    }
}
