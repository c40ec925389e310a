//! Reservation price breakdown preview with two sample proposals.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{footer::SiteFooter, price_breakdown::PriceBreakdown};
use crate::state::proposal::{BreakdownMode, Proposal, fall_sample, winter_sample};
use crate::util::display::long_date;

#[component]
pub fn ProposalPreviewPage() -> impl IntoView {
    let samples = [fall_sample(), winter_sample()];
    let proposal = RwSignal::new(Some(samples[0].clone()));
    let move_in_note = RwSignal::new(None::<String>);
    let show_rules = RwSignal::new(false);

    let selected_id = move || proposal.with(|p| p.as_ref().map(|p| p.id.clone()).unwrap_or_default());

    let on_move_in = Callback::new(move |()| {
        let note = proposal.with(|p| p.as_ref().map(|p| format!("Move-in date: {}", long_date(p.move_in_date))));
        move_in_note.set(note);
    });
    let on_house_rules = Callback::new(move |()| show_rules.set(true));

    let rule_lines = move || {
        proposal.with(|p| {
            p.as_ref()
                .map(|p| p.house_rule_lines().into_iter().map(str::to_owned).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <Title text="Reservation Price Breakdown | Split Lease"/>
        <div class="proposal-preview">
            <header class="proposal-preview__header">
                <h1>"Reservation Price Breakdown"</h1>
            </header>

            <div class="proposal-selector">
                <h3>"Select a proposal to preview:"</h3>
                <div class="button-group">
                    {samples
                        .into_iter()
                        .map(|sample: Proposal| {
                            let id = sample.id.clone();
                            let label = format!("Move-in {} ({} days)", long_date(sample.move_in_date), sample.reservation_length_days);
                            view! {
                                <button
                                    class=move || if selected_id() == id { "selector-btn active" } else { "selector-btn" }
                                    on:click=move |_| {
                                        move_in_note.set(None);
                                        show_rules.set(false);
                                        proposal.set(Some(sample.clone()));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || move_in_note.get().is_some()>
                <p class="proposal-preview__note">{move || move_in_note.get().unwrap_or_default()}</p>
            </Show>

            <PriceBreakdown
                proposal=proposal
                mode=BreakdownMode::Proposal
                on_move_in=on_move_in
                on_house_rules=on_house_rules
            />

            <Show when=move || show_rules.get()>
                <div class="house-rules-modal" role="dialog">
                    <h3>"House Rules"</h3>
                    <ul>
                        {move || rule_lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                    <button class="house-rules-modal__close" on:click=move |_| show_rules.set(false)>
                        "Close"
                    </button>
                </div>
            </Show>

            <SiteFooter/>
        </div>
    }
}
