//! Reservation price breakdown card.

use leptos::prelude::*;

use crate::state::proposal::{
    BREAKDOWN_HEADER, BreakdownMode, BreakdownRow, DEPOSIT_FOOTNOTE, Proposal, RowAction, breakdown_sections,
};

/// Card listing dates, pricing, and fees of a proposal.
///
/// Renders nothing in `Proposal` mode while `proposal` is `None`.
#[component]
pub fn PriceBreakdown(
    #[prop(into)] proposal: Signal<Option<Proposal>>,
    #[prop(optional)] mode: BreakdownMode,
    #[prop(optional, into)] on_move_in: Option<Callback<()>>,
    #[prop(optional, into)] on_house_rules: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        let current = proposal.get();
        breakdown_sections(current.as_ref(), mode).map(|sections| {
            view! {
                <div class="price-breakdown">
                    <h2 class="price-breakdown__header">{BREAKDOWN_HEADER}</h2>
                    {sections
                        .into_iter()
                        .map(|rows| {
                            view! {
                                <div class="price-breakdown__section">
                                    {rows
                                        .into_iter()
                                        .map(|row| breakdown_row(row, on_move_in, on_house_rules))
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                    <p class="price-breakdown__footnote">{DEPOSIT_FOOTNOTE}</p>
                </div>
            }
        })
    }
}

fn breakdown_row(
    row: BreakdownRow,
    on_move_in: Option<Callback<()>>,
    on_house_rules: Option<Callback<()>>,
) -> impl IntoView {
    let handler = match row.action {
        Some(RowAction::MoveIn) => on_move_in,
        Some(RowAction::HouseRules) => on_house_rules,
        None => None,
    };
    let value_class = value_class(row.action.is_some(), row.highlighted);

    view! {
        <div class="price-breakdown__row">
            <span class="price-breakdown__label">
                {row.label}
                {row.note.map(|note| view! { <br/><small>{note}</small> })}
            </span>
            <span
                class=value_class
                on:click=move |_| {
                    if let Some(cb) = handler {
                        cb.run(());
                    }
                }
            >
                {row.value}
            </span>
        </div>
    }
}

fn value_class(clickable: bool, highlighted: bool) -> String {
    let mut class = String::from("price-breakdown__value");
    if clickable {
        class.push_str(" price-breakdown__value--clickable");
    }
    if highlighted {
        class.push_str(" price-breakdown__value--highlighted");
    }
    class
}
