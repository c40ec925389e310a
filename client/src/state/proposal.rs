//! Reservation proposal model and its price-breakdown rows.
//!
//! DESIGN
//! ======
//! `breakdown_sections` turns a proposal into labelled, already-formatted
//! rows grouped the way the breakdown card shows them. The component only
//! lays them out and wires the two clickable rows.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use time::Date;
use time::macros::date;

use crate::util::display::{day_count, long_date, money, short_day};

pub const BREAKDOWN_HEADER: &str = "Proposal Details";
pub const DEPOSIT_FOOTNOTE: &str = "*Refundable Damage Deposit is held with Split Lease";

/// Guest-facing host summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// A reservation proposal as shown to the guest.
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    pub id: String,
    pub move_in_date: Date,
    pub check_in_day: String,
    pub check_out_day: String,
    pub reservation_length_days: u32,
    pub weekly_pattern: String,
    pub actual_weeks_used: u32,
    pub compensation_per_night: f64,
    pub price_per_night: f64,
    pub nights_reserved: u32,
    pub total_compensation: f64,
    pub total_price: f64,
    pub compensation_per_4_weeks: f64,
    pub price_per_4_weeks: f64,
    pub damage_deposit: f64,
    pub maintenance_fee: f64,
    pub house_rules: Option<String>,
    pub cleaning_fee: Option<f64>,
    pub host: Host,
}

impl Proposal {
    /// House rules split into individual lines, blanks dropped.
    #[must_use]
    pub fn house_rule_lines(&self) -> Vec<&str> {
        self.house_rules
            .as_deref()
            .map(|rules| rules.lines().map(str::trim).filter(|l| !l.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// How the breakdown treats a missing proposal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreakdownMode {
    /// Always render; rows without data stay blank.
    Preview,
    /// Render only when a proposal is present.
    #[default]
    Proposal,
}

/// Row interaction wired by the component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    MoveIn,
    HouseRules,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownRow {
    pub label: &'static str,
    /// Small print under the label.
    pub note: Option<&'static str>,
    pub value: String,
    pub action: Option<RowAction>,
    pub highlighted: bool,
}

impl BreakdownRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, note: None, value, action: None, highlighted: false }
    }

    fn clickable(mut self, action: RowAction) -> Self {
        self.action = Some(action);
        self
    }

    fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

/// Rows of the breakdown card, grouped into sections.
///
/// Returns `None` in `Proposal` mode when there is no proposal.
#[must_use]
pub fn breakdown_sections(proposal: Option<&Proposal>, mode: BreakdownMode) -> Option<Vec<Vec<BreakdownRow>>> {
    if proposal.is_none() && mode == BreakdownMode::Proposal {
        return None;
    }

    let dates = vec![
        BreakdownRow::new("Move-in", text(proposal, |p| long_date(p.move_in_date))).clickable(RowAction::MoveIn),
        BreakdownRow::new("Check-in", text(proposal, |p| short_day(&p.check_in_day))),
        BreakdownRow::new("Check-out", text(proposal, |p| short_day(&p.check_out_day))),
        BreakdownRow::new("Reservation Length", text(proposal, |p| day_count(p.reservation_length_days))),
    ];

    let rules = vec![
        BreakdownRow::new("Your House Rules", "(click to see)".to_owned()).clickable(RowAction::HouseRules),
    ];

    let pricing = vec![
        BreakdownRow::new("Weekly Pattern", text(proposal, |p| p.weekly_pattern.clone())),
        BreakdownRow::new("Actual Weeks Used", text(proposal, |p| p.actual_weeks_used.to_string())),
        BreakdownRow::new("Compensation /night", dollars(proposal, |p| p.compensation_per_night)),
        BreakdownRow::new("Price per night", dollars(proposal, |p| p.price_per_night)),
        BreakdownRow::new("Nights reserved", text(proposal, |p| p.nights_reserved.to_string())),
        BreakdownRow::new("Total Compensation", dollars(proposal, |p| p.total_compensation)).highlighted(),
        BreakdownRow::new("Total Price", dollars(proposal, |p| p.total_price))
            .with_note("(excluding Damage Deposit & Maintenance Fee)")
            .highlighted(),
    ];

    let four_weeks = vec![
        BreakdownRow::new("Compensation / 4 weeks", dollars(proposal, |p| p.compensation_per_4_weeks)),
        BreakdownRow::new("Price per 4 weeks", dollars(proposal, |p| p.price_per_4_weeks)),
        BreakdownRow::new("Refundable Damage Deposit*", dollars(proposal, |p| p.damage_deposit)),
        BreakdownRow::new("Maintenance Fee*", dollars(proposal, |p| p.maintenance_fee)),
    ];

    Some(vec![dates, rules, pricing, four_weeks])
}

fn text(proposal: Option<&Proposal>, f: impl FnOnce(&Proposal) -> String) -> String {
    proposal.map(f).unwrap_or_default()
}

fn dollars(proposal: Option<&Proposal>, f: impl FnOnce(&Proposal) -> f64) -> String {
    proposal.map(|p| money(f(p))).unwrap_or_default()
}

// =============================================================================
// SAMPLE PROPOSALS
// =============================================================================

/// Fall sample shown on the preview page.
#[must_use]
pub fn fall_sample() -> Proposal {
    Proposal {
        id: "proposal-demo-001".to_owned(),
        move_in_date: date!(2025 - 11 - 01),
        check_in_day: "Saturday".to_owned(),
        check_out_day: "Friday".to_owned(),
        reservation_length_days: 28,
        weekly_pattern: "Mon-Thu".to_owned(),
        actual_weeks_used: 4,
        compensation_per_night: 45.50,
        price_per_night: 85.00,
        nights_reserved: 16,
        total_compensation: 728.00,
        total_price: 1360.00,
        compensation_per_4_weeks: 728.00,
        price_per_4_weeks: 1360.00,
        damage_deposit: 500.00,
        maintenance_fee: 150.00,
        house_rules: Some(
            "No smoking\nNo pets allowed\nQuiet hours: 10 PM - 8 AM\nMaximum 4 guests\nClean up after yourself"
                .to_owned(),
        ),
        cleaning_fee: None,
        host: Host {
            id: "host-123".to_owned(),
            name: "John Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            phone: None,
        },
    }
}

/// Winter sample shown on the preview page.
#[must_use]
pub fn winter_sample() -> Proposal {
    Proposal {
        id: "proposal-demo-002".to_owned(),
        move_in_date: date!(2025 - 12 - 15),
        check_in_day: "Monday".to_owned(),
        check_out_day: "Sunday".to_owned(),
        reservation_length_days: 56,
        weekly_pattern: "Sun-Wed".to_owned(),
        actual_weeks_used: 8,
        compensation_per_night: 52.00,
        price_per_night: 95.00,
        nights_reserved: 32,
        total_compensation: 1664.00,
        total_price: 3040.00,
        compensation_per_4_weeks: 832.00,
        price_per_4_weeks: 1520.00,
        damage_deposit: 750.00,
        maintenance_fee: 200.00,
        house_rules: Some(
            "No smoking\nPets allowed with $50 fee\nQuiet hours: 9 PM - 7 AM\nWeekly cleaning included".to_owned(),
        ),
        cleaning_fee: Some(75.00),
        host: Host {
            id: "host-456".to_owned(),
            name: "Jane Smith".to_owned(),
            email: "jane.smith@example.com".to_owned(),
            phone: None,
        },
    }
}
