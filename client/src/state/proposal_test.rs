use super::*;

fn row<'a>(sections: &'a [Vec<BreakdownRow>], label: &str) -> &'a BreakdownRow {
    sections
        .iter()
        .flatten()
        .find(|r| r.label == label)
        .unwrap_or_else(|| panic!("missing row {label}"))
}

#[test]
fn proposal_mode_without_data_renders_nothing() {
    assert_eq!(breakdown_sections(None, BreakdownMode::Proposal), None);
}

#[test]
fn preview_mode_without_data_keeps_labels_blank() {
    let sections = breakdown_sections(None, BreakdownMode::Preview).unwrap();
    assert_eq!(row(&sections, "Move-in").value, "");
    assert_eq!(row(&sections, "Total Price").value, "");
    assert_eq!(row(&sections, "Your House Rules").value, "(click to see)");
}

#[test]
fn fall_sample_formats_dates_and_days() {
    let proposal = fall_sample();
    let sections = breakdown_sections(Some(&proposal), BreakdownMode::Proposal).unwrap();
    assert_eq!(row(&sections, "Move-in").value, "Saturday, November 1, 2025");
    assert_eq!(row(&sections, "Check-in").value, "Sat");
    assert_eq!(row(&sections, "Check-out").value, "Fri");
    assert_eq!(row(&sections, "Reservation Length").value, "28 days");
}

#[test]
fn fall_sample_formats_money_rows() {
    let proposal = fall_sample();
    let sections = breakdown_sections(Some(&proposal), BreakdownMode::Preview).unwrap();
    assert_eq!(row(&sections, "Compensation /night").value, "$45.50");
    assert_eq!(row(&sections, "Price per night").value, "$85.00");
    assert_eq!(row(&sections, "Total Price").value, "$1360.00");
    assert_eq!(row(&sections, "Refundable Damage Deposit*").value, "$500.00");
    assert_eq!(row(&sections, "Maintenance Fee*").value, "$150.00");
}

#[test]
fn rows_follow_card_order() {
    let proposal = winter_sample();
    let sections = breakdown_sections(Some(&proposal), BreakdownMode::Proposal).unwrap();
    let labels: Vec<&str> = sections.iter().flatten().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Move-in",
            "Check-in",
            "Check-out",
            "Reservation Length",
            "Your House Rules",
            "Weekly Pattern",
            "Actual Weeks Used",
            "Compensation /night",
            "Price per night",
            "Nights reserved",
            "Total Compensation",
            "Total Price",
            "Compensation / 4 weeks",
            "Price per 4 weeks",
            "Refundable Damage Deposit*",
            "Maintenance Fee*",
        ]
    );
}

#[test]
fn clickable_and_highlighted_rows() {
    let proposal = winter_sample();
    let sections = breakdown_sections(Some(&proposal), BreakdownMode::Proposal).unwrap();
    assert_eq!(row(&sections, "Move-in").action, Some(RowAction::MoveIn));
    assert_eq!(row(&sections, "Your House Rules").action, Some(RowAction::HouseRules));
    assert!(row(&sections, "Total Compensation").highlighted);
    assert!(row(&sections, "Total Price").highlighted);
    assert!(row(&sections, "Total Price").note.is_some());
    assert!(!row(&sections, "Weekly Pattern").highlighted);
}

#[test]
fn house_rule_lines_split_and_skip_blanks() {
    let mut proposal = fall_sample();
    assert_eq!(proposal.house_rule_lines().len(), 5);
    proposal.house_rules = Some("No smoking\n\n  Quiet hours  \n".to_owned());
    assert_eq!(proposal.house_rule_lines(), vec!["No smoking", "Quiet hours"]);
    proposal.house_rules = None;
    assert!(proposal.house_rule_lines().is_empty());
}
