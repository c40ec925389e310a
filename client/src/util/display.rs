//! Text formatting for reservation figures.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::Date;

/// Long US-style date, e.g. `Saturday, November 1, 2025`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year())
}

/// First three letters of a day name (`Saturday` -> `Sat`).
#[must_use]
pub fn short_day(day: &str) -> String {
    day.chars().take(3).collect()
}

/// Dollar amount with two decimals.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[must_use]
pub fn day_count(days: u32) -> String {
    format!("{days} days")
}
