//! Rental price calculation and money rendering

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::Schedule;

/// Total price for renting at `daily_rate` over `schedule`, billed per fractional day
pub fn total_price(daily_rate: Decimal, schedule: &Schedule) -> Decimal {
    schedule.days() * daily_rate
}

/// Render an amount as currency, e.g. `$1,234.50`
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}.{}", if negative { "-" } else { "" }, symbol, grouped, cents)
}
