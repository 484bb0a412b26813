use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places kept for every stored monetary amount
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to [`MONEY_SCALE`] places, half away from zero.
///
/// 10.005 becomes 10.01 and -10.005 becomes -10.01. Banker's rounding is
/// not used so that totals match what a customer computes by hand.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a decimal previously written by [`to_storage`]
pub fn from_storage(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(raw)
}

/// Canonical text form used for the `TEXT` money columns
pub fn to_storage(amount: Decimal) -> String {
    amount.to_string()
}
