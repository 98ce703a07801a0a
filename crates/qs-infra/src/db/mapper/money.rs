//! TEXT <-> Decimal conversion for money columns.
//!
//! SQLite has no native decimal type and floating point drifts over many
//! line items, so money is stored as canonical decimal strings.

use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub fn parse_money(value: &str, column: &str) -> Result<Decimal> {
    Decimal::from_str(value).with_context(|| format!("unparseable decimal in {column}: {value:?}"))
}

pub fn parse_money_opt(value: Option<&str>, column: &str) -> Result<Option<Decimal>> {
    value.map(|v| parse_money(v, column)).transpose()
}

pub fn money_to_db(value: &Decimal) -> String {
    value.to_string()
}
