// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! ru-RU rendering of money and dates.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::TransactionType;
use crate::utils::parse_date;

pub const CURRENCY_SYMBOL: &str = "₽";
const GROUP_SEPARATOR: char = ' ';

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole rubles, digits grouped by three: `1234` → `1 234 ₽`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {}", sign, group_digits(&digits), CURRENCY_SYMBOL)
}

/// Amount prefixed with `+` for income and `-` for expense.
pub fn format_signed(kind: TransactionType, amount: Decimal) -> String {
    let sign = match kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{} {}", sign, format_currency(amount))
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `2025-03-01` → `01.03.2025`.
pub fn format_date(s: &str) -> Result<String> {
    Ok(format_naive_date(parse_date(s)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        let s = format_currency(Decimal::from(1234));
        assert!(s.contains("1 234"));
        assert!(s.contains('₽'));
        assert_eq!(s, "1 234 ₽");
    }

    #[test]
    fn currency_edge_values() {
        assert_eq!(format_currency(Decimal::ZERO), "0 ₽");
        assert_eq!(format_currency(Decimal::from(999)), "999 ₽");
        assert_eq!(format_currency(Decimal::from(1_000_000)), "1 000 000 ₽");
        assert_eq!(format_currency(Decimal::from(-4000)), "-4 000 ₽");
    }

    #[test]
    fn currency_drops_fraction() {
        assert_eq!(format_currency("1234.5".parse().unwrap()), "1 235 ₽");
        assert_eq!(format_currency("1234.49".parse().unwrap()), "1 234 ₽");
        assert_eq!(format_currency("-0.4".parse().unwrap()), "0 ₽");
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(
            format_signed(TransactionType::Income, Decimal::from(5000)),
            "+ 5 000 ₽"
        );
        assert_eq!(
            format_signed(TransactionType::Expense, Decimal::from(1000)),
            "- 1 000 ₽"
        );
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date("2025-03-01").unwrap(), "01.03.2025");
        assert_eq!(format_date("2024-12-31T18:00:00Z").unwrap(), "31.12.2024");
        assert!(format_date("not a date").is_err());
    }
}
