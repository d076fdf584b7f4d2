// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub count: usize,
}

/// Sums saturate at `Decimal::MAX` instead of overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn balance(txs: &[Transaction]) -> Decimal {
    total_income(txs).saturating_sub(total_expense(txs))
}

pub fn total_income(txs: &[Transaction]) -> Decimal {
    total_of(txs, TransactionType::Income)
}

pub fn total_expense(txs: &[Transaction]) -> Decimal {
    total_of(txs, TransactionType::Expense)
}

pub fn total_of(txs: &[Transaction], kind: TransactionType) -> Decimal {
    saturating_sum(txs.iter().filter(|t| t.r#type == kind).map(|t| t.amount))
}

pub fn totals(txs: &[Transaction]) -> Totals {
    let mut out = Totals::default();
    for t in txs {
        match t.r#type {
            TransactionType::Income => out.income = out.income.saturating_add(t.amount),
            TransactionType::Expense => out.expense = out.expense.saturating_add(t.amount),
        }
        out.count += 1;
    }
    out.balance = out.income.saturating_sub(out.expense);
    out
}

/// Rounded percentage of `part` in `whole`; 0 when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> u32 {
    if whole.is_zero() {
        return 0;
    }
    let pct = (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.to_u32().unwrap_or(0)
}

/// Income and expense shares of the combined turnover, as whole percents.
pub fn income_expense_shares(txs: &[Transaction]) -> (u32, u32) {
    let t = totals(txs);
    let turnover = t.income.saturating_add(t.expense);
    (percent_of(t.income, turnover), percent_of(t.expense, turnover))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(id: &str, kind: TransactionType, amount: i64, category: &str) -> Transaction {
        Transaction {
            id: id.into(),
            r#type: kind,
            amount: Decimal::from(amount),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: category.into(),
            description: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        use TransactionType::*;
        vec![
            tx("1", Income, 1000, "Salary"),
            tx("2", Expense, 200, "Food"),
            tx("3", Income, 500, "Bonus"),
            tx("4", Expense, 100, "Transport"),
        ]
    }

    #[test]
    fn net_balance() {
        assert_eq!(balance(&sample()), Decimal::from(1200));
    }

    #[test]
    fn income_and_expense_sums() {
        assert_eq!(total_income(&sample()), Decimal::from(1500));
        assert_eq!(total_expense(&sample()), Decimal::from(300));
    }

    #[test]
    fn empty_list_is_all_zero() {
        let t = totals(&[]);
        assert_eq!(t, Totals::default());
        assert!(balance(&[]).is_zero());
        assert!(total_income(&[]).is_zero());
        assert!(total_expense(&[]).is_zero());
        assert_eq!(income_expense_shares(&[]), (0, 0));
    }

    #[test]
    fn totals_agree_with_individual_sums() {
        let txs = sample();
        let t = totals(&txs);
        assert_eq!(t.income, total_income(&txs));
        assert_eq!(t.expense, total_expense(&txs));
        assert_eq!(t.balance, balance(&txs));
        assert_eq!(t.balance, t.income - t.expense);
        assert_eq!(t.count, 4);
    }

    #[test]
    fn balance_can_go_negative() {
        let txs = vec![tx("1", TransactionType::Expense, 30, "Food")];
        assert_eq!(balance(&txs), Decimal::from(-30));
    }

    #[test]
    fn shares_round_half_away_from_zero() {
        // 1500 / 1800 = 83.33%, 300 / 1800 = 16.67%
        assert_eq!(income_expense_shares(&sample()), (83, 17));
        assert_eq!(percent_of(Decimal::from(1), Decimal::from(8)), 13);
        assert_eq!(percent_of(Decimal::from(5), Decimal::ZERO), 0);
    }

    #[test]
    fn huge_amounts_saturate_instead_of_panicking() {
        let mut txs = sample();
        for id in ["big1", "big2"] {
            let mut t = tx(id, TransactionType::Income, 0, "Salary");
            t.amount = Decimal::MAX;
            txs.push(t);
        }
        let t = totals(&txs);
        assert_eq!(t.income, Decimal::MAX);
        assert_eq!(t.expense, Decimal::from(300));
        assert_eq!(t.balance, Decimal::MAX - Decimal::from(300));
        assert_eq!(balance(&txs), t.balance);
        assert_eq!(total_income(&txs), Decimal::MAX);
        assert_eq!(income_expense_shares(&txs), (100, 0));
    }
}
