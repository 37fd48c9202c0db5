//! Core aggregation of accepted transaction lines.
//!
//! The [`Ledger`] is the aggregation context for one run: it owns the six
//! record sets and five running totals, is populated only while `ingest`
//! reads standard input, and is read-only for every later stage.

use crate::decimal::Money;
use crate::error::Result;
use crate::transaction::{parse_line, Entry, EntryKind, ExpenseClass, LineOutcome};
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::io::BufRead;

/// Fixed usage message printed whenever a line is rejected.
pub const USAGE_MESSAGE: &str = "invalid input\n\
    please ensure that the input format is --> item name, amount, \
    r/e (revenue or expense), n/w/o (need, want or other if the item is an expense), \
    date (mm/dd/yyyy)";

/// One stored transaction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Item name as typed.
    pub item: String,

    /// Amount in cents precision.
    pub price: Money,

    /// Transaction date.
    pub date: NaiveDate,
}

/// The recommended 50/30/20 allocation of total revenue.
///
/// 50% to needs, 30% to wants, nothing to others, 20% to savings. Used as
/// the comparison baseline in the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedSplit {
    pub needs: Money,
    pub wants: Money,
    pub others: Money,
    pub savings: Money,
}

/// Aggregated state for one run.
///
/// # Record sets
///
/// - `revenue`: one row per accepted revenue line, duplicates kept.
/// - `all_expenditures`: one row per accepted expense line, duplicates
///   kept. This is the audit trail behind the time-series chart.
/// - `expense_by_item`: keyed by item name in first-seen order; a repeated
///   item accumulates into the existing row (date kept from the first
///   occurrence).
/// - `needs` / `wants` / `others`: expense rows partitioned by class.
///
/// # Invariants
///
/// - `total_expenses == total_needs + total_wants + total_others`
/// - `expense_by_item` prices sum to the same `total_expenses`
/// - a rejected line changes nothing
#[derive(Debug, Default)]
pub struct Ledger {
    revenue: Vec<Record>,
    all_expenditures: Vec<Record>,
    expense_by_item: Vec<Record>,
    needs: Vec<Record>,
    wants: Vec<Record>,
    others: Vec<Record>,

    total_revenue: Money,
    total_expenses: Money,
    total_needs: Money,
    total_wants: Money,
    total_others: Money,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Reads transaction lines until the `result` sentinel or end of input.
    ///
    /// Rejected lines are logged at warn level with their typed reason and
    /// answered with the fixed usage message on stderr; nothing is recorded
    /// for them. Accepted lines update the record sets and running totals.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                Ok(LineOutcome::Sentinel) => break,
                Ok(LineOutcome::Record(entry)) => {
                    debug!("Line {}: accepted {:?}", line_idx + 1, entry);
                    self.record(entry);
                }
                Err(reason) => {
                    warn!("Line {}: rejected: {}", line_idx + 1, reason);
                    eprintln!("{}", USAGE_MESSAGE);
                }
            }
        }

        Ok(())
    }

    /// Records one accepted entry.
    ///
    /// Revenue appends to the revenue set only. An expense appends to the
    /// audit trail, accumulates into the by-item set, appends to exactly
    /// one of needs/wants/others, and bumps the matching totals.
    pub fn record(&mut self, entry: Entry) {
        let row = Record {
            item: entry.item,
            price: entry.amount,
            date: entry.date,
        };

        match entry.kind {
            EntryKind::Revenue => {
                self.total_revenue += row.price;
                self.revenue.push(row);
            }
            EntryKind::Expense(class) => {
                self.total_expenses += row.price;
                self.all_expenditures.push(row.clone());
                self.accumulate_by_item(&row);

                match class {
                    ExpenseClass::Need => {
                        self.total_needs += row.price;
                        self.needs.push(row);
                    }
                    ExpenseClass::Want => {
                        self.total_wants += row.price;
                        self.wants.push(row);
                    }
                    ExpenseClass::Other => {
                        self.total_others += row.price;
                        self.others.push(row);
                    }
                }
            }
        }
    }

    /// Folds a repeated item name into its existing by-item row.
    ///
    /// Linear scan keeps first-seen ordering without a separate index; the
    /// set is as small as one run's worth of distinct item names.
    fn accumulate_by_item(&mut self, row: &Record) {
        match self
            .expense_by_item
            .iter_mut()
            .find(|existing| existing.item == row.item)
        {
            Some(existing) => existing.price += row.price,
            None => self.expense_by_item.push(row.clone()),
        }
    }

    /// Accepted revenue rows, input order.
    pub fn revenue(&self) -> &[Record] {
        &self.revenue
    }

    /// Every accepted expense row, input order, duplicates kept.
    pub fn all_expenditures(&self) -> &[Record] {
        &self.all_expenditures
    }

    /// Expense rows folded by item name, first-seen order.
    pub fn expense_by_item(&self) -> &[Record] {
        &self.expense_by_item
    }

    /// Need-class expense rows, input order.
    pub fn needs(&self) -> &[Record] {
        &self.needs
    }

    /// Want-class expense rows, input order.
    pub fn wants(&self) -> &[Record] {
        &self.wants
    }

    /// Other-class expense rows, input order.
    pub fn others(&self) -> &[Record] {
        &self.others
    }

    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    pub fn total_needs(&self) -> Money {
        self.total_needs
    }

    pub fn total_wants(&self) -> Money {
        self.total_wants
    }

    pub fn total_others(&self) -> Money {
        self.total_others
    }

    /// Total revenue minus total expenses.
    pub fn net_income(&self) -> Money {
        self.total_revenue - self.total_expenses
    }

    /// The 50/30/20 allocation of total revenue.
    pub fn recommended_split(&self) -> RecommendedSplit {
        RecommendedSplit {
            needs: self.total_revenue.scaled(Decimal::new(50, 2)),
            wants: self.total_revenue.scaled(Decimal::new(30, 2)),
            others: Money::ZERO,
            savings: self.total_revenue.scaled(Decimal::new(20, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ingest_str(input: &str) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.ingest(Cursor::new(input)).unwrap();
        ledger
    }

    #[test]
    fn test_revenue_accumulates() {
        let ledger = ingest_str("Salary 1000 r 01/01/2024\nBonus 250.5 r 02/01/2024\nresult\n");

        assert_eq!(ledger.revenue().len(), 2);
        assert_eq!(ledger.total_revenue().to_string(), "1250.50");
        assert!(ledger.all_expenditures().is_empty());
    }

    #[test]
    fn test_expense_partitioning() {
        let ledger = ingest_str(
            "Rent 500 e n 01/01/2024\n\
             Cinema 12.5 e w 01/02/2024\n\
             Gift 20 e o 01/03/2024\n\
             result\n",
        );

        assert_eq!(ledger.needs().len(), 1);
        assert_eq!(ledger.wants().len(), 1);
        assert_eq!(ledger.others().len(), 1);
        assert_eq!(ledger.all_expenditures().len(), 3);
        assert_eq!(ledger.total_expenses().to_string(), "532.50");
        assert_eq!(ledger.total_needs().to_string(), "500.00");
        assert_eq!(ledger.total_wants().to_string(), "12.50");
        assert_eq!(ledger.total_others().to_string(), "20.00");
    }

    #[test]
    fn test_repeated_item_folds_into_one_row() {
        let ledger = ingest_str(
            "Coffee 4.5 e n 01/05/2024\n\
             Coffee 3.2 e n 01/06/2024\n\
             result\n",
        );

        assert_eq!(ledger.expense_by_item().len(), 1);
        let coffee = &ledger.expense_by_item()[0];
        assert_eq!(coffee.item, "Coffee");
        assert_eq!(coffee.price.to_string(), "7.70");
        assert_eq!(coffee.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        // the audit trail keeps both rows
        assert_eq!(ledger.all_expenditures().len(), 2);
        assert_eq!(ledger.total_expenses().to_string(), "7.70");
        assert_eq!(ledger.total_needs().to_string(), "7.70");
    }

    #[test]
    fn test_rejected_line_changes_nothing() {
        let ledger = ingest_str("bad line\nnope 10 x 01/01/2024\nresult\n");

        assert!(ledger.revenue().is_empty());
        assert!(ledger.all_expenditures().is_empty());
        assert!(ledger.expense_by_item().is_empty());
        assert!(ledger.total_revenue().is_zero());
        assert!(ledger.total_expenses().is_zero());
    }

    #[test]
    fn test_lines_after_sentinel_are_ignored() {
        let ledger = ingest_str("Salary 1000 r 01/01/2024\nresult\nRent 500 e n 01/01/2024\n");

        assert_eq!(ledger.revenue().len(), 1);
        assert!(ledger.all_expenditures().is_empty());
    }

    #[test]
    fn test_eof_without_sentinel_ends_input() {
        let ledger = ingest_str("Salary 1000 r 01/01/2024\n");
        assert_eq!(ledger.total_revenue().to_string(), "1000.00");
    }

    #[test]
    fn test_net_income_and_split() {
        let ledger = ingest_str("Salary 1000 r 01/01/2024\nRent 500 e n 01/01/2024\nresult\n");

        assert_eq!(ledger.net_income().to_string(), "500.00");

        let split = ledger.recommended_split();
        assert_eq!(split.needs.to_string(), "500.00");
        assert_eq!(split.wants.to_string(), "300.00");
        assert_eq!(split.others.to_string(), "0.00");
        assert_eq!(split.savings.to_string(), "200.00");
    }

    #[test]
    fn test_totals_match_record_sums() {
        let ledger = ingest_str(
            "Salary 1000 r 01/01/2024\n\
             Rent 500 e n 01/01/2024\n\
             Coffee 4.5 e w 01/02/2024\n\
             Coffee 3.2 e w 01/03/2024\n\
             Gift 20 e o 01/04/2024\n\
             result\n",
        );

        let revenue_sum: Money = ledger.revenue().iter().map(|r| r.price).sum();
        assert_eq!(revenue_sum, ledger.total_revenue());

        let expense_sum: Money = ledger.all_expenditures().iter().map(|r| r.price).sum();
        assert_eq!(expense_sum, ledger.total_expenses());

        let by_item_sum: Money = ledger.expense_by_item().iter().map(|r| r.price).sum();
        assert_eq!(by_item_sum, ledger.total_expenses());

        let class_sum = ledger.total_needs() + ledger.total_wants() + ledger.total_others();
        assert_eq!(class_sum, ledger.total_expenses());
    }
}
