//! Report assembly: turns the frozen ledger into per-sheet layout plans.
//!
//! A [`SheetPlan`] is an ordered list of rows; the workbook writer places
//! row `i` of a plan at `START_ROW + i`. Section totals and labels are rows
//! in the plan like any other, so their final position falls out of the
//! ordering instead of being recomputed from block sizes.

use crate::decimal::Money;
use crate::ledger::{Ledger, Record};
use chrono::NaiveDate;

/// Worksheet row the first plan row lands on. The merged sheet title sits
/// above this, on row 1.
pub const START_ROW: u32 = 3;

/// One row of a sheet plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// Column captions, e.g. `Revenue | Amount`.
    Columns(Vec<&'static str>),

    /// A section label in the first column, e.g. `Expenses`.
    Section(&'static str),

    /// One transaction row. `date` is present on the breakdown sheet only.
    Entry {
        item: String,
        price: Money,
        date: Option<NaiveDate>,
    },

    /// A labelled total. `emphasize` marks the net income row.
    Total {
        label: &'static str,
        amount: Money,
        emphasize: bool,
    },

    /// Spacer between sections.
    Blank,
}

/// An assembled sheet: merged title plus ordered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub title: &'static str,
    pub rows: Vec<ReportRow>,
}

impl SheetPlan {
    fn new(title: &'static str) -> Self {
        SheetPlan {
            title,
            rows: Vec::new(),
        }
    }

    fn columns(&mut self, captions: Vec<&'static str>) {
        self.rows.push(ReportRow::Columns(captions));
    }

    fn section(&mut self, label: &'static str) {
        self.rows.push(ReportRow::Section(label));
    }

    fn entries(&mut self, records: &[Record], with_date: bool) {
        for record in records {
            self.rows.push(ReportRow::Entry {
                item: record.item.clone(),
                price: record.price,
                date: with_date.then_some(record.date),
            });
        }
    }

    fn total(&mut self, label: &'static str, amount: Money) {
        self.rows.push(ReportRow::Total {
            label,
            amount,
            emphasize: false,
        });
    }

    fn emphasized_total(&mut self, label: &'static str, amount: Money) {
        self.rows.push(ReportRow::Total {
            label,
            amount,
            emphasize: true,
        });
    }

    fn blank(&mut self) {
        self.rows.push(ReportRow::Blank);
    }
}

/// Sorts records by price, highest first. Stable, so equal prices keep
/// their input order.
fn sorted_by_price_desc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.price.cmp(&a.price));
    sorted
}

/// Builds the income statement sheet: revenue block (price descending),
/// then the by-item expense block (price descending), each followed by its
/// total, closed by the net income row.
pub fn income_statement(ledger: &Ledger) -> SheetPlan {
    let mut plan = SheetPlan::new("Income Statement");

    plan.columns(vec!["Revenue", "Amount"]);
    plan.entries(&sorted_by_price_desc(ledger.revenue()), false);
    plan.total("Total Revenue", ledger.total_revenue());
    plan.blank();
    plan.section("Expenses");
    plan.entries(&sorted_by_price_desc(ledger.expense_by_item()), false);
    plan.total("Total Expenses", ledger.total_expenses());
    plan.emphasized_total("Net Income", ledger.net_income());

    plan
}

/// Builds the needs/wants/others sheet: the three class blocks in input
/// order, each followed by its total.
pub fn spending_breakdown(ledger: &Ledger) -> SheetPlan {
    let mut plan = SheetPlan::new("Needs and Wants");

    plan.columns(vec!["Needs", "Amount", "Date"]);
    plan.entries(ledger.needs(), true);
    plan.total("Total Needs", ledger.total_needs());
    plan.blank();
    plan.section("Wants");
    plan.entries(ledger.wants(), true);
    plan.total("Total Wants", ledger.total_wants());
    plan.blank();
    plan.section("Others");
    plan.entries(ledger.others(), true);
    plan.total("Total Others", ledger.total_others());

    plan
}
