//! # Budget Report
//!
//! A single-pass pipeline that turns typed transaction lines into a
//! two-sheet budget workbook with embedded charts.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts are rounded to cents at ingestion
//!   via `rust_decimal` (the [`Money`] wrapper)
//! - **Typed rejection**: A malformed line yields a [`ParseError`] reason
//!   and changes no state
//! - **Forward-only data flow**: collector -> [`Ledger`] -> sheet plans ->
//!   charts/workbook; later stages only read
//! - **Best-effort output**: a chart that fails to render is logged and
//!   skipped, the workbook is still written
//!
//! ## Example
//!
//! ```
//! use budget_report::Ledger;
//! use std::io::Cursor;
//!
//! let input = "Salary 1000 r 01/01/2024\nRent 500 e n 01/01/2024\nresult\n";
//! let mut ledger = Ledger::new();
//! ledger.ingest(Cursor::new(input)).unwrap();
//! assert_eq!(ledger.net_income().to_string(), "500.00");
//! ```

pub mod chart;
pub mod decimal;
pub mod error;
pub mod ledger;
pub mod report;
pub mod transaction;
pub mod workbook;

pub use decimal::Money;
pub use error::{ReportError, Result};
pub use ledger::{Ledger, RecommendedSplit, Record, USAGE_MESSAGE};
pub use report::{income_statement, spending_breakdown, ReportRow, SheetPlan};
pub use transaction::{parse_line, Entry, EntryKind, ExpenseClass, LineOutcome, ParseError};
pub use workbook::{ReportWorkbook, WORKBOOK_FILE};
