//! Budget Report CLI
//!
//! Reads transaction lines from standard input until the `result` sentinel,
//! then writes `Finance Report.xlsx` plus three chart PNGs to the current
//! working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run < transactions.txt
//! ```
//!
//! Line formats:
//!
//! ```text
//! <item> <amount> r <mm/dd/yyyy>            revenue
//! <item> <amount> e <n|w|o> <mm/dd/yyyy>    expense (need/want/other)
//! result                                    finish input
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use budget_report::{chart, report, Ledger, ReportWorkbook, Result, WORKBOOK_FILE};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut ledger = Ledger::new();
    ledger.ingest(stdin.lock())?;

    let income = report::income_statement(&ledger);
    let breakdown = report::spending_breakdown(&ledger);
    let charts = chart::render_all(&ledger);

    let mut workbook = ReportWorkbook::new();
    workbook.add_sheet("Sheet1", &income, &[])?;
    workbook.add_sheet("Sheet2", &breakdown, &charts)?;
    workbook.save(WORKBOOK_FILE)?;

    Ok(())
}
