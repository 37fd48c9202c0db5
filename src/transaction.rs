//! Input line models and the pure line parser.
//!
//! Each input line is a whitespace-separated record:
//!
//! ```text
//! <item> <amount> r <date>            revenue
//! <item> <amount> e <n|w|o> <date>    expense
//! ```
//!
//! The line `result` is the sentinel that ends the input phase. Dates use
//! the `mm/dd/yyyy` format. Extra trailing tokens are ignored.

use crate::decimal::Money;
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

/// Date format accepted on input and echoed in the usage message.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Why a line was rejected.
///
/// Rejection is deliberately coarse at the console (one fixed usage
/// message for everything), but the reasons are enumerated here so the
/// parser stays testable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough tokens to classify the line.
    #[error("expected at least {expected} fields, found {found}")]
    MissingTokens { expected: usize, found: usize },

    /// The amount token did not parse as a decimal number.
    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),

    /// The kind token was neither "r" nor "e".
    #[error("unknown kind {0:?}, expected \"r\" or \"e\"")]
    UnknownKind(String),

    /// The expense class token was none of "n", "w", "o".
    #[error("unknown expense class {0:?}, expected \"n\", \"w\" or \"o\"")]
    UnknownClass(String),

    /// The date token was not mm/dd/yyyy.
    #[error("date {0:?} is not in mm/dd/yyyy format")]
    InvalidDate(String),
}

/// Expense classification under the 50/30/20 model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseClass {
    /// Necessary spending ("n").
    Need,

    /// Discretionary spending ("w").
    Want,

    /// Everything else ("o").
    Other,
}

/// Transaction kind with expense classification attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Money coming in ("r").
    Revenue,

    /// Money going out ("e"), split into needs/wants/others.
    Expense(ExpenseClass),
}

/// A parsed and validated transaction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Item name (first token, verbatim).
    pub item: String,

    /// Amount, already rounded to cents.
    pub amount: Money,

    /// Transaction date.
    pub date: NaiveDate,

    /// Revenue or classified expense.
    pub kind: EntryKind,
}

/// Result of parsing one non-empty input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The `result` sentinel: input phase is over.
    Sentinel,

    /// An accepted transaction record.
    Record(Entry),
}

/// Parses one input line into a sentinel marker or a transaction entry.
///
/// Pure function: the caller decides what to print and whether to keep
/// looping. Nothing is recorded for a rejected line.
pub fn parse_line(line: &str) -> Result<LineOutcome, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens == ["result"] {
        return Ok(LineOutcome::Sentinel);
    }

    if tokens.len() < 4 {
        return Err(ParseError::MissingTokens {
            expected: 4,
            found: tokens.len(),
        });
    }

    let item = tokens[0].to_string();
    let amount = Money::from_str(tokens[1])
        .map_err(|_| ParseError::InvalidAmount(tokens[1].to_string()))?;

    let (kind, date_token) = match tokens[2] {
        "r" => (EntryKind::Revenue, tokens[3]),
        "e" => {
            if tokens.len() < 5 {
                return Err(ParseError::MissingTokens {
                    expected: 5,
                    found: tokens.len(),
                });
            }
            let class = match tokens[3] {
                "n" => ExpenseClass::Need,
                "w" => ExpenseClass::Want,
                "o" => ExpenseClass::Other,
                other => return Err(ParseError::UnknownClass(other.to_string())),
            };
            (EntryKind::Expense(class), tokens[4])
        }
        other => return Err(ParseError::UnknownKind(other.to_string())),
    };

    let date = NaiveDate::parse_from_str(date_token, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(date_token.to_string()))?;

    Ok(LineOutcome::Record(Entry {
        item,
        amount,
        date,
        kind,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> Entry {
        match parse_line(line).unwrap() {
            LineOutcome::Record(entry) => entry,
            LineOutcome::Sentinel => panic!("expected a record"),
        }
    }

    #[test]
    fn test_parse_revenue() {
        let entry = record("Salary 1000 r 01/01/2024");
        assert_eq!(entry.item, "Salary");
        assert_eq!(entry.amount.to_string(), "1000.00");
        assert_eq!(entry.kind, EntryKind::Revenue);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_expense_classes() {
        let need = record("Rent 500 e n 01/01/2024");
        assert_eq!(need.kind, EntryKind::Expense(ExpenseClass::Need));

        let want = record("Cinema 12.5 e w 01/02/2024");
        assert_eq!(want.kind, EntryKind::Expense(ExpenseClass::Want));
        assert_eq!(want.amount.to_string(), "12.50");

        let other = record("Gift 20 e o 01/03/2024");
        assert_eq!(other.kind, EntryKind::Expense(ExpenseClass::Other));
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(parse_line("result").unwrap(), LineOutcome::Sentinel);
        assert_eq!(parse_line("  result  ").unwrap(), LineOutcome::Sentinel);
    }

    #[test]
    fn test_sentinel_with_extra_tokens_is_not_sentinel() {
        assert!(parse_line("result now").is_err());
    }

    #[test]
    fn test_rejects_short_lines() {
        assert_eq!(
            parse_line("bad line"),
            Err(ParseError::MissingTokens {
                expected: 4,
                found: 2
            })
        );
        assert_eq!(
            parse_line(""),
            Err(ParseError::MissingTokens {
                expected: 4,
                found: 0
            })
        );
    }

    #[test]
    fn test_rejects_expense_missing_date() {
        // 4 tokens is enough for revenue but not for an expense
        assert_eq!(
            parse_line("Rent 500 e n"),
            Err(ParseError::MissingTokens {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_rejects_bad_amount() {
        assert_eq!(
            parse_line("Rent abc e n 01/01/2024"),
            Err(ParseError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_kind_and_class() {
        assert_eq!(
            parse_line("Rent 500 x 01/01/2024"),
            Err(ParseError::UnknownKind("x".to_string()))
        );
        assert_eq!(
            parse_line("Rent 500 e z 01/01/2024"),
            Err(ParseError::UnknownClass("z".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_date() {
        assert_eq!(
            parse_line("Salary 1000 r 2024-01-01"),
            Err(ParseError::InvalidDate("2024-01-01".to_string()))
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let entry = record("Salary 1000 r 01/01/2024 trailing junk");
        assert_eq!(entry.item, "Salary");
        assert_eq!(entry.kind, EntryKind::Revenue);
    }
}
