//! Workbook output with `rust_xlsxwriter`.
//!
//! Lays the sheet plans out as cells: merged bold title on row 2, column
//! headers on row 3, plan rows from row 4, every amount in accounting
//! number format, net income underlined. Chart images that were actually
//! rendered are embedded on the breakdown sheet in an L-shape to the right
//! of the table.

use crate::chart::{BAR_FILE, PIE_FILE, SCATTER_FILE};
use crate::error::Result;
use crate::report::{ReportRow, SheetPlan, START_ROW};
use crate::transaction::DATE_FORMAT;
use rust_xlsxwriter::{
    Format, FormatAlign, FormatBorder, FormatUnderline, Image, Workbook,
};

/// Fixed output file name, written to the current working directory.
pub const WORKBOOK_FILE: &str = "Finance Report.xlsx";

/// Accounting style: 2 decimals, parenthesized negatives, dash for zero.
const ACCOUNTING_FORMAT: &str = r#"_("$"* #,##0.00_);_("$"* \(#,##0.00\);_("$"* "-"??_);_(@_)"#;

/// Fixed anchors for the embedded charts: scatter top-left of the image
/// area, pie to its right, bar chart below the scatter.
const IMAGE_ANCHORS: [(&str, u32, u16); 3] = [
    (SCATTER_FILE, 0, 5),
    (PIE_FILE, 0, 15),
    (BAR_FILE, 20, 5),
];

/// Builds the two-sheet report workbook.
pub struct ReportWorkbook {
    workbook: Workbook,
    money: Format,
    emphasized: Format,
    title: Format,
}

impl ReportWorkbook {
    pub fn new() -> Self {
        let money = Format::new().set_num_format(ACCOUNTING_FORMAT);
        let emphasized = Format::new()
            .set_num_format(ACCOUNTING_FORMAT)
            .set_underline(FormatUnderline::Single);
        let title = Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        ReportWorkbook {
            workbook: Workbook::new(),
            money,
            emphasized,
            title,
        }
    }

    /// Appends one worksheet laid out from `plan`.
    ///
    /// `images` names the chart files to embed; a name whose render was
    /// skipped earlier is simply absent from the slice, so the sheet
    /// degrades to a plain table.
    pub fn add_sheet(&mut self, name: &str, plan: &SheetPlan, images: &[&str]) -> Result<()> {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(name)?;
        sheet.set_column_width(0, 18)?;
        sheet.set_column_width(1, 14)?;
        sheet.set_column_width(2, 12)?;

        sheet.merge_range(1, 0, 1, 3, plan.title, &self.title)?;

        for (offset, row) in plan.rows.iter().enumerate() {
            let r = START_ROW + offset as u32;
            match row {
                ReportRow::Columns(captions) => {
                    for (col, caption) in captions.iter().enumerate() {
                        sheet.write_string(r, col as u16, *caption)?;
                    }
                }
                ReportRow::Section(label) => {
                    sheet.write_string(r, 0, *label)?;
                }
                ReportRow::Entry { item, price, date } => {
                    sheet.write_string(r, 0, item.as_str())?;
                    sheet.write_number_with_format(r, 1, price.to_f64(), &self.money)?;
                    if let Some(date) = date {
                        sheet.write_string(r, 2, date.format(DATE_FORMAT).to_string())?;
                    }
                }
                ReportRow::Total {
                    label,
                    amount,
                    emphasize,
                } => {
                    let format = if *emphasize {
                        &self.emphasized
                    } else {
                        &self.money
                    };
                    sheet.write_string(r, 0, *label)?;
                    sheet.write_number_with_format(r, 1, amount.to_f64(), format)?;
                }
                ReportRow::Blank => {}
            }
        }

        for (file, row, col) in IMAGE_ANCHORS {
            if !images.contains(&file) {
                continue;
            }
            let image = Image::new(file)?;
            sheet.insert_image(row, col, &image)?;
        }

        Ok(())
    }

    /// Saves the workbook. Best effort: a failure here can leave a partial
    /// file behind, there is no retry.
    pub fn save<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<()> {
        self.workbook.save(path.as_ref())?;
        Ok(())
    }
}

impl Default for ReportWorkbook {
    fn default() -> Self {
        Self::new()
    }
}
