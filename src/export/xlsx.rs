// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_NUM_FORMAT, parse_to_excel_date};
use crate::export::model::{ColumnKind, ReportRow, get_headers, report_row_values};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Status Report";

/// XLSX report with styled header, banded rows and auto-width columns.
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Writing XLSX report: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, (header, _)) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet.write(1, 0, "No data available")?;
        workbook.save(path)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|(h, _)| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, report_row) in rows.iter().enumerate() {
        // separator rows stay blank
        if report_row.is_separator() {
            continue;
        }

        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in report_row_values(report_row).into_iter().enumerate() {
            let kind = headers[col].1;
            write_xlsx_cell(worksheet, row, col as u16, value, kind, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write a single cell; date columns become real Excel dates when parseable.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: ColumnKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if kind == ColumnKind::Date
        && let Some(serial) = parse_to_excel_date(s)
    {
        let fmt = base.set_num_format(DATE_NUM_FORMAT);
        worksheet.write_with_format(row, col, serial, &fmt)?;
        return Ok(());
    }

    // Text, IDs included: leading zeros must survive
    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}
