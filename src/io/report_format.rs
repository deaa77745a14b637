//! Report rendering
//!
//! Renders any `ReportView` either as an aligned text table or as CSV.
//! Rendering never mutates the view's data.

use crate::cli::ReportFormat;
use crate::report::ReportView;
use crate::types::LedgerError;
use std::io::Write;

/// Write a view in the selected format, preceded by its title
pub fn write_report(
    view: &dyn ReportView,
    format: ReportFormat,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    writeln!(output, "{}", view.title())?;
    match format {
        ReportFormat::Table => write_table(view, output),
        ReportFormat::Csv => write_csv(view, output),
    }
}

/// Write a view as a boxed, left-aligned text table
///
/// ```text
/// +---------------+----------+
/// | Store         | Products |
/// +---------------+----------+
/// | Maha's Movies | p00      |
/// +---------------+----------+
/// ```
pub fn write_table(view: &dyn ReportView, output: &mut dyn Write) -> Result<(), LedgerError> {
    let header = view.header();
    let rows: Vec<Vec<String>> = view
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    writeln!(output, "{}", border)?;
    write_table_row(output, header.iter().copied(), &widths)?;
    writeln!(output, "{}", border)?;
    for row in &rows {
        write_table_row(output, row.iter().map(String::as_str), &widths)?;
    }
    writeln!(output, "{}", border)?;

    Ok(())
}

fn write_table_row<'a>(
    output: &mut dyn Write,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> Result<(), LedgerError> {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("|");
    writeln!(output, "|{}|", line)?;
    Ok(())
}

/// Write a view as CSV: header record then one record per row
pub fn write_csv(view: &dyn ReportView, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(view.header())?;
    for row in view.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;

    Ok(())
}
