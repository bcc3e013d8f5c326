use std::io::{self, Write};

use crate::heating::CostTable;
use crate::render::table::{header_cells, row_cells, COLUMN_COUNT};

/// 운전비 표를 고정폭 텍스트로 출력한다.
pub fn write_table(out: &mut impl Write, table: &CostTable, currency_symbol: &str) -> io::Result<()> {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(header_cells(table.inputs.yearly_usage));
    for row in &table.rows {
        lines.push(row_cells(row, currency_symbol));
    }

    let mut widths = [0usize; COLUMN_COUNT];
    for cells in &lines {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    for (i, cells) in lines.iter().enumerate() {
        let text: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:^w$}"))
            .collect();
        writeln!(out, "| {} |", text.join(" | "))?;
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            writeln!(out, "|-{}-|", rule.join("-|-"))?;
        }
    }

    let cheapest = table.cheapest();
    writeln!(
        out,
        "\n가장 저렴한 방식: {} ({})",
        cheapest.system.system_type,
        crate::format::format_currency(cheapest.yearly_cost, currency_symbol)
    )?;
    Ok(())
}

/// 표준 출력에 표를 출력한다.
pub fn print_table(table: &CostTable, currency_symbol: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_table(&mut lock, table, currency_symbol)?;
    lock.flush()
}
