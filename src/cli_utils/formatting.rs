use bigdecimal::BigDecimal;
use colored::Colorize;

use crate::budgets::db_types::BudgetRecord;
use crate::operations::db_types::{OperationRecord, OperationStatus};
use crate::utils::ordering::is_credit;

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.len();
            for row in &rows {
                if i < row.len() {
                    width = width.max(row[i].len());
                }
            }
            width
        })
        .collect();

    // Print header
    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.len()));

    // Print rows
    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

/// Format data as JSON
pub fn format_json<T: serde::Serialize>(data: &T) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(_) => "Unable to format as JSON".to_string(),
    }
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

/// Format BigDecimal with 2 decimal places
pub fn format_decimal(value: &BigDecimal) -> String {
    let scale = 2;
    let rounded = value.with_scale_round(scale, bigdecimal::RoundingMode::HalfUp);
    rounded.to_string()
}

/// Amount with 2 decimals, green for credits and red for debits
pub fn format_amount(value: &BigDecimal) -> String {
    let text = format_decimal(value);
    if is_credit(value) {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Format bool as Yes/No
pub fn format_bool(value: bool) -> String {
    if value {
        "Yes".green().to_string()
    } else {
        "No".dimmed().to_string()
    }
}

/// Format status with color
pub fn format_status(status: OperationStatus) -> String {
    match status {
        OperationStatus::Pending => "pending".yellow().to_string(),
        OperationStatus::Checked => "checked".green().to_string(),
    }
}

pub fn print_operations(operations: &[OperationRecord]) {
    let rows = operations
        .iter()
        .map(|op| {
            vec![
                op.id.to_string(),
                op.label.clone(),
                format_amount(&op.amount),
                format_status(op.status),
                format_bool(op.from_budget),
            ]
        })
        .collect();

    format_table(vec!["ID", "Label", "Amount", "Status", "From budget"], rows);
}

pub fn print_budgets(budgets: &[BudgetRecord]) {
    let rows = budgets
        .iter()
        .map(|budget| {
            vec![
                budget.id.to_string(),
                budget.label.clone(),
                format_amount(&budget.amount),
            ]
        })
        .collect();

    format_table(vec!["ID", "Label", "Amount"], rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_are_rounded_half_up_to_cents() {
        assert_eq!(format_decimal(&"12.345".parse().unwrap()), "12.35");
        assert_eq!(format_decimal(&"-3".parse().unwrap()), "-3.00");
        assert_eq!(format_decimal(&"0.1".parse().unwrap()), "0.10");
    }
}
