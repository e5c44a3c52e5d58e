//! # Rendering Module
//!
//! Layout (column widths, truncation, price formatting) is computed into plain strings
//! so it can be tested without a terminal. Colors are applied only at print time.

use colored::Colorize;
use prodcat::api::{CmdMessage, DisplayProduct, MessageLevel};
use prodcat::model::{Category, DATE_FORMAT};
use prodcat::notification::{Notification, Severity};
use prodcat::validation::FieldErrors;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADERS: [&str; 7] = ["#", "ID", "Name", "Price", "Category", "Stock", "Status"];
const COLUMN_GAP: &str = "  ";
const PREVIEW_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Row { active: bool },
    Preview,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub kind: LineKind,
    pub text: String,
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_notification(notification: Option<&Notification>) {
    if let Some(n) = notification {
        match n.severity {
            Severity::Success => println!("{}", n.message.green()),
            Severity::Danger => eprintln!("{}", n.message.red().bold()),
        }
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors {
        eprintln!("  {} {}", format!("{}:", field).red(), message);
    }
}

pub fn print_product_table(rows: &[DisplayProduct], preview_chars: usize) {
    for line in product_table(rows, preview_chars) {
        match line.kind {
            LineKind::Header => println!("{}", line.text.bold()),
            LineKind::Row { active: true } => println!("{}", line.text),
            LineKind::Row { active: false } => println!("{}", line.text.dimmed()),
            LineKind::Preview => println!("{}", line.text.dimmed()),
            LineKind::Empty => println!("{}", line.text.dimmed()),
        }
    }
}

pub fn print_product_details(rows: &[DisplayProduct]) {
    for (i, dp) in rows.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let mut lines = product_details(dp).into_iter();
        if let Some(title) = lines.next() {
            println!("{}", title.bold());
        }
        for line in lines {
            println!("{}", line);
        }
    }
}

pub fn print_categories() {
    for category in Category::ALL {
        println!("{}", category);
    }
}

/// Lays out the product list as aligned text lines. A description, when present, gets
/// its own indented preview line under the row.
pub fn product_table(rows: &[DisplayProduct], preview_chars: usize) -> Vec<TableLine> {
    if rows.is_empty() {
        return vec![TableLine {
            kind: LineKind::Empty,
            text: "No products yet.".to_string(),
        }];
    }

    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|dp| {
            let p = &dp.product;
            [
                dp.position.to_string(),
                p.id.to_string(),
                p.name.clone(),
                format_price(p.price),
                p.category.to_string(),
                p.stock.to_string(),
                status_label(p.is_active).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() * 2 + 1);
    lines.push(TableLine {
        kind: LineKind::Header,
        text: join_cells(HEADERS.iter().copied(), &widths),
    });

    for (dp, row) in rows.iter().zip(&cells) {
        lines.push(TableLine {
            kind: LineKind::Row {
                active: dp.product.is_active,
            },
            text: join_cells(row.iter().map(String::as_str), &widths),
        });
        if dp.product.has_description() {
            lines.push(TableLine {
                kind: LineKind::Preview,
                text: format!(
                    "{}{}",
                    " ".repeat(PREVIEW_INDENT),
                    preview(dp.product.description.trim(), preview_chars)
                ),
            });
        }
    }

    lines
}

/// Every field of one product, title line first.
pub fn product_details(dp: &DisplayProduct) -> Vec<String> {
    let p = &dp.product;
    let description = if p.has_description() {
        p.description.trim()
    } else {
        "-"
    };
    vec![
        format!("{}. {}", dp.position, p.name),
        format!("  id:           {}", p.id),
        format!("  price:        {}", format_price(p.price)),
        format!("  category:     {}", p.category),
        format!("  release date: {}", p.release_date.format(DATE_FORMAT)),
        format!("  stock:        {}", p.stock),
        format!("  status:       {}", status_label(p.is_active)),
        format!("  description:  {}", description),
    ]
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

/// Formats an amount as Indonesian Rupiah: `.` groups thousands, `,` separates
/// cents, and cents are shown only when non-zero.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i128;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if frac == 0 {
        format!("Rp {}{}", sign, grouped)
    } else {
        format!("Rp {}{},{:02}", sign, grouped, frac)
    }
}

/// Shortens `text` to `max_width` columns, ending with `…` when something was cut.
/// Text that already fits is returned unchanged.
pub fn preview(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}
