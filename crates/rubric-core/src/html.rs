//! HTML rendering of the comparison table
//!
//! Tooltips go into `data-tippy-content` attributes; their content is itself
//! HTML, so it is escaped twice: once as text, once as an attribute value.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::table::{Cell, TableHeader, TableRow, Tooltip};

/// Tooltip as HTML: bold heading, one line per factor
pub fn tooltip_html(tooltip: &Tooltip) -> String {
    let mut html = format!("<strong>{}</strong><br />", encode_text(&tooltip.heading));
    for line in &tooltip.lines {
        let _ = write!(html, "{} <br />", encode_text(line));
    }
    html
}

fn push_element(
    out: &mut String,
    element: &str,
    content: &str,
    colspan: usize,
    scope: Option<&str>,
    tip: Option<&str>,
) {
    let _ = write!(out, "<{}", element);
    if colspan > 0 {
        let _ = write!(out, " colspan=\"{}\"", colspan);
    }
    if let Some(scope) = scope {
        let _ = write!(out, " scope=\"{}\"", scope);
    }
    if let Some(tip) = tip.filter(|t| !t.is_empty()) {
        let _ = write!(
            out,
            " data-tippy-content=\"{}\"",
            encode_double_quoted_attribute(tip)
        );
    }
    let _ = write!(out, ">{}</{}>", encode_text(content), element);
}

fn render_header(out: &mut String, header: &TableHeader) {
    out.push_str("  <thead>\n    <tr>");
    push_element(out, "th", "", 0, None, None);
    for group in &header.groups {
        push_element(out, "th", &group.label, group.span, Some("col"), None);
    }
    out.push_str("</tr>\n    <tr>");
    push_element(out, "th", "", 0, None, None);
    for column in &header.columns {
        push_element(out, "th", &column.label, 0, Some("col"), None);
    }
    out.push_str("</tr>\n  </thead>\n");
}

fn push_cell(out: &mut String, cell: Option<&Cell>) {
    match cell {
        Some(cell) => push_element(out, "td", &cell.text, 0, None, Some(&cell.annotation)),
        None => push_element(out, "td", "", 0, None, None),
    }
}

fn render_row(out: &mut String, header: &TableHeader, row: &TableRow, pad_rows: bool) {
    out.push_str("    <tr>");
    push_element(
        out,
        "th",
        &row.label,
        0,
        Some("col"),
        Some(&tooltip_html(&row.tooltip)),
    );
    if pad_rows {
        for column in &header.columns {
            let cell = row
                .cells
                .iter()
                .find(|c| c.factor == column.factor && c.subfactor == column.subfactor);
            push_cell(out, cell);
        }
    } else {
        for cell in &row.cells {
            push_cell(out, Some(cell));
        }
    }
    out.push_str("</tr>\n");
}

/// Render a complete `<table>` element.
///
/// With `pad_rows`, every body row gets one cell per header column, empty
/// where the entity has no cell; otherwise rows keep their own width.
pub fn render_table(header: &TableHeader, rows: &[TableRow], pad_rows: bool) -> String {
    let mut out = String::from("<table>\n");
    render_header(&mut out, header);
    out.push_str("  <tbody>\n");
    for row in rows {
        render_row(&mut out, header, row, pad_rows);
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}
