//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report types.

/// Width of report rules and headers
pub const REPORT_WIDTH: usize = 60;

/// Width of text bar charts
pub const BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Horizontal bar chart, one labeled bar per row scaled to the largest value
pub fn bar_chart(rows: &[(String, f64, String)], width: usize) -> String {
    let max_value = rows.iter().map(|r| r.1).fold(0.0, f64::max);
    let label_width = rows
        .iter()
        .map(|r| r.0.chars().count())
        .max()
        .unwrap_or(0)
        .min(20);

    let mut output = String::new();
    for (label, value, caption) in rows {
        output.push_str(&format!(
            "{}  {}  {}\n",
            left_align(&truncate(label, label_width), label_width),
            format_bar(*value, max_value, width),
            caption
        ));
    }
    output
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Report title block: rule, centered title, rule
pub fn title_block(title: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        double_separator(REPORT_WIDTH),
        format_header(title, REPORT_WIDTH),
        double_separator(REPORT_WIDTH)
    )
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
