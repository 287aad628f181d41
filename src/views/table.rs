// SPDX-License-Identifier: MIT

//! Table building blocks and per-column formatting rules.
//!
//! Cell builders return finished `<td>`/`<th>` markup with all
//! record-sourced text escaped, so the templates only have to splice
//! rows together.

/// A rendered table: fixed headers plus one row per record, in backend
/// order (the dashboard never sorts client-side).
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: Vec<Row>,
}

impl Table {
    /// Placeholder table for the loading and failed states.
    pub fn empty() -> Self {
        Self {
            headers: &[],
            rows: Vec::new(),
        }
    }
}

/// One table row: concatenated cell markup plus an optional row class
/// (used for leaderboard medal rows).
pub struct Row {
    pub class: &'static str,
    pub cells: String,
}

impl Row {
    pub fn plain(cells: String) -> Self {
        Self { class: "", cells }
    }
}

/// 1-based row number cell.
pub fn index_cell(index: usize) -> String {
    format!("<th scope=\"row\">{}</th>", index + 1)
}

/// Plain text cell.
pub fn text_cell(text: &str) -> String {
    format!("<td>{}</td>", escape(text))
}

/// Bold cell, optionally prefixed with a bootstrap-icons glyph.
pub fn strong_cell(icon: Option<&str>, text: &str) -> String {
    match icon {
        Some(icon) => format!(
            "<td><strong><i class=\"bi {} me-2\"></i>{}</strong></td>",
            icon,
            escape(text)
        ),
        None => format!("<td><strong>{}</strong></td>", escape(text)),
    }
}

/// Badge cell with a fixed background class.
pub fn badge_cell(class: &str, text: &str) -> String {
    format!(
        "<td><span class=\"badge {}\">{}</span></td>",
        class,
        escape(text)
    )
}

/// Leaderboard rank cell: medal glyphs for the podium, plain numerals
/// below it. Rank is the 1-based position in the response, nothing else.
pub fn rank_cell(rank: usize) -> String {
    let badge = match rank {
        1 => "\u{1F947}".to_string(),
        2 => "\u{1F948}".to_string(),
        3 => "\u{1F949}".to_string(),
        n => n.to_string(),
    };
    format!("<th scope=\"row\"><strong>{}</strong></th>", badge)
}

/// Row highlight class for the top three leaderboard positions.
pub fn rank_row_class(rank: usize) -> &'static str {
    match rank {
        1 => "table-warning",
        2 => "table-secondary",
        3 => "table-info",
        _ => "",
    }
}

/// Badge class for a workout difficulty label, matched case-insensitively.
/// Unknown or missing difficulties fall back to the neutral badge.
pub fn difficulty_badge(difficulty: Option<&str>) -> &'static str {
    match difficulty.map(|d| d.to_ascii_lowercase()).as_deref() {
        Some("beginner") | Some("easy") => "bg-success",
        Some("intermediate") | Some("medium") => "bg-warning",
        Some("advanced") | Some("hard") => "bg-danger",
        _ => "bg-secondary",
    }
}

/// Render an optional timestamp as a calendar date.
///
/// Missing dates display the literal `N/A`; values that parse as neither
/// RFC 3339 nor a plain `YYYY-MM-DD` are shown as-is.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return "N/A".to_string();
    };
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%-m/%-d/%Y").to_string();
    }
    raw.to_string()
}

/// Display an optional string, treating missing *and empty* values as
/// absent (matching the original dashboard's `value || fallback`).
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Minimal HTML escaping for text interpolated into cell markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("2024-03-05T10:30:00Z")), "3/5/2024");
        assert_eq!(format_date(Some("2024-11-21")), "11/21/2024");
        // Unparseable values pass through untouched
        assert_eq!(format_date(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_difficulty_badge_case_insensitive() {
        assert_eq!(difficulty_badge(Some("Advanced")), "bg-danger");
        assert_eq!(difficulty_badge(Some("BEGINNER")), "bg-success");
        assert_eq!(difficulty_badge(Some("easy")), "bg-success");
        assert_eq!(difficulty_badge(Some("Medium")), "bg-warning");
        assert_eq!(difficulty_badge(Some("intermediate")), "bg-warning");
        assert_eq!(difficulty_badge(Some("hard")), "bg-danger");
    }

    #[test]
    fn test_difficulty_badge_fallback() {
        assert_eq!(difficulty_badge(Some("unknown")), "bg-secondary");
        assert_eq!(difficulty_badge(None), "bg-secondary");
        assert_eq!(difficulty_badge(Some("")), "bg-secondary");
    }

    #[test]
    fn test_rank_cells() {
        assert!(rank_cell(1).contains("\u{1F947}"));
        assert!(rank_cell(2).contains("\u{1F948}"));
        assert!(rank_cell(3).contains("\u{1F949}"));
        assert!(rank_cell(4).contains(">4<"));
        assert_eq!(rank_row_class(1), "table-warning");
        assert_eq!(rank_row_class(2), "table-secondary");
        assert_eq!(rank_row_class(3), "table-info");
        assert_eq!(rank_row_class(9), "");
    }

    #[test]
    fn test_text_or_treats_empty_as_missing() {
        assert_eq!(text_or(Some("Team DC"), "No Team"), "Team DC");
        assert_eq!(text_or(Some(""), "No Team"), "No Team");
        assert_eq!(text_or(None, "No Team"), "No Team");
    }

    #[test]
    fn test_cells_escape_record_text() {
        let cell = text_cell("<script>alert(1)</script>");
        assert!(!cell.contains("<script>"));
        assert!(cell.contains("&lt;script&gt;"));

        let cell = strong_cell(Some("bi-person-circle"), "Tony & Pepper");
        assert!(cell.contains("Tony &amp; Pepper"));
        assert!(cell.contains("bi bi-person-circle"));
    }

    #[test]
    fn test_index_cell_is_one_based() {
        assert_eq!(index_cell(0), "<th scope=\"row\">1</th>");
        assert_eq!(index_cell(3), "<th scope=\"row\">4</th>");
    }
}
