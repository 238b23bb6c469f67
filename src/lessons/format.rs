//! Output formatting for lesson transcripts.
//!
//! Result sets are rendered as ASCII tables (like the sqlite3 CLI in table
//! mode); single mapped rows as compact JSON objects.

use crate::models::{ResultSet, RowMap};
use serde_json::Value as JsonValue;
use unicode_width::UnicodeWidthStr;

pub fn format_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(arr) => serde_json::to_string(arr).unwrap_or_default(),
        JsonValue::Object(obj) => serde_json::to_string(obj).unwrap_or_default(),
    }
}

/// Render a mapped row as a one-line JSON object.
pub fn format_row(row: &RowMap) -> String {
    serde_json::to_string(row).unwrap_or_default()
}

pub fn format_as_table(set: &ResultSet) -> String {
    if set.columns.is_empty() {
        return "Empty set".to_string();
    }

    let mut widths: Vec<usize> = set.columns.iter().map(|c| c.width()).collect();
    for row in &set.rows {
        for (i, col) in set.columns.iter().enumerate() {
            if let Some(value) = row.get(col) {
                widths[i] = widths[i].max(format_value(value).width());
            }
        }
    }

    let mut output = String::new();
    let separator: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+\n";

    output.push_str(&separator);
    let header: String = set
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| format!("| {} ", pad(col, *w, Align::Center)))
        .collect::<String>()
        + "|\n";
    output.push_str(&header);
    output.push_str(&separator);

    for row in &set.rows {
        let row_str: String = set
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| {
                let value = row.get(col).cloned().unwrap_or(JsonValue::Null);
                let formatted = format_value(&value);
                let align = if matches!(value, JsonValue::Number(_)) {
                    Align::Right
                } else {
                    Align::Left
                };
                format!("| {} ", pad(&formatted, *w, align))
            })
            .collect::<String>()
            + "|\n";
        output.push_str(&row_str);
    }

    output.push_str(&separator);

    let row_text = if set.row_count() == 1 { "row" } else { "rows" };
    output.push_str(&format!("{} {} in set\n", set.row_count(), row_text));

    output
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

// std's `{:<width$}` counts chars, not display columns
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artists() -> ResultSet {
        let rows = [json!({"ArtistId": 1, "Name": "AC/DC"}), json!({"ArtistId": 2, "Name": "Accept"})]
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect();
        ResultSet {
            columns: vec!["ArtistId".to_string(), "Name".to_string()],
            rows,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&JsonValue::Null), "NULL");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&json!("x")), "x");
    }

    #[test]
    fn test_format_as_table() {
        let table = format_as_table(&artists());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "+----------+--------+");
        assert_eq!(lines[1], "| ArtistId |  Name  |");
        assert_eq!(lines[3], "|        1 | AC/DC  |");
        assert_eq!(lines[4], "|        2 | Accept |");
        assert_eq!(lines[6], "2 rows in set");
    }

    #[test]
    fn test_format_empty_set() {
        assert_eq!(format_as_table(&ResultSet::default()), "Empty set");
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("Antônio", 9, Align::Left), "Antônio  ");
        assert_eq!(pad("日本", 6, Align::Right), "  日本");
    }

    #[test]
    fn test_format_row_is_json() {
        let row = artists().rows.remove(0);
        assert_eq!(format_row(&row), r#"{"ArtistId":1,"Name":"AC/DC"}"#);
    }
}
