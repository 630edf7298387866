use std::fmt::Write;

use crate::types::{DecayedRecord, GroupedDb};

/// Renders the grouped database as a pretty-printed JSON object: group keys
/// at two-space indent in ascending key order, one record object per line at
/// four-space indent, and a trailing newline. An empty database renders as
/// `{\n}\n`.
pub fn render_grouped(grouped: &GroupedDb) -> String {
    let mut out = String::with_capacity(1024 * 1024);
    out.push_str("{\n");

    for (i, (key, records)) in grouped.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str("  \"");
        escape_into(&mut out, key);
        out.push_str("\": [\n");

        for (j, record) in records.iter().enumerate() {
            if j > 0 {
                out.push_str(",\n");
            }
            out.push_str("    ");
            write_record(&mut out, record);
        }
        out.push_str("\n  ]");
    }

    if !grouped.is_empty() {
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn write_record(out: &mut String, record: &DecayedRecord) {
    out.push('{');
    for (k, (name, value)) in record.fields().iter().enumerate() {
        if k > 0 {
            out.push_str(", ");
        }
        out.push('"');
        escape_into(out, name);
        out.push_str("\": \"");
        escape_into(out, value);
        out.push('"');
    }
    out.push('}');
}

/// Standard JSON string escaping: short forms for the common escapes,
/// `\u00xx` for remaining control characters, everything else verbatim.
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupedDb;

    fn record(name: &str, id: &str) -> DecayedRecord {
        DecayedRecord {
            object_name: name.to_string(),
            object_id: id.to_string(),
            norad_cat_id: "1".to_string(),
            object_type: "PAY".to_string(),
            launch_date: "1960-01-01".to_string(),
            launch_site: "AFETR".to_string(),
            decay_date: "1961-01-01".to_string(),
        }
    }

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        escape_into(&mut out, s);
        out
    }

    #[test]
    fn empty_database_renders_as_bare_braces() {
        assert_eq!(render_grouped(&GroupedDb::new()), "{\n}\n");
    }

    #[test]
    fn single_group_layout() {
        let mut grouped = GroupedDb::new();
        grouped.insert("ECHO 1".to_string(), vec![record("ECHO 1", "1960-009A")]);

        let json = render_grouped(&grouped);
        assert_eq!(
            json,
            "{\n  \"ECHO 1\": [\n    {\"OBJECT_NAME\": \"ECHO 1\", \"OBJECT_ID\": \"1960-009A\", \
             \"NORAD_CAT_ID\": \"1\", \"OBJECT_TYPE\": \"PAY\", \"LAUNCH_DATE\": \"1960-01-01\", \
             \"LAUNCH_SITE\": \"AFETR\", \"DECAY_DATE\": \"1961-01-01\"}\n  ]\n}\n"
        );
    }

    #[test]
    fn groups_separated_by_comma_newline_in_key_order() {
        let mut grouped = GroupedDb::new();
        grouped.insert("B".to_string(), vec![record("B", "2")]);
        grouped.insert("A".to_string(), vec![record("A", "1")]);

        let json = render_grouped(&grouped);
        let a = json.find("\"A\": [").expect("A group");
        let b = json.find("\"B\": [").expect("B group");
        assert!(a < b);
        assert!(json.contains("\n  ],\n  \"B\": [\n"));
    }

    #[test]
    fn records_within_group_are_one_per_line() {
        let mut grouped = GroupedDb::new();
        grouped.insert(
            "KOSMOS".to_string(),
            vec![record("KOSMOS", "1"), record("KOSMOS", "2")],
        );

        let json = render_grouped(&grouped);
        assert!(json.contains("\"1961-01-01\"},\n    {\"OBJECT_NAME\""));
    }

    #[test]
    fn escapes_quote_tab_and_backslash() {
        assert_eq!(escaped("A\tB\"C"), "A\\tB\\\"C");
        assert_eq!(escaped("a\\b"), "a\\\\b");
        assert_eq!(escaped("\n\r\u{0008}\u{000c}"), "\\n\\r\\b\\f");
    }

    #[test]
    fn control_characters_use_lowercase_hex() {
        assert_eq!(escaped("\u{0001}\u{001f}"), "\\u0001\\u001f");
    }

    #[test]
    fn non_ascii_passes_through_unescaped() {
        assert_eq!(escaped("MÉTÉOR 衛星"), "MÉTÉOR 衛星");
    }

    #[test]
    fn output_is_valid_json() {
        let mut grouped = GroupedDb::new();
        grouped.insert(
            "She said \"hi\"".to_string(),
            vec![record("She said \"hi\"", "x\ty")],
        );
        let json = render_grouped(&grouped);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(
            parsed["She said \"hi\""][0]["OBJECT_ID"],
            serde_json::json!("x\ty")
        );
    }
}
