//! Raw record normalization
//!
//! All "what counts as true / what counts as zero" decisions for backend
//! payloads live here.

use menu_shared::constants::ROOT_PARENT_SENTINEL;

use crate::domain::{MenuRecord, RawMenuRecord, RawScalar};

/// Convert one raw record into its canonical form. `parent_path` is empty for
/// root records.
pub fn normalize(raw: &RawMenuRecord, parent_path: &str) -> MenuRecord {
    MenuRecord {
        id: raw.id.clone(),
        parent_id: normalize_parent(raw.parent_id.as_deref()),
        name: raw.display_name.clone().unwrap_or_default(),
        priority: parse_integer(raw.priority.as_ref()),
        menu_number: parse_integer(raw.menu_number.as_ref()),
        is_action: parse_flag(raw.is_action.as_ref()),
        path: materialize_path(parent_path, &raw.id),
    }
}

/// `""` and the `"home"` sentinel both mean "no parent".
pub fn normalize_parent(parent_id: Option<&str>) -> Option<String> {
    parent_id
        .filter(|p| !is_root_parent(p))
        .map(str::to_string)
}

pub fn is_root_parent(parent_id: &str) -> bool {
    parent_id.is_empty() || parent_id == ROOT_PARENT_SENTINEL
}

pub fn materialize_path(parent_path: &str, id: &str) -> String {
    if parent_path.is_empty() {
        format!("/{}", id)
    } else {
        format!("{}/{}", parent_path, id)
    }
}

/// True only for the string `"true"` or the boolean `true`.
pub fn parse_flag(value: Option<&RawScalar>) -> bool {
    match value {
        Some(RawScalar::Bool(b)) => *b,
        Some(RawScalar::Text(s)) => s == "true",
        Some(RawScalar::Number(_)) | None => false,
    }
}

/// Base-10 integer, 0 when absent or without leading digits. Strings are read
/// up to the first non-digit (`"2.5"` is 2, `"12px"` is 12); fractional JSON
/// numbers are truncated toward zero.
pub fn parse_integer(value: Option<&RawScalar>) -> i64 {
    match value {
        Some(RawScalar::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(RawScalar::Text(s)) => parse_leading_integer(s),
        Some(RawScalar::Bool(_)) | None => 0,
    }
}

/// Optional sign followed by the leading run of ASCII digits.
fn parse_leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }

    let magnitude = rest[..digits]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag(Some(&RawScalar::Bool(true))));
        assert!(parse_flag(Some(&RawScalar::from("true"))));
        assert!(!parse_flag(Some(&RawScalar::from("TRUE"))));
        assert!(!parse_flag(Some(&RawScalar::from("false"))));
        assert!(!parse_flag(Some(&RawScalar::from("1"))));
        assert!(!parse_flag(Some(&RawScalar::from(1))));
        assert!(!parse_flag(Some(&RawScalar::Bool(false))));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_integer_parsing_defaults_to_zero() {
        assert_eq!(parse_integer(Some(&RawScalar::from("12"))), 12);
        assert_eq!(parse_integer(Some(&RawScalar::from(" 7 "))), 7);
        assert_eq!(parse_integer(Some(&RawScalar::from("-3"))), -3);
        assert_eq!(parse_integer(Some(&RawScalar::from(42))), 42);
        assert_eq!(parse_integer(Some(&RawScalar::Number(serde_json::Number::from_f64(2.9).unwrap()))), 2);
        assert_eq!(parse_integer(Some(&RawScalar::from(""))), 0);
        assert_eq!(parse_integer(Some(&RawScalar::from("abc"))), 0);
        assert_eq!(parse_integer(Some(&RawScalar::from("2.5"))), 2);
        assert_eq!(parse_integer(Some(&RawScalar::Bool(true))), 0);
        assert_eq!(parse_integer(None), 0);
    }

    #[test]
    fn test_integer_parsing_reads_leading_digits() {
        assert_eq!(parse_integer(Some(&RawScalar::from("12px"))), 12);
        assert_eq!(parse_integer(Some(&RawScalar::from("+3"))), 3);
        assert_eq!(parse_integer(Some(&RawScalar::from("3e2"))), 3);
        assert_eq!(parse_integer(Some(&RawScalar::from("  -42 items"))), -42);
        assert_eq!(parse_integer(Some(&RawScalar::from("-"))), 0);
        assert_eq!(parse_integer(Some(&RawScalar::from("px12"))), 0);
        // String and JSON forms of the same value agree
        assert_eq!(
            parse_integer(Some(&RawScalar::from("2.9"))),
            parse_integer(Some(&RawScalar::Number(serde_json::Number::from_f64(2.9).unwrap())))
        );
    }

    #[test]
    fn test_parent_sentinels() {
        assert_eq!(normalize_parent(None), None);
        assert_eq!(normalize_parent(Some("")), None);
        assert_eq!(normalize_parent(Some("home")), None);
        assert_eq!(normalize_parent(Some("settings")), Some("settings".to_string()));
    }

    #[test]
    fn test_normalize_record() {
        let raw = RawMenuRecord::new("vm")
            .parent("workloads")
            .named("Virtual Machines")
            .priority("3")
            .menu_number(310)
            .action("true");

        let record = normalize(&raw, "/workloads");
        assert_eq!(record.id, "vm");
        assert_eq!(record.parent_id.as_deref(), Some("workloads"));
        assert_eq!(record.name, "Virtual Machines");
        assert_eq!(record.priority, 3);
        assert_eq!(record.menu_number, 310);
        assert!(record.is_action);
        assert_eq!(record.path, "/workloads/vm");
    }

    #[test]
    fn test_root_path() {
        let record = normalize(&RawMenuRecord::new("a"), "");
        assert_eq!(record.path, "/a");
        assert!(record.is_root());
        assert_eq!(record.name, "");
        assert_eq!(record.priority, 0);
        assert_eq!(record.menu_number, 0);
        assert!(!record.is_action);
    }
}
