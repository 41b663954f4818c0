//! JSON-рендер отчёта: массив объектов с ключами в порядке колонок,
//! отступ 2 пробела.

use anyhow::Result;
use serde_json::Value;

use super::Report;

pub fn render_json(report: &Report) -> Result<String> {
    let objects: Vec<Value> = report
        .row_objects()
        .into_iter()
        .map(Value::Object)
        .collect();
    Ok(serde_json::to_string_pretty(&objects)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_produce_empty_array() {
        let report = Report {
            title: "User Report".to_string(),
            headers: vec!["Name".to_string()],
            rows: vec![],
        };
        assert_eq!(render_json(&report).unwrap(), "[]");
    }

    #[test]
    fn test_keys_follow_column_order() {
        let report = Report {
            title: "User Report".to_string(),
            headers: vec!["Name".to_string(), "Email".to_string(), "Role".to_string()],
            rows: vec![vec![
                "John Doe".to_string(),
                "john@example.com".to_string(),
                "admin".to_string(),
            ]],
        };

        let json = render_json(&report).unwrap();
        let name_pos = json.find("\"Name\"").unwrap();
        let email_pos = json.find("\"Email\"").unwrap();
        let role_pos = json.find("\"Role\"").unwrap();
        assert!(name_pos < email_pos && email_pos < role_pos);

        // two-space indent
        assert!(json.contains("\n  {"));
        assert!(json.contains("\n    \"Name\": \"John Doe\""));
    }
}
