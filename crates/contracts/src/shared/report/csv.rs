//! CSV-рендер отчёта.
//!
//! Поле оборачивается в кавычки только если содержит запятую;
//! строки соединяются `\n`. Пустой отчёт даёт файл из одной
//! строки заголовков.

use super::Report;

pub fn render_csv(report: &Report) -> String {
    let mut lines = Vec::with_capacity(report.rows.len() + 1);
    lines.push(render_line(&report.headers));
    for row in &report.rows {
        lines.push(render_line(row));
    }
    lines.join("\n")
}

fn render_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| quote_if_needed(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_if_needed(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(headers: &[&str], rows: &[&[&str]]) -> Report {
        Report {
            title: "Test".to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|f| f.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_plain_fields() {
        let csv = render_csv(&report(
            &["Name", "Price"],
            &[&["Laptop Stand", "$49.99"], &["Coffee Mug", "$12.99"]],
        ));
        assert_eq!(csv, "Name,Price\nLaptop Stand,$49.99\nCoffee Mug,$12.99");
    }

    #[test]
    fn test_field_with_comma_is_quoted() {
        let csv = render_csv(&report(&["Name"], &[&["Headphones, wireless"]]));
        assert_eq!(csv, "Name\n\"Headphones, wireless\"");
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        let csv = render_csv(&report(&["Name", "Price"], &[]));
        assert_eq!(csv, "Name,Price");
    }

    /// Разбор без поддержки экранированных кавычек — ровно под формат рендера
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        text.lines()
            .map(|line| {
                let mut fields = Vec::new();
                let mut current = String::new();
                let mut in_quotes = false;
                for ch in line.chars() {
                    match ch {
                        '"' => in_quotes = !in_quotes,
                        ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                        _ => current.push(ch),
                    }
                }
                fields.push(current);
                fields
            })
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let original = report(
            &["Product", "Total"],
            &[
                &["Headphones, wireless", "$399.98"],
                &["Laptop Stand", "$49.99"],
            ],
        );
        let parsed = parse_csv(&render_csv(&original));

        assert_eq!(parsed[0], original.headers);
        assert_eq!(parsed[1..].to_vec(), original.rows);
    }
}
