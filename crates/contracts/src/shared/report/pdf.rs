//! PDF-рендер отчёта: страница A4 с заголовком, строкой
//! "Generated on", и таблицей c залитой шапкой. Длинные отчёты
//! переносятся на следующие страницы с повтором шапки.
//!
//! Писатель собирает документ PDF 1.4 руками: каталог, дерево
//! страниц, два шрифта Helvetica и по одному потоку контента на
//! страницу, затем таблицу xref со смещениями.

use super::Report;

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN: f64 = 40.0;

const TITLE_Y: f64 = 782.0;
const META_Y: f64 = 760.0;
const TABLE_TOP: f64 = 730.0;
const ROW_HEIGHT: f64 = 18.0;

const TITLE_SIZE: f64 = 20.0;
const BODY_SIZE: f64 = 10.0;

pub fn render_pdf(report: &Report, generated_on: &str) -> Vec<u8> {
    let rows_per_page = ((TABLE_TOP - MARGIN) / ROW_HEIGHT) as usize - 1;

    let chunks: Vec<&[Vec<String>]> = if report.rows.is_empty() {
        vec![&[]]
    } else {
        report.rows.chunks(rows_per_page).collect()
    };

    let streams: Vec<String> = chunks
        .iter()
        .map(|chunk| page_stream(report, generated_on, chunk))
        .collect();

    assemble(&streams)
}

// ----------------------------------------------------------------------------
// Page content
// ----------------------------------------------------------------------------

fn page_stream(report: &Report, generated_on: &str, rows: &[Vec<String>]) -> String {
    let mut ops = String::new();

    text(&mut ops, "F2", TITLE_SIZE, MARGIN, TITLE_Y, &report.title);
    text(
        &mut ops,
        "F1",
        BODY_SIZE,
        MARGIN,
        META_Y,
        &format!("Generated on: {}", generated_on),
    );

    let column_count = report.headers.len().max(1);
    let table_width = PAGE_WIDTH - 2.0 * MARGIN;
    let column_width = table_width / column_count as f64;

    // Шапка: заливка и белый полужирный текст
    let header_top = TABLE_TOP;
    fill_rect(
        &mut ops,
        (0.231, 0.510, 0.965),
        MARGIN,
        header_top - ROW_HEIGHT,
        table_width,
        ROW_HEIGHT,
    );
    ops.push_str("1 1 1 rg\n");
    row_text(&mut ops, "F2", &report.headers, header_top, column_width);
    ops.push_str("0 0 0 rg\n");

    for (i, row) in rows.iter().enumerate() {
        let row_top = header_top - ROW_HEIGHT * (i + 1) as f64;
        if i % 2 == 1 {
            fill_rect(
                &mut ops,
                (0.976, 0.980, 0.984),
                MARGIN,
                row_top - ROW_HEIGHT,
                table_width,
                ROW_HEIGHT,
            );
            ops.push_str("0 0 0 rg\n");
        }
        row_text(&mut ops, "F1", row, row_top, column_width);
    }

    ops
}

fn row_text(ops: &mut String, font: &str, cells: &[String], row_top: f64, column_width: f64) {
    let max_chars = ((column_width - 8.0) / (BODY_SIZE * 0.5)) as usize;
    for (col, cell) in cells.iter().enumerate() {
        let x = MARGIN + column_width * col as f64 + 4.0;
        let y = row_top - 13.0;
        text(ops, font, BODY_SIZE, x, y, &truncate(cell, max_chars));
    }
}

fn text(ops: &mut String, font: &str, size: f64, x: f64, y: f64, value: &str) {
    ops.push_str(&format!(
        "BT /{} {:.0} Tf {:.1} {:.1} Td ({}) Tj ET\n",
        font,
        size,
        x,
        y,
        escape_pdf_string(value)
    ));
}

fn fill_rect(ops: &mut String, color: (f64, f64, f64), x: f64, y: f64, w: f64, h: f64) {
    ops.push_str(&format!(
        "{:.3} {:.3} {:.3} rg {:.1} {:.1} {:.1} {:.1} re f\n",
        color.0, color.1, color.2, x, y, w, h
    ));
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Строковый литерал PDF: экранируем скобки и обратный слэш,
/// не-ASCII заменяем на '?', поскольку шрифт объявлен без
/// таблицы кодировки
fn escape_pdf_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            c if c.is_ascii_graphic() || c == ' ' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

// ----------------------------------------------------------------------------
// Document assembly
// ----------------------------------------------------------------------------

fn assemble(streams: &[String]) -> Vec<u8> {
    let page_count = streams.len();

    // 1 каталог, 2 дерево страниц, 3/4 шрифты, далее пары
    // (страница, контент)
    let object_count = 4 + page_count * 2;
    let page_object_id = |page: usize| 5 + page * 2;
    let content_object_id = |page: usize| 6 + page * 2;

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", page_object_id(i)))
        .collect();

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
    ];

    for (page, stream) in streams.iter().enumerate() {
        objects.push(format!(
            concat!(
                "<< /Type /Page /Parent 2 0 R ",
                "/MediaBox [0 0 {:.0} {:.0}] ",
                "/Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> ",
                "/Contents {} 0 R >>"
            ),
            PAGE_WIDTH,
            PAGE_HEIGHT,
            content_object_id(page),
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            stream.len(),
            stream
        ));
    }
    debug_assert_eq!(objects.len(), object_count);

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(object_count);
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", object_count + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        object_count + 1,
        xref_offset
    ));

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(row_count: usize) -> Report {
        Report {
            title: "Sales Report".to_string(),
            headers: vec!["Product".to_string(), "Total".to_string()],
            rows: (0..row_count)
                .map(|i| vec![format!("Product {}", i), "$9.99".to_string()])
                .collect(),
        }
    }

    fn rendered(row_count: usize) -> String {
        String::from_utf8(render_pdf(&report(row_count), "2024-01-20")).unwrap()
    }

    #[test]
    fn test_document_framing() {
        let pdf = rendered(3);
        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.trim_end().ends_with("%%EOF"));
        assert!(pdf.contains("(Sales Report)"));
        assert!(pdf.contains("(Generated on: 2024-01-20)"));
    }

    #[test]
    fn test_empty_report_is_single_valid_page() {
        let pdf = rendered(0);
        assert_eq!(pdf.matches("/Type /Page ").count(), 1);
        assert!(pdf.contains("(Product)"));
        assert!(pdf.contains("/Count 1"));
    }

    #[test]
    fn test_long_report_flows_onto_more_pages() {
        let pdf = rendered(100);
        let pages = pdf.matches("/Type /Page ").count();
        assert!(pages >= 2, "expected continuation pages, got {}", pages);
        // шапка повторяется на каждой странице
        assert_eq!(pdf.matches("(Product) Tj").count(), pages);
    }

    #[test]
    fn test_string_escaping() {
        let mut rep = report(1);
        rep.rows[0][0] = "A (very) special \\ product — yes".to_string();
        let pdf = String::from_utf8(render_pdf(&rep, "2024-01-20")).unwrap();
        assert!(pdf.contains("A \\(very\\) special \\\\ product ? yes"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = rendered(2);
        let xref_start = pdf.find("xref\n").unwrap();
        for line in pdf[xref_start..].lines().skip(3) {
            let Some(offset) = line.split(' ').next().and_then(|o| o.parse::<usize>().ok())
            else {
                break;
            };
            if line.ends_with("n ") {
                let at = &pdf[offset..offset + 12.min(pdf.len() - offset)];
                assert!(at.contains(" 0 obj"), "offset {} not an object: {:?}", offset, at);
            }
        }
    }
}
