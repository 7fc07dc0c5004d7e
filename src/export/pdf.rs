use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use rust_decimal::Decimal;

use crate::model::employee::Employee;
use crate::pay::PayBreakdown;

/// Everything that goes onto the one-page payslip.
pub struct PayslipDocument<'a> {
    pub employee: &'a Employee,
    pub month: &'a str,
    pub total_days: i32,
    pub days_present: i32,
    pub overtime_hours: Decimal,
    pub bonus: Decimal,
    pub breakdown: &'a PayBreakdown,
}

// A4 in points
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN_X: f32 = 40.0;

struct PageWriter {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
}

impl PageWriter {
    fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let page_id = Ref::new(5);
        let content_id = Ref::new(6);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        {
            let mut page = pdf.page(page_id);
            page.parent(pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), font_id);
            fonts.pair(Name(b"F2"), bold_font_id);
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
        }
    }

    fn draw_text(content: &mut Content, font: &[u8], size: f32, x: f32, y: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn finish(mut self, content: Content) -> Vec<u8> {
        self.pdf.stream(self.content_id, &content.finish());

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(1);
        pages.kids([self.page_id]);
        drop(pages);

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf.finish()
    }
}

/// Renders the fixed one-page payslip layout and returns the PDF bytes.
pub fn render_payslip(doc: &PayslipDocument) -> Vec<u8> {
    let writer = PageWriter::new();
    let mut content = Content::new();

    PageWriter::draw_text(&mut content, b"F2", 16.0, MARGIN_X, PAGE_H - 60.0, "Payslip");

    let emp = doc.employee;
    let designation = emp.designation.as_deref().unwrap_or("");

    PageWriter::draw_text(
        &mut content,
        b"F1",
        11.0,
        MARGIN_X,
        PAGE_H - 90.0,
        &format!("Employee: {} (ID: {})", emp.name, emp.id),
    );
    PageWriter::draw_text(
        &mut content,
        b"F1",
        11.0,
        MARGIN_X,
        PAGE_H - 110.0,
        &format!("Designation: {designation}"),
    );
    PageWriter::draw_text(
        &mut content,
        b"F1",
        11.0,
        MARGIN_X,
        PAGE_H - 130.0,
        &format!("Month: {}", doc.month),
    );

    let b = doc.breakdown;
    let mut y = PAGE_H - 170.0;
    let mut line = |content: &mut Content, step: f32, text: String| {
        PageWriter::draw_text(content, b"F1", 11.0, MARGIN_X, y, &text);
        y -= step;
    };

    line(&mut content, 20.0, format!("Basic/Salary: {:.2}", emp.salary));
    line(
        &mut content,
        20.0,
        format!("Days Present: {}/{}", doc.days_present, doc.total_days),
    );
    line(
        &mut content,
        20.0,
        format!("Overtime Hours: {}", doc.overtime_hours),
    );
    line(&mut content, 30.0, format!("Bonus: {:.2}", doc.bonus));
    line(&mut content, 20.0, format!("Gross Pay: {:.2}", b.gross));
    line(
        &mut content,
        20.0,
        format!("Provident Fund (12%): {:.2}", b.pf),
    );
    line(&mut content, 20.0, format!("Tax (10%): {:.2}", b.tax));
    line(
        &mut content,
        25.0,
        format!("Total Deductions: {:.2}", b.deductions),
    );

    PageWriter::draw_text(
        &mut content,
        b"F2",
        12.0,
        MARGIN_X,
        y,
        &format!("Net Pay: {:.2}", b.net),
    );

    writer.finish(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_employee() -> Employee {
        Employee {
            id: 3,
            name: "Jane Roe".to_string(),
            email: Some("jane@company.com".to_string()),
            designation: Some("Clerk".to_string()),
            salary: dec("3000"),
            bank_account: None,
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    fn sample_breakdown() -> PayBreakdown {
        PayBreakdown {
            gross: dec("3000.00"),
            pf: dec("360.00"),
            tax: dec("300.00"),
            deductions: dec("660.00"),
            net: dec("2340.00"),
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_renders_valid_pdf_header() {
        let employee = sample_employee();
        let breakdown = sample_breakdown();
        let bytes = render_payslip(&PayslipDocument {
            employee: &employee,
            month: "2025-09",
            total_days: 30,
            days_present: 30,
            overtime_hours: dec("0"),
            bonus: dec("0"),
            breakdown: &breakdown,
        });

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"%%EOF"));
    }

    #[test]
    fn test_payslip_lines_appear_in_content_stream() {
        // pdf-writer leaves the content stream uncompressed, so the drawn
        // strings are visible in the raw bytes.
        let employee = sample_employee();
        let breakdown = sample_breakdown();
        let bytes = render_payslip(&PayslipDocument {
            employee: &employee,
            month: "2025-09",
            total_days: 30,
            days_present: 26,
            overtime_hours: dec("4"),
            bonus: dec("150"),
            breakdown: &breakdown,
        });

        assert!(contains(&bytes, b"Payslip"));
        assert!(contains(&bytes, b"Employee: Jane Roe (ID: 3)"));
        assert!(contains(&bytes, b"Month: 2025-09"));
        assert!(contains(&bytes, b"Days Present: 26/30"));
        assert!(contains(&bytes, b"Net Pay: 2340.00"));
    }
}
