//! PDF report: title, summary totals and a product table on A4 landscape.
//!
//! Built in two steps. [`layout_report`] places text lines on pages (pure,
//! millimetre coordinates from the top-left corner); [`render_pdf`] encodes
//! the layout with `lopdf` using the standard Helvetica fonts.

use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::shared::config::DisplaySettings;
use crate::usecases::u501_calculate_targets::{ResultSet, Totals};

use super::ExportError;

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const MM_TO_PT: f64 = 72.0 / 25.4;
const LEFT_MM: f64 = 20.0;
const BOTTOM_MARGIN_MM: f64 = 20.0;
const ROW_STEP_MM: f64 = 10.0;

const TABLE_HEADERS: [&str; 6] = [
    "Product",
    "Revenue Goal",
    "Units",
    "Target Units",
    "Leads",
    "Double Leads",
];
const COLUMN_WIDTHS_MM: [f64; 6] = [30.0, 35.0, 25.0, 30.0, 25.0, 30.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
}

impl FontStyle {
    fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Normal => "F1",
            FontStyle::Bold => "F2",
        }
    }
}

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x_mm: f64,
    /// Baseline, measured from the top edge
    pub y_mm: f64,
    pub size: u8,
    pub style: FontStyle,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfLayout {
    pub pages: Vec<Vec<TextItem>>,
}

impl PdfLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text of the document in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().map(|item| item.text.as_str())
    }
}

/// Everything the report shows
pub struct PdfReport<'a> {
    pub results: &'a ResultSet,
    pub generated_on: NaiveDate,
    pub display: &'a DisplaySettings,
}

/// Base-14 fonts only cover Latin-1; everything else is replaced
fn pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '∞' => out.push_str("Infinity"),
            '₹' => out.push_str("Rs."),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

struct PageWriter {
    pages: Vec<Vec<TextItem>>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }

    fn text(&mut self, x_mm: f64, y_mm: f64, size: u8, style: FontStyle, text: &str) {
        if let Some(page) = self.pages.last_mut() {
            page.push(TextItem {
                x_mm,
                y_mm,
                size,
                style,
                text: pdf_text(text),
            });
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

pub fn layout_report(report: &PdfReport<'_>) -> PdfLayout {
    let display = report.display;
    let totals = Totals::from_rows(report.results.rows());
    let mut w = PageWriter::new();

    w.text(LEFT_MM, 30.0, 20, FontStyle::Bold, "Sales Target Planner - Results");
    w.text(
        LEFT_MM,
        40.0,
        12,
        FontStyle::Normal,
        &format!("Generated on: {}", report.generated_on.format("%d/%m/%Y")),
    );
    w.text(
        LEFT_MM,
        50.0,
        12,
        FontStyle::Normal,
        &format!(
            "Revenue Goal: {}",
            display.pdf_currency(report.results.revenue_goal)
        ),
    );

    w.text(LEFT_MM, 70.0, 14, FontStyle::Bold, "Summary");
    let summary = [
        format!("Total Revenue Goal: {}", display.pdf_currency(totals.revenue_goal)),
        format!("Total Units to Sell: {}", display.number(totals.units_to_sell)),
        format!("Total Leads Required: {}", display.number(totals.leads_required)),
        format!("Double Leads Strategy: {}", display.number(totals.double_leads)),
    ];
    for (i, line) in summary.iter().enumerate() {
        w.text(LEFT_MM, 80.0 + 10.0 * i as f64, 10, FontStyle::Normal, line);
    }

    w.text(LEFT_MM, 130.0, 14, FontStyle::Bold, "Product Details");
    let mut x = LEFT_MM;
    for (header, width) in TABLE_HEADERS.iter().zip(COLUMN_WIDTHS_MM) {
        w.text(x, 140.0, 8, FontStyle::Bold, header);
        x += width;
    }

    let mut y = 150.0;
    for row in report.results.iter() {
        if y > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
            w.new_page();
            y = 20.0;
        }

        let cells = [
            row.product.name.clone(),
            display.pdf_currency(row.revenue_goal_product),
            display.number(row.units_to_sell),
            display.number(row.target_units),
            display.number(row.leads_required),
            display.number(row.double_leads),
        ];
        let mut x = LEFT_MM;
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS_MM) {
            w.text(x, y, 8, FontStyle::Normal, cell);
            x += width;
        }
        y += ROW_STEP_MM;
    }

    PdfLayout { pages: w.pages }
}

fn to_points(mm: f64) -> i64 {
    (mm * MM_TO_PT).round() as i64
}

fn page_content(items: &[TextItem]) -> Content {
    let mut operations = Vec::with_capacity(items.len() * 5);
    for item in items {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(item.style.resource_name().as_bytes().to_vec()),
                Object::Integer(item.size as i64),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                Object::Integer(to_points(item.x_mm)),
                Object::Integer(to_points(PAGE_HEIGHT_MM - item.y_mm)),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(item.text.clone())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Encode a layout as PDF bytes
pub fn render_pdf(layout: &PdfLayout) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for items in &layout.pages {
        let content = page_content(items)
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(to_points(PAGE_WIDTH_MM)),
            Object::Integer(to_points(PAGE_HEIGHT_MM)),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}

/// Lay out and encode the report in one go
pub fn results_to_pdf(report: &PdfReport<'_>) -> Result<Vec<u8>, ExportError> {
    if report.results.is_empty() {
        return Err(ExportError::Empty);
    }
    render_pdf(&layout_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_plan::ProductId;
    use crate::usecases::u501_calculate_targets::{
        PlanSnapshot, ProductSnapshot, TargetCalculator,
    };

    fn results(count: usize) -> ResultSet {
        let share = 100.0 / count as f64;
        let products = (0..count)
            .map(|i| ProductSnapshot {
                id: ProductId::new(i as u64 + 1),
                name: format!("Product {}", i + 1),
                product_value: share,
                sales_ratio: 10.0,
                price: 1000.0,
                conversion_ratio: 10.0,
            })
            .collect();
        TargetCalculator::default().calculate(&PlanSnapshot {
            revenue_goal: 1_000_000.0,
            products,
        })
    }

    fn layout_for(results: &ResultSet) -> PdfLayout {
        let display = DisplaySettings::default();
        layout_report(&PdfReport {
            results,
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            display: &display,
        })
    }

    #[test]
    fn test_layout_header_and_summary() {
        let layout = layout_for(&results(1));
        let texts: Vec<&str> = layout.texts().collect();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(texts[0], "Sales Target Planner - Results");
        assert_eq!(texts[1], "Generated on: 18/10/2026");
        assert_eq!(texts[2], "Revenue Goal: Rs. 10,00,000");
        assert!(texts.contains(&"Total Revenue Goal: Rs. 10,00,000"));
        assert!(texts.contains(&"Total Units to Sell: 1,000"));
        assert!(texts.contains(&"Total Leads Required: 10,000"));
        assert!(texts.contains(&"Double Leads Strategy: 20,000"));
        assert!(texts.contains(&"Product 1"));
        assert!(texts.contains(&"1,100"));
    }

    #[test]
    fn test_rows_overflow_to_new_pages() {
        // rows start at 150 mm and break after 190 mm: 5 rows fit on the first page
        let layout = layout_for(&results(5));
        assert_eq!(layout.page_count(), 1);

        let layout = layout_for(&results(6));
        assert_eq!(layout.page_count(), 2);
        let second = &layout.pages[1];
        assert_eq!(second.len(), 6);
        assert_eq!(second[0].text, "Product 6");
        assert_eq!(second[0].y_mm, 20.0);

        // continuation pages hold rows from 20 mm to 190 mm
        let layout = layout_for(&results(23));
        assert_eq!(layout.page_count(), 2);
        let layout = layout_for(&results(24));
        assert_eq!(layout.page_count(), 3);
    }

    #[test]
    fn test_non_ascii_text_is_replaced() {
        assert_eq!(pdf_text("₹1,000"), "Rs.1,000");
        assert_eq!(pdf_text("∞"), "Infinity");
        assert_eq!(pdf_text("Café"), "Caf?");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let results = results(3);
        let display = DisplaySettings::default();
        let bytes = results_to_pdf(&PdfReport {
            results: &results,
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            display: &display,
        })
        .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.len() > 500);
    }
}
