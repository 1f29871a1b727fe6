//! File exports of a calculated plan

pub mod csv;
pub mod pdf;

use thiserror::Error;

pub use self::csv::{results_to_csv, CSV_HEADERS};
pub use self::pdf::{layout_report, render_pdf, results_to_pdf, PdfLayout, PdfReport};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no data to export")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}

/// MIME types handed to the browser download
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";
pub const PDF_MIME: &str = "application/pdf";
