use crate::layout::global_context::PlannerContext;
use crate::shared::export::{download_bytes, download_text};
use crate::shared::icons::icon;
use chrono::{Local, Utc};
use contracts::shared::export::{results_to_csv, results_to_pdf, PdfReport, CSV_MIME, PDF_MIME};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ExportPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlannerContext>()
        .expect("PlannerContext context not found");

    let report_failure = move |kind: &str, e: String| {
        log::error!("{} export failed: {}", kind, e);
        ctx.error.set(Some(format!("{} export failed: {}", kind, e)));
    };

    let on_csv = move |_| {
        let file_name = ctx
            .config
            .with_value(|c| c.export.file_name(Utc::now().date_naive(), "csv"));
        let Some(csv) = ctx.results.with_untracked(|r| r.as_ref().map(results_to_csv)) else {
            return;
        };

        let outcome = csv
            .map_err(|e| e.to_string())
            .and_then(|text| download_text(&text, CSV_MIME, &file_name));
        match outcome {
            Ok(()) => log::info!("exported {}", file_name),
            Err(e) => report_failure("CSV", e),
        }
    };

    let on_pdf = move |_| {
        let file_name = ctx
            .config
            .with_value(|c| c.export.file_name(Utc::now().date_naive(), "pdf"));
        let display = ctx.display();
        let Some(pdf) = ctx.results.with_untracked(|r| {
            r.as_ref().map(|results| {
                results_to_pdf(&PdfReport {
                    results,
                    generated_on: Local::now().date_naive(),
                    display: &display,
                })
            })
        }) else {
            return;
        };

        let outcome = pdf
            .map_err(|e| e.to_string())
            .and_then(|bytes| download_bytes(&bytes, PDF_MIME, &file_name));
        match outcome {
            Ok(()) => log::info!("exported {}", file_name),
            Err(e) => report_failure("PDF", e),
        }
    };

    view! {
        <div class="card planner-panel">
            <h2 class="planner-panel__title">
                {icon("download")}
                " Export Results"
            </h2>
            <Flex gap=FlexGap::Medium>
                <Button appearance=ButtonAppearance::Secondary on_click=on_csv>
                    {icon("file-csv")}
                    " Export CSV"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_pdf>
                    {icon("file-pdf")}
                    " Export PDF"
                </Button>
            </Flex>
        </div>
    }
}
