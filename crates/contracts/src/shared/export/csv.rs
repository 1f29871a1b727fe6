use crate::shared::number_format::format_raw_number;
use crate::usecases::u501_calculate_targets::ResultSet;

use super::ExportError;

pub const CSV_HEADERS: [&str; 10] = [
    "Product",
    "Product Value (%)",
    "Sales Ratio (%)",
    "Price",
    "Conversion Ratio (%)",
    "Revenue Goal",
    "Units to Sell",
    "Target Units",
    "Leads Required",
    "Double Leads",
];

/// Results as CSV text: header line, then one line per row, `\n`-separated,
/// without a trailing newline. Numbers are written unformatted.
pub fn results_to_csv(results: &ResultSet) -> Result<String, ExportError> {
    if results.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in results.iter() {
        let p = &row.product;
        writer.write_record([
            p.name.clone(),
            format_raw_number(p.product_value),
            format_raw_number(p.sales_ratio),
            format_raw_number(p.price),
            format_raw_number(p.conversion_ratio),
            format_raw_number(row.revenue_goal_product),
            format_raw_number(row.units_to_sell),
            format_raw_number(row.target_units),
            format_raw_number(row.leads_required),
            format_raw_number(row.double_leads),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    let text = String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))?;

    Ok(text.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_plan::ProductId;
    use crate::usecases::u501_calculate_targets::{
        PlanSnapshot, ProductSnapshot, TargetCalculator,
    };

    fn snapshot(products: Vec<ProductSnapshot>) -> PlanSnapshot {
        PlanSnapshot {
            revenue_goal: 1_000_000.0,
            products,
        }
    }

    fn product(name: &str, value: f64, price: f64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(1),
            name: name.to_string(),
            product_value: value,
            sales_ratio: 35.0,
            price,
            conversion_ratio: 50.0,
        }
    }

    #[test]
    fn test_csv_layout() {
        // 1.5 keeps every value exact in binary
        let results = TargetCalculator::new(1.5, 2.0).calculate(&snapshot(vec![
            product("Product A", 40.0, 1000.0),
            product("Product B", 60.0, 500.0),
        ]));
        let csv = results_to_csv(&results).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Product,Product Value (%),Sales Ratio (%),Price,Conversion Ratio (%),Revenue Goal,Units to Sell,Target Units,Leads Required,Double Leads"
        );
        assert_eq!(lines[1], "Product A,40,35,1000,50,400000,400,600,800,1600");
        assert_eq!(lines[2], "Product B,60,35,500,50,600000,1200,1800,2400,4800");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_non_finite_and_quoting() {
        let results = TargetCalculator::default().calculate(&snapshot(vec![product(
            "Widget, large",
            100.0,
            0.0,
        )]));
        let csv = results_to_csv(&results).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"Widget, large\",100,35,0,50,1000000,Infinity,Infinity,Infinity,Infinity"
        );
    }

    #[test]
    fn test_csv_empty_results() {
        let results = TargetCalculator::default().calculate(&snapshot(vec![]));
        assert!(matches!(results_to_csv(&results), Err(ExportError::Empty)));
    }
}
