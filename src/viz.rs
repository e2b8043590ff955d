//! Sales charts rendered with Plotters

use crate::errors::{Error, Result};
use crate::model::SummaryRow;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Palette cycled across customers
const CUSTOMER_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Create a bar chart of total sales per customer
///
/// # Arguments
/// * `rows` - Summary rows; bars are drawn in the given order
/// * `output_path` - Path to save the PNG chart
pub fn create_sales_bar_chart(rows: &[SummaryRow], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    draw_sales_bar_chart(rows, path).map_err(|err| chart_error(path, err))?;
    info!("Bar chart saved to: {}", path.display());
    Ok(())
}

fn draw_sales_bar_chart(rows: &[SummaryRow], path: &Path) -> DrawResult {
    let names: Vec<&str> = rows.iter().map(|row| row.customer.as_str()).collect();
    let slots = rows.len().max(1);
    let max_sales = rows
        .iter()
        .map(|row| row.total_sales)
        .fold(0.0_f64, f64::max);
    let y_max = if max_sales > 0.0 { max_sales * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Total sales per customer", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..slots).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) => names.get(*idx).map(|n| n.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Customer")
        .y_desc("Total sales (Rs)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(CUSTOMER_COLORS[0].filled())
            .margin(12)
            .data(rows.iter().enumerate().map(|(idx, row)| (idx, row.total_sales))),
    )?;

    root.present()?;
    Ok(())
}

/// Create a pie chart of each customer's share of total income
///
/// Customers with no sales get no slice.
pub fn create_income_pie_chart(rows: &[SummaryRow], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    draw_income_pie_chart(rows, path).map_err(|err| chart_error(path, err))?;
    info!("Pie chart saved to: {}", path.display());
    Ok(())
}

fn draw_income_pie_chart(rows: &[SummaryRow], path: &Path) -> DrawResult {
    let slices: Vec<&SummaryRow> = rows.iter().filter(|row| row.total_sales > 0.0).collect();

    let root = BitMapBackend::new(path, (600, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Income share by customer", ("sans-serif", 24))?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);

    if slices.is_empty() {
        root.draw(&Text::new(
            "No sales recorded",
            (center.0 - 80, center.1),
            ("sans-serif", 20).into_font(),
        ))?;
        root.present()?;
        return Ok(());
    }

    let radius = f64::from(width.min(height)) * 0.35;
    let sizes: Vec<f64> = slices.iter().map(|row| row.total_sales).collect();
    let labels: Vec<String> = slices.iter().map(|row| row.customer.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|idx| CUSTOMER_COLORS[idx % CUSTOMER_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 13).into_font().color(&WHITE));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

/// Render the bar and pie charts for a summary
pub fn generate_charts(
    rows: &[SummaryRow],
    bar_path: impl AsRef<Path>,
    pie_path: impl AsRef<Path>,
) -> Result<()> {
    create_sales_bar_chart(rows, bar_path)?;
    create_income_pie_chart(rows, pie_path)?;
    Ok(())
}

fn chart_error(path: &Path, err: Box<dyn std::error::Error>) -> Error {
    Error::Chart {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_rows() -> Vec<SummaryRow> {
        [("Diana", 1150.0), ("Frank", 500.0), ("Alice", 350.0), ("Zero", 0.0)]
            .iter()
            .map(|(name, sales)| SummaryRow {
                customer: name.to_string(),
                total_orders: 1,
                qualifying_orders: 1,
                total_sales: *sales,
                avg_order: *sales,
            })
            .collect()
    }

    #[test]
    fn test_create_sales_bar_chart() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("total_sales.png");

        let result = create_sales_bar_chart(&create_test_rows(), &output_path);
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[test]
    fn test_create_income_pie_chart() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("income_share.png");

        let result = create_income_pie_chart(&create_test_rows(), &output_path);
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[test]
    fn test_generate_charts_with_empty_summary() {
        let temp_dir = tempdir().unwrap();
        let bar_path = temp_dir.path().join("bar.png");
        let pie_path = temp_dir.path().join("pie.png");

        let result = generate_charts(&[], &bar_path, &pie_path);
        assert!(result.is_ok());
        assert!(bar_path.exists());
        assert!(pie_path.exists());
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("missing-dir").join("bar.png");

        let result = create_sales_bar_chart(&create_test_rows(), &output_path);
        assert!(matches!(result, Err(Error::Chart { .. })));
    }
}
