use plotters::prelude::*;
use thiserror::Error;

use crate::services::roi_breakdown::BreakdownBar;

#[derive(Error, Debug)]
pub enum BreakdownPlotError {
    #[error("breakdown value for {0} is not a finite number")]
    NonFiniteValue(String),
    #[error("breakdown values span too wide a range to draw")]
    RangeTooLarge,
    #[error("failed to render breakdown plot: {0}")]
    Plot(String),
}

/// Renders the investment vs. savings bars to a PNG at `output_path`.
pub fn plot_breakdown_png(
    output_path: &str,
    bars: &[BreakdownBar],
    currency: &str,
) -> Result<(), BreakdownPlotError> {
    if let Some(bar) = bars.iter().find(|bar| !bar.value.is_finite()) {
        return Err(BreakdownPlotError::NonFiniteValue(bar.name.clone()));
    }
    render_breakdown_png(output_path, bars, currency)
}

/// The y-range always contains zero, never collapses to a single point and
/// has a finite span.
fn value_range(bars: &[BreakdownBar]) -> Result<(f64, f64), BreakdownPlotError> {
    let max_value = bars.iter().map(|bar| bar.value).fold(0.0, f64::max);
    let min_value = bars.iter().map(|bar| bar.value).fold(0.0, f64::min);
    // Halved so opposite-sign extremes cannot overflow.
    let half_span = max_value / 2.0 - min_value / 2.0;
    if half_span < f64::EPSILON {
        return Ok((0.0, 1.0));
    }
    let padding = half_span * 0.2;
    let lower = if min_value < 0.0 { (min_value - padding).max(f64::MIN) } else { 0.0 };
    let upper = if max_value > 0.0 { (max_value + padding).min(f64::MAX) } else { 0.0 };
    if !(upper - lower).is_finite() {
        return Err(BreakdownPlotError::RangeTooLarge);
    }
    Ok((lower, upper))
}

fn render_breakdown_png(
    output_path: &str,
    bars: &[BreakdownBar],
    currency: &str,
) -> Result<(), BreakdownPlotError> {
    if bars.is_empty() {
        return Ok(());
    }

    let (min_y, max_y) = value_range(bars)?;
    let max_x = bars.len() as i32;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BreakdownPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("AI Cost vs. Monthly Savings", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(|e| BreakdownPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(format!("Amount per month ({currency})"))
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(bars.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            bars.get(*index as usize)
                .map(|bar| bar.name.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| BreakdownPlotError::Plot(e.to_string()))?;

    let bar_colors = [RGBColor(34, 211, 238), RGBColor(167, 139, 250)];
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            let color = bar_colors[idx % bar_colors.len()];
            let style = ShapeStyle::from(&color).filled();
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, bar.value)], style)
        }))
        .map_err(|e| BreakdownPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| BreakdownPlotError::Plot(e.to_string()))?;
    Ok(())
}
