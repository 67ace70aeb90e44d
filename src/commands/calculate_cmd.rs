use chrono::NaiveDate;

use crate::commands::base_commands::{CommandError, OutputFormat};
use crate::commands::report_format::format_roi_report;
use crate::domain::roi::RoiInput;
use crate::services::breakdown_plot::plot_breakdown_png;
use crate::services::report_yaml::{
    serialize_report_to_json, serialize_report_to_yaml, write_report_yaml_file,
};
use crate::services::roi_calculation::compute;
use crate::services::roi_report_types::RoiReport;

pub struct CalculateRequest {
    pub input: RoiInput,
    pub currency: String,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub chart: Option<String>,
    pub date: NaiveDate,
}

pub fn calculate_command(request: CalculateRequest) -> Result<(), CommandError> {
    tracing::debug!(input = ?request.input, "calculating ROI from command-line values");
    let result = compute(request.input);
    let report = RoiReport::from_calculation(
        "command line",
        &request.date.format("%Y-%m-%d").to_string(),
        &request.currency,
        request.input,
        &result,
    );

    match request.format {
        OutputFormat::Text => println!("{}", format_roi_report(&report)),
        OutputFormat::Yaml => serialize_report_to_yaml(&mut std::io::stdout(), &report)?,
        OutputFormat::Json => serialize_report_to_json(&mut std::io::stdout(), &report)?,
    }

    if let Some(output) = &request.output {
        write_report_yaml_file(output, &report)?;
        tracing::info!(path = %output, "report written");
        eprintln!("ROI report written to {output}");
    }

    if let Some(chart) = &request.chart {
        plot_breakdown_png(chart, &report.breakdown, &report.currency)?;
        tracing::info!(path = %chart, "breakdown chart written");
        eprintln!("Breakdown chart written to {chart}");
    }

    Ok(())
}
