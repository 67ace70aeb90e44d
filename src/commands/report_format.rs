use crate::services::roi_report_types::{RoiReport, RoiVerdict};

pub const LOSS_NOTE: &str = "Warning: the investment does not pay for itself in this scenario. \
Consider raising the hours saved or cutting costs.";
pub const GAIN_NOTE: &str = "Congratulations! Most companies see no AI impact on productivity. \
Use this report to measure and justify your AI investment.";
pub const NEUTRAL_NOTE: &str = "Note: following the Solow paradox, most companies see no AI impact on productivity. \
Use this report to measure and justify your AI investment.";

pub fn format_roi_report(report: &RoiReport) -> String {
    let currency = report.currency.as_str();
    let roi = match report.roi_percent {
        Some(value) => format!("{value:.1}%"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("AI ROI Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Generated on: {}", report.generated_on));
    lines.push(String::new());
    lines.push("Inputs:".to_string());
    lines.push(format!("Employees using AI: {}", report.inputs.employee_count));
    lines.push(format!(
        "Hourly cost per employee: {}",
        format_money(report.inputs.hourly_rate, currency)
    ));
    lines.push(format!(
        "Monthly AI tooling cost: {}",
        format_money(report.inputs.monthly_tool_cost, currency)
    ));
    lines.push(format!(
        "Hours saved per week (per employee): {}h",
        report.inputs.weekly_hours_saved_per_employee
    ));
    lines.push(String::new());
    lines.push("Results:".to_string());
    lines.push(format!("Monthly ROI: {roi}"));
    lines.push(format!("Payback: {}", format_payback(report.break_even_months)));
    lines.push(format!(
        "Yearly savings: {}",
        format_money(report.yearly_savings, currency)
    ));
    lines.push(format!("Hours saved per month: {}h", report.monthly_hours_saved));
    lines.push(String::new());
    lines.push("Breakdown:".to_string());
    for bar in &report.breakdown {
        lines.push(format!("{}: {}", bar.name, format_money(bar.value, currency)));
    }
    lines.push(String::new());
    lines.push(verdict_note(report.verdict).to_string());

    lines.join("\n")
}

pub fn verdict_note(verdict: RoiVerdict) -> &'static str {
    match verdict {
        RoiVerdict::LosesMoney => LOSS_NOTE,
        RoiVerdict::PaysOff => GAIN_NOTE,
        RoiVerdict::NotApplicable => NEUTRAL_NOTE,
    }
}

fn format_payback(months: Option<u32>) -> String {
    match months {
        None => "never".to_string(),
        Some(1) => "1 month".to_string(),
        Some(months) => format!("{months} months"),
    }
}

/// Two decimals with `,` thousands separators, e.g. `$ -5,520.00`.
fn format_money(value: f64, currency: &str) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{currency} {sign}{grouped}.{fraction}"),
        None => format!("{currency} {sign}{grouped}"),
    }
}
