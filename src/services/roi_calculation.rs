use crate::domain::roi::{BreakEven, RoiInput, RoiResult};

/// Flat approximation, not calendar accurate.
pub const WEEKS_PER_MONTH: f64 = 4.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Derives savings, ROI, payback period and yearly net savings from `input`.
///
/// Total for every input, including zero, negative and non-finite values:
/// - `monthly_tool_cost <= 0` => ROI is `None` and payback is [`BreakEven::NotNeeded`].
/// - positive cost without positive savings => payback is [`BreakEven::Never`].
pub fn compute(input: RoiInput) -> RoiResult {
    let weekly_hours_saved = input.employee_count * input.weekly_hours_saved_per_employee;
    let monthly_hours_saved = weekly_hours_saved * WEEKS_PER_MONTH;
    let monthly_gross_savings = monthly_hours_saved * input.hourly_rate;
    let monthly_investment = input.monthly_tool_cost;
    let net_monthly_savings = monthly_gross_savings - monthly_investment;

    RoiResult {
        monthly_investment,
        monthly_gross_savings,
        monthly_hours_saved,
        net_monthly_savings,
        roi_percent: roi_percent(net_monthly_savings, monthly_investment),
        break_even: break_even(monthly_investment, monthly_gross_savings),
        yearly_savings: net_monthly_savings * MONTHS_PER_YEAR,
    }
}

fn roi_percent(net_monthly_savings: f64, monthly_investment: f64) -> Option<f64> {
    if monthly_investment.is_nan() || monthly_investment <= 0.0 {
        return None;
    }
    let roi = net_monthly_savings * 100.0 / monthly_investment;
    roi.is_finite().then_some(roi)
}

fn break_even(monthly_investment: f64, monthly_gross_savings: f64) -> BreakEven {
    if monthly_investment.is_nan() || monthly_investment <= 0.0 {
        return BreakEven::NotNeeded;
    }
    if monthly_gross_savings.is_nan() || monthly_gross_savings <= 0.0 {
        return BreakEven::Never;
    }

    let months = (monthly_investment / monthly_gross_savings).ceil();
    if !months.is_finite() {
        return BreakEven::Never;
    }
    // `as` saturates for values beyond u32::MAX.
    BreakEven::Months((months as u32).max(1))
}
