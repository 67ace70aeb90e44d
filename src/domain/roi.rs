use serde::{Deserialize, Serialize};

pub const DEFAULT_EMPLOYEE_COUNT: f64 = 10.0;
pub const DEFAULT_HOURLY_RATE: f64 = 50.0;
pub const DEFAULT_MONTHLY_TOOL_COST: f64 = 200.0;
pub const DEFAULT_WEEKLY_HOURS_SAVED: f64 = 5.0;

/// The four figures a calculation is based on. All values share one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInput {
    pub employee_count: f64,
    pub hourly_rate: f64,
    pub monthly_tool_cost: f64,
    pub weekly_hours_saved_per_employee: f64,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            employee_count: DEFAULT_EMPLOYEE_COUNT,
            hourly_rate: DEFAULT_HOURLY_RATE,
            monthly_tool_cost: DEFAULT_MONTHLY_TOOL_COST,
            weekly_hours_saved_per_employee: DEFAULT_WEEKLY_HOURS_SAVED,
        }
    }
}

/// Payback period of the monthly investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEven {
    /// Nothing is spent, so there is nothing to pay back.
    NotNeeded,
    /// Whole months until cumulative savings cover the investment, at least 1.
    Months(u32),
    /// Savings are zero or negative; the investment is never recovered.
    Never,
}

impl BreakEven {
    /// Month count as reported to users: `0` when not needed, `None` for never.
    pub fn months(&self) -> Option<u32> {
        match self {
            BreakEven::NotNeeded => Some(0),
            BreakEven::Months(months) => Some(*months),
            BreakEven::Never => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiResult {
    pub monthly_investment: f64,
    pub monthly_gross_savings: f64,
    pub monthly_hours_saved: f64,
    pub net_monthly_savings: f64,
    /// `None` when there is no positive investment to relate the return to.
    pub roi_percent: Option<f64>,
    pub break_even: BreakEven,
    pub yearly_savings: f64,
}

impl RoiResult {
    pub fn is_loss(&self) -> bool {
        matches!(self.roi_percent, Some(roi) if roi < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_even_months_maps_sentinels() {
        assert_eq!(BreakEven::NotNeeded.months(), Some(0));
        assert_eq!(BreakEven::Months(13).months(), Some(13));
        assert_eq!(BreakEven::Never.months(), None);
    }

    #[test]
    fn roi_input_defaults_match_default_scenario() {
        let input = RoiInput::default();
        assert_eq!(input.employee_count, 10.0);
        assert_eq!(input.hourly_rate, 50.0);
        assert_eq!(input.monthly_tool_cost, 200.0);
        assert_eq!(input.weekly_hours_saved_per_employee, 5.0);
    }
}
