use serde::Serialize;

use crate::domain::roi::RoiResult;

pub const INVESTMENT_LABEL: &str = "AI cost";
pub const SAVINGS_LABEL: &str = "Monthly savings";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BreakdownBar {
    pub name: String,
    pub value: f64,
}

/// Investment vs. gross savings, always in that order.
pub fn cost_breakdown(result: &RoiResult) -> [BreakdownBar; 2] {
    [
        BreakdownBar {
            name: INVESTMENT_LABEL.to_string(),
            value: result.monthly_investment,
        },
        BreakdownBar {
            name: SAVINGS_LABEL.to_string(),
            value: result.monthly_gross_savings,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roi::RoiInput;
    use crate::services::roi_calculation::compute;

    #[test]
    fn cost_breakdown_lists_investment_then_savings() {
        let result = compute(RoiInput::default());
        let [investment, savings] = cost_breakdown(&result);

        assert_eq!(investment.name, "AI cost");
        assert_eq!(investment.value, 200.0);
        assert_eq!(savings.name, "Monthly savings");
        assert_eq!(savings.value, 10_000.0);
    }
}
