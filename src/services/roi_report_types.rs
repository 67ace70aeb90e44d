use serde::Serialize;

use crate::domain::roi::{RoiInput, RoiResult};
use crate::services::roi_breakdown::{BreakdownBar, cost_breakdown};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoiVerdict {
    PaysOff,
    LosesMoney,
    NotApplicable,
}

impl RoiVerdict {
    pub fn from_result(result: &RoiResult) -> Self {
        match result.roi_percent {
            None => RoiVerdict::NotApplicable,
            Some(roi) if roi < 0.0 => RoiVerdict::LosesMoney,
            Some(_) => RoiVerdict::PaysOff,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct RoiReport {
    pub data_source: String,
    pub generated_on: String,
    pub currency: String,
    pub inputs: RoiInput,
    pub monthly_investment: f64,
    pub monthly_gross_savings: f64,
    pub monthly_hours_saved: f64,
    pub net_monthly_savings: f64,
    pub roi_percent: Option<f64>,
    /// `0` when no payback is needed, `null` when it never happens.
    pub break_even_months: Option<u32>,
    pub yearly_savings: f64,
    pub verdict: RoiVerdict,
    pub breakdown: Vec<BreakdownBar>,
}

impl RoiReport {
    pub fn from_calculation(
        data_source: &str,
        generated_on: &str,
        currency: &str,
        input: RoiInput,
        result: &RoiResult,
    ) -> Self {
        Self {
            data_source: data_source.to_string(),
            generated_on: generated_on.to_string(),
            currency: currency.to_string(),
            inputs: input,
            monthly_investment: result.monthly_investment,
            monthly_gross_savings: result.monthly_gross_savings,
            monthly_hours_saved: result.monthly_hours_saved,
            net_monthly_savings: result.net_monthly_savings,
            roi_percent: result.roi_percent,
            break_even_months: result.break_even.months(),
            yearly_savings: result.yearly_savings,
            verdict: RoiVerdict::from_result(result),
            breakdown: cost_breakdown(result).to_vec(),
        }
    }
}
