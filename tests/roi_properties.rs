use ai_roi::domain::roi::{BreakEven, RoiInput};
use ai_roi::services::roi_calculation::compute;
use proptest::prelude::*;

fn roi_input(employees: f64, rate: f64, tool_cost: f64, hours: f64) -> RoiInput {
    RoiInput {
        employee_count: employees,
        hourly_rate: rate,
        monthly_tool_cost: tool_cost,
        weekly_hours_saved_per_employee: hours,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn monthly_hours_are_four_weeks_of_savings(
        employees in 0.0f64..10_000.0,
        rate in 0.0f64..1_000.0,
        tool_cost in 0.0f64..1_000_000.0,
        hours in 0.0f64..168.0,
    ) {
        let result = compute(roi_input(employees, rate, tool_cost, hours));
        prop_assert_eq!(result.monthly_hours_saved, employees * hours * 4.0);
        prop_assert_eq!(result.monthly_investment, tool_cost);
    }

    #[test]
    fn yearly_savings_are_twelve_months_of_net_savings(
        employees in -1_000.0f64..10_000.0,
        rate in -100.0f64..1_000.0,
        tool_cost in -1_000.0f64..1_000_000.0,
        hours in -10.0f64..168.0,
    ) {
        let result = compute(roi_input(employees, rate, tool_cost, hours));
        prop_assert_eq!(
            result.yearly_savings,
            12.0 * (result.monthly_gross_savings - result.monthly_investment)
        );
    }

    #[test]
    fn free_tooling_needs_no_payback_and_has_no_roi(
        employees in 0.0f64..10_000.0,
        rate in 0.0f64..1_000.0,
        hours in 0.0f64..168.0,
    ) {
        let result = compute(roi_input(employees, rate, 0.0, hours));
        prop_assert_eq!(result.break_even, BreakEven::NotNeeded);
        prop_assert_eq!(result.break_even.months(), Some(0));
        prop_assert_eq!(result.roi_percent, None);
    }

    #[test]
    fn paid_tooling_with_savings_breaks_even_after_at_least_a_month(
        employees in 1.0f64..10_000.0,
        rate in 1.0f64..1_000.0,
        tool_cost in 0.01f64..1_000_000.0,
        hours in 0.5f64..168.0,
    ) {
        let result = compute(roi_input(employees, rate, tool_cost, hours));
        match result.break_even {
            BreakEven::Months(months) => prop_assert!(months >= 1),
            other => prop_assert!(false, "unexpected payback {:?}", other),
        }
    }

    #[test]
    fn more_hours_saved_never_lowers_roi(
        employees in 0.0f64..10_000.0,
        rate in 0.0f64..1_000.0,
        tool_cost in 0.01f64..1_000_000.0,
        hours in 0.0f64..168.0,
        extra_hours in 0.0f64..40.0,
    ) {
        let lower = compute(roi_input(employees, rate, tool_cost, hours));
        let higher = compute(roi_input(employees, rate, tool_cost, hours + extra_hours));

        let (Some(lower_roi), Some(higher_roi)) = (lower.roi_percent, higher.roi_percent) else {
            return Err(TestCaseError::fail("roi should be defined for positive investment"));
        };
        prop_assert!(higher_roi >= lower_roi);
    }

    #[test]
    fn sentinels_never_carry_non_finite_values(
        employees in any::<f64>(),
        rate in any::<f64>(),
        tool_cost in any::<f64>(),
        hours in any::<f64>(),
    ) {
        let result = compute(roi_input(employees, rate, tool_cost, hours));
        if let Some(roi) = result.roi_percent {
            prop_assert!(roi.is_finite());
        }
        if let BreakEven::Months(months) = result.break_even {
            prop_assert!(months >= 1);
        }
    }
}

#[test]
fn default_scenario_matches_worked_example() {
    let result = compute(roi_input(10.0, 50.0, 200.0, 5.0));

    assert_eq!(result.monthly_hours_saved, 200.0);
    assert_eq!(result.monthly_gross_savings, 10_000.0);
    assert_eq!(result.net_monthly_savings, 9_800.0);
    assert_eq!(result.roi_percent, Some(4_900.0));
    assert_eq!(result.break_even.months(), Some(1));
    assert_eq!(result.yearly_savings, 117_600.0);
}

#[test]
fn losing_scenario_matches_worked_example() {
    let result = compute(roi_input(1.0, 10.0, 500.0, 1.0));

    assert_eq!(result.monthly_hours_saved, 4.0);
    assert_eq!(result.monthly_gross_savings, 40.0);
    assert_eq!(result.net_monthly_savings, -460.0);
    assert_eq!(result.roi_percent, Some(-92.0));
    assert_eq!(result.break_even, BreakEven::Months(13));
    assert_eq!(result.yearly_savings, -5_520.0);
}
