use datacenter_policy_model::columns::{Column, ColumnValue};
use datacenter_policy_model::policy::{
    add_cost_per_ton_metrics, build_policy_table, emissions_mmt, PolicyRow, PolicyTable,
    ScenarioRecord,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:e}, tol {rel_tol})"
    );
}

fn example_table() -> PolicyTable {
    let records = vec![
        ScenarioRecord::new("Baseline", 100.0, 400.0, 0.0, 0.0),
        ScenarioRecord::new("CleanGrid", 100.0, 100.0, 2.0, 1.0),
    ];
    build_policy_table(&records, None).expect("table")
}

#[test]
fn end_to_end_example() {
    let table = example_table();
    let aug = add_cost_per_ton_metrics(&table);
    assert_eq!(aug.len(), 2);

    let base = aug.row("Baseline").expect("baseline");
    assert_eq!(base.gov_per_ton, None);
    assert_eq!(base.firm_per_ton, None);
    assert_eq!(base.total_per_ton, None);
    assert_eq!(base.total_impact_b, 0.0);

    let clean = aug.row("CleanGrid").expect("clean");
    assert_close("gov", clean.gov_per_ton.expect("gov"), 2e9 / 30e6, 1e-9);
    assert_close("firm", clean.firm_per_ton.expect("firm"), 1e9 / 30e6, 1e-9);
    assert_close("total", clean.total_per_ton.expect("total"), 100.0, 1e-9);
    assert_eq!(clean.total_impact_b, 3.0);
}

#[test]
fn input_table_untouched() {
    let table = example_table();
    let before = table.clone();
    let aug = add_cost_per_ton_metrics(&table);
    assert_eq!(table, before);
    for (a, p) in aug.rows().iter().zip(table.rows()) {
        assert_eq!(&a.policy, p);
    }
}

#[test]
fn zero_abatement_masks_even_with_impacts() {
    let records = vec![
        ScenarioRecord::new("Subsidy", 50.0, 300.0, 4.0, -1.0),
        ScenarioRecord::new("Tax", 50.0, 200.0, -2.0, 3.0),
    ];
    let b = emissions_mmt(50.0, 300.0);
    let table = build_policy_table(&records, Some(b)).expect("table");
    let aug = add_cost_per_ton_metrics(&table);

    let subsidy = &aug.rows()[0];
    assert_eq!(subsidy.policy.abatement_mmt, 0.0);
    assert!(subsidy.gov_per_ton.is_none());
    assert!(subsidy.firm_per_ton.is_none());
    assert!(subsidy.total_per_ton.is_none());
    assert_eq!(subsidy.total_impact_b, 3.0);

    assert!(aug.rows()[1].total_per_ton.is_some());
}

#[test]
fn total_is_sum_of_parts() {
    let records = vec![
        ScenarioRecord::new("Baseline", 120.0, 420.0, 0.0, 0.0),
        ScenarioRecord::new("A", 120.0, 250.0, 1.7, 0.4),
        ScenarioRecord::new("B", 90.0, 420.0, -0.3, 2.2),
        ScenarioRecord::new("C", 150.0, 420.0, 0.8, 0.1),
    ];
    let aug = add_cost_per_ton_metrics(&build_policy_table(&records, None).expect("table"));
    for row in aug.rows().iter().filter(|r| r.policy.abatement_mmt != 0.0) {
        let gov = row.gov_per_ton.expect("gov");
        let firm = row.firm_per_ton.expect("firm");
        let total = row.total_per_ton.expect("total");
        assert_close(&row.policy.scenario.policy, total, gov + firm, 1e-9);
    }
    // 배출 증가 정책은 양의 비용이면 음의 톤당 비용
    assert!(aug.row("C").and_then(|r| r.total_per_ton).expect("C") < 0.0);
}

#[test]
fn near_zero_abatement_is_not_masked() {
    let row = PolicyRow {
        scenario: ScenarioRecord::new("Tiny", 1.0, 1.0, 1.0, 0.0),
        emissions_mmt: 1.0,
        abatement_mmt: 1e-300,
        abatement_pct: 0.0,
    };
    let aug = add_cost_per_ton_metrics(&PolicyTable::from_rows(vec![row]));
    let gov = aug.rows()[0].gov_per_ton.expect("not masked");
    assert!(gov.is_infinite() || gov > 1e200);
}

#[test]
fn columns_include_missing_marker() {
    let aug = add_cost_per_ton_metrics(&example_table());
    let total = aug.column(Column::TotalPerTon).expect("column");
    assert!(total[0].is_missing());
    assert_close("total", total[1].as_number().expect("number"), 100.0, 1e-9);
    let impact = aug.column(Column::TotalImpact).expect("impact");
    assert_eq!(impact, vec![ColumnValue::Number(0.0), ColumnValue::Number(3.0)]);
    for col in Column::ALL {
        assert_eq!(aug.column(col).expect("all columns").len(), 2, "{col}");
    }
}

fn hand_row(policy: &str, abatement_mmt: f64) -> PolicyRow {
    PolicyRow {
        scenario: ScenarioRecord::new(policy, 1.0, 1.0, 2.0, 1.0),
        emissions_mmt: 1.0,
        abatement_mmt,
        abatement_pct: 0.0,
    }
}

#[test]
fn negative_zero_abatement_is_masked() {
    let aug = add_cost_per_ton_metrics(&PolicyTable::from_rows(vec![hand_row("NegZero", -0.0)]));
    let row = &aug.rows()[0];
    assert!(row.gov_per_ton.is_none());
    assert!(row.firm_per_ton.is_none());
    assert!(row.total_per_ton.is_none());
    assert_eq!(row.total_impact_b, 3.0);
}

#[test]
fn nan_abatement_is_not_masked() {
    let aug = add_cost_per_ton_metrics(&PolicyTable::from_rows(vec![hand_row("Unknown", f64::NAN)]));
    let row = &aug.rows()[0];
    assert!(row.gov_per_ton.expect("gov").is_nan());
    assert!(row.firm_per_ton.expect("firm").is_nan());
    assert!(row.total_per_ton.expect("total").is_nan());
}

#[test]
fn rows_from_other_sources_have_no_baseline() {
    let table = PolicyTable::from_rows(vec![hand_row("Imported", 5.0)]);
    assert_eq!(table.baseline_mmt(), None);
    let aug = add_cost_per_ton_metrics(&table);
    assert_close("gov", aug.rows()[0].gov_per_ton.expect("gov"), 2e9 / 5e6, 1e-9);
}
