use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::columns::{Column, ColumnValue};
use crate::policy::policy_table::{PolicyRow, PolicyTable};
use crate::units::{convert_currency, convert_mass, CurrencyScale, EmissionsMassUnit};

/// 톤당 비용 지표가 추가된 정책표의 한 행.
///
/// 감축량이 정확히 0인 행의 톤당 비용은 `None`(직렬화 시 null)이다.
/// inf/NaN 값은 null이 아닌 태그 문자열로 기록된다(`crate::non_finite`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedPolicyRow {
    #[serde(flatten)]
    pub policy: PolicyRow,
    /// 정부 비용 [$/ton]
    #[serde(rename = "Gov_$per_ton", with = "crate::non_finite::option", default)]
    pub gov_per_ton: Option<f64>,
    /// 기업 비용 [$/ton]
    #[serde(rename = "Firm_$per_ton", with = "crate::non_finite::option", default)]
    pub firm_per_ton: Option<f64>,
    /// 정부 + 기업 영향 [$B/년]
    #[serde(rename = "Total_Impact_$B", with = "crate::non_finite")]
    pub total_impact_b: f64,
    /// 총 비용 [$/ton]
    #[serde(rename = "Total_$per_ton", with = "crate::non_finite::option", default)]
    pub total_per_ton: Option<f64>,
}

impl AugmentedPolicyRow {
    fn cell(&self, column: Column) -> Option<ColumnValue> {
        match column {
            Column::GovPerTon => Some(self.gov_per_ton.into()),
            Column::FirmPerTon => Some(self.firm_per_ton.into()),
            Column::TotalImpact => Some(ColumnValue::Number(self.total_impact_b)),
            Column::TotalPerTon => Some(self.total_per_ton.into()),
            other => self.policy.cell(other),
        }
    }
}

/// 비용지표까지 포함한 정책 비교표.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedPolicyTable {
    rows: Vec<AugmentedPolicyRow>,
}

impl AugmentedPolicyTable {
    pub fn rows(&self) -> &[AugmentedPolicyRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<AugmentedPolicyRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 정책 이름이 일치하는 첫 행.
    pub fn row(&self, policy: &str) -> Option<&AugmentedPolicyRow> {
        self.rows.iter().find(|r| r.policy.scenario.policy == policy)
    }

    /// 컬럼 이름 기준으로 값을 꺼낸다. 모든 컬럼을 가진다.
    pub fn column(&self, column: Column) -> Option<Vec<ColumnValue>> {
        self.rows.iter().map(|r| r.cell(column)).collect()
    }
}

/// $B 금액을 감축 톤수로 나눈 톤당 비용.
fn per_ton(impact_b: f64, denom_tons: f64) -> f64 {
    convert_currency(impact_b, CurrencyScale::Billions, CurrencyScale::Units) / denom_tons
}

/// 정책표에 정부/기업/총 톤당 비용 지표를 추가한다.
///
/// 입력 표는 변경하지 않고 새 표를 돌려준다. 감축량이 정확히 0인 행만 미정의로 덮어쓰며,
/// 0에 가까운 감축량은 매우 큰 값이나 inf가 그대로 남는다.
pub fn add_cost_per_ton_metrics(table: &PolicyTable) -> AugmentedPolicyTable {
    let mut rows: Vec<AugmentedPolicyRow> = table
        .rows()
        .iter()
        .map(|row| {
            // MMT -> ton. 컬럼명은 "_ton"이지만 metric ton 기준이다.
            let denom_tons = convert_mass(
                row.abatement_mmt,
                EmissionsMassUnit::MillionMetricTon,
                EmissionsMassUnit::MetricTon,
            );
            let gov = row.scenario.gov_impact_b;
            let firm = row.scenario.firm_impact_b;
            let total_impact_b = gov + firm;
            AugmentedPolicyRow {
                policy: row.clone(),
                gov_per_ton: Some(per_ton(gov, denom_tons)),
                firm_per_ton: Some(per_ton(firm, denom_tons)),
                total_impact_b,
                total_per_ton: Some(per_ton(total_impact_b, denom_tons)),
            }
        })
        .collect();

    let mut masked = 0usize;
    for row in rows.iter_mut().filter(|r| r.policy.abatement_mmt == 0.0) {
        row.gov_per_ton = None;
        row.firm_per_ton = None;
        row.total_per_ton = None;
        masked += 1;
    }
    if masked > 0 {
        debug!(rows = masked, "cost per ton undefined for zero abatement");
    }

    AugmentedPolicyTable { rows }
}
