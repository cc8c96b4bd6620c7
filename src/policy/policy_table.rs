use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::columns::{Column, ColumnValue, BASELINE_POLICY};
use crate::config::ModelConfig;
use crate::policy::emissions::emissions_mmt;

/// 정책 시나리오 입력 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// 정책 이름. "Baseline"만 특별하게 취급한다.
    #[serde(rename = "Policy")]
    pub policy: String,
    /// 전력 소비량 [TWh/년]
    #[serde(rename = "Y_TWh", with = "crate::non_finite")]
    pub y_twh: f64,
    /// 전력 탄소집약도 [gCO2/kWh]
    #[serde(rename = "C_g_per_kWh", with = "crate::non_finite")]
    pub c_g_per_kwh: f64,
    /// 정부 재정 영향 [$B/년], 음수 가능
    #[serde(rename = "Gov_Impact_$B", with = "crate::non_finite")]
    pub gov_impact_b: f64,
    /// 기업 비용 영향 [$B/년], 음수 가능
    #[serde(rename = "Firm_Impact_$B", with = "crate::non_finite")]
    pub firm_impact_b: f64,
}

impl ScenarioRecord {
    pub fn new(
        policy: impl Into<String>,
        y_twh: f64,
        c_g_per_kwh: f64,
        gov_impact_b: f64,
        firm_impact_b: f64,
    ) -> Self {
        Self {
            policy: policy.into(),
            y_twh,
            c_g_per_kwh,
            gov_impact_b,
            firm_impact_b,
        }
    }

    pub(crate) fn cell(&self, column: Column) -> Option<ColumnValue> {
        let value = match column {
            Column::Policy => ColumnValue::Text(self.policy.clone()),
            Column::ElectricityTwh => ColumnValue::Number(self.y_twh),
            Column::CarbonIntensity => ColumnValue::Number(self.c_g_per_kwh),
            Column::GovImpact => ColumnValue::Number(self.gov_impact_b),
            Column::FirmImpact => ColumnValue::Number(self.firm_impact_b),
            _ => return None,
        };
        Some(value)
    }
}

/// 배출량과 감축량이 추가된 정책표의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRow {
    #[serde(flatten)]
    pub scenario: ScenarioRecord,
    /// 연간 배출량 [MMT]
    #[serde(rename = "Emissions_MMT", with = "crate::non_finite")]
    pub emissions_mmt: f64,
    /// 기준 대비 감축량 [MMT], 배출 증가 시 음수
    #[serde(rename = "Abatement_MMT", with = "crate::non_finite")]
    pub abatement_mmt: f64,
    /// 기준 대비 감축률 [%]
    #[serde(rename = "Abatement_%", with = "crate::non_finite")]
    pub abatement_pct: f64,
}

impl PolicyRow {
    pub(crate) fn cell(&self, column: Column) -> Option<ColumnValue> {
        match column {
            Column::Emissions => Some(ColumnValue::Number(self.emissions_mmt)),
            Column::Abatement => Some(ColumnValue::Number(self.abatement_mmt)),
            Column::AbatementPercent => Some(ColumnValue::Number(self.abatement_pct)),
            other => self.scenario.cell(other),
        }
    }
}

/// 입력 순서를 그대로 유지하는 정책 비교표.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTable {
    rows: Vec<PolicyRow>,
    baseline_mmt: Option<f64>,
}

impl PolicyTable {
    /// 정책표가 가지는 컬럼.
    pub const COLUMNS: [Column; 8] = [
        Column::Policy,
        Column::ElectricityTwh,
        Column::CarbonIntensity,
        Column::GovImpact,
        Column::FirmImpact,
        Column::Emissions,
        Column::Abatement,
        Column::AbatementPercent,
    ];

    /// 이미 계산된 행으로 표를 구성한다. 다른 경로로 만든 표를 비용지표 단계에 넘길 때 쓴다.
    ///
    /// 기준 배출량은 기록되지 않으므로 `baseline_mmt()`는 `None`이다.
    pub fn from_rows(rows: Vec<PolicyRow>) -> Self {
        Self {
            rows,
            baseline_mmt: None,
        }
    }

    pub fn rows(&self) -> &[PolicyRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<PolicyRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 감축량 계산에 사용한 기준 배출량 [MMT]. `from_rows`로 만든 표는 `None`.
    pub fn baseline_mmt(&self) -> Option<f64> {
        self.baseline_mmt
    }

    /// 정책 이름이 일치하는 첫 행.
    pub fn row(&self, policy: &str) -> Option<&PolicyRow> {
        self.rows.iter().find(|r| r.scenario.policy == policy)
    }

    /// 컬럼 이름 기준으로 값을 꺼낸다. 표에 없는 컬럼이면 `None`.
    pub fn column(&self, column: Column) -> Option<Vec<ColumnValue>> {
        if !Self::COLUMNS.contains(&column) {
            return None;
        }
        self.rows.iter().map(|r| r.cell(column)).collect()
    }
}

/// 정책표 구성 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// 기준 배출량이 주어지지 않았고 "Baseline" 행도 없음
    BaselineNotResolvable,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::BaselineNotResolvable => write!(
                f,
                "기준 배출량이 주어지지 않았고 Policy == \"{BASELINE_POLICY}\" 행도 없습니다."
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// 정책 시나리오 목록으로 비교표를 만든다.
///
/// `baseline_emissions`가 주어지면 그대로 사용하고, 없으면 입력 순서상 첫 "Baseline" 행의
/// 배출량을 기준으로 삼는다. 기준이 0이면 감축률은 inf/NaN으로 전파된다.
pub fn build_policy_table(
    records: &[ScenarioRecord],
    baseline_emissions: Option<f64>,
) -> Result<PolicyTable, ConfigurationError> {
    let emissions: Vec<f64> = records
        .iter()
        .map(|r| emissions_mmt(r.y_twh, r.c_g_per_kwh))
        .collect();

    let base = match baseline_emissions {
        Some(value) => {
            debug!(baseline_mmt = value, source = "explicit", "baseline resolved");
            value
        }
        None => {
            let idx = records
                .iter()
                .position(|r| r.policy == BASELINE_POLICY)
                .ok_or(ConfigurationError::BaselineNotResolvable)?;
            let value = emissions[idx];
            debug!(baseline_mmt = value, source = "row", row = idx, "baseline resolved");
            value
        }
    };

    let rows = records
        .iter()
        .zip(emissions)
        .map(|(record, e)| {
            let abatement_mmt = base - e;
            PolicyRow {
                scenario: record.clone(),
                emissions_mmt: e,
                abatement_mmt,
                abatement_pct: (abatement_mmt / base) * 100.0,
            }
        })
        .collect();

    Ok(PolicyTable {
        rows,
        baseline_mmt: Some(base),
    })
}

/// 설정 파일의 기준 배출량을 명시값으로 넘겨 비교표를 만든다.
pub fn build_policy_table_with_config(
    records: &[ScenarioRecord],
    config: &ModelConfig,
) -> Result<PolicyTable, ConfigurationError> {
    build_policy_table(records, config.baseline_emissions_mmt)
}
