/// 기준 시나리오를 나타내는 정책 이름. 대소문자까지 정확히 일치해야 한다.
pub const BASELINE_POLICY: &str = "Baseline";

/// 정책 비교표가 다루는 컬럼 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Policy,
    ElectricityTwh,
    CarbonIntensity,
    GovImpact,
    FirmImpact,
    Emissions,
    Abatement,
    AbatementPercent,
    GovPerTon,
    FirmPerTon,
    TotalImpact,
    TotalPerTon,
}

impl Column {
    /// 입력 레코드, 정책표, 비용지표 순서로 나열한 전체 컬럼.
    pub const ALL: [Column; 12] = [
        Column::Policy,
        Column::ElectricityTwh,
        Column::CarbonIntensity,
        Column::GovImpact,
        Column::FirmImpact,
        Column::Emissions,
        Column::Abatement,
        Column::AbatementPercent,
        Column::GovPerTon,
        Column::FirmPerTon,
        Column::TotalImpact,
        Column::TotalPerTon,
    ];

    /// 직렬화/리포트에서 사용하는 컬럼 이름.
    pub fn name(self) -> &'static str {
        match self {
            Column::Policy => "Policy",
            Column::ElectricityTwh => "Y_TWh",
            Column::CarbonIntensity => "C_g_per_kWh",
            Column::GovImpact => "Gov_Impact_$B",
            Column::FirmImpact => "Firm_Impact_$B",
            Column::Emissions => "Emissions_MMT",
            Column::Abatement => "Abatement_MMT",
            Column::AbatementPercent => "Abatement_%",
            Column::GovPerTon => "Gov_$per_ton",
            Column::FirmPerTon => "Firm_$per_ton",
            Column::TotalImpact => "Total_Impact_$B",
            Column::TotalPerTon => "Total_$per_ton",
        }
    }

    /// 컬럼 이름으로 종류를 찾는다.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 컬럼 단위로 꺼낸 셀 값.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Number(f64),
    /// 정의되지 않은 값(예: 감축량 0인 행의 톤당 비용)
    Missing,
}

impl ColumnValue {
    /// 숫자 셀이면 값을 돌려준다.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ColumnValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ColumnValue::Missing)
    }
}

impl From<Option<f64>> for ColumnValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => ColumnValue::Number(v),
            None => ColumnValue::Missing,
        }
    }
}
