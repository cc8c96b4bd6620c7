use serde::{Deserialize, Serialize};

/// 배출량 질량 단위. 내부 기준은 metric ton이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionsMassUnit {
    Gram,
    MetricTon,
    /// 백만 톤(MMT)
    MillionMetricTon,
}

fn to_ton(value: f64, unit: EmissionsMassUnit) -> f64 {
    match unit {
        EmissionsMassUnit::Gram => value * 1e-6,
        EmissionsMassUnit::MetricTon => value,
        EmissionsMassUnit::MillionMetricTon => value * 1e6,
    }
}

fn from_ton(value: f64, unit: EmissionsMassUnit) -> f64 {
    match unit {
        EmissionsMassUnit::Gram => value * 1e6,
        EmissionsMassUnit::MetricTon => value,
        EmissionsMassUnit::MillionMetricTon => value * 1e-6,
    }
}

/// 배출량 질량을 변환한다.
///
/// 기준 단위(ton)를 거쳐 단계별로 곱하므로 g -> MMT 변환은 `g * 1e-6 * 1e-6`과 같다.
pub fn convert_mass(value: f64, from: EmissionsMassUnit, to: EmissionsMassUnit) -> f64 {
    let tons = to_ton(value, from);
    from_ton(tons, to)
}
