use serde::{Deserialize, Serialize};

/// 전력량 단위. 내부 기준은 kWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricityUnit {
    KilowattHour,
    MegawattHour,
    GigawattHour,
    TerawattHour,
}

fn to_kwh(value: f64, unit: ElectricityUnit) -> f64 {
    match unit {
        ElectricityUnit::KilowattHour => value,
        ElectricityUnit::MegawattHour => value * 1e3,
        ElectricityUnit::GigawattHour => value * 1e6,
        ElectricityUnit::TerawattHour => value * 1e9,
    }
}

fn from_kwh(value: f64, unit: ElectricityUnit) -> f64 {
    match unit {
        ElectricityUnit::KilowattHour => value,
        ElectricityUnit::MegawattHour => value * 1e-3,
        ElectricityUnit::GigawattHour => value * 1e-6,
        ElectricityUnit::TerawattHour => value * 1e-9,
    }
}

/// 전력량을 변환한다.
pub fn convert_electricity(value: f64, from: ElectricityUnit, to: ElectricityUnit) -> f64 {
    let kwh = to_kwh(value, from);
    from_kwh(kwh, to)
}
