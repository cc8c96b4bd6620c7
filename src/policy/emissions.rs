use crate::units::{convert_electricity, convert_mass, ElectricityUnit, EmissionsMassUnit};

/// 연간 배출량 [MMT CO2/년]을 계산한다.
///
/// E = Y * C 를 TWh -> kWh, g -> t -> MMT 순서로 단계 환산한다.
/// 입력 검증은 하지 않으며 음수/NaN은 부동소수 연산 그대로 전파된다.
pub fn emissions_mmt(y_twh: f64, c_g_per_kwh: f64) -> f64 {
    let kwh = convert_electricity(
        y_twh,
        ElectricityUnit::TerawattHour,
        ElectricityUnit::KilowattHour,
    );
    let grams = kwh * c_g_per_kwh;
    convert_mass(grams, EmissionsMassUnit::Gram, EmissionsMassUnit::MillionMetricTon)
}
