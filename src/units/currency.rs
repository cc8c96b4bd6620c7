use serde::{Deserialize, Serialize};

/// 금액 스케일. 내부 기준은 통화 1단위($)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyScale {
    Units,
    Millions,
    Billions,
}

fn to_units(value: f64, scale: CurrencyScale) -> f64 {
    match scale {
        CurrencyScale::Units => value,
        CurrencyScale::Millions => value * 1e6,
        CurrencyScale::Billions => value * 1e9,
    }
}

fn from_units(value: f64, scale: CurrencyScale) -> f64 {
    match scale {
        CurrencyScale::Units => value,
        CurrencyScale::Millions => value * 1e-6,
        CurrencyScale::Billions => value * 1e-9,
    }
}

/// 금액 스케일을 변환한다.
pub fn convert_currency(value: f64, from: CurrencyScale, to: CurrencyScale) -> f64 {
    let units = to_units(value, from);
    from_units(units, to)
}
