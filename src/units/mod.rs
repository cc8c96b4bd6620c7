//! 단위 정의 및 변환 모듈 모음.

pub mod currency;
pub mod energy;
pub mod mass;

pub use currency::{convert_currency, CurrencyScale};
pub use energy::{convert_electricity, ElectricityUnit};
pub use mass::{convert_mass, EmissionsMassUnit};
