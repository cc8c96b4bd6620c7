//! 정책 비교표 계산 모듈 모음.
//! 배출량 계산, 기준 대비 감축량 산정, 톤당 비용 지표 부가 단계로 구성한다.

pub mod cost_metrics;
pub mod emissions;
pub mod policy_table;

pub use cost_metrics::*;
pub use emissions::*;
pub use policy_table::*;
