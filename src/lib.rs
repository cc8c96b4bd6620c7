//! 전력 소비와 탄소집약도로 정책 시나리오별 배출량, 감축량, 톤당 비용을 비교하는 라이브러리.

pub mod columns;
pub mod config;
pub mod non_finite;
pub mod policy;
pub mod units;
