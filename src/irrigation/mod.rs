//! 스프링클러 관개 수리 설계 계산 모듈 모음.
//! 설계 계산기, 펌프/시스템 곡선, 래터럴 압력 분포, 포장 배치, 관로 손실 계산으로 구성한다.

pub mod constants;
pub mod curves;
pub mod design;
pub mod error;
pub mod hazen_williams;
pub mod layout;
pub mod profile;

pub use curves::*;
pub use design::*;
pub use error::{CalcError, CalcResult};
pub use profile::*;
