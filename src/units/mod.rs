//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod flow;
pub mod length;
pub mod power;
pub mod pressure;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use volume::{convert_volume, VolumeUnit};
