use serde::Serialize;

use super::constants::HW_FLOW_EXPONENT;

/// Hazen–Williams 식으로 마찰손실 수두를 계산한다.
///
/// h_f = 10.67·L·Q^1.852 / (C^1.852·D^4.87), h_f·L·D [m], Q [m³/s]
pub fn head_loss_m(length_m: f64, flow_m3_per_s: f64, c: f64, diameter_m: f64) -> f64 {
    10.67 * length_m * flow_m3_per_s.powf(HW_FLOW_EXPONENT)
        / (c.powf(HW_FLOW_EXPONENT) * diameter_m.powf(4.87))
}

/// 원형 관 평균 유속 [m/s]
pub fn velocity_m_per_s(flow_m3_per_s: f64, diameter_m: f64) -> f64 {
    let area = std::f64::consts::PI * diameter_m * diameter_m / 4.0;
    flow_m3_per_s / area
}

/// 호칭경 후보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSize {
    pub nominal: &'static str,
    pub diameter_m: f64,
}

impl PipeSize {
    pub const fn new(nominal: &'static str, diameter_m: f64) -> Self {
        Self {
            nominal,
            diameter_m,
        }
    }
}

pub const LATERAL_CANDIDATES: [PipeSize; 7] = [
    PipeSize::new("25 mm (1\")", 0.025),
    PipeSize::new("32 mm", 0.032),
    PipeSize::new("40 mm", 0.040),
    PipeSize::new("50 mm (2\")", 0.050),
    PipeSize::new("65 mm", 0.065),
    PipeSize::new("80 mm (3\")", 0.080),
    PipeSize::new("100 mm (4\")", 0.100),
];

pub const SUBMAIN_CANDIDATES: [PipeSize; 3] = [
    PipeSize::new("100 mm (4\")", 0.100),
    PipeSize::new("125 mm (5\")", 0.125),
    PipeSize::new("150 mm (6\")", 0.150),
];

pub const MAINLINE_CANDIDATES: [PipeSize; 3] = [
    PipeSize::new("100 mm (4\")", 0.100),
    PipeSize::new("150 mm (6\")", 0.150),
    PipeSize::new("200 mm (8\")", 0.200),
];

/// 사이징 표의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingRow {
    pub nominal: &'static str,
    pub diameter_m: f64,
    pub head_loss_m: f64,
    pub velocity_m_per_s: f64,
}

/// 후보 관경별 손실수두와 유속 표를 만든다.
pub fn sizing_table(
    length_m: f64,
    flow_m3_per_s: f64,
    c: f64,
    candidates: &[PipeSize],
) -> Vec<SizingRow> {
    candidates
        .iter()
        .map(|p| SizingRow {
            nominal: p.nominal,
            diameter_m: p.diameter_m,
            head_loss_m: head_loss_m(length_m, flow_m3_per_s, c, p.diameter_m),
            velocity_m_per_s: velocity_m_per_s(flow_m3_per_s, p.diameter_m),
        })
        .collect()
}
