//! 설계 계산에 쓰이는 고정 물리 상수와 설계 가정값.

/// 중력가속도 [m/s²]
pub const G: f64 = 9.806;
/// 물 밀도 [kg/m³]
pub const RHO_WATER: f64 = 1000.0;
/// 1 m 수두에 해당하는 압력 [kPa/m]
pub const KPA_PER_M_HEAD: f64 = RHO_WATER * G / 1000.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const HOURS_PER_DAY: f64 = 24.0;
/// 1 m³/s = 15,850.323 gpm(US)
pub const GPM_PER_M3S: f64 = 15_850.323;
/// 1 US gal = 3.78541 L
pub const LITERS_PER_GALLON: f64 = 3.78541;
pub const M_PER_FT: f64 = 0.3048;

/// 펌프 효율(가정)
pub const PUMP_EFFICIENCY: f64 = 0.70;
/// BHP 식의 단위 상수: BHP = Q[gpm]·H[ft] / (3960·η)
pub const BHP_DENOMINATOR: f64 = 3960.0;

// 관로 사이징 결과에서 가져온 고정 손실 수두 [m]. 입력 형상과 무관하다.
/// 100 mm 래터럴(반 래터럴) 마찰손실
pub const LATERAL_LOSS_M: f64 = 0.795;
/// 100 mm 서브메인(반 서브메인) 마찰손실
pub const SUBMAIN_LOSS_M: f64 = 0.642;
/// 150 mm 메인라인 1,000 m 마찰손실
pub const MAINLINE_LOSS_M: f64 = 2.574;
/// 솔레노이드 밸브 2.0 m + 펌프 피팅 2.0 m
pub const FITTINGS_LOSS_M: f64 = 4.0;

/// 래터럴당 스프링클러 수(N–S 방향)
pub const SPRINKLERS_PER_LATERAL: u32 = 33;
/// 구역당 래터럴 수(E–W 방향)
pub const LATERALS_PER_ZONE: u32 = 41;
/// 구역당 스프링클러 수. 포장 형상에서 유도하지 않는 고정값이다.
pub const SPRINKLERS_PER_ZONE: u32 = SPRINKLERS_PER_LATERAL * LATERALS_PER_ZONE;
/// 스프링클러 간격 [m]
pub const SPRINKLER_SPACING_M: f64 = 6.1;

/// 펌프 체절 양정 배율(설계 양정 대비)
pub const SHUTOFF_HEAD_FACTOR: f64 = 1.25;
/// 곡선 유량 범위 상한(설계 유량 대비)
pub const CURVE_FLOW_SPAN: f64 = 1.7;
/// Hazen–Williams 유량 지수
pub const HW_FLOW_EXPONENT: f64 = 1.852;
/// 신규 PVC 관 Hazen–Williams C
pub const HW_C_PVC: f64 = 130.0;
/// 메인라인 길이 [m]
pub const MAINLINE_LENGTH_M: f64 = 1000.0;

/// 보고서 원문에 고정 기재된 설계값 묶음.
///
/// 계산기 출력과 별개로 유지하며, 임의 입력에 대해서는 실시간 계산값과 일치하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceDesign {
    pub zone_flow_gpm: f64,
    pub operating_head_m: f64,
    pub operating_head_ft: f64,
    pub end_head_m: f64,
    pub brake_horsepower_note: &'static str,
    pub motor_hp: f64,
    /// (유량 gpm, 양정 ft, 설명)
    pub system_curve_points: [(f64, f64, &'static str); 3],
    pub half_lateral_flow_gpm: f64,
    pub lateral_80mm_loss_m: f64,
}

pub const REFERENCE_DESIGN: ReferenceDesign = ReferenceDesign {
    zone_flow_gpm: 156.35,
    operating_head_m: 18.51,
    operating_head_ft: 60.73,
    end_head_m: 10.50,
    brake_horsepower_note: "156.35 x 60.73 / (3960 x 0.70)",
    motor_hp: 5.0,
    system_curve_points: [
        (125.08, 51.74, "80%"),
        (156.35, 60.73, "100% (design)"),
        (187.62, 72.22, "120%"),
    ],
    half_lateral_flow_gpm: 99.0,
    lateral_80mm_loss_m: 2.36,
};
