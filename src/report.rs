//! 계산 결과를 평문 보고서로 정리하고 파일로 내보낸다.

use std::fmt::Write;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::irrigation::constants::*;
use crate::irrigation::hazen_williams::{self, SizingRow};
use crate::irrigation::{friction_scaled_system_points, DesignInput, DesignResult};
use crate::units::{convert_area, convert_power, AreaUnit, PowerUnit};

/// 표준 전동기 용량 [HP]
pub const STANDARD_MOTOR_HP: [f64; 16] = [
    1.0, 1.5, 2.0, 3.0, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 75.0, 100.0,
];

/// 시스템 곡선 표에 쓰는 설계 유량 대비 비율
pub const SYSTEM_CURVE_RATIOS: [f64; 3] = [0.8, 1.0, 1.2];

/// 보고서 작성/저장 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("보고서 저장 실패: {0}")]
    Io(#[from] std::io::Error),
    #[error("보고서 서식 오류")]
    Format(#[from] std::fmt::Error),
}

/// 축동력 이상인 가장 작은 표준 전동기 용량을 고른다. 표 범위를 넘으면 `None`.
pub fn recommended_motor_hp(bhp: f64) -> Option<f64> {
    STANDARD_MOTOR_HP.iter().copied().find(|&hp| hp >= bhp)
}

/// 계산 근거를 설명할 수 있는 결과 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultField {
    Area,
    GrossDepth,
    PumpedVolume,
    TotalFlow,
    ZoneFlow,
    Sprinklers,
    EndHead,
    Tdh,
    Bhp,
    Motor,
}

/// 결과 항목 하나의 계산식을 실제 값으로 채워 한 줄로 돌려준다.
pub fn justification(field: ResultField, input: &DesignInput, r: &DesignResult) -> String {
    match field {
        ResultField::Area => format!(
            "A = {:.1} m x {:.1} m = {:.0} m^2",
            input.field_length_ew_m, input.field_width_ns_m, r.area_m2
        ),
        ResultField::GrossDepth => format!(
            "ET / (1 - {:.2}) = {:.2} / {:.2} = {:.2} mm/day",
            input.evaporation_loss_percent / 100.0,
            input.et_mm_per_day,
            1.0 - input.evaporation_loss_percent / 100.0,
            r.gross_depth_mm_per_day
        ),
        ResultField::PumpedVolume => format!(
            "V_pump = A x ET / (1 - f) = {:.1} / {:.2} = {:.1} m^3/day",
            r.crop_volume_m3_per_day,
            1.0 - input.evaporation_loss_percent / 100.0,
            r.pumped_volume_m3_per_day
        ),
        ResultField::TotalFlow => format!(
            "Q = {:.1} m^3/day / {SECONDS_PER_DAY:.0} s x {GPM_PER_M3S} = {:.2} gpm",
            r.pumped_volume_m3_per_day, r.total_flow_gpm
        ),
        ResultField::ZoneFlow => format!(
            "Q_zone = {:.2} gpm / {} zones = {:.2} gpm",
            r.total_flow_gpm, r.zone_count, r.zone_flow_gpm
        ),
        ResultField::Sprinklers => format!(
            "{LATERALS_PER_ZONE} laterals x {SPRINKLERS_PER_LATERAL} sprinklers = {} per zone, x {} zones = {}",
            r.sprinklers_per_zone, r.zone_count, r.sprinklers_total
        ),
        ResultField::EndHead => format!(
            "H_end = {:.1} kPa / {KPA_PER_M_HEAD:.3} kPa/m = {:.2} m",
            input.min_end_pressure_kpa, r.end_head_m
        ),
        ResultField::Tdh => format!(
            "TDH = {:.2} + {:.3} + {:.3} + {:.3} + {:.1} = {:.2} m = {:.2} ft",
            r.end_head_m,
            r.lateral_loss_m,
            r.submain_loss_m,
            r.mainline_loss_m,
            r.fittings_loss_m,
            r.operating_head_m,
            r.operating_head_ft
        ),
        ResultField::Bhp => format!(
            "BHP = {:.2} gpm x {:.2} ft / ({BHP_DENOMINATOR:.0} x {PUMP_EFFICIENCY:.2}) = {:.2} HP",
            r.zone_flow_gpm, r.operating_head_ft, r.brake_horsepower
        ),
        ResultField::Motor => match recommended_motor_hp(r.brake_horsepower) {
            Some(hp) => format!("Smallest standard motor >= {:.2} HP: {hp} HP", r.brake_horsepower),
            None => format!("{:.2} HP exceeds the standard motor table", r.brake_horsepower),
        },
    }
}

/// 구간별 Hazen–Williams 사이징 표.
#[derive(Debug, Clone)]
pub struct SizingTables {
    pub half_lateral_length_m: f64,
    pub half_lateral_flow_m3_per_s: f64,
    pub lateral: Vec<SizingRow>,
    pub half_submain_length_m: f64,
    pub half_submain_flow_m3_per_s: f64,
    pub submain: Vec<SizingRow>,
    pub mainline_flow_m3_per_s: f64,
    pub mainline: Vec<SizingRow>,
}

/// 구역 유량을 배관 계통에 나눠 실제 유량 기준 사이징 표를 만든다.
///
/// 래터럴과 서브메인은 중앙 급수이므로 절반 길이에 절반 유량이 흐른다.
pub fn sizing_tables(result: &DesignResult) -> SizingTables {
    let zone_flow_m3s = result.zone_flow_l_per_s / 1000.0;
    let half_lateral_flow = zone_flow_m3s / f64::from(LATERALS_PER_ZONE) / 2.0;
    let half_lateral_length = result.zone_length_ns_m / 2.0;
    let half_submain_flow = zone_flow_m3s / 2.0;
    let half_submain_length = result.zone_length_ew_m / 2.0;

    SizingTables {
        half_lateral_length_m: half_lateral_length,
        half_lateral_flow_m3_per_s: half_lateral_flow,
        lateral: hazen_williams::sizing_table(
            half_lateral_length,
            half_lateral_flow,
            HW_C_PVC,
            &hazen_williams::LATERAL_CANDIDATES,
        ),
        half_submain_length_m: half_submain_length,
        half_submain_flow_m3_per_s: half_submain_flow,
        submain: hazen_williams::sizing_table(
            half_submain_length,
            half_submain_flow,
            HW_C_PVC,
            &hazen_williams::SUBMAIN_CANDIDATES,
        ),
        mainline_flow_m3_per_s: zone_flow_m3s,
        mainline: hazen_williams::sizing_table(
            MAINLINE_LENGTH_M,
            zone_flow_m3s,
            HW_C_PVC,
            &hazen_williams::MAINLINE_CANDIDATES,
        ),
    }
}

fn write_sizing(out: &mut String, title: &str, rows: &[SizingRow]) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "Nominal | D (m) | hf (m) | velocity (m/s)")?;
    writeln!(out, "---|---|---|---")?;
    for row in rows {
        writeln!(
            out,
            "{} | {:.3} | {:.3} | {:.3}",
            row.nominal, row.diameter_m, row.head_loss_m, row.velocity_m_per_s
        )?;
    }
    writeln!(out)
}

/// 입력과 계산 결과로 보고서 본문을 만든다.
pub fn build_report(input: &DesignInput, r: &DesignResult) -> Result<String, ReportError> {
    let mut out = String::new();
    let acres = convert_area(r.area_m2, AreaUnit::SquareMeter, AreaUnit::Acre);

    writeln!(out, "SPRINKLER IRRIGATION DESIGN REPORT")?;
    writeln!(out)?;
    writeln!(out, "1. Data given")?;
    writeln!(out, "* Field length (E-W) = {:.1} m", input.field_length_ew_m)?;
    writeln!(out, "* Field width (N-S) = {:.1} m", input.field_width_ns_m)?;
    writeln!(out, "* Design crop ET = {:.2} mm/day", input.et_mm_per_day)?;
    writeln!(out, "* Evaporation loss = {:.1} %", input.evaporation_loss_percent)?;
    writeln!(out, "* Number of zones = {} (one active at a time)", input.zone_count)?;
    writeln!(out, "* End-of-lateral pressure = {:.1} kPa", input.min_end_pressure_kpa)?;
    writeln!(out)?;

    writeln!(out, "2. Crop water requirement and pump flow")?;
    writeln!(out, "* Area = {:.0} m^2 (= {:.2} acres)", r.area_m2, acres)?;
    writeln!(out, "* Gross irrigation depth = {:.2} mm/day", r.gross_depth_mm_per_day)?;
    writeln!(out, "* V_crop = A x ET = {:.1} m^3/day", r.crop_volume_m3_per_day)?;
    writeln!(
        out,
        "* V_pump = V_crop / (1 - {:.2}) = {:.3} m^3/day",
        input.evaporation_loss_percent / 100.0,
        r.pumped_volume_m3_per_day
    )?;
    writeln!(
        out,
        "* Q_total = {:.7} m^3/s = {:.3} L/s = {:.3} m^3/hr = {:.2} gpm",
        r.total_flow_m3_per_s, r.total_flow_l_per_s, r.total_flow_m3_per_h, r.total_flow_gpm
    )?;
    writeln!(out)?;

    writeln!(out, "3. Zone geometry and sprinkler counts")?;
    writeln!(
        out,
        "* Zone size = {:.1} m (E-W) x {:.1} m (N-S), sprinkler spacing {:.1} m",
        r.zone_length_ew_m, r.zone_length_ns_m, SPRINKLER_SPACING_M
    )?;
    writeln!(
        out,
        "* {} laterals x {} sprinklers/lateral = {} sprinklers per zone (fixed grid)",
        LATERALS_PER_ZONE, SPRINKLERS_PER_LATERAL, r.sprinklers_per_zone
    )?;
    writeln!(out, "* Total sprinklers = {}", r.sprinklers_total)?;
    writeln!(
        out,
        "* Q_zone = Q_total / {} = {:.2} gpm = {:.3} L/s",
        r.zone_count, r.zone_flow_gpm, r.zone_flow_l_per_s
    )?;
    writeln!(out, "* q_s = Q_zone / N_spr = {:.6} L/s", r.sprinkler_flow_l_per_s)?;
    writeln!(out)?;

    let tables = sizing_tables(r);
    writeln!(out, "4. Pipe sizing (Hazen-Williams, C = {HW_C_PVC:.0})")?;
    writeln!(out, "h_f = 10.67 * L * Q^1.852 / (C^1.852 * D^4.87)")?;
    writeln!(out)?;
    write_sizing(
        &mut out,
        &format!(
            "Half-lateral: Q = {:.6} m^3/s over {:.1} m",
            tables.half_lateral_flow_m3_per_s, tables.half_lateral_length_m
        ),
        &tables.lateral,
    )?;
    write_sizing(
        &mut out,
        &format!(
            "Half-submain: Q = {:.6} m^3/s over {:.1} m",
            tables.half_submain_flow_m3_per_s, tables.half_submain_length_m
        ),
        &tables.submain,
    )?;
    write_sizing(
        &mut out,
        &format!(
            "Mainline: Q = {:.6} m^3/s over {:.0} m",
            tables.mainline_flow_m3_per_s, MAINLINE_LENGTH_M
        ),
        &tables.mainline,
    )?;

    writeln!(out, "5. Total dynamic head")?;
    writeln!(
        out,
        "* H_end = {:.1} kPa / {:.3} = {:.3} m",
        input.min_end_pressure_kpa, KPA_PER_M_HEAD, r.end_head_m
    )?;
    writeln!(out, "* Half-lateral friction (100 mm) = {:.3} m", r.lateral_loss_m)?;
    writeln!(out, "* Half-submain friction (100 mm) = {:.3} m", r.submain_loss_m)?;
    writeln!(out, "* Mainline friction (150 mm, 1,000 m) = {:.3} m", r.mainline_loss_m)?;
    writeln!(out, "* Valve and pump fittings = {:.1} m", r.fittings_loss_m)?;
    writeln!(
        out,
        "TDH = {:.3} m = {:.2} ft",
        r.operating_head_m, r.operating_head_ft
    )?;
    writeln!(out)?;

    writeln!(out, "6. System curve (losses scaled with (Q/Q_design)^1.852)")?;
    writeln!(out, "Flow (gpm) | TDH (m) | TDH (ft) | Share of design flow")?;
    writeln!(out, "---|---|---|---")?;
    for p in friction_scaled_system_points(r, &SYSTEM_CURVE_RATIOS) {
        writeln!(
            out,
            "{:.2} | {:.2} | {:.2} | {:.0}%",
            p.flow_gpm,
            p.head_m,
            p.head_ft,
            p.ratio * 100.0
        )?;
    }
    writeln!(out)?;

    writeln!(out, "7. Pump and motor")?;
    writeln!(
        out,
        "BHP = Q(gpm) x H(ft) / ({BHP_DENOMINATOR:.0} x {PUMP_EFFICIENCY:.2}) = {:.2} x {:.2} / {:.0} = {:.2} HP ({:.2} kW)",
        r.zone_flow_gpm,
        r.operating_head_ft,
        BHP_DENOMINATOR * PUMP_EFFICIENCY,
        r.brake_horsepower,
        convert_power(r.brake_horsepower, PowerUnit::Horsepower, PowerUnit::Kilowatt)
    )?;
    match recommended_motor_hp(r.brake_horsepower) {
        Some(hp) => writeln!(out, "Recommended motor: {hp} HP (next standard size)")?,
        None => writeln!(out, "Recommended motor: above the standard table, size individually")?,
    }
    writeln!(out)?;

    let reference = &REFERENCE_DESIGN;
    writeln!(out, "8. Reference design (fixed values)")?;
    writeln!(
        out,
        "These values are carried over from the source design document and do not track the inputs above."
    )?;
    writeln!(out, "* Zone flow = {:.2} gpm", reference.zone_flow_gpm)?;
    writeln!(out, "* Half-lateral flow = {:.0} gpm", reference.half_lateral_flow_gpm)?;
    writeln!(out, "* 80 mm lateral loss = {:.2} m", reference.lateral_80mm_loss_m)?;
    writeln!(out, "* H_end = {:.2} m", reference.end_head_m)?;
    writeln!(
        out,
        "* TDH = {:.2} m = {:.2} ft",
        reference.operating_head_m, reference.operating_head_ft
    )?;
    writeln!(out, "* BHP = {}", reference.brake_horsepower_note)?;
    writeln!(out, "* Motor = {} HP", reference.motor_hp)?;
    writeln!(out, "Flow (gpm) | TDH (ft) | Comment")?;
    writeln!(out, "---|---|---")?;
    for (q, h, comment) in reference.system_curve_points {
        writeln!(out, "{q:.2} | {h:.2} | {comment}")?;
    }
    let drift = (r.zone_flow_gpm - reference.zone_flow_gpm).abs();
    if drift > 0.01 {
        writeln!(
            out,
            "Note: live zone flow differs from the reference by {drift:.2} gpm."
        )?;
    }

    Ok(out)
}

/// 보고서 본문을 평문 파일로 저장한다.
pub fn export_report(path: impl AsRef<Path>, text: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "report exported");
    Ok(())
}
