use std::io::{self, Write};

use crate::app::{AppError, Session};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::irrigation::{self, DesignInput, DesignResult};
use crate::quantity::QuantityKind;
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Design,
    PumpCurve,
    PressureProfile,
    Report,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_DESIGN,
        keys::MAIN_MENU_PUMP_CURVE,
        keys::MAIN_MENU_PRESSURE_PROFILE,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Design),
            "2" => return Ok(MenuChoice::PumpCurve),
            "3" => return Ok(MenuChoice::PressureProfile),
            "4" => return Ok(MenuChoice::Report),
            "5" => return Ok(MenuChoice::UnitConversion),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 설계 계산 메뉴를 처리한다. 계산 오류는 출력만 하고 메뉴로 돌아간다.
pub fn handle_design(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DESIGN_HEADING));
    println!("{}", tr.t(keys::DESIGN_KEEP_HINT));
    let prev = session.input;
    let input = DesignInput {
        field_length_ew_m: read_f64_or(tr, keys::PROMPT_FIELD_LENGTH, prev.field_length_ew_m)?,
        field_width_ns_m: read_f64_or(tr, keys::PROMPT_FIELD_WIDTH, prev.field_width_ns_m)?,
        et_mm_per_day: read_f64_or(tr, keys::PROMPT_ET, prev.et_mm_per_day)?,
        evaporation_loss_percent: read_f64_or(
            tr,
            keys::PROMPT_EVAPORATION,
            prev.evaporation_loss_percent,
        )?,
        zone_count: read_u32_or(tr, keys::PROMPT_ZONES, prev.zone_count)?,
        min_end_pressure_kpa: read_f64_or(
            tr,
            keys::PROMPT_END_PRESSURE,
            prev.min_end_pressure_kpa,
        )?,
    };
    match session.recompute(input) {
        Ok(result) => print_result(tr, cfg.unit_system, result),
        Err(e) => {
            tracing::warn!(error = %e, "design calculation rejected");
            println!("{}: {e}", tr.t(keys::CALC_ERROR));
        }
    }
    Ok(())
}

/// 계산 결과를 단위 체계에 맞춰 출력한다.
pub fn print_result(tr: &Translator, unit_system: UnitSystem, r: &DesignResult) {
    let row = |key: &str, value: String| println!("{:<24} {value}", tr.t(key));
    row(keys::RESULT_AREA, format!("{:.0} m²", r.area_m2));
    row(keys::RESULT_GROSS_DEPTH, format!("{:.2} mm/day", r.gross_depth_mm_per_day));
    row(keys::RESULT_CROP_VOLUME, format!("{:.1} m³/day", r.crop_volume_m3_per_day));
    row(keys::RESULT_PUMPED_VOLUME, format!("{:.1} m³/day", r.pumped_volume_m3_per_day));
    match unit_system {
        UnitSystem::Metric => {
            row(
                keys::RESULT_TOTAL_FLOW,
                format!(
                    "{:.3} L/s ({:.2} m³/h, {:.2} gpm)",
                    r.total_flow_l_per_s, r.total_flow_m3_per_h, r.total_flow_gpm
                ),
            );
            row(
                keys::RESULT_ZONE_FLOW,
                format!("{:.3} L/s ({:.2} gpm)", r.zone_flow_l_per_s, r.zone_flow_gpm),
            );
        }
        UnitSystem::UsCustomary => {
            row(
                keys::RESULT_TOTAL_FLOW,
                format!("{:.2} gpm ({:.3} L/s)", r.total_flow_gpm, r.total_flow_l_per_s),
            );
            row(
                keys::RESULT_ZONE_FLOW,
                format!("{:.2} gpm ({:.3} L/s)", r.zone_flow_gpm, r.zone_flow_l_per_s),
            );
        }
    }
    row(
        keys::RESULT_SPRINKLERS,
        format!("{} (x{} = {})", r.sprinklers_per_zone, r.zone_count, r.sprinklers_total),
    );
    row(keys::RESULT_SPRINKLER_FLOW, format!("{:.6} L/s", r.sprinkler_flow_l_per_s));
    row(keys::RESULT_END_HEAD, format!("{:.2} m", r.end_head_m));
    row(keys::RESULT_FRICTION, format!("{:.3} m", r.pipe_friction_loss_m()));
    let tdh = match unit_system {
        UnitSystem::Metric => {
            format!("{:.2} m ({:.2} ft)", r.operating_head_m, r.operating_head_ft)
        }
        UnitSystem::UsCustomary => {
            format!("{:.2} ft ({:.2} m)", r.operating_head_ft, r.operating_head_m)
        }
    };
    row(keys::RESULT_TDH, tdh);
    row(keys::RESULT_BHP, format!("{:.2} HP", r.brake_horsepower));
    if let Some(hp) = report::recommended_motor_hp(r.brake_horsepower) {
        row(keys::RESULT_MOTOR, format!("{hp} HP"));
    }
}

/// 표가 너무 길지 않도록 약 10개 간격으로 인덱스를 고른다. 마지막 인덱스는 항상 포함한다.
fn table_indices(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let step = ((len - 1) / 10).max(1);
    let mut idx: Vec<usize> = (0..len).step_by(step).collect();
    if idx.last() != Some(&(len - 1)) {
        idx.push(len - 1);
    }
    idx
}

/// 펌프/시스템 곡선 메뉴를 처리한다.
pub fn handle_pump_curve(tr: &Translator, cfg: &Config, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CURVE_HEADING));
    let Some(result) = session.last_result.as_ref() else {
        println!("{}", tr.t(keys::RESULT_NONE_YET));
        return Ok(());
    };
    match irrigation::curve_for_design(result, cfg.curve_samples) {
        Ok(curve) => {
            println!("{}", tr.t(keys::CURVE_TABLE_HEADER));
            for i in table_indices(curve.flow.len()) {
                println!(
                    "{:>9.3}  {:>9.3}  {:>7.3}",
                    curve.flow[i], curve.system_head[i], curve.pump_head[i]
                );
            }
            let (q, h) = curve.operating_point;
            println!("{}: {q:.3} L/s @ {h:.2} m", tr.t(keys::CURVE_OPERATING_POINT));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::CALC_ERROR)),
    }
    Ok(())
}

/// 래터럴 압력 분포 메뉴를 처리한다.
pub fn handle_pressure_profile(
    tr: &Translator,
    cfg: &Config,
    session: &Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROFILE_HEADING));
    let Some(result) = session.last_result.as_ref() else {
        println!("{}", tr.t(keys::RESULT_NONE_YET));
        return Ok(());
    };
    match irrigation::profile_for_design(
        session.input.min_end_pressure_kpa,
        result,
        cfg.profile_samples,
    ) {
        Ok(profile) => {
            println!("{}", tr.t(keys::PROFILE_TABLE_HEADER));
            for i in table_indices(profile.distance.len()) {
                println!("{:>7.1}  {:>9.2}", profile.distance[i], profile.pressure[i]);
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::CALC_ERROR)),
    }
    Ok(())
}

/// 보고서 저장 메뉴를 처리한다.
pub fn handle_report(tr: &Translator, session: &Session) -> Result<(), AppError> {
    let Some(text) = session.report_text() else {
        println!("{}", tr.t(keys::RESULT_NONE_YET));
        return Ok(());
    };
    let text = text?;
    let path = read_line(&tr.t(keys::REPORT_PROMPT_PATH))?;
    let path = match path.trim() {
        "" => "irrigation_report.txt",
        p => p,
    };
    report::export_report(path, &text)?;
    println!("{} {path}", tr.t(keys::REPORT_SAVED));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(kind) = n.checked_sub(1).and_then(|i| QuantityKind::ALL.get(i)) {
                break *kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{} {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::UsCustomary,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, key: &str, current: f64) -> Result<f64, AppError> {
    let prompt = format!("{} [{current}]: ", tr.t(key));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, key: &str, current: u32) -> Result<u32, AppError> {
    let prompt = format!("{} [{current}]: ", tr.t(key));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
