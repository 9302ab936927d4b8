use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DESIGN: &str = "main_menu.design";
    pub const MAIN_MENU_PUMP_CURVE: &str = "main_menu.pump_curve";
    pub const MAIN_MENU_PRESSURE_PROFILE: &str = "main_menu.pressure_profile";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const DESIGN_HEADING: &str = "design.heading";
    pub const DESIGN_KEEP_HINT: &str = "design.keep_hint";
    pub const PROMPT_FIELD_LENGTH: &str = "prompt.field_length";
    pub const PROMPT_FIELD_WIDTH: &str = "prompt.field_width";
    pub const PROMPT_ET: &str = "prompt.et";
    pub const PROMPT_EVAPORATION: &str = "prompt.evaporation";
    pub const PROMPT_ZONES: &str = "prompt.zones";
    pub const PROMPT_END_PRESSURE: &str = "prompt.end_pressure";

    pub const RESULT_AREA: &str = "result.area";
    pub const RESULT_GROSS_DEPTH: &str = "result.gross_depth";
    pub const RESULT_CROP_VOLUME: &str = "result.crop_volume";
    pub const RESULT_PUMPED_VOLUME: &str = "result.pumped_volume";
    pub const RESULT_TOTAL_FLOW: &str = "result.total_flow";
    pub const RESULT_ZONE_FLOW: &str = "result.zone_flow";
    pub const RESULT_SPRINKLERS: &str = "result.sprinklers";
    pub const RESULT_SPRINKLER_FLOW: &str = "result.sprinkler_flow";
    pub const RESULT_END_HEAD: &str = "result.end_head";
    pub const RESULT_FRICTION: &str = "result.friction";
    pub const RESULT_TDH: &str = "result.tdh";
    pub const RESULT_BHP: &str = "result.bhp";
    pub const RESULT_MOTOR: &str = "result.motor";
    pub const RESULT_NONE_YET: &str = "result.none_yet";
    pub const CALC_ERROR: &str = "error.calculation";

    pub const CURVE_HEADING: &str = "curve.heading";
    pub const CURVE_TABLE_HEADER: &str = "curve.table_header";
    pub const CURVE_OPERATING_POINT: &str = "curve.operating_point";
    pub const PROFILE_HEADING: &str = "profile.heading";
    pub const PROFILE_TABLE_HEADER: &str = "profile.table_header";

    pub const REPORT_PROMPT_PATH: &str = "report.prompt_path";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_INPUTS: &str = "gui.inputs";
    pub const GUI_RUN: &str = "gui.run";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_TAB_LAYOUT: &str = "gui.tab.layout";
    pub const GUI_TAB_PROFILE: &str = "gui.tab.profile";
    pub const GUI_TAB_PUMP: &str = "gui.tab.pump";
    pub const GUI_TAB_REPORT: &str = "gui.tab.report";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_RUN_FIRST: &str = "gui.run_first";
    pub const GUI_SYSTEM_CURVE: &str = "gui.system_curve";
    pub const GUI_PUMP_CURVE: &str = "gui.pump_curve";
    pub const GUI_MAINLINE: &str = "gui.mainline";
    pub const GUI_SUBMAIN: &str = "gui.submain";
    pub const GUI_ZONE: &str = "gui.zone";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        builtin.to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이은 평면 맵으로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Sprinkler Design Toolbox ===",
        MAIN_MENU_DESIGN => "1) 관개 설계 계산",
        MAIN_MENU_PUMP_CURVE => "2) 펌프/시스템 곡선",
        MAIN_MENU_PRESSURE_PROFILE => "3) 래터럴 압력 분포",
        MAIN_MENU_REPORT => "4) 보고서 저장",
        MAIN_MENU_UNIT_CONVERSION => "5) 단위 변환기",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        DESIGN_HEADING => "\n-- 관개 설계 계산 --",
        DESIGN_KEEP_HINT => "엔터를 누르면 [ ] 안의 값을 유지합니다.",
        PROMPT_FIELD_LENGTH => "포장 동서 길이 [m]",
        PROMPT_FIELD_WIDTH => "포장 남북 폭 [m]",
        PROMPT_ET => "설계 작물 증발산량 [mm/day]",
        PROMPT_EVAPORATION => "증발 손실 [%]",
        PROMPT_ZONES => "구역 수",
        PROMPT_END_PRESSURE => "래터럴 말단 압력 [kPa]",
        RESULT_AREA => "포장 면적",
        RESULT_GROSS_DEPTH => "총 관개 깊이",
        RESULT_CROP_VOLUME => "작물 소요수량",
        RESULT_PUMPED_VOLUME => "양수량",
        RESULT_TOTAL_FLOW => "전체 유량",
        RESULT_ZONE_FLOW => "운전 구역 유량",
        RESULT_SPRINKLERS => "구역당 스프링클러 수",
        RESULT_SPRINKLER_FLOW => "스프링클러 토출량",
        RESULT_END_HEAD => "말단 필요 수두",
        RESULT_FRICTION => "배관 마찰손실 합계",
        RESULT_TDH => "전양정(TDH)",
        RESULT_BHP => "축동력(BHP)",
        RESULT_MOTOR => "추천 전동기",
        RESULT_NONE_YET => "먼저 설계 계산을 실행하세요.",
        CALC_ERROR => "계산 오류",
        CURVE_HEADING => "\n-- 펌프/시스템 곡선 --",
        CURVE_TABLE_HEADER => "유량[L/s]  시스템[m]  펌프[m]",
        CURVE_OPERATING_POINT => "운전점",
        PROFILE_HEADING => "\n-- 래터럴 압력 분포 --",
        PROFILE_TABLE_HEADER => "거리[m]  압력[kPa]",
        REPORT_PROMPT_PATH => "저장할 파일 경로 (기본 irrigation_report.txt): ",
        REPORT_SAVED => "보고서를 저장했습니다:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 유량  2) 길이/수두  3) 압력  4) 면적  5) 체적  6) 동력",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: gpm, m, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: L/s, ft, psi): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 체계:",
        SETTINGS_OPTIONS => "1) Metric  2) US Customary",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 체계가 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        GUI_TITLE => "스프링클러 관개 설계",
        GUI_INPUTS => "입력값",
        GUI_RUN => "계산 실행",
        GUI_RESULTS => "계산 결과",
        GUI_TAB_LAYOUT => "포장 배치",
        GUI_TAB_PROFILE => "압력 분포",
        GUI_TAB_PUMP => "펌프 곡선",
        GUI_TAB_REPORT => "보고서",
        GUI_EXPORT => "보고서 저장",
        GUI_RUN_FIRST => "먼저 계산을 실행하세요.",
        GUI_SYSTEM_CURVE => "시스템 곡선",
        GUI_PUMP_CURVE => "펌프 곡선(추정)",
        GUI_MAINLINE => "메인라인",
        GUI_SUBMAIN => "서브메인",
        GUI_ZONE => "구역",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Sprinkler Design Toolbox ===",
        MAIN_MENU_DESIGN => "1) Irrigation design",
        MAIN_MENU_PUMP_CURVE => "2) Pump / system curves",
        MAIN_MENU_PRESSURE_PROFILE => "3) Lateral pressure profile",
        MAIN_MENU_REPORT => "4) Save report",
        MAIN_MENU_UNIT_CONVERSION => "5) Unit converter",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        DESIGN_HEADING => "\n-- Irrigation Design --",
        DESIGN_KEEP_HINT => "Press enter to keep the value in [ ].",
        PROMPT_FIELD_LENGTH => "Field length E-W [m]",
        PROMPT_FIELD_WIDTH => "Field width N-S [m]",
        PROMPT_ET => "Design crop ET [mm/day]",
        PROMPT_EVAPORATION => "Evaporation loss [%]",
        PROMPT_ZONES => "Number of zones",
        PROMPT_END_PRESSURE => "End-of-lateral pressure [kPa]",
        RESULT_AREA => "Field area",
        RESULT_GROSS_DEPTH => "Gross irrigation depth",
        RESULT_CROP_VOLUME => "Crop water volume",
        RESULT_PUMPED_VOLUME => "Pumped volume",
        RESULT_TOTAL_FLOW => "Total flow",
        RESULT_ZONE_FLOW => "Active zone flow",
        RESULT_SPRINKLERS => "Sprinklers per zone",
        RESULT_SPRINKLER_FLOW => "Sprinkler discharge",
        RESULT_END_HEAD => "Required end head",
        RESULT_FRICTION => "Total pipe friction",
        RESULT_TDH => "Total dynamic head",
        RESULT_BHP => "Brake horsepower",
        RESULT_MOTOR => "Recommended motor",
        RESULT_NONE_YET => "Run the design calculation first.",
        CALC_ERROR => "Calculation error",
        CURVE_HEADING => "\n-- Pump / System Curves --",
        CURVE_TABLE_HEADER => "Flow[L/s]  System[m]  Pump[m]",
        CURVE_OPERATING_POINT => "Operating point",
        PROFILE_HEADING => "\n-- Lateral Pressure Profile --",
        PROFILE_TABLE_HEADER => "Distance[m]  Pressure[kPa]",
        REPORT_PROMPT_PATH => "File path to save (default irrigation_report.txt): ",
        REPORT_SAVED => "Report saved:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Flow  2) Length/head  3) Pressure  4) Area  5) Volume  6) Power",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: gpm, m, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: L/s, ft, psi): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric  2) US Customary",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        GUI_TITLE => "Sprinkler Irrigation Design",
        GUI_INPUTS => "Inputs",
        GUI_RUN => "Run calculations",
        GUI_RESULTS => "Results",
        GUI_TAB_LAYOUT => "Field layout",
        GUI_TAB_PROFILE => "Pressure profile",
        GUI_TAB_PUMP => "Pump curves",
        GUI_TAB_REPORT => "Report",
        GUI_EXPORT => "Save report",
        GUI_RUN_FIRST => "Run the calculations first.",
        GUI_SYSTEM_CURVE => "System curve",
        GUI_PUMP_CURVE => "Pump curve (estimated)",
        GUI_MAINLINE => "Mainline",
        GUI_SUBMAIN => "Submain",
        GUI_ZONE => "Zone",
        _ => return None,
    })
}
