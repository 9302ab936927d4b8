#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use sprinkler_design_toolbox::{
    config::{self, UnitSystem},
    i18n::{self, keys},
    irrigation::{
        self, layout::FieldLayout, DesignInput, DesignResult, PressureProfile, PumpSystemCurve,
    },
    logging,
    report::{self, ResultField},
    units::{convert_flow, convert_length, FlowUnit, LengthUnit},
};
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko)
    let mut cli_lang: Option<String> = None;
    let mut debug = false;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        } else if a == "--debug" {
            debug = true;
        }
        i += 1;
    }
    if let Err(e) = logging::setup_tracing(debug) {
        eprintln!("Logging error: {e}");
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "config load failed, using defaults");
            config::Config::default()
        }
    };
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Sprinkler Design Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 기본 폰트 뒤에 대체 글꼴로 붙인다.
/// 찾지 못하면 Err를 돌려주고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; using default font".into())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Layout,
    Profile,
    Pump,
    Report,
}

/// 한 번의 계산으로 얻은 결과 묶음. 다음 계산 전까지 그대로 유지된다.
struct Computed {
    input: DesignInput,
    result: DesignResult,
    layout: FieldLayout,
    profile: PressureProfile,
    curve: PumpSystemCurve,
    report: String,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    input: DesignInput,
    computed: Option<Computed>,
    error: Option<String>,
    status: Option<String>,
    tab: Tab,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        Self {
            input: config.last_input,
            config,
            tr,
            computed: None,
            error: None,
            status: None,
            tab: Tab::Layout,
        }
    }

    /// 입력값으로 설계/곡선/분포/보고서를 한꺼번에 계산한다.
    fn run_design(&mut self) {
        self.status = None;
        match self.compute() {
            Ok(c) => {
                self.computed = Some(c);
                self.error = None;
                self.config.last_input = self.input;
                if let Err(e) = self.config.save() {
                    tracing::warn!(error = %e, "config save failed");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "design calculation rejected");
                self.computed = None;
                self.error = Some(e);
            }
        }
    }

    fn compute(&self) -> Result<Computed, String> {
        let input = self.input;
        let result = irrigation::compute_design(&input).map_err(|e| e.to_string())?;
        let profile = irrigation::profile_for_design(
            input.min_end_pressure_kpa,
            &result,
            self.config.profile_samples,
        )
        .map_err(|e| e.to_string())?;
        let curve = irrigation::curve_for_design(&result, self.config.curve_samples)
            .map_err(|e| e.to_string())?;
        let report = report::build_report(&input, &result).map_err(|e| e.to_string())?;
        Ok(Computed {
            input,
            layout: irrigation::layout::field_layout(&input),
            result,
            profile,
            curve,
            report,
        })
    }

    fn export_report(&mut self) {
        let Some(c) = self.computed.as_ref() else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("irrigation_report.txt")
            .save_file()
        else {
            return;
        };
        self.status = Some(match report::export_report(&path, &c.report) {
            Ok(()) => format!("{} {}", self.tr.t(keys::REPORT_SAVED), path.display()),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_INPUTS));
        ui.add_space(6.0);
        egui::Grid::new("design_inputs")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::PROMPT_FIELD_LENGTH));
                ui.add(egui::DragValue::new(&mut self.input.field_length_ew_m).speed(5.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_FIELD_WIDTH));
                ui.add(egui::DragValue::new(&mut self.input.field_width_ns_m).speed(5.0));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_ET));
                ui.add(egui::DragValue::new(&mut self.input.et_mm_per_day).speed(0.1));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_EVAPORATION));
                ui.add(egui::DragValue::new(&mut self.input.evaporation_loss_percent).speed(0.5));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_ZONES));
                ui.add(egui::DragValue::new(&mut self.input.zone_count).speed(0.1));
                ui.end_row();
                ui.label(tr.t(keys::PROMPT_END_PRESSURE));
                ui.add(egui::DragValue::new(&mut self.input.min_end_pressure_kpa).speed(1.0));
                ui.end_row();
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(tr.t(keys::GUI_RUN)).clicked() {
                self.run_design();
            }
            if ui.button("↺").on_hover_text("defaults").clicked() {
                self.input = DesignInput::default();
            }
        });
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.config.unit_system, UnitSystem::Metric, "Metric");
            ui.selectable_value(&mut self.config.unit_system, UnitSystem::UsCustomary, "US");
        });
        if let Some(err) = &self.error {
            ui.colored_label(
                egui::Color32::LIGHT_RED,
                format!("{}: {err}", tr.t(keys::CALC_ERROR)),
            );
        }
        ui.separator();
        ui.heading(tr.t(keys::GUI_RESULTS));
        match &self.computed {
            Some(c) => results_grid(ui, &tr, self.config.unit_system, &c.input, &c.result),
            None => {
                ui.label(tr.t(keys::GUI_RUN_FIRST));
            }
        }
    }

    fn ui_tabs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.horizontal(|ui| {
            for (tab, key) in [
                (Tab::Layout, keys::GUI_TAB_LAYOUT),
                (Tab::Profile, keys::GUI_TAB_PROFILE),
                (Tab::Pump, keys::GUI_TAB_PUMP),
                (Tab::Report, keys::GUI_TAB_REPORT),
            ] {
                ui.selectable_value(&mut self.tab, tab, tr.t(key));
            }
        });
        ui.separator();
        let Some(c) = self.computed.as_ref() else {
            ui.label(tr.t(keys::GUI_RUN_FIRST));
            return;
        };
        match self.tab {
            Tab::Layout => draw_layout(ui, &tr, &c.layout, c.input.zone_count),
            Tab::Profile => {
                let p = &c.profile;
                draw_line_chart(
                    ui,
                    &[ChartSeries {
                        x: &p.distance,
                        y: &p.pressure,
                        color: egui::Color32::LIGHT_BLUE,
                        label: tr.t(keys::PROFILE_HEADING).trim().to_string(),
                    }],
                    "m",
                    "kPa",
                    (None, None),
                    None,
                );
            }
            Tab::Pump => {
                let curve = &c.curve;
                draw_line_chart(
                    ui,
                    &[
                        ChartSeries {
                            x: &curve.flow,
                            y: &curve.system_head,
                            color: egui::Color32::LIGHT_GREEN,
                            label: tr.t(keys::GUI_SYSTEM_CURVE),
                        },
                        ChartSeries {
                            x: &curve.flow,
                            y: &curve.pump_head,
                            color: egui::Color32::from_rgb(255, 170, 60),
                            label: tr.t(keys::GUI_PUMP_CURVE),
                        },
                    ],
                    "L/s",
                    "m",
                    (
                        Some(("gpm", convert_flow(1.0, FlowUnit::LiterPerSecond, FlowUnit::Gpm))),
                        Some(("ft", convert_length(1.0, LengthUnit::Meter, LengthUnit::Foot))),
                    ),
                    Some(curve.operating_point),
                );
                let (q, h) = curve.operating_point;
                ui.label(format!(
                    "{}: {q:.3} L/s @ {h:.2} m",
                    tr.t(keys::CURVE_OPERATING_POINT)
                ));
            }
            Tab::Report => {
                let mut text = c.report.clone();
                let export = ui.button(tr.t(keys::GUI_EXPORT)).clicked();
                if let Some(s) = &self.status {
                    ui.label(s);
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .interactive(false),
                    );
                });
                if export {
                    self.export_report();
                }
            }
        }
    }
}

fn results_grid(
    ui: &mut egui::Ui,
    tr: &i18n::Translator,
    units: UnitSystem,
    input: &DesignInput,
    r: &DesignResult,
) {
    let mut rows = vec![
        (keys::RESULT_AREA, ResultField::Area, format!("{:.0} m²", r.area_m2)),
        (
            keys::RESULT_GROSS_DEPTH,
            ResultField::GrossDepth,
            format!("{:.2} mm/day", r.gross_depth_mm_per_day),
        ),
        (
            keys::RESULT_PUMPED_VOLUME,
            ResultField::PumpedVolume,
            format!("{:.1} m³/day", r.pumped_volume_m3_per_day),
        ),
    ];
    let (total, zone, tdh) = match units {
        UnitSystem::Metric => (
            format!("{:.3} L/s", r.total_flow_l_per_s),
            format!("{:.3} L/s", r.zone_flow_l_per_s),
            format!("{:.2} m", r.operating_head_m),
        ),
        UnitSystem::UsCustomary => (
            format!("{:.2} gpm", r.total_flow_gpm),
            format!("{:.2} gpm", r.zone_flow_gpm),
            format!("{:.2} ft", r.operating_head_ft),
        ),
    };
    rows.push((keys::RESULT_TOTAL_FLOW, ResultField::TotalFlow, total));
    rows.push((keys::RESULT_ZONE_FLOW, ResultField::ZoneFlow, zone));
    rows.push((keys::RESULT_TDH, ResultField::Tdh, tdh));
    rows.push((
        keys::RESULT_SPRINKLERS,
        ResultField::Sprinklers,
        r.sprinklers_total.to_string(),
    ));
    rows.push((
        keys::RESULT_END_HEAD,
        ResultField::EndHead,
        format!("{:.2} m", r.end_head_m),
    ));
    rows.push((
        keys::RESULT_BHP,
        ResultField::Bhp,
        format!("{:.2} HP", r.brake_horsepower),
    ));
    if let Some(hp) = report::recommended_motor_hp(r.brake_horsepower) {
        rows.push((keys::RESULT_MOTOR, ResultField::Motor, format!("{hp} HP")));
    }
    egui::Grid::new("design_results")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            for (key, field, value) in rows {
                ui.label(tr.t(key));
                ui.strong(value);
                ui.small("ⓘ").on_hover_text(report::justification(field, input, r));
                ui.end_row();
            }
        });
}

/// 보조 축: (단위, 주 축 값에 곱할 배율)
type SecondaryAxis<'a> = Option<(&'a str, f64)>;

struct ChartSeries<'a> {
    x: &'a [f64],
    y: &'a [f64],
    color: egui::Color32,
    label: String,
}

fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}

/// x/y 배열 쌍을 축 눈금과 함께 선 그래프로 그린다.
fn draw_line_chart(
    ui: &mut egui::Ui,
    series: &[ChartSeries<'_>],
    x_unit: &str,
    y_unit: &str,
    secondary: (SecondaryAxis<'_>, SecondaryAxis<'_>),
    marker: Option<(f64, f64)>,
) {
    ui.horizontal(|ui| {
        for s in series {
            legend_item(ui, s.color, &s.label);
        }
    });
    let size = egui::vec2(ui.available_width(), (ui.available_height() - 30.0).max(200.0));
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (0.0_f64, f64::NEG_INFINITY);
    for s in series {
        for &x in s.x {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        for &y in s.y {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_max.is_finite() || x_max <= x_min || !y_max.is_finite() || y_max <= y_min {
        return;
    }
    y_max *= 1.05;

    let (secondary_x, secondary_y) = secondary;
    let plot = rect.shrink2(egui::vec2(48.0, 24.0));
    let to_screen = |x: f64, y: f64| {
        egui::pos2(
            plot.min.x + ((x - x_min) / (x_max - x_min)) as f32 * plot.width(),
            plot.max.y - ((y - y_min) / (y_max - y_min)) as f32 * plot.height(),
        )
    };
    let grid = egui::Stroke::new(0.3, egui::Color32::from_gray(70));
    let text_color = egui::Color32::from_gray(200);
    let font = egui::FontId::monospace(11.0);
    for i in 0..=4 {
        let t = i as f64 / 4.0;
        let y = y_min + t * (y_max - y_min);
        let p = to_screen(x_min, y);
        painter.line_segment([p, egui::pos2(plot.max.x, p.y)], grid);
        painter.text(
            egui::pos2(plot.min.x - 4.0, p.y),
            egui::Align2::RIGHT_CENTER,
            format!("{y:.1}"),
            font.clone(),
            text_color,
        );
        let x = x_min + t * (x_max - x_min);
        let q = to_screen(x, y_min);
        painter.line_segment([egui::pos2(q.x, plot.min.y), q], grid);
        painter.text(
            egui::pos2(q.x, plot.max.y + 4.0),
            egui::Align2::CENTER_TOP,
            format!("{x:.1}"),
            font.clone(),
            text_color,
        );
        if let Some((_, factor)) = secondary_y {
            painter.text(
                egui::pos2(plot.max.x + 4.0, p.y),
                egui::Align2::LEFT_CENTER,
                format!("{:.1}", y * factor),
                font.clone(),
                text_color,
            );
        }
        if let Some((_, factor)) = secondary_x {
            painter.text(
                egui::pos2(q.x, plot.min.y - 4.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{:.1}", x * factor),
                font.clone(),
                text_color,
            );
        }
    }
    if let Some((unit, _)) = secondary_y {
        painter.text(
            egui::pos2(plot.max.x + 4.0, plot.max.y + 4.0),
            egui::Align2::LEFT_TOP,
            unit,
            font.clone(),
            text_color,
        );
    }
    if let Some((unit, _)) = secondary_x {
        painter.text(
            egui::pos2(plot.max.x + 4.0, plot.min.y - 4.0),
            egui::Align2::LEFT_BOTTOM,
            unit,
            font.clone(),
            text_color,
        );
    }
    painter.text(
        egui::pos2(plot.max.x, plot.max.y + 4.0),
        egui::Align2::RIGHT_TOP,
        x_unit,
        font.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(plot.min.x - 4.0, plot.min.y - 4.0),
        egui::Align2::RIGHT_BOTTOM,
        y_unit,
        font,
        text_color,
    );

    for s in series {
        let points: Vec<egui::Pos2> = s
            .x
            .iter()
            .zip(s.y)
            .map(|(&x, &y)| to_screen(x, y))
            .collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.8, s.color)));
    }
    if let Some((x, y)) = marker {
        painter.circle_filled(to_screen(x, y), 4.5, egui::Color32::RED);
    }
}

/// 포장 경계, 구역, 메인라인/서브메인을 축척에 맞춰 그린다.
fn draw_layout(ui: &mut egui::Ui, tr: &i18n::Translator, layout: &FieldLayout, zone_count: u32) {
    let main_color = egui::Color32::from_rgb(80, 160, 255);
    let sub_color = egui::Color32::from_rgb(120, 220, 120);
    ui.horizontal(|ui| {
        legend_item(ui, main_color, &tr.t(keys::GUI_MAINLINE));
        legend_item(ui, sub_color, &tr.t(keys::GUI_SUBMAIN));
        ui.label(format!(
            "{:.0} m × {:.0} m, {zone_count} {}",
            layout.length_ew_m,
            layout.width_ns_m,
            tr.t(keys::GUI_ZONE)
        ));
    });
    let avail = ui.available_size();
    let (rect, _) = ui.allocate_exact_size(avail, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let area = rect.shrink(20.0);
    let scale = (area.width() as f64 / layout.length_ew_m)
        .min(area.height() as f64 / layout.width_ns_m) as f32;
    let field = egui::Rect::from_center_size(
        area.center(),
        egui::vec2(
            layout.length_ew_m as f32 * scale,
            layout.width_ns_m as f32 * scale,
        ),
    );
    // y는 북쪽이 위가 되도록 뒤집는다
    let to_screen = |(x, y): (f64, f64)| {
        egui::pos2(
            field.min.x + x as f32 * scale,
            field.max.y - y as f32 * scale,
        )
    };
    painter.rect_filled(field, 0.0, egui::Color32::from_rgb(40, 60, 35));
    painter.rect_stroke(field, 0.0, egui::Stroke::new(1.5, egui::Color32::from_gray(200)));
    for b in &layout.zone_boundaries {
        painter.add(egui::Shape::dashed_line(
            &[to_screen(b.from), to_screen(b.to)],
            egui::Stroke::new(1.0, egui::Color32::from_gray(170)),
            6.0,
            4.0,
        ));
    }
    for s in &layout.submains {
        painter.line_segment(
            [to_screen(s.from), to_screen(s.to)],
            egui::Stroke::new(2.0, sub_color),
        );
    }
    let m = &layout.mainline;
    painter.line_segment(
        [to_screen(m.from), to_screen(m.to)],
        egui::Stroke::new(3.0, main_color),
    );
    for (n, pos) in &layout.zone_labels {
        painter.text(
            to_screen(*pos),
            egui::Align2::CENTER_CENTER,
            format!("{} {n}", tr.t(keys::GUI_ZONE)),
            egui::FontId::proportional(15.0),
            egui::Color32::WHITE,
        );
    }
    painter.text(
        egui::pos2(field.max.x, field.min.y - 4.0),
        egui::Align2::RIGHT_BOTTOM,
        "N ↑",
        egui::FontId::proportional(12.0),
        egui::Color32::from_gray(200),
    );
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(self.tr.t(keys::GUI_TITLE));
        });
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_inputs(ui));
            });
        egui::CentralPanel::default().show(ctx, |ui| self.ui_tabs(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "config save on exit failed");
        }
    }
}
