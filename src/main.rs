use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sprinkler_design_toolbox::app::{self, AppError};
use sprinkler_design_toolbox::config;
use sprinkler_design_toolbox::i18n::{self, Translator};
use sprinkler_design_toolbox::irrigation::{self, DesignInput};
use sprinkler_design_toolbox::logging::setup_tracing;
use sprinkler_design_toolbox::{conversion, report, ui_cli};

#[derive(Parser)]
#[command(author, version, about = "스프링클러 관개 설계 계산기", long_about = None)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, default_value = "auto", global = true)]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, value_name = "FILE", default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,
    /// debug 수준 로그 출력
    #[arg(long, default_value_t = false, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 설계 입력 플래그. 지정하지 않은 값은 설정 파일의 마지막 입력을 사용한다.
#[derive(clap::Args, Debug, Default)]
struct DesignArgs {
    /// 포장 동서 길이 [m]
    #[arg(long)]
    length: Option<f64>,
    /// 포장 남북 폭 [m]
    #[arg(long)]
    width: Option<f64>,
    /// 설계 증발산량 [mm/day]
    #[arg(long)]
    et: Option<f64>,
    /// 증발 손실 [%]
    #[arg(long)]
    evaporation: Option<f64>,
    /// 구역 수
    #[arg(long)]
    zones: Option<u32>,
    /// 래터럴 말단 최소 압력 [kPa]
    #[arg(long)]
    end_pressure: Option<f64>,
}

impl DesignArgs {
    fn apply(&self, base: DesignInput) -> DesignInput {
        DesignInput {
            field_length_ew_m: self.length.unwrap_or(base.field_length_ew_m),
            field_width_ns_m: self.width.unwrap_or(base.field_width_ns_m),
            et_mm_per_day: self.et.unwrap_or(base.et_mm_per_day),
            evaporation_loss_percent: self.evaporation.unwrap_or(base.evaporation_loss_percent),
            zone_count: self.zones.unwrap_or(base.zone_count),
            min_end_pressure_kpa: self.end_pressure.unwrap_or(base.min_end_pressure_kpa),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// 설계 계산 결과를 출력한다.
    Design {
        #[command(flatten)]
        input: DesignArgs,
    },
    /// 설계 계산 후 보고서를 파일로 저장한다.
    Report {
        #[command(flatten)]
        input: DesignArgs,
        /// 보고서 파일 경로
        #[arg(long, default_value = "irrigation_report.txt")]
        out: PathBuf,
    },
    /// 단위를 변환한다. 예: convert flow 100 gpm l/s
    Convert {
        kind: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = setup_tracing(cli.debug) {
        eprintln!("오류: {err}");
    }
    if let Err(err) = try_run(cli) {
        tracing::error!(error = %err, "command failed");
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(
        lang = tr.language_code(),
        config = %cli.config.display(),
        "starting"
    );

    match cli.command {
        None => app::run(&mut cfg, &cli.config, &tr),
        Some(Commands::Design { input }) => {
            let design = input.apply(cfg.last_input);
            let result = irrigation::compute_design(&design)?;
            ui_cli::print_result(&tr, cfg.unit_system, &result);
            Ok(())
        }
        Some(Commands::Report { input, out }) => {
            let design = input.apply(cfg.last_input);
            let result = irrigation::compute_design(&design)?;
            let text = report::build_report(&design, &result)?;
            report::export_report(&out, &text)?;
            println!("{} {}", tr.t(i18n::keys::REPORT_SAVED), out.display());
            Ok(())
        }
        Some(Commands::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let converted = conversion::convert_named(&kind, value, &from, &to)?;
            println!("{value} {from} = {converted} {to}");
            Ok(())
        }
    }
}
