use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// 로깅 초기화 오류.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("로그 필터 해석 실패: {0}")]
    Filter(#[from] ParseError),
    #[error("전역 로거 설정 실패: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// stderr로 출력하는 tracing 구독자를 설치한다. `debug`가 참이면 debug 수준까지 출력한다.
pub fn setup_tracing(debug: bool) -> Result<(), LoggingError> {
    // 대화형 프롬프트와 섞이지 않도록 stderr로 보낸다
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let filter_level = if debug {
        "sprinkler_design_toolbox=debug"
    } else {
        "sprinkler_design_toolbox=info"
    };

    let filter = EnvFilter::from_default_env().add_directive(filter_level.parse()?);

    let subscriber = Registry::default().with(stderr_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
