//! 스프링클러 관개 설계 계산을 라이브러리로 분리하여 CLI와 GUI가 같은 로직을 공유하게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod irrigation;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
