/// 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Flow,
    Length,
    Pressure,
    Area,
    Volume,
    Power,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Flow,
        QuantityKind::Length,
        QuantityKind::Pressure,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Power,
    ];

    /// 명령행 인자 등에서 물리량 이름을 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flow" | "q" => Some(QuantityKind::Flow),
            "length" | "head" | "l" => Some(QuantityKind::Length),
            "pressure" | "p" => Some(QuantityKind::Pressure),
            "area" | "a" => Some(QuantityKind::Area),
            "volume" | "v" => Some(QuantityKind::Volume),
            "power" | "w" => Some(QuantityKind::Power),
            _ => None,
        }
    }
}
