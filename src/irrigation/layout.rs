use serde::Serialize;

use super::design::DesignInput;

/// 평면상의 선분 [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Segment {
    fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            from: (x0, y0),
            to: (x1, y1),
        }
    }

    pub fn length(&self) -> f64 {
        let dx = self.to.0 - self.from.0;
        let dy = self.to.1 - self.from.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 포장 배치도. x는 동서(E–W), y는 남북(N–S) 방향이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldLayout {
    pub length_ew_m: f64,
    pub width_ns_m: f64,
    /// 포장 중앙을 남북으로 지나는 메인라인
    pub mainline: Segment,
    /// 각 구역 행 중앙의 동서 방향 서브메인. 메인라인에서 좌우로 나뉜다.
    pub submains: Vec<Segment>,
    /// 구역 행 경계선
    pub zone_boundaries: Vec<Segment>,
    /// (구역 번호, 라벨 위치)
    pub zone_labels: Vec<(u32, (f64, f64))>,
}

/// 2×2 구역 배치 기준의 배관 개념도를 만든다.
pub fn field_layout(input: &DesignInput) -> FieldLayout {
    let l = input.field_length_ew_m;
    let w = input.field_width_ns_m;
    let mid_x = l / 2.0;
    let zone_w = w / 2.0;

    let mut submains = Vec::with_capacity(4);
    for y in [zone_w / 2.0, zone_w + zone_w / 2.0] {
        submains.push(Segment::new(0.0, y, mid_x, y));
        submains.push(Segment::new(mid_x, y, l, y));
    }

    FieldLayout {
        length_ew_m: l,
        width_ns_m: w,
        mainline: Segment::new(mid_x, 0.0, mid_x, w),
        submains,
        zone_boundaries: vec![Segment::new(0.0, zone_w, l, zone_w)],
        zone_labels: vec![
            (1, (l * 0.25, w * 0.75)),
            (2, (l * 0.75, w * 0.75)),
            (3, (l * 0.25, w * 0.25)),
            (4, (l * 0.75, w * 0.25)),
        ],
    }
}
