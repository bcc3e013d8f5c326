//! 난방 방식별 대표 효율(SCOP) 테이블.
//! 값은 비교용 기준치이며 실제 설비 성능은 설치 조건에 따라 달라진다.

/// 난방 방식이 소비하는 연료 종류. 어떤 단가를 적용할지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
    Oil,
    Gas,
    Electricity,
}

impl Fuel {
    /// 표에 표시되는 이름.
    pub fn label(self) -> &'static str {
        match self {
            Fuel::Oil => "Oil",
            Fuel::Gas => "Gas",
            Fuel::Electricity => "Electricity",
        }
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 고정된 난방 방식 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingSystem {
    /// 계절 성능 계수
    pub scop: f64,
    /// 1/SCOP (표시용, 소수 둘째 자리)
    pub inverse_scop: f64,
    /// 1/SCOP 백분율 표기
    pub inverse_scop_percent: &'static str,
    /// 난방 방식 설명
    pub system_type: &'static str,
    pub fuel: Fuel,
}

impl HeatingSystem {
    pub const fn new(
        scop: f64,
        inverse_scop: f64,
        inverse_scop_percent: &'static str,
        system_type: &'static str,
        fuel: Fuel,
    ) -> Self {
        Self {
            scop,
            inverse_scop,
            inverse_scop_percent,
            system_type,
            fuel,
        }
    }
}

/// 테이블 행 수. 행은 추가/삭제되지 않는다.
pub const ARCHETYPE_COUNT: usize = 10;

pub fn archetypes() -> &'static [HeatingSystem; ARCHETYPE_COUNT] {
    &ARCHETYPES
}

/// SCOP 값이 정확히 일치하는 방식을 찾는다.
pub fn find_by_scop(scop: f64) -> Option<&'static HeatingSystem> {
    ARCHETYPES.iter().find(|s| s.scop == scop)
}

/// 설명 문자열로 찾는다(대소문자 무시).
pub fn find_by_type(system_type: &str) -> Option<&'static HeatingSystem> {
    ARCHETYPES
        .iter()
        .find(|s| s.system_type.eq_ignore_ascii_case(system_type))
}

static ARCHETYPES: [HeatingSystem; ARCHETYPE_COUNT] = [
    HeatingSystem::new(0.5, 2.00, "200%", "Inefficient old boiler", Fuel::Oil),
    HeatingSystem::new(
        0.6,
        1.67,
        "167%",
        "Well functioning oil-fired range cooker",
        Fuel::Oil,
    ),
    HeatingSystem::new(0.75, 1.33, "133%", "Below-average oil/gas boiler", Fuel::Oil),
    HeatingSystem::new(
        0.8,
        1.25,
        "125%",
        "Moderately efficient oil/gas system",
        Fuel::Oil,
    ),
    HeatingSystem::new(0.9, 1.11, "111%", "Efficient gas system", Fuel::Gas),
    HeatingSystem::new(1.0, 1.00, "100%", "Electric resistive heating", Fuel::Electricity),
    HeatingSystem::new(2.0, 0.50, "50%", "Very-poor install heat pump", Fuel::Electricity),
    HeatingSystem::new(3.0, 0.33, "33%", "low-middling-install heat pump", Fuel::Electricity),
    HeatingSystem::new(4.0, 0.25, "25%", "Good-install heat pump", Fuel::Electricity),
    HeatingSystem::new(5.0, 0.20, "20%", "Top-of-the-COPs-heat pump", Fuel::Electricity),
];
