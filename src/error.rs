//! 운전비 표 계산/렌더링 중 발생 가능한 오류.
use thiserror::Error;

/// 입력 항목 이름. 오류 메시지에서 어떤 값이 잘못됐는지 알려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    ElectricityPrice,
    GasPrice,
    OilPrice,
    YearlyUsage,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputField::ElectricityPrice => "electricity price",
            InputField::GasPrice => "gas price",
            InputField::OilPrice => "oil price",
            InputField::YearlyUsage => "yearly usage",
        };
        f.write_str(name)
    }
}

/// 표 계산 및 렌더링 오류.
#[derive(Debug, Error)]
pub enum CostTableError {
    /// 음수이거나 유한하지 않은 입력
    #[error("잘못된 입력 {field}: {value} ({reason})")]
    InvalidInput {
        field: InputField,
        value: f64,
        reason: &'static str,
    },
    /// 래스터화/인코딩/저장 실패
    #[error("렌더링 오류: {0}")]
    Render(#[from] RenderError),
}

/// 이미지 생성 단계의 오류.
#[derive(Debug, Error)]
pub enum RenderError {
    /// 캔버스 크기가 0이거나 너무 커서 할당할 수 없음
    #[error("캔버스를 만들 수 없음: {width}x{height}")]
    Canvas { width: u32, height: u32 },
    /// PNG 인코딩 실패
    #[error("PNG 인코딩 오류: {0}")]
    Encode(#[from] image::ImageError),
    /// 결과 파일 기록 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}
