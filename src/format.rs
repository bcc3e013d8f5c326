//! 표 셀에 들어가는 표시 문자열 포맷터.

/// kWh당 비용을 소수 첫째 자리와 `p` 단위로 표시한다. 예: `22.4p`
pub fn format_pence(pence: f64) -> String {
    format!("{pence:.1}p")
}

/// 연간 비용을 천 단위 구분 정수와 통화 기호로 표시한다. 예: `£4,472`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol}{amount}");
    }
    let rounded = format!("{amount:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    format!("{sign}{symbol}{}", group_thousands(digits))
}

/// 사용량을 천 단위 구분으로 표시한다. 정수면 소수부를 생략한다.
pub fn format_usage(kwh: f64) -> String {
    if !kwh.is_finite() {
        return kwh.to_string();
    }
    let text = if kwh.fract() == 0.0 {
        format!("{kwh:.0}")
    } else {
        kwh.to_string()
    };
    match text.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&text),
    }
}

/// SCOP 값을 불필요한 0 없이 표시한다. 예: `0.75`, `1`
pub fn format_scop(scop: f64) -> String {
    scop.to_string()
}

/// 1/SCOP 값을 소수 둘째 자리로 표시한다.
pub fn format_inverse_scop(inverse: f64) -> String {
    format!("{inverse:.2}")
}

/// 연간 비용 열 제목. 사용량 값이 그대로 들어간다.
pub fn yearly_cost_header(kwh: f64) -> String {
    format!("Yearly cost ({} kWh)", format_usage(kwh))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
