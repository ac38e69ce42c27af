use serde::{Deserialize, Serialize};

/// 통화 표시 형식. 계산 엔진은 원시 값을 반환하고 출력 시에만 적용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// 통화 기호 (앞에 붙음)
    pub symbol: String,
    /// 천 단위 구분자
    pub thousands_separator: char,
    /// 소수점 기호
    pub decimal_separator: char,
    /// 소수 자릿수
    pub decimals: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "£".into(),
            thousands_separator: ',',
            decimal_separator: '.',
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    /// `-£1,234.56` 형태로 변환한다.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{value}", self.symbol);
        }
        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        // 반올림 후 0이 되면 부호를 붙이지 않는다.
        let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');

        let mut out = String::with_capacity(fixed.len() + self.symbol.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(int_part, self.thousands_separator));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
